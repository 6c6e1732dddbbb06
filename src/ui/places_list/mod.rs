//! Fetch lifecycle of a single places list (catalog or favorites).

mod intent;
mod reducer;
mod state;

pub use intent::PlacesListIntent;
pub use reducer::PlacesListReducer;
pub use state::PlacesListState;
