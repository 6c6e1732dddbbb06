//! Favorite places with optimistic updates.
//!
//! The store applies `add`/`remove` locally before the server confirms and
//! restores the pre-call snapshot if the exchange fails.
//!
//! ```text
//! add(p) ──→ snapshot prev ──→ local append ──→ PUT /user-places
//!                                                   │
//!                          ok: keep ◄───────────────┤
//!                          err: restore prev, notify, reject
//! ```

mod pending;
mod store;
mod view;

pub use pending::PendingOp;
pub use store::{
    FavoritesStore, ADD_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, REMOVE_FAILED_MESSAGE,
};
pub use view::FavoritesView;
