//! Place records and the read-only catalog of available places.

mod catalog;
mod model;

pub use catalog::{Catalog, AVAILABLE_LOAD_FAILED_MESSAGE};
pub use model::{Place, PlaceImage, PlacesEnvelope};
