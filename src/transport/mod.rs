//! Transport to the places REST API.
//!
//! [`PlacesTransport`] is the seam between the favorites logic and the
//! network; [`HttpTransport`] is the reqwest-backed implementation.

mod error;
mod http;

use async_trait::async_trait;

use crate::places::Place;

pub use error::TransportError;
pub use http::HttpTransport;

/// Catalog of every place that can be favorited.
pub const AVAILABLE_PLACES_PATH: &str = "/places";
/// The user's favorite places.
pub const USER_PLACES_PATH: &str = "/user-places";

/// Request/response exchanges with the places API.
///
/// Any non-2xx answer or transport-level problem is reported as `Err`;
/// implementations do not retry.
#[async_trait]
pub trait PlacesTransport: Send + Sync {
    /// `GET {path}` and unwrap the `{ "places": [...] }` envelope.
    async fn fetch_places(&self, path: &str) -> Result<Vec<Place>, TransportError>;

    /// `PUT /user-places` with body `{ "placeId": place_id }`.
    async fn put_user_place(&self, place_id: &str) -> Result<(), TransportError>;

    /// `DELETE /user-places/{place_id}`.
    async fn delete_user_place(&self, place_id: &str) -> Result<(), TransportError>;
}
