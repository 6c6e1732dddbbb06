use std::sync::Arc;

use crate::error::OperationFailed;
use crate::places::Place;
use crate::transport::{PlacesTransport, AVAILABLE_PLACES_PATH};

pub const AVAILABLE_LOAD_FAILED_MESSAGE: &str =
    "Something went wrong fetching the available places. Please try again later.";

/// Read-only access to every place the user can pick from.
///
/// Holds no state; each call goes to the server.
#[derive(Clone)]
pub struct Catalog {
    transport: Arc<dyn PlacesTransport>,
}

impl Catalog {
    pub fn new(transport: Arc<dyn PlacesTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the available places.
    ///
    /// Failures come back with a fixed user-facing message; the caller
    /// decides how to display it.
    pub async fn load_available(&self) -> Result<Vec<Place>, OperationFailed> {
        match self.transport.fetch_places(AVAILABLE_PLACES_PATH).await {
            Ok(places) => {
                tracing::debug!(count = places.len(), "Loaded available places");
                Ok(places)
            }
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Failed to load available places");
                Err(OperationFailed::new(AVAILABLE_LOAD_FAILED_MESSAGE, e))
            }
        }
    }

    /// Look up a single place by id in the current catalog.
    pub async fn find(&self, place_id: &str) -> Result<Option<Place>, OperationFailed> {
        let places = self.load_available().await?;
        Ok(places.into_iter().find(|p| p.id == place_id))
    }
}
