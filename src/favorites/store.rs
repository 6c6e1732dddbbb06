use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::OperationFailed;
use crate::favorites::pending::PendingOp;
use crate::favorites::view::FavoritesView;
use crate::notifier::ErrorNotifier;
use crate::places::Place;
use crate::transport::{PlacesTransport, TransportError, USER_PLACES_PATH};

pub const LOAD_FAILED_MESSAGE: &str =
    "Something went wrong fetching the favorite places. Please try again later.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to store selected place.";
pub const REMOVE_FAILED_MESSAGE: &str = "Failed to remove the selected place.";

/// Owner of the user's favorite places.
///
/// Local state changes synchronously inside `add`/`remove`; the server
/// exchange runs afterwards on its own task. A failed exchange restores the
/// list captured at call time, which also discards whatever other calls
/// changed in between (last snapshot wins).
///
/// Cloning yields another handle to the same list.
#[derive(Clone)]
pub struct FavoritesStore {
    favorites: Arc<watch::Sender<Vec<Place>>>,
    transport: Arc<dyn PlacesTransport>,
    notifier: ErrorNotifier,
}

impl FavoritesStore {
    pub fn new(transport: Arc<dyn PlacesTransport>, notifier: ErrorNotifier) -> Self {
        let (favorites, _) = watch::channel(Vec::new());
        Self {
            favorites: Arc::new(favorites),
            transport,
            notifier,
        }
    }

    /// Read-only view that can also wait for changes.
    pub fn view(&self) -> FavoritesView {
        FavoritesView::new(self.favorites.subscribe())
    }

    /// Copy of the current list.
    pub fn favorites(&self) -> Vec<Place> {
        self.favorites.borrow().clone()
    }

    /// Replace the local list with the server's.
    ///
    /// Nothing happens until the future is awaited. On failure the local
    /// list is untouched and the error notifier is not involved.
    pub async fn load(&self) -> Result<Vec<Place>, OperationFailed> {
        let places = match self.transport.fetch_places(USER_PLACES_PATH).await {
            Ok(places) => dedup_by_id(places),
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Failed to load favorite places");
                return Err(OperationFailed::new(LOAD_FAILED_MESSAGE, e));
            }
        };

        tracing::info!(count = places.len(), "Loaded favorite places");
        self.favorites.send_replace(places.clone());
        Ok(places)
    }

    /// Append `place` locally and ask the server to store it.
    ///
    /// A place that is already present is not appended again, but the
    /// request is still sent. Must be called within a Tokio runtime.
    pub fn add(&self, place: Place) -> PendingOp {
        let mut prev = Vec::new();
        let appended = self.favorites.send_if_modified(|current| {
            prev = current.clone();
            if current.iter().any(|p| p.id == place.id) {
                return false;
            }
            current.push(place.clone());
            true
        });
        tracing::debug!(place_id = %place.id, appended, "Optimistic add");

        let failure = format!("Failed to add \"{}\" to favorite places.", place.title);
        let store = self.clone();
        PendingOp::spawn(
            {
                let failure = failure.clone();
                async move {
                    match store.transport.put_user_place(&place.id).await {
                        Ok(()) => {
                            tracing::info!(place_id = %place.id, "Favorite place stored");
                            Ok(())
                        }
                        Err(e) => Err(store.roll_back(prev, &place, ADD_FAILED_MESSAGE, failure, e)),
                    }
                }
            },
            failure,
        )
    }

    /// Drop `place` locally and ask the server to delete it.
    ///
    /// The request is sent even if the place is not in the local list.
    /// Must be called within a Tokio runtime.
    pub fn remove(&self, place: Place) -> PendingOp {
        let mut prev = Vec::new();
        let removed = self.favorites.send_if_modified(|current| {
            prev = current.clone();
            let before = current.len();
            current.retain(|p| p.id != place.id);
            current.len() != before
        });
        tracing::debug!(place_id = %place.id, removed, "Optimistic remove");

        let failure = format!("Failed to remove \"{}\" from favorite places.", place.title);
        let store = self.clone();
        PendingOp::spawn(
            {
                let failure = failure.clone();
                async move {
                    match store.transport.delete_user_place(&place.id).await {
                        Ok(()) => {
                            tracing::info!(place_id = %place.id, "Favorite place removed");
                            Ok(())
                        }
                        Err(e) => Err(store.roll_back(prev, &place, REMOVE_FAILED_MESSAGE, failure, e)),
                    }
                }
            },
            failure,
        )
    }

    fn roll_back(
        &self,
        prev: Vec<Place>,
        place: &Place,
        banner: &str,
        failure: String,
        cause: TransportError,
    ) -> OperationFailed {
        tracing::warn!(
            place_id = %place.id,
            error = %cause,
            kind = cause.kind(),
            restored = prev.len(),
            "Exchange failed, restoring favorites snapshot"
        );
        self.favorites.send_replace(prev);
        self.notifier.show_error(banner);
        OperationFailed::new(failure, cause)
    }
}

/// Keep the first occurrence of every id.
fn dedup_by_id(places: Vec<Place>) -> Vec<Place> {
    let mut seen = HashSet::new();
    let total = places.len();
    let unique: Vec<Place> = places
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect();
    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "Server returned duplicate favorite ids"
        );
    }
    unique
}
