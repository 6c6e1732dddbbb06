use tokio::sync::watch;

use crate::places::Place;

/// Read-only, observable view of the favorites list.
///
/// Every read returns a copy; nothing obtained here can change the store.
#[derive(Clone)]
pub struct FavoritesView {
    rx: watch::Receiver<Vec<Place>>,
}

impl FavoritesView {
    pub(crate) fn new(rx: watch::Receiver<Vec<Place>>) -> Self {
        Self { rx }
    }

    pub fn snapshot(&self) -> Vec<Place> {
        self.rx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.borrow().is_empty()
    }

    pub fn contains(&self, place_id: &str) -> bool {
        self.rx.borrow().iter().any(|p| p.id == place_id)
    }

    /// Wait for the next change and return the new list.
    ///
    /// Returns `None` once every store handle has been dropped.
    pub async fn changed(&mut self) -> Option<Vec<Place>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
