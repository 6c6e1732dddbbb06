use crate::places::Place;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PlacesListIntent {
    FetchStarted,
    FetchSucceeded { places: Vec<Place> },
    /// `message` is the user-facing text of the failed load.
    FetchFailed { message: String },
    /// The backing list changed outside a fetch (e.g. favorites add/remove).
    PlacesChanged { places: Vec<Place> },
    Reset,
}

impl Intent for PlacesListIntent {}
