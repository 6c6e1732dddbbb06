use crate::places::Place;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlacesListState {
    #[default]
    Idle,
    Loading,
    Loaded {
        places: Vec<Place>,
    },
    Failed {
        message: String,
    },
}

impl UiState for PlacesListState {}

impl PlacesListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn places(&self) -> Option<&[Place]> {
        match self {
            Self::Loaded { places } => Some(places),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
