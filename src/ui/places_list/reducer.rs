use crate::ui::mvi::Reducer;
use crate::ui::places_list::intent::PlacesListIntent;
use crate::ui::places_list::state::PlacesListState;

pub struct PlacesListReducer;

impl Reducer for PlacesListReducer {
    type State = PlacesListState;
    type Intent = PlacesListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PlacesListIntent::FetchStarted => PlacesListState::Loading,
            PlacesListIntent::FetchSucceeded { places } => PlacesListState::Loaded { places },
            PlacesListIntent::FetchFailed { message } => PlacesListState::Failed { message },
            PlacesListIntent::PlacesChanged { places } => match state {
                // The fetch result will overwrite whatever we show now
                PlacesListState::Loading => PlacesListState::Loading,
                _ => PlacesListState::Loaded { places },
            },
            PlacesListIntent::Reset => PlacesListState::Idle,
        }
    }
}
