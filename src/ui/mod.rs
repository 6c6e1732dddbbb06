//! Presentation-side state for the places lists.

pub mod mvi;
pub mod places_list;
