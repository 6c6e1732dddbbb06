/// Marker for view state: cheap to clone, comparable so views can skip
/// redraws, and with a sensible empty default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
