/// Marker for events a reducer understands: user actions such as a
/// selection, or completions of server exchanges.
pub trait Intent: Send + 'static {}
