/// Marker for anything a reducer can consume: key presses already mapped
/// to an action, or the outcome of a remote call.
pub trait Intent: Send + 'static {}
