/// Marker for a self-contained, render-ready piece of UI state.
///
/// `Default` is the state a screen starts in when it is mounted.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
