//! Base trait for screen requests.

/// Marker trait for intent objects.
///
/// Intents are the user-originated requests a screen's view emits. Each one
/// is consumed exactly once by the screen controller.
pub trait Intent: std::fmt::Debug + Send + 'static {}
