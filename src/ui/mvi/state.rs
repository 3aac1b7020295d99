//! Base trait for view state.

use crate::ui::controller::ViewStatus;

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cloneable snapshots (the view reads copies)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + std::fmt::Debug + Send + Sync + 'static {}

/// View state carrying the common loading/error block.
pub trait ScreenState: UiState {
    fn status(&self) -> &ViewStatus;
    fn status_mut(&mut self) -> &mut ViewStatus;
}
