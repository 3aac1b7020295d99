use crate::repository::Plan;
use crate::ui::controller::ViewStatus;
use crate::ui::mvi::{ScreenState, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PurchaseState {
    pub status: ViewStatus,
    pub plans: Vec<Plan>,
}

impl UiState for PurchaseState {}

impl ScreenState for PurchaseState {
    fn status(&self) -> &ViewStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ViewStatus {
        &mut self.status
    }
}
