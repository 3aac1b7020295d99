use crate::ui::controller::ViewStatus;
use crate::ui::mvi::{ScreenState, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForgotPasswordState {
    pub status: ViewStatus,
    pub email_code_cooldown: u32,
}

impl UiState for ForgotPasswordState {}

impl ScreenState for ForgotPasswordState {
    fn status(&self) -> &ViewStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ViewStatus {
        &mut self.status
    }
}
