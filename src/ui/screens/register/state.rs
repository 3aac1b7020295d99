use crate::repository::SystemConfig;
use crate::ui::controller::ViewStatus;
use crate::ui::mvi::{ScreenState, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterState {
    pub status: ViewStatus,
    /// Which optional inputs the backend requires.
    pub config: SystemConfig,
    /// Seconds until another code may be requested.
    pub email_code_cooldown: u32,
}

impl RegisterState {
    pub fn can_send_code(&self) -> bool {
        self.email_code_cooldown == 0 && !self.status.loading
    }
}

impl UiState for RegisterState {}

impl ScreenState for RegisterState {
    fn status(&self) -> &ViewStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ViewStatus {
        &mut self.status
    }
}
