use crate::ui::controller::ViewStatus;
use crate::ui::mvi::{ScreenState, UiState};
use crate::ui::screens::Usage;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserInfoState {
    pub status: ViewStatus,
    pub email: String,
    pub usage: Usage,
    pub expired_at: Option<i64>,
    /// In cents.
    pub balance: i64,
    pub plan_name: Option<String>,
}

impl UiState for UserInfoState {}

impl ScreenState for UserInfoState {
    fn status(&self) -> &ViewStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ViewStatus {
        &mut self.status
    }
}
