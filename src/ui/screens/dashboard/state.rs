use crate::repository::ServerNode;
use crate::ui::controller::ViewStatus;
use crate::ui::mvi::{ScreenState, UiState};
use crate::ui::screens::Usage;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub status: ViewStatus,
    pub usage: Usage,
    /// Unix seconds, `None` for a plan that never expires.
    pub expired_at: Option<i64>,
    pub plan_name: Option<String>,
    pub servers: Vec<ServerNode>,
}

impl UiState for DashboardState {}

impl ScreenState for DashboardState {
    fn status(&self) -> &ViewStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ViewStatus {
        &mut self.status
    }
}
