use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardIntent {
    /// Re-run the population on demand.
    Refresh,
    OpenPurchase,
}

impl Intent for DashboardIntent {}
