use crate::repository::{PaymentMethod, PlanPeriod};
use crate::ui::controller::ViewStatus;
use crate::ui::mvi::{ScreenState, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutState {
    pub status: ViewStatus,
    pub plan_name: String,
    /// Periods the plan is offered for, with prices in cents.
    pub periods: Vec<PlanPeriod>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl UiState for CheckoutState {}

impl ScreenState for CheckoutState {
    fn status(&self) -> &ViewStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ViewStatus {
        &mut self.status
    }
}
