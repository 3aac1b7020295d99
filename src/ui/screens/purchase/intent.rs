use crate::repository::Plan;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseIntent {
    SelectPlan(Plan),
}

impl Intent for PurchaseIntent {}
