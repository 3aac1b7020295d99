use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutIntent {
    Checkout {
        /// One of the plan's period keys, e.g. `month_price`.
        period: String,
        coupon_code: Option<String>,
        payment_method_id: i64,
    },
}

impl Intent for CheckoutIntent {}
