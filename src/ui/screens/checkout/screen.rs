use async_trait::async_trait;

use crate::api::Outcome;
use crate::ui::controller::{messages, Screen, ScreenContext, ScreenEffect, ScreenResult};

use super::intent::CheckoutIntent;
use super::state::CheckoutState;

/// Order-and-pay flow for one plan.
#[derive(Debug)]
pub struct CheckoutScreen {
    plan_id: i64,
    plan_name: String,
}

impl CheckoutScreen {
    pub fn new(plan_id: i64, plan_name: impl Into<String>) -> Self {
        Self {
            plan_id,
            plan_name: plan_name.into(),
        }
    }

    /// Create the order, then pay it. A failed order never reaches checkout.
    async fn checkout(
        &self,
        period: &str,
        coupon_code: Option<String>,
        payment_method_id: i64,
        ctx: &mut ScreenContext<CheckoutState>,
    ) {
        ctx.clear_errors();
        ctx.set_loading(true);
        let repository = ctx.repository().clone();
        let coupon_code = coupon_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());

        let trade_no = match repository
            .create_order(self.plan_id, period, coupon_code.as_deref())
            .await
        {
            Outcome::Success(trade_no) => trade_no,
            Outcome::ValidationError { message, .. } => return ctx.fail(&message),
            Outcome::NetworkError(_) => return ctx.fail(messages::NETWORK_ERROR),
            other => {
                tracing::warn!(outcome = other.kind(), "Order creation failed");
                return ctx.fail(messages::ORDER_FAILED);
            }
        };
        tracing::info!(trade_no = %trade_no, "Order created");

        match repository.checkout_order(&trade_no, payment_method_id).await {
            Outcome::Success(result) => {
                if let Some(url) = result.payment_url() {
                    ctx.set_loading(false);
                    ctx.emit(ScreenEffect::OpenUrl(url.to_string()));
                } else if result.is_completed() {
                    ctx.set_loading(false);
                    ctx.emit(ScreenEffect::Toast(messages::PAYMENT_SUCCESS.to_string()));
                    ctx.emit(ScreenEffect::Finish(ScreenResult::Ok));
                } else {
                    tracing::warn!(kind = result.kind, "Unexpected checkout result");
                    ctx.fail(messages::CHECKOUT_FAILED);
                }
            }
            Outcome::ValidationError { message, .. } => ctx.fail(&message),
            other => {
                tracing::warn!(outcome = other.kind(), "Checkout failed");
                ctx.fail(messages::CHECKOUT_FAILED);
            }
        }
    }
}

#[async_trait]
impl Screen for CheckoutScreen {
    type Request = CheckoutIntent;
    type State = CheckoutState;

    fn name(&self) -> &'static str {
        "checkout"
    }

    fn initial_state(&self) -> CheckoutState {
        CheckoutState {
            plan_name: self.plan_name.clone(),
            ..CheckoutState::default()
        }
    }

    async fn load(&mut self, ctx: &mut ScreenContext<CheckoutState>) {
        ctx.clear_errors();
        ctx.set_loading(true);
        let repository = ctx.repository().clone();

        match repository.get_plans().await {
            Outcome::Success(plans) => match plans.into_iter().find(|p| p.id == self.plan_id) {
                Some(plan) => ctx.update(|s| {
                    s.periods = plan.periods();
                    if !plan.name.is_empty() {
                        s.plan_name = plan.name;
                    }
                }),
                None => tracing::warn!(plan_id = self.plan_id, "Plan not in plan list"),
            },
            failure => ctx.record_failure(&failure, &[]),
        }

        match repository.get_payment_methods().await {
            Outcome::Success(methods) => ctx.update(|s| s.payment_methods = methods),
            failure => ctx.record_failure(&failure, &[]),
        }

        ctx.set_loading(false);
    }

    async fn handle(&mut self, request: CheckoutIntent, ctx: &mut ScreenContext<CheckoutState>) {
        match request {
            CheckoutIntent::Checkout {
                period,
                coupon_code,
                payment_method_id,
            } => {
                self.checkout(&period, coupon_code, payment_method_id, ctx)
                    .await
            }
        }
    }
}
