use async_trait::async_trait;

use crate::api::Outcome;
use crate::ui::controller::{Destination, Screen, ScreenContext, ScreenEffect};

use super::intent::PurchaseIntent;
use super::state::PurchaseState;

#[derive(Debug, Default)]
pub struct PurchaseScreen;

impl PurchaseScreen {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Screen for PurchaseScreen {
    type Request = PurchaseIntent;
    type State = PurchaseState;

    fn name(&self) -> &'static str {
        "purchase"
    }

    async fn load(&mut self, ctx: &mut ScreenContext<PurchaseState>) {
        ctx.clear_errors();
        ctx.set_loading(true);
        match ctx.repository().get_plans().await {
            Outcome::Success(plans) => ctx.update(|s| {
                s.plans = plans;
                s.status.loading = false;
            }),
            failure => ctx.show_failure(&failure, &[]),
        }
    }

    async fn handle(&mut self, request: PurchaseIntent, ctx: &mut ScreenContext<PurchaseState>) {
        match request {
            PurchaseIntent::SelectPlan(plan) => {
                ctx.emit(ScreenEffect::Navigate(Destination::Checkout {
                    plan_id: plan.id,
                    plan_name: plan.name,
                }))
            }
        }
    }
}
