use async_trait::async_trait;

use crate::api::Outcome;
use crate::ui::controller::{Destination, Screen, ScreenContext, ScreenEffect};
use crate::ui::screens::summary::resolve_plan_name;
use crate::ui::screens::Usage;

use super::intent::DashboardIntent;
use super::state::DashboardState;

#[derive(Debug, Default)]
pub struct DashboardScreen;

impl DashboardScreen {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Screen for DashboardScreen {
    type Request = DashboardIntent;
    type State = DashboardState;

    fn name(&self) -> &'static str {
        "dashboard"
    }

    async fn load(&mut self, ctx: &mut ScreenContext<DashboardState>) {
        ctx.clear_errors();
        ctx.set_loading(true);
        let repository = ctx.repository().clone();

        match repository.get_subscribe().await {
            Outcome::Success(data) => ctx.update(|s| {
                s.usage = Usage::new(data.u, data.d, data.transfer_enable);
                s.expired_at = data.expired_at;
            }),
            failure => ctx.record_failure(&failure, &[]),
        }

        let plan_id = match repository.get_user_info().await {
            Outcome::Success(info) => info.plan_id,
            other => {
                tracing::debug!(outcome = other.kind(), "User info unavailable");
                None
            }
        };
        let plan_name = resolve_plan_name(&repository, plan_id).await;
        ctx.update(|s| s.plan_name = plan_name);

        match repository.get_servers().await {
            Outcome::Success(servers) => ctx.update(|s| s.servers = servers),
            failure => ctx.record_failure(&failure, &[]),
        }

        ctx.set_loading(false);
    }

    async fn handle(&mut self, request: DashboardIntent, ctx: &mut ScreenContext<DashboardState>) {
        match request {
            DashboardIntent::Refresh => self.load(ctx).await,
            DashboardIntent::OpenPurchase => ctx.emit(ScreenEffect::Navigate(Destination::Purchase)),
        }
    }
}
