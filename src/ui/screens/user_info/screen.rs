use async_trait::async_trait;

use crate::api::Outcome;
use crate::ui::controller::{
    Destination, LifecycleEvent, Screen, ScreenContext, ScreenEffect, ScreenResult,
};
use crate::ui::screens::summary::resolve_plan_name;
use crate::ui::screens::Usage;

use super::intent::UserInfoIntent;
use super::state::UserInfoState;

#[derive(Debug, Default)]
pub struct UserInfoScreen;

impl UserInfoScreen {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Screen for UserInfoScreen {
    type Request = UserInfoIntent;
    type State = UserInfoState;

    fn name(&self) -> &'static str {
        "user_info"
    }

    async fn load(&mut self, ctx: &mut ScreenContext<UserInfoState>) {
        ctx.clear_errors();
        let repository = ctx.repository().clone();
        let email = repository.user_email();
        ctx.update(|s| {
            s.email = email;
            s.status.loading = true;
        });

        let plan_id = match repository.get_user_info().await {
            Outcome::Success(info) => {
                ctx.update(|s| {
                    s.usage = Usage::new(info.u, info.d, info.transfer_enable);
                    s.expired_at = info.expired_at;
                    s.balance = info.balance;
                    if !info.email.is_empty() {
                        s.email = info.email.clone();
                    }
                });
                info.plan_id
            }
            failure => {
                ctx.record_failure(&failure, &[]);
                None
            }
        };

        let plan_name = resolve_plan_name(&repository, plan_id).await;
        ctx.update(|s| {
            s.plan_name = plan_name;
            s.status.loading = false;
        });
    }

    async fn handle(&mut self, request: UserInfoIntent, ctx: &mut ScreenContext<UserInfoState>) {
        match request {
            UserInfoIntent::Logout => {
                ctx.repository().logout();
                ctx.update(|s| *s = UserInfoState::default());
                ctx.emit(ScreenEffect::NavigateForResult(Destination::Login));
            }
        }
    }

    /// Signing in again refreshes the account. Backing out of the login
    /// screen leaves no account to show.
    async fn on_lifecycle(&mut self, event: LifecycleEvent, ctx: &mut ScreenContext<UserInfoState>) {
        match event {
            LifecycleEvent::Resumed | LifecycleEvent::Returned(ScreenResult::Ok) => {
                self.load(ctx).await
            }
            LifecycleEvent::Returned(ScreenResult::Cancelled) => ctx.emit(ScreenEffect::FinishAll),
        }
    }
}
