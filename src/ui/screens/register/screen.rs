use async_trait::async_trait;

use crate::api::Outcome;
use crate::ui::controller::{messages, Field, Screen, ScreenContext, ScreenEffect, ScreenResult};
use crate::ui::screens::email_code::send_email_code;

use super::intent::RegisterIntent;
use super::state::RegisterState;

#[derive(Debug, Default)]
pub struct RegisterScreen;

/// Trimmed value, `None` when blank.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
        invite_code: Option<String>,
        email_code: Option<String>,
        ctx: &mut ScreenContext<RegisterState>,
    ) {
        ctx.clear_errors();
        let email = email.trim();
        if email.is_empty() {
            ctx.set_field_error(Field::Email, messages::EMAIL_REQUIRED);
            return;
        }
        if password.trim().is_empty() {
            ctx.set_field_error(Field::Password, messages::PASSWORD_REQUIRED);
            return;
        }
        if password != confirm_password {
            ctx.set_field_error(Field::Password, messages::PASSWORDS_NOT_MATCH);
            return;
        }

        ctx.set_loading(true);
        let invite_code = optional(invite_code);
        let email_code = optional(email_code);
        let outcome = ctx
            .repository()
            .register(email, password, invite_code.as_deref(), email_code.as_deref())
            .await;
        match outcome {
            Outcome::Success(_) => {
                ctx.import_subscription().await;
                ctx.set_loading(false);
                ctx.emit(ScreenEffect::Finish(ScreenResult::Ok));
            }
            failure => ctx.show_failure(
                &failure,
                &[Field::Email, Field::Password, Field::InviteCode, Field::EmailCode],
            ),
        }
    }
}

#[async_trait]
impl Screen for RegisterScreen {
    type Request = RegisterIntent;
    type State = RegisterState;

    fn name(&self) -> &'static str {
        "register"
    }

    async fn load(&mut self, ctx: &mut ScreenContext<RegisterState>) {
        // Without the config the form keeps every optional input hidden.
        match ctx.repository().get_config().await {
            Outcome::Success(config) => ctx.update(|s| s.config = config),
            other => tracing::debug!(outcome = other.kind(), "Registration config unavailable"),
        }
    }

    async fn handle(&mut self, request: RegisterIntent, ctx: &mut ScreenContext<RegisterState>) {
        match request {
            RegisterIntent::Register {
                email,
                password,
                confirm_password,
                invite_code,
                email_code,
            } => {
                self.register(
                    &email,
                    &password,
                    &confirm_password,
                    invite_code,
                    email_code,
                    ctx,
                )
                .await
            }
            RegisterIntent::SendEmailCode { email } => send_email_code(ctx, &email).await,
            RegisterIntent::OpenLogin => ctx.emit(ScreenEffect::Finish(ScreenResult::Cancelled)),
        }
    }

    fn on_cooldown(&mut self, remaining: u32, ctx: &mut ScreenContext<RegisterState>) {
        ctx.update(|s| s.email_code_cooldown = remaining);
    }
}
