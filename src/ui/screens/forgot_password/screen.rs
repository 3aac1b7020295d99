use async_trait::async_trait;

use crate::api::Outcome;
use crate::ui::controller::{messages, Field, Screen, ScreenContext, ScreenEffect, ScreenResult};
use crate::ui::screens::email_code::send_email_code;

use super::intent::ForgotPasswordIntent;
use super::state::ForgotPasswordState;

#[derive(Debug, Default)]
pub struct ForgotPasswordScreen;

impl ForgotPasswordScreen {
    pub fn new() -> Self {
        Self
    }

    async fn reset_password(
        &self,
        email: &str,
        email_code: &str,
        password: &str,
        confirm_password: &str,
        ctx: &mut ScreenContext<ForgotPasswordState>,
    ) {
        ctx.clear_errors();
        let email = email.trim();
        let email_code = email_code.trim();
        if email.is_empty() {
            ctx.set_field_error(Field::Email, messages::EMAIL_REQUIRED);
            return;
        }
        if email_code.is_empty() {
            ctx.set_general_error(messages::EMAIL_CODE_REQUIRED);
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
        let outcome = ctx
            .repository()
            .forgot_password(email, password, email_code)
            .await;
        match outcome {
            Outcome::Success(()) => {
                ctx.set_loading(false);
                ctx.emit(ScreenEffect::Toast(messages::PASSWORD_RESET_SUCCESS.to_string()));
                ctx.emit(ScreenEffect::Finish(ScreenResult::Ok));
            }
            failure => ctx.show_failure(&failure, &[Field::Email, Field::Password, Field::EmailCode]),
        }
    }
}

#[async_trait]
impl Screen for ForgotPasswordScreen {
    type Request = ForgotPasswordIntent;
    type State = ForgotPasswordState;

    fn name(&self) -> &'static str {
        "forgot_password"
    }

    async fn handle(
        &mut self,
        request: ForgotPasswordIntent,
        ctx: &mut ScreenContext<ForgotPasswordState>,
    ) {
        match request {
            ForgotPasswordIntent::ResetPassword {
                email,
                email_code,
                password,
                confirm_password,
            } => {
                self.reset_password(&email, &email_code, &password, &confirm_password, ctx)
                    .await
            }
            ForgotPasswordIntent::SendEmailCode { email } => send_email_code(ctx, &email).await,
            ForgotPasswordIntent::OpenLogin => {
                ctx.emit(ScreenEffect::Finish(ScreenResult::Cancelled))
            }
        }
    }

    fn on_cooldown(&mut self, remaining: u32, ctx: &mut ScreenContext<ForgotPasswordState>) {
        ctx.update(|s| s.email_code_cooldown = remaining);
    }
}
