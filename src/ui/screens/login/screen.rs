use async_trait::async_trait;

use crate::api::Outcome;
use crate::ui::controller::{
    messages, Destination, Field, Screen, ScreenContext, ScreenEffect, ScreenResult,
};

use super::intent::LoginIntent;
use super::state::{language_label, LoginState, SYSTEM_LANGUAGE};

#[derive(Debug, Default)]
pub struct LoginScreen;

impl LoginScreen {
    pub fn new() -> Self {
        Self
    }

    async fn login(&self, email: &str, password: &str, ctx: &mut ScreenContext<LoginState>) {
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

        ctx.set_loading(true);
        let outcome = ctx.repository().login(email, password).await;
        match outcome {
            Outcome::Success(_) => {
                ctx.import_subscription().await;
                ctx.set_loading(false);
                ctx.emit(ScreenEffect::Finish(ScreenResult::Ok));
            }
            failure => ctx.show_failure(&failure, &[Field::Email, Field::Password]),
        }
    }

    fn change_language(&self, code: &str, ctx: &mut ScreenContext<LoginState>) {
        let stored = if code == SYSTEM_LANGUAGE { "" } else { code };
        ctx.repository().session().set_language(stored);
        ctx.update(|s| s.language_label = language_label(stored));
        ctx.emit(ScreenEffect::Recreate);
    }
}

#[async_trait]
impl Screen for LoginScreen {
    type Request = LoginIntent;
    type State = LoginState;

    fn name(&self) -> &'static str {
        "login"
    }

    async fn load(&mut self, ctx: &mut ScreenContext<LoginState>) {
        let label = language_label(&ctx.repository().session().language());
        ctx.update(|s| s.language_label = label);
    }

    async fn handle(&mut self, request: LoginIntent, ctx: &mut ScreenContext<LoginState>) {
        match request {
            LoginIntent::Login { email, password } => self.login(&email, &password, ctx).await,
            LoginIntent::OpenRegister => ctx.emit(ScreenEffect::Navigate(Destination::Register)),
            LoginIntent::OpenForgotPassword => {
                ctx.emit(ScreenEffect::Navigate(Destination::ForgotPassword))
            }
            LoginIntent::ChangeLanguage { code } => self.change_language(&code, ctx),
        }
    }
}
