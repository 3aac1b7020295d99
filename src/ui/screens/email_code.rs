use crate::api::Outcome;
use crate::ui::controller::{messages, Field, ScreenContext};
use crate::ui::mvi::ScreenState;

/// Request a verification email and start the resend countdown on success.
pub(crate) async fn send_email_code<S: ScreenState>(ctx: &mut ScreenContext<S>, email: &str) {
    ctx.clear_errors();
    let email = email.trim();
    if email.is_empty() {
        ctx.set_field_error(Field::Email, messages::EMAIL_REQUIRED);
        return;
    }

    ctx.set_loading(true);
    let outcome = ctx.repository().send_email_verify(email).await;
    match outcome {
        Outcome::Success(()) => {
            ctx.set_loading(false);
            ctx.start_cooldown();
        }
        Outcome::ValidationError { message, .. } => ctx.fail(&message),
        _ => ctx.fail(messages::SEND_CODE_FAILED),
    }
}
