use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ForgotPasswordIntent {
    ResetPassword {
        email: String,
        email_code: String,
        password: String,
        confirm_password: String,
    },
    SendEmailCode { email: String },
    OpenLogin,
}

impl Intent for ForgotPasswordIntent {}
