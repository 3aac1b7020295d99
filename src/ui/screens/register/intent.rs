use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterIntent {
    Register {
        email: String,
        password: String,
        confirm_password: String,
        /// Blank is sent as absent.
        invite_code: Option<String>,
        email_code: Option<String>,
    },
    SendEmailCode { email: String },
    OpenLogin,
}

impl Intent for RegisterIntent {}
