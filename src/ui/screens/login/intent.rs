use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LoginIntent {
    Login { email: String, password: String },
    OpenRegister,
    OpenForgotPassword,
    /// Switch the UI language. `system` follows the device.
    ChangeLanguage { code: String },
}

impl Intent for LoginIntent {}
