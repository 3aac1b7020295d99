//! User-facing strings set by screen controllers.

pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const PASSWORD_REQUIRED: &str = "Please enter your password";
pub const PASSWORDS_NOT_MATCH: &str = "Passwords do not match";
pub const EMAIL_CODE_REQUIRED: &str = "Please enter the email verification code";
pub const NETWORK_ERROR: &str = "Network error, please check your connection";
pub const SEND_CODE_FAILED: &str = "Failed to send verification code";
pub const ORDER_FAILED: &str = "Failed to create order";
pub const CHECKOUT_FAILED: &str = "Checkout failed";
pub const PAYMENT_SUCCESS: &str = "Payment successful";
pub const PASSWORD_RESET_SUCCESS: &str = "Password reset successfully";
