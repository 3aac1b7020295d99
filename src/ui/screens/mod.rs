//! The seven panel screens, each a [`Screen`](crate::ui::controller::Screen)
//! run by the generic controller.

pub mod checkout;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod purchase;
pub mod register;
pub mod user_info;

mod email_code;
mod summary;

pub use summary::Usage;
