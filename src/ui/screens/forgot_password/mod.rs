mod intent;
mod screen;
mod state;

pub use intent::ForgotPasswordIntent;
pub use screen::ForgotPasswordScreen;
pub use state::ForgotPasswordState;
