mod intent;
mod screen;
mod state;

pub use intent::LoginIntent;
pub use screen::LoginScreen;
pub use state::{language_label, LoginState, LANGUAGES, SYSTEM_LANGUAGE};
