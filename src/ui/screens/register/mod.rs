mod intent;
mod screen;
mod state;

pub use intent::RegisterIntent;
pub use screen::RegisterScreen;
pub use state::RegisterState;
