mod intent;
mod screen;
mod state;

pub use intent::UserInfoIntent;
pub use screen::UserInfoScreen;
pub use state::UserInfoState;
