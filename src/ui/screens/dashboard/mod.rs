mod intent;
mod screen;
mod state;

pub use intent::DashboardIntent;
pub use screen::DashboardScreen;
pub use state::DashboardState;
