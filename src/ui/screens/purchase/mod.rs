mod intent;
mod screen;
mod state;

pub use intent::PurchaseIntent;
pub use screen::PurchaseScreen;
pub use state::PurchaseState;
