mod intent;
mod screen;
mod state;

pub use intent::CheckoutIntent;
pub use screen::CheckoutScreen;
pub use state::CheckoutState;
