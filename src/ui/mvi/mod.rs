//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! Intent ──→ ScreenController ──→ State ──→ View
//!    ↑                                      │
//!    └──────────────────────────────────────┘
//! ```
//!
//! - **State**: snapshot published to the view after every mutation
//! - **Intent**: user request, handled once by the controller

mod intent;
mod state;

pub use intent::Intent;
pub use state::{ScreenState, UiState};
