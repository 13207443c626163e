//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! ```text
//! key / remote result ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers never talk to the network. Remote calls are issued by
//! [`App`](crate::ui::app::App) and their results come back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
