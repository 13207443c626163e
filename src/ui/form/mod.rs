//! Form view: draft editing and submission state for one vendor record.
//!
//! The same state drives the standalone "Add Vendor" screen and the edit
//! dialog opened from the table:
//! - `state.rs` - draft, focus and mode
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormMode, FormState, SaveTicket};
pub use view::{form_title, render_form, render_form_dialog};
