//! Navigation shell: which screen is mounted and the landing menu cursor.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{CatalogKind, MenuItem, NavState, Screen};
pub use view::{render_catalog, render_home};
