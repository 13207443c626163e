//! List view: client-side pagination and rendering of the vendor table.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{TableState, DEFAULT_PAGE_SIZE_OPTIONS};
pub use view::{pagination_label, render_vendor_table, row_cells, COLUMNS};
