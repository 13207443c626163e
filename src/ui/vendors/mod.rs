//! Vendor list state: the in-memory mirror of the remote collection.

mod intent;
mod reducer;
mod state;

pub use intent::VendorListIntent;
pub use reducer::VendorListReducer;
pub use state::VendorListState;
