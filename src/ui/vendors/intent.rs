use crate::ui::mvi::Intent;
use crate::vendor::{Vendor, VendorId};

#[derive(Debug, Clone)]
pub enum VendorListIntent {
    /// List view mounted: back to loading, nothing known.
    Reset,
    /// The full collection arrived.
    Loaded { records: Vec<Vendor> },
    /// Fetching the collection failed. The table stays empty.
    LoadFailed,
    /// A create or update succeeded with this record.
    Upserted { vendor: Vendor },
    /// A delete succeeded.
    Removed { id: VendorId },
}

impl Intent for VendorListIntent {}
