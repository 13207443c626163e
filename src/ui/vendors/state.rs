use crate::ui::mvi::UiState;
use crate::vendor::{Vendor, VendorId};

/// Records currently known to the UI, in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorListState {
    pub(super) loading: bool,
    pub(super) records: Vec<Vendor>,
}

impl Default for VendorListState {
    fn default() -> Self {
        Self {
            loading: true,
            records: Vec::new(),
        }
    }
}

impl UiState for VendorListState {}

impl VendorListState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[Vendor] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &VendorId) -> Option<&Vendor> {
        self.records.iter().find(|vendor| &vendor.id == id)
    }
}
