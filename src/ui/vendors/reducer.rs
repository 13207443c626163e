use std::collections::HashSet;

use crate::ui::mvi::Reducer;
use crate::ui::vendors::intent::VendorListIntent;
use crate::ui::vendors::state::VendorListState;

pub struct VendorListReducer;

impl Reducer for VendorListReducer {
    type State = VendorListState;
    type Intent = VendorListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VendorListIntent::Reset => VendorListState::default(),
            VendorListIntent::Loaded { records } => {
                // Ids are the only key for update/delete; keep the first of any repeats.
                let mut seen = HashSet::new();
                let records = records
                    .into_iter()
                    .filter(|vendor| seen.insert(vendor.id.clone()))
                    .collect();
                VendorListState {
                    loading: false,
                    records,
                }
            }
            VendorListIntent::LoadFailed => VendorListState {
                loading: false,
                records: Vec::new(),
            },
            VendorListIntent::Upserted { vendor } => {
                let mut records = state.records;
                match records.iter_mut().find(|existing| existing.id == vendor.id) {
                    Some(existing) => *existing = vendor,
                    None => records.push(vendor),
                }
                VendorListState {
                    loading: state.loading,
                    records,
                }
            }
            VendorListIntent::Removed { id } => {
                let mut records = state.records;
                records.retain(|vendor| vendor.id != id);
                VendorListState {
                    loading: state.loading,
                    records,
                }
            }
        }
    }
}
