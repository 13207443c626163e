use std::ops::Range;

use crate::ui::mvi::UiState;

/// Page sizes offered when no configuration says otherwise.
pub const DEFAULT_PAGE_SIZE_OPTIONS: &[usize] = &[3, 5, 8, 16, 24];

/// Client-side pagination cursor over the full vendor list.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub(super) page: usize,
    pub(super) page_size: usize,
    pub(super) options: Vec<usize>,
    /// Row within the current page.
    pub(super) cursor: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(5, DEFAULT_PAGE_SIZE_OPTIONS.to_vec())
    }
}

impl UiState for TableState {}

impl TableState {
    /// `page_size` is expected to be one of `options` (config validation
    /// guarantees it); zero is bumped to one.
    pub fn new(page_size: usize, options: Vec<usize>) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            options,
            cursor: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Indices of the rows shown for a list of `total` records.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.page.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Number of pages, never less than one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Absolute index of the highlighted record, if the page has rows.
    pub fn selected_index(&self, total: usize) -> Option<usize> {
        let range = self.visible_range(total);
        let index = range.start + self.cursor;
        range.contains(&index).then_some(index)
    }
}
