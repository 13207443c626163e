use crate::ui::mvi::Intent;

/// Pagination and row-cursor actions. Intents that depend on the list
/// length carry it, so the reducer stays independent of the record state.
#[derive(Debug, Clone)]
pub enum TableIntent {
    NextPage { total: usize },
    PrevPage,
    /// Step to the next (or previous) entry of the page size options.
    CyclePageSize { forward: bool },
    SetPageSize { size: usize },
    CursorUp,
    CursorDown { total: usize },
    /// Record count changed; pull page and cursor back into range.
    Clamp { total: usize },
    /// Back to the first page and row.
    Rewind,
}

impl Intent for TableIntent {}
