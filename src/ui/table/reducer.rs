use crate::ui::mvi::Reducer;
use crate::ui::table::intent::TableIntent;
use crate::ui::table::state::TableState;

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::NextPage { total } => {
                let last = state.page_count(total) - 1;
                if state.page >= last {
                    return state;
                }
                TableState {
                    page: state.page + 1,
                    cursor: 0,
                    ..state
                }
            }
            TableIntent::PrevPage => TableState {
                page: state.page.saturating_sub(1),
                cursor: if state.page == 0 { state.cursor } else { 0 },
                ..state
            },
            TableIntent::CyclePageSize { forward } => {
                if state.options.is_empty() {
                    return state;
                }
                let len = state.options.len();
                let next = match state.options.iter().position(|&size| size == state.page_size) {
                    Some(index) if forward => (index + 1) % len,
                    Some(index) => (index + len - 1) % len,
                    None => 0,
                };
                let size = state.options[next];
                Self::reduce(state, TableIntent::SetPageSize { size })
            }
            TableIntent::SetPageSize { size } => TableState {
                page: 0,
                page_size: size.max(1),
                cursor: 0,
                ..state
            },
            TableIntent::CursorUp => TableState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },
            TableIntent::CursorDown { total } => {
                let rows = state.visible_range(total).len();
                let cursor = if state.cursor + 1 < rows {
                    state.cursor + 1
                } else {
                    state.cursor
                };
                TableState { cursor, ..state }
            }
            TableIntent::Clamp { total } => {
                let page = state.page.min(state.page_count(total) - 1);
                let clamped = TableState { page, ..state };
                let rows = clamped.visible_range(total).len();
                TableState {
                    cursor: clamped.cursor.min(rows.saturating_sub(1)),
                    ..clamped
                }
            }
            TableIntent::Rewind => TableState {
                page: 0,
                cursor: 0,
                ..state
            },
        }
    }
}
