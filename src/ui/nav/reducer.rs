use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::{MenuItem, NavState};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = MenuItem::ALL.len();
        match intent {
            NavIntent::Navigate { screen } => NavState { screen, ..state },
            NavIntent::MenuUp => NavState {
                menu_selection: if state.menu_selection == 0 {
                    len - 1
                } else {
                    state.menu_selection - 1
                },
                ..state
            },
            NavIntent::MenuDown => NavState {
                menu_selection: (state.menu_selection + 1) % len,
                ..state
            },
            NavIntent::MenuSelect { index } if index < len => NavState {
                menu_selection: index,
                ..state
            },
            NavIntent::MenuSelect { .. } => state,
        }
    }
}
