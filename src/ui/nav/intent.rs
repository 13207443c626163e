use crate::ui::mvi::Intent;
use crate::ui::nav::state::Screen;

#[derive(Debug, Clone)]
pub enum NavIntent {
    Navigate { screen: Screen },
    MenuUp,
    MenuDown,
    /// Highlight a menu tile by position (0-based).
    MenuSelect { index: usize },
}

impl Intent for NavIntent {}
