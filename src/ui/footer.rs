use crate::ui::nav::Screen;
use crate::ui::theme::{BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    screen: Screen,
    form_open: bool,
}

impl Footer {
    pub fn new(screen: Screen, form_open: bool) -> Self {
        Self { screen, form_open }
    }

    pub fn hints(&self) -> &'static str {
        if self.form_open {
            return " Tab/↑↓: Field │ ←→/Space: Option │ Enter: Save │ Esc: Back │ Ctrl+Q: Quit";
        }
        match self.screen {
            Screen::Home => " ↑↓: Move │ Enter/1-5: Open │ Esc: Quit",
            Screen::Vendors => {
                " ↑↓: Row │ ←→: Page │ +/-: Rows │ Enter: Edit │ d: Delete │ a: Add │ r: Reload │ Esc: Back"
            }
            Screen::AddVendor | Screen::Catalog(_) => " Esc: Back │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain box-drawing glyphs
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            )
    }
}
