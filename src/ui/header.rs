use crate::ui::theme::{BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    screen_title: &'a str,
    endpoint: &'a str,
    busy: bool,
}

impl<'a> Header<'a> {
    pub fn new(screen_title: &'a str, endpoint: &'a str, busy: bool) -> Self {
        Self {
            screen_title,
            endpoint,
            busy,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status = if self.busy { "◌" } else { "●" };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status, Style::default().fg(STATUS_OK)),
            Span::styled("  ", text_style),
            Span::styled("Vendor Desk", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.screen_title, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint, Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
