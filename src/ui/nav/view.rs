//! Landing menu and catalog screens.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::nav::state::{CatalogKind, MenuItem, NavState};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render_home(frame: &mut Frame, area: Rect, nav: &NavState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to the Vendor Management System",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Efficiently manage your vendors, vendor types, roles, and permissions with ease.",
            Style::default().fg(MUTED_TEXT),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for (index, item) in MenuItem::ALL.iter().enumerate() {
        let selected = index == nav.menu_selection();
        let mut title = Line::from(vec![
            Span::styled(
                format!("  {}. ", index + 1),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(
                item.title(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);
        let mut description = Line::from(Span::styled(
            format!("     {}", item.description()),
            Style::default().fg(MUTED_TEXT),
        ));
        if selected {
            title = title.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            description = description.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(title);
        lines.push(description);
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_catalog(frame: &mut Frame, area: Rect, kind: CatalogKind) {
    let mut lines = vec![Line::from("")];
    lines.extend(kind.options().into_iter().map(|option| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(ACCENT)),
            Span::styled(option, Style::default().fg(HEADER_TEXT)),
        ])
    }));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", kind.title()),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
