//! Rendering of the vendor form, as a full screen or as the edit dialog.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::form::state::{FormField, FormMode, FormState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, SPINNER_FRAMES, STATUS_OK,
};

const LABEL_WIDTH: usize = 13;
const DIALOG_WIDTH: u16 = 64;

/// Title shown above the form for its mode.
pub fn form_title(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Create => "Add Vendor",
        FormMode::Edit { .. } => "Edit Vendor",
    }
}

/// Render the form filling `area`.
pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState, animation_tick: u8) {
    let FormState::Open {
        mode,
        draft,
        focused,
        pending,
    } = state
    else {
        return;
    };

    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        lines.push(field_line(field, field.value(draft), field == *focused));
    }
    lines.push(Line::from(""));
    lines.push(submit_line(mode, pending.is_some(), animation_tick));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form_title(mode)),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the form as a centered dialog over `area`.
pub fn render_form_dialog(frame: &mut Frame, area: Rect, state: &FormState, animation_tick: u8) {
    if !state.is_visible() {
        return;
    }
    // Fields, two spacer lines, the submit line and the borders.
    let height = FormField::ALL.len() as u16 + 5;
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);
    frame.render_widget(Clear, dialog);
    render_form(frame, dialog, state, animation_tick);
}

fn field_line(field: FormField, value: &str, focused: bool) -> Line<'static> {
    let label = format!(" {:<width$}", field.label(), width = LABEL_WIDTH);
    let value = if field.is_choice() {
        let shown = if value.is_empty() { "(none)" } else { value };
        format!("◀ {} ▶", shown)
    } else if focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };

    let mut line = Line::from(vec![
        Span::styled(label, Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ]);
    if focused {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}

fn submit_line(mode: &FormMode, submitting: bool, animation_tick: u8) -> Line<'static> {
    if submitting {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        return Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Saving...", Style::default().fg(HEADER_TEXT)),
        ])
        .alignment(Alignment::Center);
    }

    let label = match mode {
        FormMode::Create => " Add Vendor ",
        FormMode::Edit { .. } => " Update ",
    };
    Line::from(Span::styled(
        label,
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::VendorId;

    #[test]
    fn title_follows_mode() {
        assert_eq!(form_title(&FormMode::Create), "Add Vendor");
        assert_eq!(
            form_title(&FormMode::Edit {
                id: VendorId::new("1")
            }),
            "Edit Vendor"
        );
    }

    #[test]
    fn unset_choice_renders_placeholder() {
        let line = field_line(FormField::Role, "", false);
        assert!(line.to_string().contains("◀ (none) ▶"));
    }

    #[test]
    fn focused_text_field_shows_caret() {
        let line = field_line(FormField::Name, "Acme", true);
        assert!(line.to_string().ends_with("Acme▏"));
    }
}
