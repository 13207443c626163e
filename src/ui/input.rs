use crate::ui::app::App;
use crate::ui::form::FormField;
use crate::ui::nav::{MenuItem, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.form().is_visible() {
        handle_form_key(app, key);
        return;
    }

    match app.screen() {
        Screen::Home => handle_home_key(app, key),
        Screen::Vendors => handle_table_key(app, key),
        Screen::AddVendor | Screen::Catalog(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                app.go_back();
            }
        }
    }
}

/// Paste goes to the focused form field; elsewhere it is ignored.
pub fn handle_paste(app: &mut App, text: String) {
    if app.form().is_visible() {
        app.form_paste(text);
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.menu_down(),
        KeyCode::Enter => app.activate_menu(),
        KeyCode::Esc | KeyCode::Char('q') => app.go_back(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if (1..=MenuItem::ALL.len()).contains(&index) {
                app.menu_select(index - 1);
                app.activate_menu();
            }
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => app.next_page(),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => app.prev_page(),
        KeyCode::Char('+') | KeyCode::Char('s') => app.cycle_page_size(true),
        KeyCode::Char('-') | KeyCode::Char('S') => app.cycle_page_size(false),
        KeyCode::Enter | KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Delete | KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('a') => app.navigate(Screen::AddVendor),
        KeyCode::Char('r') => app.reload_vendors(),
        KeyCode::Esc | KeyCode::Char('q') => app.go_back(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let on_choice = focused_field(app).is_some_and(FormField::is_choice);

    if is_ctrl_char(key, 's') {
        app.submit_form();
        return;
    }

    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form_focus_prev(),
        KeyCode::Left if on_choice => app.form_cycle_choice(false),
        KeyCode::Right if on_choice => app.form_cycle_choice(true),
        KeyCode::Char(' ') if on_choice => app.form_cycle_choice(true),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input(ch)
        }
        _ => {}
    }
}

fn focused_field(app: &App) -> Option<FormField> {
    match app.form() {
        crate::ui::form::FormState::Open { focused, .. } => Some(*focused),
        crate::ui::form::FormState::Hidden => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
