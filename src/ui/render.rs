use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{render_form, render_form_dialog};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::nav::{render_catalog, render_home, Screen};
use crate::ui::table::render_vendor_table;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let screen = app.screen();
    let busy = app.vendors().is_loading() && screen == Screen::Vendors;
    frame.render_widget(Header::new(screen.title(), app.endpoint(), busy).widget(), header);

    frame.render_widget(Clear, body);
    match screen {
        Screen::Home => render_home(frame, body, app.nav()),
        Screen::Vendors => {
            render_vendor_table(
                frame,
                body,
                app.vendors(),
                app.table(),
                app.animation_tick(),
            );
            if app.form().is_visible() {
                render_form_dialog(frame, body, app.form(), app.animation_tick());
            }
        }
        Screen::AddVendor => render_form(frame, body, app.form(), app.animation_tick()),
        Screen::Catalog(kind) => render_catalog(frame, body, kind),
    }

    let footer_widget = Footer::new(screen, app.form().is_visible());
    frame.render_widget(footer_widget.widget(footer), footer);
}
