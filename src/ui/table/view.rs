//! Rendering of the paginated vendor table.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Table, TableState as WidgetTableState,
};
use ratatui::Frame;

use crate::ui::table::state::TableState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BORDER, HEADER_TEXT, MUTED_TEXT, SPINNER_FRAMES, STATUS_OK, TABLE_HEADER_BG,
};
use crate::ui::vendors::VendorListState;
use crate::vendor::Vendor;

pub const COLUMNS: [&str; 8] = [
    "Name",
    "Mobile",
    "Email",
    "Brief",
    "Vendor Type",
    "Products",
    "Role",
    "Permission",
];

const COLUMN_WIDTHS: [Constraint; 8] = [
    Constraint::Percentage(14),
    Constraint::Percentage(12),
    Constraint::Percentage(18),
    Constraint::Percentage(16),
    Constraint::Percentage(10),
    Constraint::Percentage(12),
    Constraint::Percentage(8),
    Constraint::Percentage(10),
];

pub fn render_vendor_table(
    frame: &mut Frame,
    area: Rect,
    vendors: &VendorListState,
    table: &TableState,
    animation_tick: u8,
) {
    if vendors.is_loading() {
        render_loading(frame, area, animation_tick);
        return;
    }

    let [table_area, pager_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .areas(area);

    let total = vendors.len();
    let range = table.visible_range(total);
    let rows: Vec<Row> = vendors.records()[range]
        .iter()
        .map(|vendor| Row::new(row_cells(vendor).map(Cell::from)))
        .collect();

    let header = Row::new(COLUMNS.map(Cell::from)).style(
        Style::default()
            .fg(HEADER_TEXT)
            .bg(TABLE_HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(" Vendors ", Style::default().fg(HEADER_TEXT)));

    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No vendors",
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, table_area);
    } else {
        let widget = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut widget_state = WidgetTableState::default().with_selected(Some(table.cursor()));
        frame.render_stateful_widget(widget, table_area, &mut widget_state);
    }

    let pager = Paragraph::new(Line::from(Span::styled(
        pagination_label(table, total),
        Style::default().fg(MUTED_TEXT),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(pager, pager_area);
}

fn render_loading(frame: &mut Frame, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Loading vendors...", Style::default().fg(HEADER_TEXT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Cell texts of one row, in [`COLUMNS`] order.
pub fn row_cells(vendor: &Vendor) -> [String; 8] {
    let fields = &vendor.fields;
    [
        single_line(&fields.name),
        single_line(&fields.mobile),
        single_line(&fields.email),
        single_line(&fields.brief),
        fields.vendor_type.to_string(),
        single_line(&fields.products),
        fields.role.to_string(),
        fields.permission.to_string(),
    ]
}

/// "Rows per page: 5   6–10 of 12   Page 2/3"
pub fn pagination_label(table: &TableState, total: usize) -> String {
    let range = table.visible_range(total);
    let (first, last) = if range.is_empty() {
        (0, 0)
    } else {
        (range.start + 1, range.end)
    };
    format!(
        "Rows per page: {}   {}–{} of {}   Page {}/{} ",
        table.page_size(),
        first,
        last,
        total,
        table.page().min(table.page_count(total) - 1) + 1,
        table.page_count(total)
    )
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
