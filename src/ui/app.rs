use crate::config::Config;
use crate::remote::TransportError;
use crate::ui::form::{FormIntent, FormMode, FormReducer, FormState, SaveTicket};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Screen};
use crate::ui::table::{TableIntent, TableReducer, TableState};
use crate::ui::vendors::{VendorListIntent, VendorListReducer, VendorListState};
use crate::vendor::{Vendor, VendorFields, VendorId};
use tokio::sync::mpsc;

/// Remote work requested by the UI. Each command becomes exactly one call
/// against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    LoadVendors,
    SaveVendor {
        ticket: SaveTicket,
        mode: FormMode,
        fields: VendorFields,
    },
    DeleteVendor { id: VendorId },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    endpoint: String,
    nav: NavState,
    vendors: VendorListState,
    table: TableState,
    form: FormState,
    command_sender: Option<UiCommandSender>,
    last_ticket: u64,
    animation_tick: u8,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            endpoint: config.remote.collection_url(),
            nav: NavState::default(),
            vendors: VendorListState::default(),
            table: TableState::new(
                config.table.page_size,
                config.table.page_size_options.clone(),
            ),
            form: FormState::default(),
            command_sender: None,
            last_ticket: 0,
            animation_tick: 0,
        }
    }

    /// Collection URL the app talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen()
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn vendors(&self) -> &VendorListState {
        &self.vendors
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Vendor under the table cursor.
    pub fn selected_vendor(&self) -> Option<&Vendor> {
        self.table
            .selected_index(self.vendors.len())
            .and_then(|index| self.vendors.records().get(index))
    }

    pub fn on_tick(&mut self) {
        if self.vendors.is_loading() || self.form.is_submitting() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Mount `screen`. Entering the vendor list always refetches.
    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.nav.screen(), to = ?screen, "navigate");
        self.dispatch_form(FormIntent::Close);
        self.dispatch_nav(NavIntent::Navigate { screen });

        match screen {
            Screen::Vendors => self.reload_vendors(),
            Screen::AddVendor => self.dispatch_form(FormIntent::Open { vendor: None }),
            Screen::Home | Screen::Catalog(_) => {}
        }
    }

    /// Esc: close the edit dialog, else leave the screen, else quit.
    pub fn go_back(&mut self) {
        if self.screen() == Screen::Vendors && self.form.is_visible() {
            self.dispatch_form(FormIntent::Close);
            return;
        }
        match self.screen() {
            Screen::Home => self.request_quit(),
            _ => self.navigate(Screen::Home),
        }
    }

    pub fn menu_up(&mut self) {
        self.dispatch_nav(NavIntent::MenuUp);
    }

    pub fn menu_down(&mut self) {
        self.dispatch_nav(NavIntent::MenuDown);
    }

    pub fn menu_select(&mut self, index: usize) {
        self.dispatch_nav(NavIntent::MenuSelect { index });
    }

    pub fn activate_menu(&mut self) {
        let target = self.nav.selected_menu_item().target();
        self.navigate(target);
    }

    // ========================================================================
    // List view
    // ========================================================================

    /// Reset the list to loading and request the full collection.
    pub fn reload_vendors(&mut self) {
        self.dispatch_vendors(VendorListIntent::Reset);
        self.dispatch_table(TableIntent::Rewind);
        if !self.send_command(UiCommand::LoadVendors) {
            self.dispatch_vendors(VendorListIntent::LoadFailed);
        }
    }

    pub fn next_page(&mut self) {
        let total = self.vendors.len();
        self.dispatch_table(TableIntent::NextPage { total });
    }

    pub fn prev_page(&mut self) {
        self.dispatch_table(TableIntent::PrevPage);
    }

    pub fn cycle_page_size(&mut self, forward: bool) {
        self.dispatch_table(TableIntent::CyclePageSize { forward });
    }

    pub fn cursor_up(&mut self) {
        self.dispatch_table(TableIntent::CursorUp);
    }

    pub fn cursor_down(&mut self) {
        let total = self.vendors.len();
        self.dispatch_table(TableIntent::CursorDown { total });
    }

    /// Open the edit dialog for the highlighted vendor.
    pub fn edit_selected(&mut self) {
        let Some(vendor) = self.selected_vendor().cloned() else {
            return;
        };
        self.dispatch_form(FormIntent::Open {
            vendor: Some(vendor),
        });
    }

    /// Delete the highlighted vendor. The row goes away once the store
    /// confirms.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_vendor().map(|vendor| vendor.id.clone()) else {
            return;
        };
        self.send_command(UiCommand::DeleteVendor { id });
    }

    // ========================================================================
    // Form view
    // ========================================================================

    pub fn form_input(&mut self, ch: char) {
        self.dispatch_form(FormIntent::Input { ch });
    }

    pub fn form_paste(&mut self, text: String) {
        self.dispatch_form(FormIntent::Paste { text });
    }

    pub fn form_backspace(&mut self) {
        self.dispatch_form(FormIntent::Backspace);
    }

    pub fn form_focus_next(&mut self) {
        self.dispatch_form(FormIntent::FocusNext);
    }

    pub fn form_focus_prev(&mut self) {
        self.dispatch_form(FormIntent::FocusPrev);
    }

    pub fn form_cycle_choice(&mut self, forward: bool) {
        self.dispatch_form(FormIntent::CycleChoice { forward });
    }

    /// Send the draft as a create or update. Ignored while a previous
    /// submission of this form is in flight.
    pub fn submit_form(&mut self) {
        let Some((mode, fields)) = self.form.submission() else {
            return;
        };
        self.last_ticket += 1;
        let ticket = SaveTicket(self.last_ticket);
        if self.send_command(UiCommand::SaveVendor {
            ticket,
            mode,
            fields,
        }) {
            self.dispatch_form(FormIntent::SubmitStarted { ticket });
        }
    }

    // ========================================================================
    // Remote results
    // ========================================================================

    pub fn on_vendors_loaded(&mut self, result: Result<Vec<Vendor>, TransportError>) {
        match result {
            Ok(records) => self.dispatch_vendors(VendorListIntent::Loaded { records }),
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch vendors");
                self.dispatch_vendors(VendorListIntent::LoadFailed);
            }
        }
        let total = self.vendors.len();
        self.dispatch_table(TableIntent::Clamp { total });
    }

    /// A save finished. The record reaches the list even if the form that
    /// sent it has been dismissed since; the form itself only reacts when
    /// `ticket` is the submission it is still waiting on.
    pub fn on_vendor_saved(
        &mut self,
        ticket: SaveTicket,
        mode: FormMode,
        result: Result<Vendor, TransportError>,
    ) {
        match result {
            Ok(vendor) => {
                self.dispatch_vendors(VendorListIntent::Upserted { vendor });
                self.dispatch_form(FormIntent::SubmitSucceeded { ticket });
            }
            Err(err) => {
                tracing::error!(error = %err, ?mode, "Failed to save vendor");
                self.dispatch_form(FormIntent::SubmitFailed { ticket });
            }
        }
        let total = self.vendors.len();
        self.dispatch_table(TableIntent::Clamp { total });
    }

    pub fn on_vendor_deleted(&mut self, id: VendorId, result: Result<(), TransportError>) {
        match result {
            Ok(()) => self.dispatch_vendors(VendorListIntent::Removed { id }),
            Err(err) => tracing::error!(error = %err, %id, "Failed to delete vendor"),
        }
        let total = self.vendors.len();
        self.dispatch_table(TableIntent::Clamp { total });
    }

    // ========================================================================
    // MVI plumbing
    // ========================================================================

    fn dispatch_nav(&mut self, intent: NavIntent) {
        dispatch_mvi!(self, nav, NavReducer, intent);
    }

    fn dispatch_vendors(&mut self, intent: VendorListIntent) {
        dispatch_mvi!(self, vendors, VendorListReducer, intent);
    }

    fn dispatch_table(&mut self, intent: TableIntent) {
        dispatch_mvi!(self, table, TableReducer, intent);
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!(?command, "No remote worker attached");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("Remote command queue rejected command: {}", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
        let mut app = App::new(&Config::default());
        let (tx, rx) = mpsc::channel(16);
        app.set_command_sender(tx);
        (app, rx)
    }

    fn vendor(id: &str, name: &str) -> Vendor {
        Vendor::new(
            id,
            VendorFields {
                name: name.into(),
                ..VendorFields::default()
            },
        )
    }

    #[test]
    fn entering_vendor_list_requests_listing() {
        let (mut app, mut rx) = make_app();
        app.navigate(Screen::Vendors);
        assert!(app.vendors().is_loading());
        assert_eq!(rx.try_recv().unwrap(), UiCommand::LoadVendors);
    }

    #[test]
    fn without_worker_listing_fails_to_empty_table() {
        let mut app = App::new(&Config::default());
        app.navigate(Screen::Vendors);
        assert!(!app.vendors().is_loading());
        assert!(app.vendors().is_empty());
    }

    #[test]
    fn add_vendor_screen_opens_blank_form() {
        let (mut app, _rx) = make_app();
        app.navigate(Screen::AddVendor);
        assert_eq!(app.form().mode(), Some(&FormMode::Create));
    }

    #[test]
    fn submit_sends_create_and_blocks_resubmit() {
        let (mut app, mut rx) = make_app();
        app.navigate(Screen::AddVendor);
        app.form_input('A');
        app.submit_form();
        app.submit_form();

        match rx.try_recv().unwrap() {
            UiCommand::SaveVendor { mode, fields, .. } => {
                assert_eq!(mode, FormMode::Create);
                assert_eq!(fields.name, "A");
            }
            other => panic!("Expected SaveVendor, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
        assert!(app.form().is_submitting());
    }

    #[test]
    fn edit_dialog_escape_closes_dialog_only() {
        let (mut app, _rx) = make_app();
        app.navigate(Screen::Vendors);
        app.on_vendors_loaded(Ok(vec![vendor("1", "Acme")]));
        app.edit_selected();
        assert!(app.form().is_visible());

        app.go_back();
        assert!(!app.form().is_visible());
        assert_eq!(app.screen(), Screen::Vendors);

        app.go_back();
        assert_eq!(app.screen(), Screen::Home);
        app.go_back();
        assert!(app.should_quit());
    }

    #[test]
    fn save_result_after_dismiss_still_updates_list() {
        let (mut app, _rx) = make_app();
        app.navigate(Screen::Vendors);
        app.on_vendors_loaded(Ok(vec![vendor("1", "Acme")]));
        app.edit_selected();
        app.form_input('!');
        app.submit_form();
        app.go_back();

        let mode = FormMode::Edit {
            id: VendorId::new("1"),
        };
        app.on_vendor_saved(SaveTicket(1), mode, Ok(vendor("1", "Acme!")));
        assert_eq!(app.vendors().records()[0].fields.name, "Acme!");
        assert!(!app.form().is_visible());
    }

    fn next_save(rx: &mut mpsc::Receiver<UiCommand>) -> (SaveTicket, FormMode) {
        loop {
            match rx.try_recv().unwrap() {
                UiCommand::SaveVendor { ticket, mode, .. } => return (ticket, mode),
                _ => continue,
            }
        }
    }

    #[test]
    fn late_result_for_dismissed_edit_leaves_reopened_dialog_waiting() {
        let (mut app, mut rx) = make_app();
        app.navigate(Screen::Vendors);
        app.on_vendors_loaded(Ok(vec![vendor("1", "Acme")]));

        app.edit_selected();
        app.form_input('!');
        app.submit_form();
        let (first, mode) = next_save(&mut rx);
        app.go_back();

        app.edit_selected();
        app.form_input('?');
        app.submit_form();
        let (second, _) = next_save(&mut rx);
        assert_ne!(first, second);

        app.on_vendor_saved(first, mode.clone(), Ok(vendor("1", "Acme!")));
        assert!(app.form().is_visible());
        assert!(app.form().is_submitting());

        app.on_vendor_saved(second, mode, Ok(vendor("1", "Acme?")));
        assert!(!app.form().is_visible());
        assert_eq!(app.vendors().records()[0].fields.name, "Acme?");
    }

    #[test]
    fn endpoint_is_configured_collection_url() {
        let config = Config::default();
        let app = App::new(&config);
        assert_eq!(app.endpoint(), config.remote.collection_url());
    }

    #[test]
    fn delete_waits_for_confirmation() {
        let (mut app, mut rx) = make_app();
        app.navigate(Screen::Vendors);
        let _ = rx.try_recv();
        app.on_vendors_loaded(Ok(vec![vendor("1", "Acme")]));
        app.delete_selected();

        assert_eq!(
            rx.try_recv().unwrap(),
            UiCommand::DeleteVendor {
                id: VendorId::new("1")
            }
        );
        assert_eq!(app.vendors().len(), 1);
    }

    #[test]
    fn tick_animates_only_while_waiting() {
        let (mut app, _rx) = make_app();
        app.on_vendors_loaded(Ok(Vec::new()));
        app.on_tick();
        assert_eq!(app.animation_tick(), 0);

        app.navigate(Screen::Vendors);
        app.on_tick();
        assert_eq!(app.animation_tick(), 1);
    }
}
