use crate::ui::mvi::Intent;
use crate::ui::form::state::SaveTicket;
use crate::vendor::Vendor;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Show the form: blank for `None`, pre-filled for an existing record.
    Open { vendor: Option<Vendor> },
    Close,
    FocusNext,
    FocusPrev,
    /// Type into the focused text field.
    Input { ch: char },
    /// Paste into the focused text field.
    Paste { text: String },
    Backspace,
    /// Step the focused choice field through its options.
    CycleChoice { forward: bool },
    SubmitStarted { ticket: SaveTicket },
    /// Ignored unless `ticket` is the one in flight.
    SubmitFailed { ticket: SaveTicket },
    /// The store accepted the draft. Ignored unless `ticket` is the one in
    /// flight.
    SubmitSucceeded { ticket: SaveTicket },
}

impl Intent for FormIntent {}
