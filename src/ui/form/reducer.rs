use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormMode, FormState, SaveTicket};
use crate::ui::mvi::Reducer;
use crate::vendor::VendorFields;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open { vendor } => {
                let (mode, draft) = match vendor {
                    Some(vendor) => (FormMode::Edit { id: vendor.id }, vendor.fields),
                    None => (FormMode::Create, VendorFields::default()),
                };
                FormState::Open {
                    mode,
                    draft,
                    focused: FormField::Name,
                    pending: None,
                }
            }
            FormIntent::Close => FormState::Hidden,
            FormIntent::FocusNext => map_open(state, |_, focused, _| *focused = focused.next()),
            FormIntent::FocusPrev => map_open(state, |_, focused, _| *focused = focused.prev()),
            FormIntent::Input { ch } => map_open(state, |draft, focused, _| {
                if let Some(text) = focused.text_mut(draft) {
                    text.push(ch);
                }
            }),
            FormIntent::Paste { text } => map_open(state, |draft, focused, _| {
                if let Some(value) = focused.text_mut(draft) {
                    value.push_str(&text);
                }
            }),
            FormIntent::Backspace => map_open(state, |draft, focused, _| {
                if let Some(text) = focused.text_mut(draft) {
                    text.pop();
                }
            }),
            FormIntent::CycleChoice { forward } => map_open(state, |draft, focused, _| {
                match focused {
                    FormField::VendorType => draft.vendor_type = draft.vendor_type.cycle(forward),
                    FormField::Role => draft.role = draft.role.cycle(forward),
                    FormField::Permission => draft.permission = draft.permission.cycle(forward),
                    _ => {}
                }
            }),
            FormIntent::SubmitStarted { ticket } => {
                map_open(state, |_, _, pending| *pending = Some(ticket))
            }
            FormIntent::SubmitFailed { ticket } => map_open(state, |_, _, pending| {
                if *pending == Some(ticket) {
                    *pending = None;
                }
            }),
            FormIntent::SubmitSucceeded { ticket } => match state {
                // Creation form starts over with a blank draft.
                FormState::Open {
                    mode: FormMode::Create,
                    pending,
                    ..
                } if pending == Some(ticket) => FormState::Open {
                    mode: FormMode::Create,
                    draft: VendorFields::default(),
                    focused: FormField::Name,
                    pending: None,
                },
                // Edit dialog closes.
                FormState::Open {
                    mode: FormMode::Edit { .. },
                    pending,
                    ..
                } if pending == Some(ticket) => FormState::Hidden,
                other => other,
            },
        }
    }
}

fn map_open(
    state: FormState,
    update: impl FnOnce(&mut VendorFields, &mut FormField, &mut Option<SaveTicket>),
) -> FormState {
    match state {
        FormState::Open {
            mode,
            mut draft,
            mut focused,
            mut pending,
        } => {
            update(&mut draft, &mut focused, &mut pending);
            FormState::Open {
                mode,
                draft,
                focused,
                pending,
            }
        }
        FormState::Hidden => FormState::Hidden,
    }
}
