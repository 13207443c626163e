use crate::ui::mvi::UiState;
use crate::vendor::{VendorFields, VendorId};

/// Whether a submission creates a record or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: VendorId },
}

/// Editable fields, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Mobile,
    Email,
    VendorType,
    Brief,
    Products,
    Role,
    Permission,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::Mobile,
        FormField::Email,
        FormField::VendorType,
        FormField::Brief,
        FormField::Products,
        FormField::Role,
        FormField::Permission,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Mobile => "Mobile",
            FormField::Email => "Email",
            FormField::VendorType => "Vendor Type",
            FormField::Brief => "Brief",
            FormField::Products => "Products",
            FormField::Role => "Role",
            FormField::Permission => "Permission",
        }
    }

    /// Choice fields are picked from a fixed option set instead of typed.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            FormField::VendorType | FormField::Role | FormField::Permission
        )
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Current text of this field in `draft`.
    pub fn value(self, draft: &VendorFields) -> &str {
        match self {
            FormField::Name => &draft.name,
            FormField::Mobile => &draft.mobile,
            FormField::Email => &draft.email,
            FormField::VendorType => draft.vendor_type.as_str(),
            FormField::Brief => &draft.brief,
            FormField::Products => &draft.products,
            FormField::Role => draft.role.as_str(),
            FormField::Permission => draft.permission.as_str(),
        }
    }

    /// Mutable text of a free-text field; `None` for choice fields.
    pub(super) fn text_mut(self, draft: &mut VendorFields) -> Option<&mut String> {
        match self {
            FormField::Name => Some(&mut draft.name),
            FormField::Mobile => Some(&mut draft.mobile),
            FormField::Email => Some(&mut draft.email),
            FormField::Brief => Some(&mut draft.brief),
            FormField::Products => Some(&mut draft.products),
            FormField::VendorType | FormField::Role | FormField::Permission => None,
        }
    }
}

/// Identifies one submission, so a late response cannot settle a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Open {
        mode: FormMode,
        draft: VendorFields,
        focused: FormField,
        /// The create/update for this draft that is still in flight.
        pending: Option<SaveTicket>,
    },
}

impl UiState for FormState {}

impl FormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn mode(&self) -> Option<&FormMode> {
        match self {
            Self::Open { mode, .. } => Some(mode),
            Self::Hidden => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            Self::Open {
                pending: Some(_),
                ..
            }
        )
    }

    /// What to send if the user submits now. `None` while hidden or while
    /// a previous submission is still in flight.
    pub fn submission(&self) -> Option<(FormMode, VendorFields)> {
        match self {
            Self::Open {
                mode,
                draft,
                pending: None,
                ..
            } => Some((mode.clone(), draft.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_order_wraps() {
        assert_eq!(FormField::Permission.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Permission);
        assert_eq!(FormField::Email.next(), FormField::VendorType);
    }

    #[test]
    fn choice_fields_have_no_text_slot() {
        let mut draft = VendorFields::default();
        for field in FormField::ALL {
            assert_eq!(field.text_mut(&mut draft).is_none(), field.is_choice());
        }
    }

    #[test]
    fn no_submission_while_hidden_or_in_flight() {
        assert!(FormState::Hidden.submission().is_none());
        let in_flight = FormState::Open {
            mode: FormMode::Create,
            draft: VendorFields::default(),
            focused: FormField::Name,
            pending: Some(SaveTicket(1)),
        };
        assert!(in_flight.submission().is_none());
        assert!(in_flight.is_submitting());
    }
}
