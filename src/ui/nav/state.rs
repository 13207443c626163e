use crate::ui::mvi::UiState;
use crate::vendor::{OptionSet, Permission, Role, VendorType};

/// Read-only option lists reachable from the landing menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    VendorTypes,
    Roles,
    Permissions,
}

impl CatalogKind {
    pub fn title(self) -> &'static str {
        match self {
            CatalogKind::VendorTypes => "Vendor Types",
            CatalogKind::Roles => "Roles",
            CatalogKind::Permissions => "Permissions",
        }
    }

    /// The option names, in the order the form cycles through them.
    pub fn options(self) -> Vec<&'static str> {
        fn names<T: OptionSet>() -> Vec<&'static str> {
            T::ALL.iter().map(|option| option.as_str()).collect()
        }
        match self {
            CatalogKind::VendorTypes => names::<VendorType>(),
            CatalogKind::Roles => names::<Role>(),
            CatalogKind::Permissions => names::<Permission>(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Vendors,
    AddVendor,
    Catalog(CatalogKind),
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Vendors => "Vendors",
            Screen::AddVendor => "Add Vendor",
            Screen::Catalog(kind) => kind.title(),
        }
    }
}

/// Tiles of the landing menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddVendor,
    ShowVendors,
    VendorTypes,
    Roles,
    Permissions,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::AddVendor,
        MenuItem::ShowVendors,
        MenuItem::VendorTypes,
        MenuItem::Roles,
        MenuItem::Permissions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MenuItem::AddVendor => "Add Vendor",
            MenuItem::ShowVendors => "Show Vendors",
            MenuItem::VendorTypes => "Vendor Types",
            MenuItem::Roles => "Roles",
            MenuItem::Permissions => "Permissions",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuItem::AddVendor => "Add new vendors to your system.",
            MenuItem::ShowVendors => "View and manage existing vendors.",
            MenuItem::VendorTypes => "The types a vendor can have.",
            MenuItem::Roles => "User roles a vendor can be given.",
            MenuItem::Permissions => "Access permissions a vendor can hold.",
        }
    }

    pub fn target(self) -> Screen {
        match self {
            MenuItem::AddVendor => Screen::AddVendor,
            MenuItem::ShowVendors => Screen::Vendors,
            MenuItem::VendorTypes => Screen::Catalog(CatalogKind::VendorTypes),
            MenuItem::Roles => Screen::Catalog(CatalogKind::Roles),
            MenuItem::Permissions => Screen::Catalog(CatalogKind::Permissions),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub(super) screen: Screen,
    pub(super) menu_selection: usize,
}

impl UiState for NavState {}

impl NavState {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_selection
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_selection.min(MenuItem::ALL.len() - 1)]
    }
}
