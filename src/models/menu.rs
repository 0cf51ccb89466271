use serde::Serialize;

/// Label shown for a menu key that is not part of the console
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Message rendered by sections that have no backing logic yet
pub const PLACEHOLDER_MESSAGE: &str = "This feature is coming soon...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    /// Only the API records section has real behaviour
    pub implemented: bool,
}

pub static MENU: [MenuItem; 6] = [
    MenuItem {
        key: "apis",
        label: "API Management",
        implemented: true,
    },
    MenuItem {
        key: "datasources",
        label: "Data Sources",
        implemented: false,
    },
    MenuItem {
        key: "permissions",
        label: "Permissions",
        implemented: false,
    },
    MenuItem {
        key: "variables",
        label: "Global Variables",
        implemented: false,
    },
    MenuItem {
        key: "history",
        label: "API History",
        implemented: false,
    },
    MenuItem {
        key: "clients",
        label: "Client Management",
        implemented: false,
    },
];

/// Look up a menu entry by key
pub fn find_menu_item(key: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.key == key)
}

/// Breadcrumb trail for the selected menu key: always `Home` then the label.
pub fn breadcrumb(key: &str) -> Vec<&'static str> {
    let label = find_menu_item(key).map_or(UNKNOWN_LABEL, |item| item.label);
    vec!["Home", label]
}
