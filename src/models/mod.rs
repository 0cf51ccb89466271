pub mod api;
pub mod menu;
pub mod notification;

pub use api::*;
pub use menu::{breadcrumb, find_menu_item, MenuItem, MENU, PLACEHOLDER_MESSAGE};
pub use notification::*;
