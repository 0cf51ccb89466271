pub mod api;
pub mod common;
pub mod console;
pub mod notification;

pub use api::{
    create_api, list_apis, publish_api, update_api, view_api, ApiListResponse, ApiResponse,
    ApiRowResponse, CreateApiRequest, UpdateApiRequest,
};
pub use common::PaginationParams;
pub use console::{
    get_breadcrumb, get_menu, get_section, BreadcrumbResponse, MenuItemResponse, MenuResponse,
    SectionResponse,
};
pub use notification::{list_notifications, NotificationListResponse, NotificationResponse};
