use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};
use crate::models::{breadcrumb, find_menu_item, MenuItem, MENU, PLACEHOLDER_MESSAGE};

/// Menu entry selected when the console first loads
pub const DEFAULT_MENU_KEY: &str = "apis";

/// Where the record listing lives, for the implemented section
pub const RECORDS_PATH: &str = "/api/apis";

// ============ Request/Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemResponse {
    pub key: String,
    pub label: String,
    pub implemented: bool,
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            key: item.key.to_string(),
            label: item.label.to_string(),
            implemented: item.implemented,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuResponse {
    pub items: Vec<MenuItemResponse>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct BreadcrumbParams {
    /// Selected menu key; defaults to `apis`
    pub menu: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BreadcrumbResponse {
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub key: String,
    pub title: String,
    pub breadcrumb: Vec<String>,
    pub implemented: bool,
    /// Placeholder text for sections without backing logic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_path: Option<String>,
}

fn owned(items: Vec<&'static str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

// ============ Handlers ============

/// Console navigation menu
#[utoipa::path(
    get,
    path = "/api/console/menu",
    responses(
        (status = 200, description = "Menu entries", body = MenuResponse)
    ),
    tag = "Console"
)]
pub async fn get_menu() -> Json<MenuResponse> {
    Json(MenuResponse {
        items: MENU.iter().map(MenuItemResponse::from).collect(),
    })
}

/// Breadcrumb for the selected menu entry
#[utoipa::path(
    get,
    path = "/api/console/breadcrumb",
    params(BreadcrumbParams),
    responses(
        (status = 200, description = "Breadcrumb trail", body = BreadcrumbResponse)
    ),
    tag = "Console"
)]
pub async fn get_breadcrumb(Query(params): Query<BreadcrumbParams>) -> Json<BreadcrumbResponse> {
    let key = params.menu.as_deref().unwrap_or(DEFAULT_MENU_KEY);
    Json(BreadcrumbResponse {
        items: owned(breadcrumb(key)),
    })
}

/// Content of a console section. Sections without backing logic return a
/// static placeholder.
#[utoipa::path(
    get,
    path = "/api/console/sections/{key}",
    params(
        ("key" = String, Path, description = "Menu key")
    ),
    responses(
        (status = 200, description = "Section content", body = SectionResponse),
        (status = 404, description = "Section not found")
    ),
    tag = "Console"
)]
pub async fn get_section(Path(key): Path<String>) -> AppResult<Json<SectionResponse>> {
    let item = find_menu_item(&key).ok_or_else(|| AppError::NotFound("Section".to_string()))?;

    let (message, records_path) = if item.implemented {
        (None, Some(RECORDS_PATH.to_string()))
    } else {
        (Some(PLACEHOLDER_MESSAGE.to_string()), None)
    };

    Ok(Json(SectionResponse {
        key: item.key.to_string(),
        title: item.label.to_string(),
        breadcrumb: owned(breadcrumb(item.key)),
        implemented: item.implemented,
        message,
        records_path,
    }))
}
