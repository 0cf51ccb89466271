use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::handlers::PaginationParams;
use crate::models::{Notification, NotificationLevel};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub level: NotificationLevel,
    pub message: String,
    pub api_id: Uuid,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub at: time::OffsetDateTime,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            level: n.level,
            message: n.message,
            api_id: n.api_id,
            at: n.at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationListResponse {
    pub data: Vec<NotificationResponse>,
}

/// Recent notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    params(PaginationParams),
    responses(
        (status = 200, description = "Recent notifications", body = NotificationListResponse)
    ),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<NotificationListResponse> {
    let notifications = state
        .notifications
        .recent(params.offset() as usize, params.limit() as usize)
        .await;

    Json(NotificationListResponse {
        data: notifications.into_iter().map(|n| n.into()).collect(),
    })
}
