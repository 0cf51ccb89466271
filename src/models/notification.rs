use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Info,
}

/// User-facing message raised after a store mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub api_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl Notification {
    pub fn success(message: impl Into<String>, api_id: Uuid, at: OffsetDateTime) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            api_id,
            at,
        }
    }

    pub fn info(message: impl Into<String>, api_id: Uuid, at: OffsetDateTime) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            api_id,
            at,
        }
    }
}
