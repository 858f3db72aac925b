use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub message: String,
    pub direct_to: Option<String>,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            message: notification.message,
            direct_to: notification.direct_to,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnreadCountDto {
    pub unread: u64,
}
