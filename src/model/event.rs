use chrono::NaiveDateTime;
use entity::enums::{ApprovalStatus, EventType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_key: Option<String>,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub event_type: EventType,
    pub facilitator_id: Option<i32>,
    pub status: ApprovalStatus,
    pub denial_reason: Option<String>,
    pub submitted_by: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::event::Model> for EventDto {
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            image_key: event.image_key,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            event_type: event.event_type,
            facilitator_id: event.facilitator_id,
            status: event.status,
            denial_reason: event.denial_reason,
            submitted_by: event.submitted_by,
            created_at: event.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubmitEventDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_key: Option<String>,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub event_type: EventType,
    #[serde(default)]
    pub facilitator_id: Option<i32>,
}
