use sea_orm::entity::prelude::*;

use crate::enums::{ApprovalStatus, EventType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(nullable)]
    pub image_key: Option<String>,
    pub starts_at: chrono::NaiveDateTime,
    pub ends_at: chrono::NaiveDateTime,
    pub event_type: EventType,
    /// Alumnus designated to manage attendance at a face-to-face event.
    pub facilitator_id: Option<i32>,
    pub status: ApprovalStatus,
    #[sea_orm(nullable)]
    pub denial_reason: Option<String>,
    pub submitted_by: i32,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SubmittedBy",
        to = "super::user::Column::Id"
    )]
    Submitter,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FacilitatorId",
        to = "super::user::Column::Id"
    )]
    Facilitator,
}

impl ActiveModelBehavior for ActiveModel {}
