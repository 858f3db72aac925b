use sea_orm::entity::prelude::*;

use crate::enums::ApprovalStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub posted_by: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub company_name: String,
    pub location: String,
    pub status: ApprovalStatus,
    #[sea_orm(nullable)]
    pub denial_reason: Option<String>,
    /// Whether the posting is currently accepting applications.
    /// Independent of the approval status.
    pub is_accepting: bool,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PostedBy",
        to = "super::user::Column::Id"
    )]
    Poster,
    #[sea_orm(has_many = "super::job_application::Entity")]
    JobApplication,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poster.def()
    }
}

impl Related<super::job_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
