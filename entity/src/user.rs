use sea_orm::entity::prelude::*;

use crate::enums::UserRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portal_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::alumni_profile::Entity")]
    AlumniProfile,
    #[sea_orm(has_one = "super::partner_company::Entity")]
    PartnerCompany,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::alumni_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlumniProfile.def()
    }
}

impl Related<super::partner_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartnerCompany.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
