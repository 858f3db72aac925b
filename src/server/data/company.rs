use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::{auth::RegisterPartnerDto, profile::UpdatePartnerCompanyDto};

pub struct PartnerCompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnerCompanyRepository<'a> {
    /// Creates a new instance of [`PartnerCompanyRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        registration: RegisterPartnerDto,
    ) -> Result<entity::partner_company::Model, DbErr> {
        let company = entity::partner_company::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            company_name: ActiveValue::Set(registration.company_name),
            industry: ActiveValue::Set(registration.industry),
            contract_start: ActiveValue::Set(registration.contract_start),
            contract_end: ActiveValue::Set(registration.contract_end),
            contract_key: ActiveValue::Set(registration.contract_key),
            contact_name: ActiveValue::Set(registration.contact_name),
            contact_email: ActiveValue::Set(registration.contact_email),
            contact_phone: ActiveValue::Set(registration.contact_phone),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        company.insert(self.db).await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::partner_company::Model>, DbErr> {
        entity::prelude::PartnerCompany::find()
            .filter(entity::partner_company::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Applies the partner-editable contact fields
    ///
    /// Returns `None` when the user has no company row.
    pub async fn update(
        &self,
        user_id: i32,
        update: UpdatePartnerCompanyDto,
    ) -> Result<Option<entity::partner_company::Model>, DbErr> {
        let Some(company) = self.get_by_user_id(user_id).await? else {
            return Ok(None);
        };

        let mut company: entity::partner_company::ActiveModel = company.into();
        company.industry = ActiveValue::Set(update.industry);
        company.contact_name = ActiveValue::Set(update.contact_name);
        company.contact_email = ActiveValue::Set(update.contact_email);
        company.contact_phone = ActiveValue::Set(update.contact_phone);

        Ok(Some(company.update(self.db).await?))
    }
}
