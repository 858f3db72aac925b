use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::{auth::RegisterAlumniDto, profile::UpdateAlumniProfileDto};

pub struct AlumniProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlumniProfileRepository<'a> {
    /// Creates a new instance of [`AlumniProfileRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the profile row for a freshly registered alumni account
    pub async fn create(
        &self,
        user_id: i32,
        registration: RegisterAlumniDto,
    ) -> Result<entity::alumni_profile::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let profile = entity::alumni_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            first_name: ActiveValue::Set(registration.first_name),
            middle_name: ActiveValue::Set(registration.middle_name),
            last_name: ActiveValue::Set(registration.last_name),
            gender: ActiveValue::Set(registration.gender),
            birth_date: ActiveValue::Set(registration.birth_date),
            country: ActiveValue::Set(registration.country),
            region: ActiveValue::Set(registration.region),
            city: ActiveValue::Set(registration.city),
            street_address: ActiveValue::Set(registration.street_address),
            department: ActiveValue::Set(registration.department),
            program: ActiveValue::Set(registration.program),
            batch_year: ActiveValue::Set(registration.batch_year),
            resume_key: ActiveValue::Set(registration.resume_key),
            current_employer: ActiveValue::Set(registration.current_employer),
            current_position: ActiveValue::Set(registration.current_position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::alumni_profile::Model>, DbErr> {
        entity::prelude::AlumniProfile::find()
            .filter(entity::alumni_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Applies the editable subset of profile fields and refreshes `updated_at`
    ///
    /// Returns `None` when the user has no profile row.
    pub async fn update(
        &self,
        user_id: i32,
        update: UpdateAlumniProfileDto,
    ) -> Result<Option<entity::alumni_profile::Model>, DbErr> {
        let Some(profile) = self.get_by_user_id(user_id).await? else {
            return Ok(None);
        };

        let mut profile: entity::alumni_profile::ActiveModel = profile.into();
        profile.country = ActiveValue::Set(update.country);
        profile.region = ActiveValue::Set(update.region);
        profile.city = ActiveValue::Set(update.city);
        profile.street_address = ActiveValue::Set(update.street_address);
        profile.resume_key = ActiveValue::Set(update.resume_key);
        profile.current_employer = ActiveValue::Set(update.current_employer);
        profile.current_position = ActiveValue::Set(update.current_position);
        profile.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(profile.update(self.db).await?))
    }
}
