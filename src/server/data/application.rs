use chrono::Utc;
use entity::enums::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct JobApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobApplicationRepository<'a> {
    /// Creates a new instance of [`JobApplicationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an application in the `Pending` state
    pub async fn create(
        &self,
        job_id: i32,
        applicant_id: i32,
        resume_key: Option<String>,
    ) -> Result<entity::job_application::Model, DbErr> {
        let application = entity::job_application::ActiveModel {
            job_id: ActiveValue::Set(job_id),
            applicant_id: ActiveValue::Set(applicant_id),
            resume_key: ActiveValue::Set(resume_key),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::job_application::Model>, DbErr> {
        entity::prelude::JobApplication::find_by_id(application_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_job_and_applicant(
        &self,
        job_id: i32,
        applicant_id: i32,
    ) -> Result<Option<entity::job_application::Model>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id))
            .filter(entity::job_application::Column::ApplicantId.eq(applicant_id))
            .one(self.db)
            .await
    }

    pub async fn list_by_job(
        &self,
        job_id: i32,
    ) -> Result<Vec<entity::job_application::Model>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id))
            .order_by_desc(entity::job_application::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Sets the decision on an application
    ///
    /// Returns `None` when the application does not exist.
    pub async fn set_status(
        &self,
        application_id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<entity::job_application::Model>, DbErr> {
        let Some(application) = self.get_by_id(application_id).await? else {
            return Ok(None);
        };

        let mut application: entity::job_application::ActiveModel = application.into();
        application.status = ActiveValue::Set(status);

        Ok(Some(application.update(self.db).await?))
    }
}
