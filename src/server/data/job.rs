use chrono::Utc;
use entity::enums::ApprovalStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::job::PostJobDto;

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a job posting in the `Pending` state, accepting applications
    pub async fn create(
        &self,
        posted_by: i32,
        posting: PostJobDto,
    ) -> Result<entity::job::Model, DbErr> {
        let job = entity::job::ActiveModel {
            posted_by: ActiveValue::Set(posted_by),
            title: ActiveValue::Set(posting.title),
            description: ActiveValue::Set(posting.description),
            company_name: ActiveValue::Set(posting.company_name),
            location: ActiveValue::Set(posting.location),
            status: ActiveValue::Set(ApprovalStatus::Pending),
            denial_reason: ActiveValue::Set(None),
            is_accepting: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        job.insert(self.db).await
    }

    pub async fn get_by_id(&self, job_id: i32) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(job_id).one(self.db).await
    }

    /// Lists the public board: approved postings currently accepting
    pub async fn list_open(&self) -> Result<Vec<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::Status.eq(ApprovalStatus::Approved))
            .filter(entity::job::Column::IsAccepting.eq(true))
            .order_by_desc(entity::job::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists a partner's own postings regardless of status
    pub async fn list_by_poster(&self, user_id: i32) -> Result<Vec<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::PostedBy.eq(user_id))
            .order_by_desc(entity::job::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_status(
        &self,
        status: ApprovalStatus,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::Status.eq(status))
            .order_by_desc(entity::job::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Writes a moderation decision onto the record
    ///
    /// Returns `None` when the job does not exist.
    pub async fn update_status(
        &self,
        job_id: i32,
        status: ApprovalStatus,
        denial_reason: Option<String>,
    ) -> Result<Option<entity::job::Model>, DbErr> {
        let Some(job) = self.get_by_id(job_id).await? else {
            return Ok(None);
        };

        let mut job: entity::job::ActiveModel = job.into();
        job.status = ActiveValue::Set(status);
        job.denial_reason = ActiveValue::Set(denial_reason);

        Ok(Some(job.update(self.db).await?))
    }

    /// Toggles whether the posting accepts applications
    pub async fn set_accepting(
        &self,
        job_id: i32,
        is_accepting: bool,
    ) -> Result<Option<entity::job::Model>, DbErr> {
        let Some(job) = self.get_by_id(job_id).await? else {
            return Ok(None);
        };

        let mut job: entity::job::ActiveModel = job.into();
        job.is_accepting = ActiveValue::Set(is_accepting);

        Ok(Some(job.update(self.db).await?))
    }

    pub async fn count_by_status(&self, status: ApprovalStatus) -> Result<u64, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
