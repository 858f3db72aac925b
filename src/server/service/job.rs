use entity::enums::{ApplicationStatus, ApprovalStatus};
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::job::PostJobDto,
    server::{
        data::{
            application::JobApplicationRepository, job::JobRepository,
            notification::NotificationRepository,
        },
        error::{job::JobError, Error},
        service::approval::{self, ApprovalTarget, Submission, Verdict},
    },
};

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new instance of [`JobService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn post(
        &self,
        posted_by: i32,
        posting: PostJobDto,
    ) -> Result<entity::job::Model, Error> {
        let job = JobRepository::new(self.db).create(posted_by, posting).await?;

        Ok(job)
    }

    pub async fn approve(&self, job_id: i32) -> Result<(), Error> {
        approval::decide(
            self.db,
            &JobModeration { db: self.db },
            job_id,
            &Verdict::Approve,
        )
        .await
    }

    pub async fn deny(&self, job_id: i32, reason: String) -> Result<(), Error> {
        approval::decide(
            self.db,
            &JobModeration { db: self.db },
            job_id,
            &Verdict::Deny { reason },
        )
        .await
    }

    /// Toggles whether an approved posting accepts applications
    ///
    /// Only the partner that posted the job may toggle it. The flag is
    /// independent of the approval status.
    pub async fn set_accepting(
        &self,
        user_id: i32,
        job_id: i32,
        is_accepting: bool,
    ) -> Result<entity::job::Model, Error> {
        let job_repository = JobRepository::new(self.db);

        let Some(job) = job_repository.get_by_id(job_id).await? else {
            return Err(Error::NotFound("Job"));
        };

        if job.posted_by != user_id {
            return Err(JobError::NotOwner { job_id, user_id }.into());
        }

        let job = job_repository
            .set_accepting(job_id, is_accepting)
            .await?
            .ok_or(Error::NotFound("Job"))?;

        Ok(job)
    }

    /// Records an alumni application to an open posting
    ///
    /// The job must be approved and accepting, and an alumnus can apply to a
    /// given posting at most once.
    pub async fn apply(
        &self,
        applicant_id: i32,
        job_id: i32,
        resume_key: Option<String>,
    ) -> Result<entity::job_application::Model, Error> {
        let Some(job) = JobRepository::new(self.db).get_by_id(job_id).await? else {
            return Err(Error::NotFound("Job"));
        };

        if job.status != ApprovalStatus::Approved {
            return Err(JobError::NotApproved(job_id).into());
        }

        if !job.is_accepting {
            return Err(JobError::NotAccepting(job_id).into());
        }

        let application_repository = JobApplicationRepository::new(self.db);

        if application_repository
            .get_by_job_and_applicant(job_id, applicant_id)
            .await?
            .is_some()
        {
            return Err(JobError::DuplicateApplication {
                job_id,
                applicant_id,
            }
            .into());
        }

        let application = application_repository
            .create(job_id, applicant_id, resume_key)
            .await?;

        Ok(application)
    }

    /// Lists applications for a posting owned by the requesting partner
    pub async fn applications(
        &self,
        user_id: i32,
        job_id: i32,
    ) -> Result<Vec<entity::job_application::Model>, Error> {
        let Some(job) = JobRepository::new(self.db).get_by_id(job_id).await? else {
            return Err(Error::NotFound("Job"));
        };

        if job.posted_by != user_id {
            return Err(JobError::NotOwner { job_id, user_id }.into());
        }

        let applications = JobApplicationRepository::new(self.db)
            .list_by_job(job_id)
            .await?;

        Ok(applications)
    }

    /// Decides an application as accepted or rejected and notifies the
    /// applicant
    pub async fn decide_application(
        &self,
        user_id: i32,
        application_id: i32,
        status: ApplicationStatus,
    ) -> Result<entity::job_application::Model, Error> {
        if status == ApplicationStatus::Pending {
            return Err(Error::Validation(
                "An application decision must be accepted or rejected".to_string(),
            ));
        }

        let application_repository = JobApplicationRepository::new(self.db);

        let Some(application) = application_repository.get_by_id(application_id).await? else {
            return Err(Error::NotFound("Application"));
        };

        let Some(job) = JobRepository::new(self.db)
            .get_by_id(application.job_id)
            .await?
        else {
            return Err(Error::NotFound("Job"));
        };

        if job.posted_by != user_id {
            return Err(JobError::NotOwner {
                job_id: job.id,
                user_id,
            }
            .into());
        }

        let application = application_repository
            .set_status(application_id, status)
            .await?
            .ok_or(Error::NotFound("Application"))?;

        let decision = match status {
            ApplicationStatus::Accepted => "accepted",
            _ => "rejected",
        };

        NotificationRepository::new(self.db)
            .create(
                application.applicant_id,
                format!(
                    "Your application for \"{}\" has been {}.",
                    job.title, decision
                ),
                Some(format!("/jobs/{}", job.id)),
            )
            .await?;

        Ok(application)
    }
}

/// Moderation adapter over the job repository.
pub struct JobModeration<'a> {
    pub db: &'a DatabaseConnection,
}

impl ApprovalTarget for JobModeration<'_> {
    const LABEL: &'static str = "job posting";

    fn route(&self, id: i32) -> String {
        format!("/jobs/{}", id)
    }

    async fn load(&self, id: i32) -> Result<Option<Submission>, DbErr> {
        let job = JobRepository::new(self.db).get_by_id(id).await?;

        Ok(job.map(|job| Submission {
            status: job.status,
            submitted_by: job.posted_by,
            title: job.title,
        }))
    }

    async fn store(
        &self,
        id: i32,
        status: ApprovalStatus,
        denial_reason: Option<String>,
    ) -> Result<(), DbErr> {
        JobRepository::new(self.db)
            .update_status(id, status, denial_reason)
            .await?;

        Ok(())
    }
}
