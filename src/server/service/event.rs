use entity::enums::ApprovalStatus;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::event::SubmitEventDto,
    server::{
        data::event::EventRepository,
        error::Error,
        service::approval::{self, ApprovalTarget, BulkOutcome, Submission, Verdict},
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and records an event submission in the `Pending` state
    ///
    /// An event whose end precedes its start is rejected before any database
    /// write.
    pub async fn submit(
        &self,
        submitted_by: i32,
        submission: SubmitEventDto,
    ) -> Result<entity::event::Model, Error> {
        if submission.ends_at <= submission.starts_at {
            return Err(Error::Validation(
                "Event end must be after event start".to_string(),
            ));
        }

        let event = EventRepository::new(self.db)
            .create(submitted_by, submission)
            .await?;

        Ok(event)
    }

    pub async fn approve(&self, event_id: i32) -> Result<(), Error> {
        approval::decide(
            self.db,
            &EventModeration { db: self.db },
            event_id,
            &Verdict::Approve,
        )
        .await
    }

    pub async fn deny(&self, event_id: i32, reason: String) -> Result<(), Error> {
        approval::decide(
            self.db,
            &EventModeration { db: self.db },
            event_id,
            &Verdict::Deny { reason },
        )
        .await
    }

    pub async fn approve_bulk(&self, ids: &[i32]) -> Result<BulkOutcome, Error> {
        approval::decide_bulk(
            self.db,
            &EventModeration { db: self.db },
            ids,
            &Verdict::Approve,
        )
        .await
    }

    pub async fn deny_bulk(&self, ids: &[i32], reason: String) -> Result<BulkOutcome, Error> {
        approval::decide_bulk(
            self.db,
            &EventModeration { db: self.db },
            ids,
            &Verdict::Deny { reason },
        )
        .await
    }
}

/// Moderation adapter over the event repository.
pub struct EventModeration<'a> {
    pub db: &'a DatabaseConnection,
}

impl ApprovalTarget for EventModeration<'_> {
    const LABEL: &'static str = "event";

    fn route(&self, id: i32) -> String {
        format!("/events/{}", id)
    }

    async fn load(&self, id: i32) -> Result<Option<Submission>, DbErr> {
        let event = EventRepository::new(self.db).get_by_id(id).await?;

        Ok(event.map(|event| Submission {
            status: event.status,
            submitted_by: event.submitted_by,
            title: event.title,
        }))
    }

    async fn store(
        &self,
        id: i32,
        status: ApprovalStatus,
        denial_reason: Option<String>,
    ) -> Result<(), DbErr> {
        EventRepository::new(self.db)
            .update_status(id, status, denial_reason)
            .await?;

        Ok(())
    }
}
