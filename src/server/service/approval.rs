//! Moderation engine shared by events, donation drives, and job postings.
//!
//! All three submission kinds move through the same lifecycle: they are
//! created `Pending` and an administrator decides them into `Approved` or
//! `Denied` exactly once. Each decision notifies the submitter; a denial
//! carries a free-text reason that is persisted on the record and embedded in
//! the notification message. The engine is generic over an [`ApprovalTarget`]
//! so the rules live in one place instead of being copied per kind.

use entity::enums::ApprovalStatus;
use sea_orm::{DatabaseConnection, DbErr};
use tracing::{info, warn};

use crate::server::{
    data::notification::NotificationRepository,
    error::{approval::ApprovalError, Error},
};

/// The fields of a pending record the engine needs to decide it.
pub struct Submission {
    pub status: ApprovalStatus,
    pub submitted_by: i32,
    pub title: String,
}

/// Adapter implemented per submission kind over its repository.
pub trait ApprovalTarget {
    /// Human-readable noun used in notifications and error messages.
    const LABEL: &'static str;

    /// Client route a decision notification links to.
    fn route(&self, id: i32) -> String;

    async fn load(&self, id: i32) -> Result<Option<Submission>, DbErr>;

    async fn store(
        &self,
        id: i32,
        status: ApprovalStatus,
        denial_reason: Option<String>,
    ) -> Result<(), DbErr>;
}

pub enum Verdict {
    Approve,
    Deny { reason: String },
}

/// Aggregate result of a bulk decision.
pub struct BulkOutcome {
    pub succeeded: u32,
    pub failed: u32,
    pub failed_ids: Vec<i32>,
}

/// Applies a single decision to a pending record.
///
/// The transition is terminal: deciding a record that is no longer `Pending`
/// returns [`ApprovalError::AlreadyDecided`] and inserts no notification, so
/// a repeated decision can never double-notify the submitter.
pub async fn decide<T: ApprovalTarget>(
    db: &DatabaseConnection,
    target: &T,
    id: i32,
    verdict: &Verdict,
) -> Result<(), Error> {
    let Some(submission) = target.load(id).await? else {
        return Err(ApprovalError::NotFound { label: T::LABEL, id }.into());
    };

    if submission.status != ApprovalStatus::Pending {
        return Err(ApprovalError::AlreadyDecided { label: T::LABEL, id }.into());
    }

    let (status, denial_reason, message) = match verdict {
        Verdict::Approve => (
            ApprovalStatus::Approved,
            None,
            format!(
                "Your {} \"{}\" has been approved.",
                T::LABEL,
                submission.title
            ),
        ),
        Verdict::Deny { reason } => {
            let reason = reason.trim();
            if reason.is_empty() {
                return Err(ApprovalError::ReasonRequired.into());
            }

            (
                ApprovalStatus::Denied,
                Some(reason.to_string()),
                format!(
                    "Your {} \"{}\" has been denied: {}",
                    T::LABEL,
                    submission.title,
                    reason
                ),
            )
        }
    };

    target.store(id, status, denial_reason).await?;

    // The decision and the notification are separate statements; a failure
    // here leaves the decision committed without a notification.
    NotificationRepository::new(db)
        .create(submission.submitted_by, message, Some(target.route(id)))
        .await?;

    info!(id = %id, status = ?status, "{} decided", T::LABEL);

    Ok(())
}

/// Applies a decision to each id in turn, aggregating per-id results.
///
/// There is no transaction across ids: a failure partway through leaves
/// earlier decisions committed. Failed ids are itemized for the client.
pub async fn decide_bulk<T: ApprovalTarget>(
    db: &DatabaseConnection,
    target: &T,
    ids: &[i32],
    verdict: &Verdict,
) -> Result<BulkOutcome, Error> {
    // Reject an empty denial reason up front rather than failing every id.
    if let Verdict::Deny { reason } = verdict {
        if reason.trim().is_empty() {
            return Err(ApprovalError::ReasonRequired.into());
        }
    }

    let mut outcome = BulkOutcome {
        succeeded: 0,
        failed: 0,
        failed_ids: Vec::new(),
    };

    for &id in ids {
        match decide(db, target, id, verdict).await {
            Ok(()) => outcome.succeeded += 1,
            Err(err) => {
                warn!(id = %id, "bulk decision failed for {}: {}", T::LABEL, err);

                outcome.failed += 1;
                outcome.failed_ids.push(id);
            }
        }
    }

    Ok(outcome)
}
