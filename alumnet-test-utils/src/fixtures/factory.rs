//! Factory functions for inserting common fixture rows.
//!
//! Each function writes a row with standard test values and returns the
//! inserted model. Users are created with [`TEST_PASSWORD`] hashed at the
//! minimum bcrypt cost to keep test runs fast.

use chrono::{Duration, Utc};
use entity::enums::{ApplicationStatus, ApprovalStatus, EventType, UserRole};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{constant::TEST_PASSWORD, error::TestError};

/// Minimum bcrypt cost factor; `bcrypt::MIN_COST` is private in the crate.
const MIN_BCRYPT_COST: u32 = 4;

/// Create an active user with the given username and role.
///
/// The password hash matches [`TEST_PASSWORD`], so the user can log in
/// through the real authentication path.
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    role: UserRole,
) -> Result<entity::user::Model, TestError> {
    let user = entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        password_hash: ActiveValue::Set(bcrypt::hash(TEST_PASSWORD, MIN_BCRYPT_COST)?),
        role: ActiveValue::Set(role),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

/// Create an event submitted by the given user in the given status.
pub async fn create_event(
    db: &DatabaseConnection,
    submitted_by: i32,
    status: ApprovalStatus,
) -> Result<entity::event::Model, TestError> {
    let starts_at = Utc::now().naive_utc() + Duration::days(7);

    let event = entity::event::ActiveModel {
        title: ActiveValue::Set("Alumni Homecoming".to_string()),
        description: ActiveValue::Set("Annual homecoming at the main campus.".to_string()),
        image_key: ActiveValue::Set(None),
        starts_at: ActiveValue::Set(starts_at),
        ends_at: ActiveValue::Set(starts_at + Duration::hours(3)),
        event_type: ActiveValue::Set(EventType::FaceToFace),
        facilitator_id: ActiveValue::Set(None),
        status: ActiveValue::Set(status),
        denial_reason: ActiveValue::Set(None),
        submitted_by: ActiveValue::Set(submitted_by),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(event.insert(db).await?)
}

/// Create a donation drive submitted by the given user in the given status.
pub async fn create_donation_drive(
    db: &DatabaseConnection,
    submitted_by: i32,
    status: ApprovalStatus,
) -> Result<entity::donation_drive::Model, TestError> {
    let drive = entity::donation_drive::ActiveModel {
        title: ActiveValue::Set("Library Renovation Fund".to_string()),
        description: ActiveValue::Set("Raising funds to renovate the library wing.".to_string()),
        image_key: ActiveValue::Set(None),
        status: ActiveValue::Set(status),
        denial_reason: ActiveValue::Set(None),
        submitted_by: ActiveValue::Set(submitted_by),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(drive.insert(db).await?)
}

/// Create a job posting by the given partner in the given status.
pub async fn create_job(
    db: &DatabaseConnection,
    posted_by: i32,
    status: ApprovalStatus,
    is_accepting: bool,
) -> Result<entity::job::Model, TestError> {
    let job = entity::job::ActiveModel {
        posted_by: ActiveValue::Set(posted_by),
        title: ActiveValue::Set("Junior Systems Engineer".to_string()),
        description: ActiveValue::Set("Entry-level role on the platform team.".to_string()),
        company_name: ActiveValue::Set("Acme Corp".to_string()),
        location: ActiveValue::Set("Makati".to_string()),
        status: ActiveValue::Set(status),
        denial_reason: ActiveValue::Set(None),
        is_accepting: ActiveValue::Set(is_accepting),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(job.insert(db).await?)
}

/// Create a pending application by the given alumnus to the given job.
pub async fn create_application(
    db: &DatabaseConnection,
    job_id: i32,
    applicant_id: i32,
) -> Result<entity::job_application::Model, TestError> {
    let application = entity::job_application::ActiveModel {
        job_id: ActiveValue::Set(job_id),
        applicant_id: ActiveValue::Set(applicant_id),
        resume_key: ActiveValue::Set(None),
        status: ActiveValue::Set(ApplicationStatus::Pending),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(application.insert(db).await?)
}

/// Create an unread notification for the given user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
    message: &str,
) -> Result<entity::notification::Model, TestError> {
    let notification = entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        message: ActiveValue::Set(message.to_string()),
        direct_to: ActiveValue::Set(None),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(notification.insert(db).await?)
}
