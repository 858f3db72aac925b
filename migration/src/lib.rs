pub use sea_orm_migration::prelude::*;

mod m20260115_000001_portal_user;
mod m20260115_000002_alumni_profile;
mod m20260115_000003_partner_company;
mod m20260115_000004_event;
mod m20260115_000005_donation_drive;
mod m20260115_000006_job;
mod m20260115_000007_job_application;
mod m20260115_000008_notification;
mod m20260115_000009_login_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_portal_user::Migration),
            Box::new(m20260115_000002_alumni_profile::Migration),
            Box::new(m20260115_000003_partner_company::Migration),
            Box::new(m20260115_000004_event::Migration),
            Box::new(m20260115_000005_donation_drive::Migration),
            Box::new(m20260115_000006_job::Migration),
            Box::new(m20260115_000007_job_application::Migration),
            Box::new(m20260115_000008_notification::Migration),
            Box::new(m20260115_000009_login_log::Migration),
        ]
    }
}
