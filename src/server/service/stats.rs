use chrono::{Duration, NaiveDate, NaiveTime};
use entity::enums::{ApprovalStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::{
    model::stats::DashboardStatsDto,
    server::{
        data::{
            donation::DonationDriveRepository, event::EventRepository, job::JobRepository,
            login_log::LoginLogRepository, user::UserRepository,
        },
        error::Error,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of [`StatsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the admin dashboard counters for an inclusive date range
    pub async fn dashboard(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<DashboardStatsDto, Error> {
        if to < from {
            return Err(Error::Validation(
                "Range end must not precede range start".to_string(),
            ));
        }

        // The range is inclusive of both days, so the window closes one
        // second before midnight after `to`.
        let window_start = from.and_time(NaiveTime::MIN);
        let window_end = (to + Duration::days(1)).and_time(NaiveTime::MIN) - Duration::seconds(1);

        let login_log_repository = LoginLogRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        Ok(DashboardStatsDto {
            logins_total: login_log_repository
                .count_in_range(window_start, window_end)
                .await?,
            logins_successful: login_log_repository
                .count_success_in_range(window_start, window_end)
                .await?,
            pending_events: EventRepository::new(self.db)
                .count_by_status(ApprovalStatus::Pending)
                .await?,
            pending_donation_drives: DonationDriveRepository::new(self.db)
                .count_by_status(ApprovalStatus::Pending)
                .await?,
            pending_jobs: JobRepository::new(self.db)
                .count_by_status(ApprovalStatus::Pending)
                .await?,
            alumni_count: user_repository.count_by_role(UserRole::Alumni).await?,
            partner_count: user_repository.count_by_role(UserRole::Partner).await?,
        })
    }
}
