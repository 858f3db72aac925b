use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date-range query for the admin dashboard, inclusive on both ends.
#[derive(Serialize, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
pub struct StatsRangeDto {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardStatsDto {
    /// Login attempts within the range, successful or not.
    pub logins_total: u64,
    pub logins_successful: u64,
    pub pending_events: u64,
    pub pending_donation_drives: u64,
    pub pending_jobs: u64,
    pub alumni_count: u64,
    pub partner_count: u64,
}
