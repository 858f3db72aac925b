use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Free-text reason accompanying a denial decision.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DecisionReasonDto {
    pub reason: String,
}

/// Request body for a bulk approve/deny action.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BulkDecisionDto {
    pub ids: Vec<i32>,
    /// Required for bulk deny, ignored for bulk approve.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Aggregate result of a bulk approve/deny action.
///
/// Decisions are applied sequentially per record; a partial failure leaves
/// earlier decisions committed. The ids that failed are itemized so the
/// client can retry or surface them.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BulkOutcomeDto {
    pub succeeded: u32,
    pub failed: u32,
    pub failed_ids: Vec<i32>,
}

/// Current server clock, used by clients for deadline validation in place of
/// local clocks.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServerTimeDto {
    pub now: chrono::NaiveDateTime,
}
