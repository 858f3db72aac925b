use serde::{Deserialize, Serialize};

/// Request for a presigned upload URL.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PresignRequestDto {
    /// Logical folder the object belongs to, e.g. `events` or `resumes`.
    pub folder: String,
    pub filename: String,
    pub content_type: String,
}

/// A time-limited URL the client PUTs the object bytes to directly; the
/// application stores only the resulting `key`.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PresignDto {
    pub url: String,
    pub key: String,
}
