use sea_orm::DatabaseConnection;

use crate::server::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthSettings,
    pub uploads: UploadSettings,
}

/// Token signing material and lifetimes, shared with every handler.
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
}

/// S3-compatible object storage credentials used for SigV4 presigning.
#[derive(Clone)]
pub struct UploadSettings {
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    pub expiry_secs: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            auth: AuthSettings {
                jwt_secret: config.jwt_secret.clone(),
                access_token_ttl_secs: config.access_token_ttl_secs,
                refresh_token_ttl_secs: config.refresh_token_ttl_secs,
            },
            uploads: UploadSettings {
                endpoint: config.s3_endpoint.clone(),
                region: config.s3_region.clone(),
                bucket: config.s3_bucket.clone(),
                access_key: config.s3_access_key.clone(),
                secret_key: config.s3_secret_key.clone(),
                expiry_secs: config.presign_expiry_secs,
            },
        }
    }
}

/// Build an [`AppState`] from a database connection and a JWT secret.
///
/// Test setups construct state through this conversion without creating a
/// circular dependency on the test-utils crate; token lifetimes and upload
/// settings take fixed test-friendly values.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, jwt_secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            auth: AuthSettings {
                jwt_secret,
                access_token_ttl_secs: 900,
                refresh_token_ttl_secs: 604_800,
            },
            uploads: UploadSettings {
                endpoint: "http://localhost:9000".to_string(),
                region: "us-east-1".to_string(),
                bucket: "alumnet-test".to_string(),
                access_key: "test-access-key".to_string(),
                secret_key: "test-secret-key".to_string(),
                expiry_secs: 600,
            },
        }
    }
}
