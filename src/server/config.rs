use crate::server::error::config::ConfigError;

pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
    pub s3_endpoint: String,
    pub s3_region: String,
    pub s3_bucket: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    pub presign_expiry_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            listen_addr: optional("LISTEN_ADDR", "0.0.0.0:8080"),
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            access_token_ttl_secs: parsed("ACCESS_TOKEN_TTL_SECS", 900)?,
            refresh_token_ttl_secs: parsed("REFRESH_TOKEN_TTL_SECS", 604_800)?,
            s3_endpoint: required("S3_ENDPOINT")?,
            s3_region: required("S3_REGION")?,
            s3_bucket: required("S3_BUCKET")?,
            s3_access_key: required("S3_ACCESS_KEY")?,
            s3_secret_key: required("S3_SECRET_KEY")?,
            presign_expiry_secs: parsed("PRESIGN_EXPIRY_SECS", 600)?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("failed to parse {:?}", value),
        }),
        Err(_) => Ok(default),
    }
}
