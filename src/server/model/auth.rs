use chrono::{DateTime, Utc};
use entity::enums::UserRole;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Name of the cookie carrying the short-lived access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access-token";
/// Name of the cookie carrying the long-lived refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh-token";

/// Distinguishes the two token kinds so a refresh token can never
/// authenticate a normal request and an access token can never mint a new
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenUse {
    Access,
    Refresh,
}

impl TokenUse {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: i32,
    pub role: UserRole,
    pub token_use: TokenUse,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(
        user_id: i32,
        role: UserRole,
        token_use: TokenUse,
        ttl_secs: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: user_id,
            role,
            token_use,
            iat: now.timestamp(),
            exp: now.timestamp() + ttl_secs,
        }
    }

    /// Sign the claims into a compact HS256 JWT.
    pub fn encode(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Validate a token's signature and expiry, and check it was minted for
    /// the expected use.
    pub fn decode(token: &str, secret: &str, expected: TokenUse) -> Result<Self, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.token_use != expected {
            return Err(AuthError::WrongTokenUse {
                expected: expected.as_str(),
            });
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use entity::enums::UserRole;

    use crate::server::model::auth::{Claims, TokenUse};

    static SECRET: &str = "test-secret";

    /// Expect a round trip through encode and decode to preserve the claims
    #[test]
    fn test_claims_round_trip() {
        let claims = Claims::new(7, UserRole::Alumni, TokenUse::Access, 900, Utc::now());

        let token = claims.encode(SECRET).unwrap();
        let decoded = Claims::decode(&token, SECRET, TokenUse::Access).unwrap();

        assert_eq!(decoded.sub, 7);
        assert_eq!(decoded.role, UserRole::Alumni);
        assert_eq!(decoded.token_use, TokenUse::Access);
    }

    /// Expect decode to reject a token signed with a different secret
    #[test]
    fn test_claims_wrong_secret() {
        let claims = Claims::new(7, UserRole::Alumni, TokenUse::Access, 900, Utc::now());

        let token = claims.encode(SECRET).unwrap();
        let result = Claims::decode(&token, "other-secret", TokenUse::Access);

        assert!(result.is_err());
    }

    /// Expect decode to reject a refresh token presented as an access token
    #[test]
    fn test_claims_wrong_use() {
        let claims = Claims::new(7, UserRole::Alumni, TokenUse::Refresh, 900, Utc::now());

        let token = claims.encode(SECRET).unwrap();
        let result = Claims::decode(&token, SECRET, TokenUse::Access);

        assert!(result.is_err());
    }

    /// Expect decode to reject an expired token
    #[test]
    fn test_claims_expired() {
        let issued_at = Utc::now() - Duration::hours(2);
        let claims = Claims::new(7, UserRole::Alumni, TokenUse::Access, 900, issued_at);

        let token = claims.encode(SECRET).unwrap();
        let result = Claims::decode(&token, SECRET, TokenUse::Access);

        assert!(result.is_err());
    }
}
