use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use entity::enums::UserRole;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        auth::{Claims, TokenUse, ACCESS_TOKEN_COOKIE},
    },
};

/// Authenticated identity extracted from the `access-token` cookie.
///
/// Extraction fails with 401 when the cookie is missing, expired, forged, or
/// carries a refresh token instead of an access token. Role checks are done
/// by handlers through [`AuthUser::require_role`].
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
    pub role: UserRole,
}

impl AuthUser {
    pub fn require_role(&self, role: UserRole) -> Result<(), AuthError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AuthError::Forbidden(self.user_id))
        }
    }

    pub fn require_admin(&self) -> Result<(), AuthError> {
        self.require_role(UserRole::Admin)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .ok_or(AuthError::MissingToken)?
            .value();

        let claims = Claims::decode(token, &state.auth.jwt_secret, TokenUse::Access)?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
