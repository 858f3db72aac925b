use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterAlumniDto, RegisterPartnerDto},
        user::UserDto,
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::{
            app::{AppState, AuthSettings},
            auth::{Claims, TokenUse, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE},
            extract::AuthUser,
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register an alumni account
#[utoipa::path(
    post,
    path = "/api/auth/register/alumni",
    tag = AUTH_TAG,
    request_body = RegisterAlumniDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_alumni(
    State(state): State<AppState>,
    Json(registration): Json<RegisterAlumniDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).register_alumni(registration).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Register a partner company account
#[utoipa::path(
    post,
    path = "/api/auth/register/partner",
    tag = AUTH_TAG,
    request_body = RegisterPartnerDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_partner(
    State(state): State<AppState>,
    Json(registration): Json<RegisterPartnerDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).register_partner(registration).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Log in with username and password
///
/// On success the response sets the `access-token` and `refresh-token`
/// cookies. Neither cookie carries a Max-Age; expiry is governed by the
/// token's own `exp` claim.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 403, description = "Account is inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .login(&credentials.username, &credentials.password)
        .await?;

    let jar = session_cookies(jar, &user, &state.auth)?;

    Ok((jar, Json(UserDto::from(user))))
}

/// Mint a fresh access token from the refresh token cookie
///
/// The account is re-checked against the database so a deactivated or
/// deleted user cannot keep a session alive through refreshes.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Access token refreshed", body = UserDto),
        (status = 401, description = "Missing or invalid refresh token", body = ErrorDto),
        (status = 403, description = "Account is inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let token = jar
        .get(REFRESH_TOKEN_COOKIE)
        .ok_or(AuthError::MissingToken)?
        .value();

    let claims = Claims::decode(token, &state.auth.jwt_secret, TokenUse::Refresh)?;

    let user = UserRepository::new(&state.db)
        .get_by_id(claims.sub)
        .await?
        .ok_or(AuthError::UserNotInDatabase(claims.sub))?;

    if !user.is_active {
        return Err(AuthError::AccountInactive(user.id).into());
    }

    let access = Claims::new(
        user.id,
        user.role,
        TokenUse::Access,
        state.auth.access_token_ttl_secs,
        Utc::now(),
    )
    .encode(&state.auth.jwt_secret)?;

    let jar = jar.add(token_cookie(ACCESS_TOKEN_COOKIE, access));

    Ok((jar, Json(UserDto::from(user))))
}

/// Log out by clearing both token cookies
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out")
    ),
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar
        .remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/").build())
        .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/").build());

    (jar, StatusCode::OK)
}

/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let user = UserRepository::new(&state.db)
        .get_by_id(auth.user_id)
        .await?
        .ok_or(AuthError::UserNotInDatabase(auth.user_id))?;

    Ok(Json(UserDto::from(user)))
}

/// Mints both session tokens for a freshly authenticated user and adds them
/// to the cookie jar.
fn session_cookies(
    jar: CookieJar,
    user: &entity::user::Model,
    auth: &AuthSettings,
) -> Result<CookieJar, Error> {
    let now = Utc::now();

    let access = Claims::new(
        user.id,
        user.role,
        TokenUse::Access,
        auth.access_token_ttl_secs,
        now,
    )
    .encode(&auth.jwt_secret)?;

    let refresh = Claims::new(
        user.id,
        user.role,
        TokenUse::Refresh,
        auth.refresh_token_ttl_secs,
        now,
    )
    .encode(&auth.jwt_secret)?;

    Ok(jar
        .add(token_cookie(ACCESS_TOKEN_COOKIE, access))
        .add(token_cookie(REFRESH_TOKEN_COOKIE, refresh)))
}

fn token_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
