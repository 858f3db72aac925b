//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Handlers that share a path are registered in a single `routes!` call so
/// their methods merge into one route.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Alumnet", description = "Alumnet API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::profile::PROFILE_TAG, description = "Profile and company API routes"),
        (name = controller::event::EVENT_TAG, description = "Event submission and moderation API routes"),
        (name = controller::donation::DONATION_TAG, description = "Donation drive submission and moderation API routes"),
        (name = controller::job::JOB_TAG, description = "Job board API routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Notification API routes"),
        (name = controller::upload::UPLOAD_TAG, description = "Presigned upload API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Administration API routes"),
        (name = controller::status::STATUS_TAG, description = "Service status API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::status::health))
        .routes(routes!(controller::status::server_time))
        .routes(routes!(controller::auth::register_alumni))
        .routes(routes!(controller::auth::register_partner))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::refresh))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::profile::get_alumni_profile,
            controller::profile::update_alumni_profile
        ))
        .routes(routes!(
            controller::profile::get_company,
            controller::profile::update_company
        ))
        .routes(routes!(
            controller::event::submit_event,
            controller::event::get_events
        ))
        .routes(routes!(controller::event::get_pending_events))
        .routes(routes!(controller::event::approve_event))
        .routes(routes!(controller::event::deny_event))
        .routes(routes!(controller::event::approve_events))
        .routes(routes!(controller::event::deny_events))
        .routes(routes!(
            controller::donation::submit_donation_drive,
            controller::donation::get_donation_drives
        ))
        .routes(routes!(controller::donation::get_pending_donation_drives))
        .routes(routes!(controller::donation::approve_donation_drive))
        .routes(routes!(controller::donation::deny_donation_drive))
        .routes(routes!(controller::donation::approve_donation_drives))
        .routes(routes!(controller::donation::deny_donation_drives))
        .routes(routes!(
            controller::job::post_job,
            controller::job::get_job_board
        ))
        .routes(routes!(controller::job::get_own_jobs))
        .routes(routes!(controller::job::get_pending_jobs))
        .routes(routes!(controller::job::approve_job))
        .routes(routes!(controller::job::deny_job))
        .routes(routes!(controller::job::set_job_accepting))
        .routes(routes!(controller::job::apply_to_job))
        .routes(routes!(controller::job::get_job_applications))
        .routes(routes!(controller::job::set_application_status))
        .routes(routes!(controller::notification::get_notifications))
        .routes(routes!(controller::notification::get_unread_count))
        .routes(routes!(controller::notification::mark_notification_read))
        .routes(routes!(
            controller::notification::mark_all_notifications_read
        ))
        .routes(routes!(controller::upload::presign_upload))
        .routes(routes!(controller::admin::get_users))
        .routes(routes!(controller::admin::set_user_active))
        .routes(routes!(controller::admin::get_stats))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
