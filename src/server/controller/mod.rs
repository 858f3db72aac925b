//! HTTP controller endpoints for the Alumnet web API.
//!
//! This module contains Axum handlers for authentication, profiles, the
//! moderation workflows, the job board, notifications, uploads, and admin
//! tooling. Controllers handle HTTP requests, validate inputs, interact with
//! services, and return appropriate HTTP responses. They use utoipa for
//! OpenAPI documentation.

pub mod admin;
pub mod auth;
pub mod donation;
pub mod event;
pub mod job;
pub mod notification;
pub mod profile;
pub mod status;
pub mod upload;
