//! Data transfer objects shared by the API surface.
//!
//! These are the JSON shapes the HTTP endpoints accept and return. Database
//! entities never cross the controller boundary directly; controllers and
//! services map them into the DTOs defined here.

pub mod api;
pub mod auth;
pub mod donation;
pub mod event;
pub mod job;
pub mod notification;
pub mod profile;
pub mod stats;
pub mod upload;
pub mod user;
