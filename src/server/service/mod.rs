//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business rules and
//! coordinates repositories. Services cover account registration and login,
//! the moderation workflow shared by all submission kinds, the job board,
//! dashboard analytics, and presigned upload generation.

pub mod approval;
pub mod auth;
pub mod donation;
pub mod event;
pub mod job;
pub mod stats;
pub mod upload;
