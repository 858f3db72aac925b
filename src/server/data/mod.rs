//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, organizing data access by domain: accounts and profiles,
//! moderated submissions (events, donation drives, jobs), applications,
//! notifications, and the login audit trail.

pub mod alumni;
pub mod application;
pub mod company;
pub mod donation;
pub mod event;
pub mod job;
pub mod login_log;
pub mod notification;
pub mod user;
