//! Server application core modules.
//!
//! This module contains all server-side functionality for the Alumnet portal,
//! including HTTP routing, cookie-based JWT authentication, the moderation
//! workflow shared by events, donation drives, and job postings, notification
//! delivery, and presigned object-storage uploads. Modules are layered:
//! controllers handle HTTP, services hold the business rules, and the data
//! layer wraps SeaORM queries.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
