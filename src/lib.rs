//! Alumnet: backend service for an alumni association portal.
//!
//! The portal serves three roles: administrators who moderate submitted
//! content, alumni who submit events and donation drives and apply to job
//! postings, and partner companies who manage postings. This crate exposes the
//! REST API, the service layer behind it, and the data access layer over the
//! relational schema defined in the `entity` and `migration` crates.

pub mod model;
pub mod server;
