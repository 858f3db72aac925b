//! Server application models and type definitions.
//!
//! This module contains data models for the server application: shared
//! application state, JWT claim structures, and the request extractors that
//! turn token cookies into authenticated identities for handlers.

pub mod app;
pub mod auth;
pub mod extract;
