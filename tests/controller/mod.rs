pub mod admin;
pub mod auth;
pub mod event;
pub mod job;
pub mod notification;
pub mod profile;
