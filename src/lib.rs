//! Extracts `Authorization: ApiKey <key>` credentials from HTTP requests.
//!
//! [`auth::get_api_key`] is the core routine; the rest of the crate is a small
//! axum service that puts it in front of a route.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
