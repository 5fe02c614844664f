//! HTTP controller endpoints for the Reloc web API.
//!
//! This module contains Axum handlers for authentication, user management, and city
//! comparison. Controllers handle HTTP requests, validate inputs, interact with services,
//! and return appropriate HTTP responses. They integrate with tower-sessions for session
//! management and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod city;
pub mod user;
pub mod util;
