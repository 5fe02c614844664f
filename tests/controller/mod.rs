//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP
//! controllers, verifying request handling, response codes, session state,
//! and error handling for all API endpoints.

mod user;
