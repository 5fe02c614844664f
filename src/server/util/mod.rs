//! Utility functions and helpers for server operations.
//!
//! This module provides reusable utility functions for common server tasks, currently
//! password hashing and verification used by registration, login, and profile updates.

pub mod password;
