//! Test fixtures for mock provider endpoints and database rows.

pub mod census;
pub mod user;
pub mod weather;
