//! City lookup and comparison services.
//!
//! This module resolves user-typed city names against the Census place directory,
//! fetches demographic and weather data for resolved cities, and computes the
//! affordability analysis between two cities.

pub mod analysis;
pub mod census;
pub mod comparison;
pub mod geocode;
pub mod weather;
