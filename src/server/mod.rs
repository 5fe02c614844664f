//! Server application core modules.
//!
//! This module contains all server-side functionality for the Reloc application, including
//! HTTP routing, session-based authentication, database operations, and the US Census and
//! OpenWeather integrations that power city comparisons. It provides the complete backend
//! for managing user accounts, favorite cities, and relocation affordability analysis.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
