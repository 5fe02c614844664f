//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic, coordinates
//! between repositories and external APIs, and handles complex multi-step operations.
//! Services include city lookup and comparison, affordability analysis, and user
//! account management.

pub mod city;
pub mod user;
