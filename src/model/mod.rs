//! Shared API data transfer objects.

pub mod api;
pub mod city;
pub mod user;
