//! HTTP clients for the external data providers: the US Census Bureau's
//! American Community Survey (ACS) API and the OpenWeather current-weather
//! API.
//!
//! Both clients are thin request/decode adapters. They know nothing about
//! sessions, users, or comparison semantics; callers get typed rows and
//! decide what missing data means.

pub mod census;
pub mod error;
pub mod model;
pub mod weather;

pub use census::CensusClient;
pub use error::Error;
pub use weather::WeatherClient;
