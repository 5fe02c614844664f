//! Error types for the Reloc server application.
//!
//! This module provides specialized error types for the application's domains
//! (authentication, city lookup) plus a unified top-level error. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod city;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, city::CityError},
};

/// Main error type for the Reloc server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// unified error type, with `#[from]` conversions so handlers can use the `?` operator
/// throughout. The `IntoResponse` implementation maps errors to HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (session, credentials, user validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// City lookup or comparison error.
    #[error(transparent)]
    CityError(#[from] CityError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Upstream data provider error (Census or OpenWeather request failures).
    #[error(transparent)]
    ClientError(#[from] reloc_client::Error),
    /// Password hashing error.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings. Provider errors become a 502 so
/// callers can distinguish upstream outages from bugs; everything else is a logged 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::CityError(err) => err.into_response(),
            Self::ClientError(err) => {
                tracing::error!("upstream provider error: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "An upstream data provider is unavailable, please try again later."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
