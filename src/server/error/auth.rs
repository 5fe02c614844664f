use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl AuthError {
    fn user_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Please log in to continue.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::user_not_found()
            }
            Self::UsernameTaken(ref username) => {
                tracing::debug!(
                    username = %username,
                    "{}",
                    self
                );

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Username already taken".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid credentials".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
