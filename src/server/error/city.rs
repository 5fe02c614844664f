use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CityError {
    #[error("City {0:?} not found in the Census place directory")]
    CityNotFound(String),
    #[error("State {0:?} not found in the Census state directory")]
    StateNotFound(String),
    #[error("One or more required city fields were empty")]
    MissingField,
    #[error("No comparison present in session")]
    MissingComparison,
    #[error("Census field {field} for {city:?} is not numeric")]
    NonNumericCensusField { city: String, field: &'static str },
}

impl IntoResponse for CityError {
    fn into_response(self) -> Response {
        match self {
            Self::CityNotFound(ref city) => {
                tracing::debug!(
                    city = %city,
                    "{}",
                    self
                );

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!(
                            "{} was not found in the US Census data. Please try a different city.",
                            city
                        ),
                    }),
                )
                    .into_response()
            }
            Self::StateNotFound(ref state) => {
                tracing::debug!(
                    state = %state,
                    "{}",
                    self
                );

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!(
                            "{} was not found in the US Census data. Please try a different state.",
                            state
                        ),
                    }),
                )
                    .into_response()
            }
            Self::MissingField => {
                tracing::debug!("{}", Self::MissingField);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Uh oh. Looks like some input data was missing. Please try again."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MissingComparison => {
                tracing::debug!("{}", Self::MissingComparison);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Compare two cities before requesting advice.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NonNumericCensusField { ref city, field } => {
                tracing::debug!(
                    city = %city,
                    field = %field,
                    "{}",
                    self
                );

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: format!(
                            "The Census Bureau has no {} data for {}, so advice cannot be calculated.",
                            field, city
                        ),
                    }),
                )
                    .into_response()
            }
        }
    }
}
