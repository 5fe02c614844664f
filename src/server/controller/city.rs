use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        city::{AnalysisDto, CityQueryDto, ComparisonDto},
    },
    server::{
        error::{city::CityError, Error},
        model::{app::AppState, session::comparison::SessionComparison},
        service::city::{analysis, comparison::ComparisonService},
    },
};

pub static CITY_TAG: &str = "city";

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CompareRequestDto {
    pub current: CityQueryDto,
    pub destination: CityQueryDto,
}

/// Compare two cities on demographics and weather
///
/// Both cities are resolved against the Census place directory before any
/// display data is fetched. The result is kept in the session so advice can
/// be requested afterwards without refetching.
#[utoipa::path(
    post,
    path = "/api/cities/compare",
    tag = CITY_TAG,
    request_body = CompareRequestDto,
    responses(
        (status = 200, description = "Comparison of the two cities", body = ComparisonDto),
        (status = 400, description = "A required field was missing", body = ErrorDto),
        (status = 404, description = "A city or state was not found in the Census data", body = ErrorDto),
        (status = 502, description = "An upstream data provider is unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compare(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CompareRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let comparison_service =
        ComparisonService::new(&state.census_client, &state.weather_client);

    let comparison = comparison_service
        .compare(&request.current, &request.destination)
        .await?;

    SessionComparison::insert(
        &session,
        &SessionComparison {
            current: comparison.current.clone(),
            destination: comparison.destination.clone(),
        },
    )
    .await?;

    Ok((StatusCode::OK, Json(comparison)))
}

/// Get the affordability verdict for the session's comparison
#[utoipa::path(
    get,
    path = "/api/cities/advice",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "Affordability analysis of the comparison", body = AnalysisDto),
        (status = 409, description = "No comparison in session, or a figure was suppressed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn advice(session: Session) -> Result<impl IntoResponse, Error> {
    let comparison = SessionComparison::get(&session)
        .await?
        .ok_or(CityError::MissingComparison)?;

    let analysis = analysis::analyze(&comparison.current.census, &comparison.destination.census)?;

    Ok((StatusCode::OK, Json(analysis)))
}
