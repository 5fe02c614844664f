use axum::{http::StatusCode, response::IntoResponse};
use reloc::{
    model::city::{CensusRecord, CityCode, CityComparisonSide, WeatherSnapshot, NO_DATA},
    server::{controller::city::advice, model::session::comparison::SessionComparison},
};
use reloc_test_utils::prelude::*;

fn side(city: &str, median_income: &str, median_home_value: &str) -> CityComparisonSide {
    CityComparisonSide {
        census: CensusRecord {
            city: city.to_string(),
            state: "Illinois".to_string(),
            population: "2693959".to_string(),
            median_age: "34.8".to_string(),
            median_income: median_income.to_string(),
            median_home_value: median_home_value.to_string(),
            code: CityCode {
                place_code: "14000".to_string(),
                state_code: "17".to_string(),
            },
        },
        weather: WeatherSnapshot::not_found(),
    }
}

#[tokio::test]
/// Expect 200 with a verdict once a comparison is in session
async fn ok_with_comparison_in_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let comparison = SessionComparison {
        current: side("Chicago", "100000", "100000"),
        destination: side("Springfield", "125000", "175000"),
    };
    SessionComparison::insert(&test.session, &comparison)
        .await
        .unwrap();

    let result = advice(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 409 when no comparison has been made this session
async fn conflict_without_comparison_in_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = advice(test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 409 when a figure needed for the verdict was suppressed
async fn conflict_when_income_suppressed() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let comparison = SessionComparison {
        current: side("Chicago", NO_DATA, "100000"),
        destination: side("Springfield", "125000", "175000"),
    };
    SessionComparison::insert(&test.session, &comparison)
        .await
        .unwrap();

    let result = advice(test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
