use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use reloc::{
    model::city::CityQueryDto,
    server::{
        controller::city::{compare, CompareRequestDto},
        model::{app::AppState, session::comparison::SessionComparison},
    },
};
use reloc_test_utils::prelude::*;

fn query(city: &str, state: &str, state_abbr: &str) -> CityQueryDto {
    CityQueryDto {
        city: city.to_string(),
        state: state.to_string(),
        state_abbr: state_abbr.to_string(),
    }
}

#[tokio::test]
/// Expect 200 with the comparison stored in the session
async fn ok_with_comparison_stored_in_session() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let states_endpoint = test
        .census()
        .create_state_directory_endpoint(&[("Illinois", "17"), ("Texas", "48")], 2);
    let illinois_places_endpoint = test.census().create_place_directory_endpoint(
        "17",
        &[("Chicago city, Illinois", "14000")],
        1,
    );
    let texas_places_endpoint = test.census().create_place_directory_endpoint(
        "48",
        &[("San Antonio city, Texas", "65000")],
        1,
    );
    let chicago_profile_endpoint = test.census().create_profile_endpoint(
        "14000",
        "17",
        "Chicago city, Illinois",
        ["2693959", "34.8", "58247", "275200"],
        1,
    );
    let san_antonio_profile_endpoint = test.census().create_profile_endpoint(
        "65000",
        "48",
        "San Antonio city, Texas",
        ["1547253", "33.6", "52455", "171100"],
        1,
    );
    let chicago_weather_endpoint =
        test.weather()
            .create_current_weather_endpoint("Chicago", "IL", "04d", 54.2, 1);
    let san_antonio_weather_endpoint =
        test.weather()
            .create_current_weather_endpoint("San Antonio", "TX", "01d", 88.5, 1);

    let result = compare(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(CompareRequestDto {
            current: query("Chicago", "Illinois", "IL"),
            destination: query("San Antonio", "Texas", "TX"),
        }),
    )
    .await;

    states_endpoint.assert();
    illinois_places_endpoint.assert();
    texas_places_endpoint.assert();
    chicago_profile_endpoint.assert();
    san_antonio_profile_endpoint.assert();
    chicago_weather_endpoint.assert();
    san_antonio_weather_endpoint.assert();

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = SessionComparison::get(&test.session).await.unwrap();
    assert!(stored.is_some());
    let stored = stored.unwrap();

    assert_eq!(stored.current.census.city, "Chicago");
    assert_eq!(stored.destination.census.city, "San Antonio");

    Ok(())
}

#[tokio::test]
/// Expect 404 and no stored comparison when a city does not resolve
async fn not_found_for_unknown_city() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let states_endpoint = test
        .census()
        .create_state_directory_endpoint(&[("Illinois", "17"), ("Texas", "48")], 2);
    let illinois_places_endpoint = test.census().create_place_directory_endpoint(
        "17",
        &[("Chicago city, Illinois", "14000")],
        1,
    );
    let texas_places_endpoint = test.census().create_place_directory_endpoint(
        "48",
        &[("San Antonio city, Texas", "65000")],
        1,
    );

    let result = compare(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(CompareRequestDto {
            current: query("Chicago", "Illinois", "IL"),
            destination: query("Gotham", "Texas", "TX"),
        }),
    )
    .await;

    states_endpoint.assert();
    illinois_places_endpoint.assert();
    texas_places_endpoint.assert();

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let stored = SessionComparison::get(&test.session).await.unwrap();
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 when the city name differs from the directory only in case
async fn not_found_for_wrong_case_city() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let states_endpoint = test
        .census()
        .create_state_directory_endpoint(&[("Illinois", "17"), ("Texas", "48")], 1);
    let illinois_places_endpoint = test.census().create_place_directory_endpoint(
        "17",
        &[("Chicago city, Illinois", "14000")],
        1,
    );
    // A case mismatch must reject before any profile fetch.
    let chicago_profile_endpoint = test.census().create_profile_endpoint(
        "14000",
        "17",
        "Chicago city, Illinois",
        ["2693959", "34.8", "58247", "275200"],
        0,
    );

    let result = compare(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(CompareRequestDto {
            current: query("CHICAGO", "Illinois", "IL"),
            destination: query("San Antonio", "Texas", "TX"),
        }),
    )
    .await;

    states_endpoint.assert();
    illinois_places_endpoint.assert();
    chicago_profile_endpoint.assert();

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let stored = SessionComparison::get(&test.session).await.unwrap();
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 400 when a required field is empty
async fn bad_request_on_missing_field() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = compare(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(CompareRequestDto {
            current: query("Chicago", "Illinois", "IL"),
            destination: query("", "Texas", "TX"),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
