use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use reloc::{
    model::user::RegisterDto,
    server::{
        controller::auth::register,
        model::{app::AppState, session::user::SessionUserId},
    },
};
use reloc_test_utils::prelude::*;

fn registration() -> RegisterDto {
    RegisterDto {
        username: "alice".to_string(),
        password: "hunter22".to_string(),
        email: "alice@example.com".to_string(),
        city: "Chicago".to_string(),
        state: "Illinois".to_string(),
    }
}

#[tokio::test]
/// Expect 201 and a logged-in session after a valid registration
async fn created_and_logged_in_on_valid_registration() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let states_endpoint = test
        .census()
        .create_state_directory_endpoint(&[("Illinois", "17")], 1);
    let places_endpoint = test.census().create_place_directory_endpoint(
        "17",
        &[("Chicago city, Illinois", "14000")],
        1,
    );

    let result = register(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(registration()),
    )
    .await;

    states_endpoint.assert();
    places_endpoint.assert();

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the username is already registered
async fn conflict_on_duplicate_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    test.user().insert_user("alice", "hunter22").await?;

    let result = register(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(registration()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // No login happened
    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 when the home city's state is unknown to the Census directory
async fn not_found_on_unresolvable_home_state() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let states_endpoint = test
        .census()
        .create_state_directory_endpoint(&[("Illinois", "17")], 1);

    let mut registration = registration();
    registration.state = "Atlantis".to_string();

    let result = register(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(registration),
    )
    .await;

    states_endpoint.assert();

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 when a required field is empty
async fn bad_request_on_missing_field() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let mut registration = registration();
    registration.email = String::new();

    let result = register(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(registration),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
