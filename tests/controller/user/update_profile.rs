use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use reloc::{
    model::user::UpdateProfileDto,
    server::{
        controller::user::update_profile,
        model::{app::AppState, session::user::SessionUserId},
    },
};
use reloc_test_utils::prelude::*;

fn changes() -> UpdateProfileDto {
    UpdateProfileDto {
        current_password: "hunter22".to_string(),
        email: None,
        new_password: None,
        city: None,
        state: None,
    }
}

#[tokio::test]
/// Expect 200 after an email change with the correct current password
async fn ok_on_email_change() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut changes = changes();
    changes.email = Some("new@example.com".to_string());

    let result = update_profile(
        State(test.state::<AppState>()),
        test.session,
        Json(changes),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 after a home city change that resolves against the directory
async fn ok_on_home_city_change() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;

    let states_endpoint = test
        .census()
        .create_state_directory_endpoint(&[("Texas", "48")], 1);
    let places_endpoint = test.census().create_place_directory_endpoint(
        "48",
        &[("San Antonio city, Texas", "65000")],
        1,
    );

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut changes = changes();
    changes.city = Some("San Antonio".to_string());
    changes.state = Some("Texas".to_string());

    let result = update_profile(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(changes),
    )
    .await;

    states_endpoint.assert();
    places_endpoint.assert();

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 when the current password is wrong
async fn unauthorized_on_wrong_current_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut changes = changes();
    changes.current_password = "wrong".to_string();
    changes.email = Some("new@example.com".to_string());

    let result = update_profile(
        State(test.state::<AppState>()),
        test.session,
        Json(changes),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 400 when a city is given without its state
async fn bad_request_on_city_without_state() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut changes = changes();
    changes.city = Some("San Antonio".to_string());

    let result = update_profile(
        State(test.state::<AppState>()),
        test.session,
        Json(changes),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
