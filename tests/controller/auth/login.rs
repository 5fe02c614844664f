use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use reloc::{
    model::user::LoginDto,
    server::{
        controller::auth::login,
        model::{app::AppState, session::user::SessionUserId},
    },
};
use reloc_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 and a logged-in session for valid credentials
async fn ok_on_valid_credentials() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;

    let result = login(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(LoginDto {
            username: "alice".to_string(),
            password: "hunter22".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password with no session change
async fn unauthorized_on_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    test.user().insert_user("alice", "hunter22").await?;

    let result = login(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(LoginDto {
            username: "alice".to_string(),
            password: "hunter23".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect the same 401 for an unknown username
async fn unauthorized_on_unknown_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = login(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(LoginDto {
            username: "nobody".to_string(),
            password: "hunter22".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
