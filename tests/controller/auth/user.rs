use axum::{extract::State, http::StatusCode, response::IntoResponse};
use reloc::server::{
    controller::auth::get_user,
    model::{app::AppState, session::user::SessionUserId},
};
use reloc_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with the logged-in user's details
async fn ok_when_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_user(State(test.state::<AppState>()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 when no user ID is in session
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_user(State(test.state::<AppState>()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the user row no longer exists
async fn not_found_when_user_not_in_database() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    SessionUserId::insert(&test.session, 999).await.unwrap();

    let result = get_user(State(test.state::<AppState>()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Verify the stale session was cleared
    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}
