use axum::{extract::State, http::StatusCode, response::IntoResponse};
use reloc::server::{
    controller::user::delete_account,
    model::{app::AppState, session::user::SessionUserId},
};
use reloc_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with the session cleared after deleting the account
async fn ok_and_clears_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;
    test.user().insert_favorite(user.id, "14000", "17").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = delete_account(State(test.state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 when no user ID is in session
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = delete_account(State(test.state::<AppState>()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
