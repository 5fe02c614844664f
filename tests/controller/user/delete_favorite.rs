use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use reloc::server::{
    controller::user::delete_favorite,
    model::{app::AppState, session::user::SessionUserId},
};
use reloc_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 when the favorite belongs to the logged-in user
async fn ok_for_owner() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;
    let favorite = test.user().insert_favorite(user.id, "14000", "17").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = delete_favorite(
        State(test.state::<AppState>()),
        test.session,
        Path(favorite.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a favorite that does not exist
async fn not_found_for_missing_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user = test.user().insert_user("alice", "hunter22").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = delete_favorite(State(test.state::<AppState>()), test.session, Path(999)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the favorite belongs to another user
async fn not_found_for_other_users_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let owner = test.user().insert_user("alice", "hunter22").await?;
    let favorite = test.user().insert_favorite(owner.id, "14000", "17").await?;

    let other = test.user().insert_user("bob", "hunter22").await?;
    SessionUserId::insert(&test.session, other.id).await.unwrap();

    let result = delete_favorite(
        State(test.state::<AppState>()),
        test.session,
        Path(favorite.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
