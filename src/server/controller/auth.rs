use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account with a home city
///
/// The home city is resolved against the Census place directory before the
/// account is created, and the new user is logged in on success.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = UserDto),
        (status = 400, description = "A required field was missing", body = ErrorDto),
        (status = 404, description = "Home city not found in the Census data", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(registration): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db, &state.census_client);

    let user = user_service.register(&registration).await?;

    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(
        user_id = %user.id,
        "registered new user"
    );

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db, &state.census_client);

    let user = user_service
        .authenticate(&credentials.username, &credentials.password)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Log out by clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logout successful".to_string(),
        }),
    ))
}

/// Get the currently logged-in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
