use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        city::CityCode,
        user::{FavoriteDto, ProfileDto, ToggleFavoriteDto, UpdateProfileDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::{
            city::geocode::GeocodeService,
            user::{
                favorite::{FavoriteService, FavoriteToggle},
                UserService,
            },
        },
    },
};

pub static USER_TAG: &str = "user";

/// Get the logged-in user's profile with resolved favorites
#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The user's profile", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let favorite_service = FavoriteService::new(&state.db, &state.census_client);
    let geocode_service = GeocodeService::new(&state.census_client);

    let home = geocode_service
        .describe(&CityCode {
            place_code: user.home_place_code.clone(),
            state_code: user.home_state_code.clone(),
        })
        .await?;
    let favorites = favorite_service.list(user.id).await?;

    let (home_city, home_state) = match home {
        Some((city, state)) => (Some(city), Some(state)),
        None => (None, None),
    };

    Ok((
        StatusCode::OK,
        Json(ProfileDto {
            user: UserDto::from(user),
            home_city,
            home_state,
            favorites,
        }),
    ))
}

/// Update the logged-in user's profile
///
/// Every change requires the current password. The home city, when changed,
/// is resolved against the Census place directory.
#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "A required field was missing", body = ErrorDto),
        (status = 401, description = "Not logged in or wrong current password", body = ErrorDto),
        (status = 404, description = "User or new home city not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(changes): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user_service = UserService::new(&state.db, &state.census_client);

    let updated = user_service.update_profile(user.id, &changes).await?;

    Ok((StatusCode::OK, Json(UserDto::from(updated))))
}

/// Delete the logged-in user's account and favorites
#[utoipa::path(
    delete,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user_service = UserService::new(&state.db, &state.census_client);

    user_service.delete_account(user.id).await?;
    session.clear().await;

    tracing::info!(
        user_id = %user.id,
        "deleted user account"
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Account deleted".to_string(),
        }),
    ))
}

/// List the logged-in user's favorite cities
#[utoipa::path(
    get,
    path = "/api/user/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The user's favorites", body = Vec<FavoriteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let favorite_service = FavoriteService::new(&state.db, &state.census_client);

    let favorites = favorite_service.list(user.id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Toggle a city on or off the logged-in user's favorites
#[utoipa::path(
    post,
    path = "/api/user/favorites",
    tag = USER_TAG,
    request_body = ToggleFavoriteDto,
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 201, description = "Favorite added", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    Json(toggle): Json<ToggleFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let favorite_service = FavoriteService::new(&state.db, &state.census_client);

    let response = match favorite_service
        .toggle(user.id, &toggle.place_code, &toggle.state_code)
        .await?
    {
        FavoriteToggle::Added(_) => (
            StatusCode::CREATED,
            Json(MessageDto {
                message: "Favorite added".to_string(),
            }),
        ),
        FavoriteToggle::Removed => (
            StatusCode::OK,
            Json(MessageDto {
                message: "Favorite removed".to_string(),
            }),
        ),
    };

    Ok(response)
}

/// Remove one of the logged-in user's favorites by ID
#[utoipa::path(
    delete,
    path = "/api/user/favorites/{favorite_id}",
    tag = USER_TAG,
    params(
        ("favorite_id" = i32, Path, description = "ID of the favorite to remove")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let favorite_service = FavoriteService::new(&state.db, &state.census_client);

    if !favorite_service.remove(user.id, favorite_id).await? {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Favorite not found".to_string(),
            }),
        )
            .into_response());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Favorite removed".to_string(),
        }),
    )
        .into_response())
}
