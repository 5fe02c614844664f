//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the authentication, user, and city comparison endpoints
/// registered. Each endpoint is annotated with OpenAPI specifications via utoipa, which are
/// collected into a unified OpenAPI document. Swagger UI is served at `/api/docs` and the
/// specification itself at `/api/docs/openapi.json`.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Register a new account with a home city
/// - `POST /api/auth/login` - Log in with username and password
/// - `GET /api/auth/logout` - Log out the current user
/// - `GET /api/auth/user` - Get the currently logged-in user
/// - `GET /api/user/profile` - Get the user's profile with resolved favorites
/// - `PUT /api/user/profile` - Update email, password, or home city
/// - `DELETE /api/user` - Delete the account and its favorites
/// - `GET /api/user/favorites` - List favorite cities
/// - `POST /api/user/favorites` - Toggle a city on or off the favorites
/// - `DELETE /api/user/favorites/{favorite_id}` - Remove a favorite by ID
/// - `POST /api/cities/compare` - Compare two cities
/// - `GET /api/cities/advice` - Get the affordability verdict for the session's comparison
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served once state
/// and the session layer are attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Reloc", description = "Reloc API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User profile and favorites API routes"),
        (name = controller::city::CITY_TAG, description = "City comparison API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::get_profile))
        .routes(routes!(controller::user::update_profile))
        .routes(routes!(controller::user::delete_account))
        .routes(routes!(controller::user::get_favorites))
        .routes(routes!(controller::user::toggle_favorite))
        .routes(routes!(controller::user::delete_favorite))
        .routes(routes!(controller::city::compare))
        .routes(routes!(controller::city::advice))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
