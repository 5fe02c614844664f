use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::city::CityCode;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub home_city: CityCode,
}

impl From<entity::reloc_user::Model> for UserDto {
    fn from(user: entity::reloc_user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            home_city: CityCode {
                place_code: user.home_place_code,
                state_code: user.home_state_code,
            },
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Home city name, resolved against the Census place directory.
    pub city: String,
    /// Full state name of the home city.
    pub state: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Profile changes; every change requires the current password.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub current_password: String,
    pub email: Option<String>,
    pub new_password: Option<String>,
    /// New home city name; must be paired with `state`.
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    /// Short city name resolved from the Census directory.
    pub city: String,
    /// Full state name.
    pub state: String,
    pub code: CityCode,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ToggleFavoriteDto {
    pub place_code: String,
    pub state_code: String,
}

/// The profile page payload: account details plus resolved favorites.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub user: UserDto,
    /// Short name of the home city, when it still resolves.
    pub home_city: Option<String>,
    /// Full state name of the home city, when it still resolves.
    pub home_state: Option<String>,
    pub favorites: Vec<FavoriteDto>,
}
