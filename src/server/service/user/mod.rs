//! User service layer.
//!
//! This module contains business logic services for user operations including
//! account registration, credential checks, profile updates, and favorite
//! cities. Services coordinate between repositories, the password utilities,
//! and the Census directory.

pub mod favorite;

use reloc_client::CensusClient;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    model::{
        city::CityCode,
        user::{RegisterDto, UpdateProfileDto},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, city::CityError, Error},
        model::db::UserModel,
        service::city::geocode::GeocodeService,
        util::password,
    },
};

/// Service for managing user account operations.
///
/// Registration and home-city changes resolve the typed city against the
/// Census place directory, so accounts always store valid place codes.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    census_client: &'a CensusClient,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection, census_client: &'a CensusClient) -> Self {
        Self { db, census_client }
    }

    /// Registers a new account with a resolved home city.
    ///
    /// # Returns
    /// - `Err(CityError::MissingField)` - A required field was empty
    /// - `Err(AuthError::UsernameTaken)` - The username is already registered
    /// - `Err(CityError::CityNotFound)` - The home city failed to resolve
    pub async fn register(&self, registration: &RegisterDto) -> Result<UserModel, Error> {
        if registration.username.trim().is_empty()
            || registration.password.is_empty()
            || registration.email.trim().is_empty()
            || registration.city.trim().is_empty()
            || registration.state.trim().is_empty()
        {
            return Err(CityError::MissingField.into());
        }

        let user_repository = UserRepository::new(self.db);

        if user_repository
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken(registration.username.clone()).into());
        }

        // Resolve the home city before touching the users table so a failed
        // lookup never leaves a partial account behind.
        let place = GeocodeService::new(self.census_client)
            .resolve(&registration.city, &registration.state)
            .await?;

        let password_hash = password::hash_password(&registration.password)?;

        let user = user_repository
            .create(
                registration.username.clone(),
                password_hash,
                registration.email.clone(),
                &CityCode {
                    place_code: place.place_code,
                    state_code: place.state_code,
                },
            )
            .await?;

        Ok(user)
    }

    /// Checks a username/password pair against the stored credentials.
    ///
    /// A missing user and a wrong password return the same error, so callers
    /// cannot probe for registered usernames.
    pub async fn authenticate(&self, username: &str, plain_password: &str) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(plain_password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Retrieves a user by their database ID
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        let user_repository = UserRepository::new(self.db);

        Ok(user_repository.get_by_id(user_id).await?)
    }

    /// Applies profile changes after re-checking the current password.
    ///
    /// Changing the home city requires both `city` and `state`; providing one
    /// without the other is rejected as a missing field.
    pub async fn update_profile(
        &self,
        user_id: i32,
        changes: &UpdateProfileDto,
    ) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        if !password::verify_password(&changes.current_password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let mut user = user.into_active_model();

        if let Some(ref email) = changes.email {
            if email.trim().is_empty() {
                return Err(CityError::MissingField.into());
            }

            user.email = ActiveValue::Set(email.clone());
        }

        if let Some(ref new_password) = changes.new_password {
            if new_password.is_empty() {
                return Err(CityError::MissingField.into());
            }

            user.password_hash = ActiveValue::Set(password::hash_password(new_password)?);
        }

        match (&changes.city, &changes.state) {
            (Some(city), Some(state)) => {
                let place = GeocodeService::new(self.census_client)
                    .resolve(city, state)
                    .await?;

                user.home_place_code = ActiveValue::Set(place.place_code);
                user.home_state_code = ActiveValue::Set(place.state_code);
            }
            (None, None) => {}
            _ => return Err(CityError::MissingField.into()),
        }

        Ok(user_repository.update(user).await?)
    }

    /// Deletes an account along with its favorites.
    ///
    /// Returns whether a user row was actually deleted.
    pub async fn delete_account(&self, user_id: i32) -> Result<bool, Error> {
        let user_repository = UserRepository::new(self.db);

        let rows_affected = user_repository.delete_with_favorites(user_id).await?;

        Ok(rows_affected > 0)
    }
}
