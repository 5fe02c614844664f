//! Database fixtures for user and favorite rows.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct UserFixtures<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with a real Argon2id hash of the given password.
    ///
    /// The account's home city defaults to Chicago (place 14000, state 17).
    pub async fn insert_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::reloc_user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        let user = entity::reloc_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            email: ActiveValue::Set(format!("{}@example.com", username)),
            home_place_code: ActiveValue::Set("14000".to_string()),
            home_state_code: ActiveValue::Set("17".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    /// Insert a favorite row for a user.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        place_code: &str,
        state_code: &str,
    ) -> Result<entity::favorite::Model, TestError> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            place_code: ActiveValue::Set(place_code.to_string()),
            state_code: ActiveValue::Set(state_code.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }
}
