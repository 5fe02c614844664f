use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::model::city::CityCode;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user with a resolved home city
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        email: String,
        home_city: &CityCode,
    ) -> Result<entity::reloc_user::Model, DbErr> {
        let user = entity::reloc_user::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            email: ActiveValue::Set(email),
            home_place_code: ActiveValue::Set(home_city.place_code.clone()),
            home_state_code: ActiveValue::Set(home_city.state_code.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by their database ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::reloc_user::Model>, DbErr> {
        entity::prelude::RelocUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by their unique username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::reloc_user::Model>, DbErr> {
        entity::prelude::RelocUser::find()
            .filter(entity::reloc_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Applies pending changes on a user active model
    pub async fn update(
        &self,
        user: entity::reloc_user::ActiveModel,
    ) -> Result<entity::reloc_user::Model, DbErr> {
        user.update(self.db).await
    }

    /// Deletes a user along with all of their favorites in one transaction
    ///
    /// Returns the number of deleted user rows, 0 when the user did not exist.
    pub async fn delete_with_favorites(&self, user_id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::RelocUser::delete_by_id(user_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }
}
