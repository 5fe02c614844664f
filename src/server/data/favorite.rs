use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user's favorite entry for one city, if present
    pub async fn find(
        &self,
        user_id: i32,
        place_code: &str,
        state_code: &str,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::PlaceCode.eq(place_code))
            .filter(entity::favorite::Column::StateCode.eq(state_code))
            .one(self.db)
            .await
    }

    /// Gets a favorite entry by its database ID
    pub async fn get_by_id(
        &self,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Creates a favorite entry for a city
    pub async fn create(
        &self,
        user_id: i32,
        place_code: &str,
        state_code: &str,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            place_code: ActiveValue::Set(place_code.to_string()),
            state_code: ActiveValue::Set(state_code.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Deletes a favorite entry
    ///
    /// Returns OK regardless of the entry existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_id(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Gets all favorites for a user, oldest first
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }
}
