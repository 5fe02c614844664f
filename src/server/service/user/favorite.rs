use reloc_client::CensusClient;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        city::CityCode,
        user::FavoriteDto,
    },
    server::{
        data::favorite::FavoriteRepository,
        error::Error,
        model::db::FavoriteModel,
        service::city::geocode::GeocodeService,
    },
};

/// Outcome of a favorite toggle.
pub enum FavoriteToggle {
    Added(FavoriteModel),
    Removed,
}

/// Service for managing a user's favorite cities.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
    census_client: &'a CensusClient,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection, census_client: &'a CensusClient) -> Self {
        Self { db, census_client }
    }

    /// Toggles a city on or off the user's favorites.
    ///
    /// A city that is already favorited is removed; otherwise it is added.
    pub async fn toggle(
        &self,
        user_id: i32,
        place_code: &str,
        state_code: &str,
    ) -> Result<FavoriteToggle, Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        match favorite_repository
            .find(user_id, place_code, state_code)
            .await?
        {
            Some(favorite) => {
                favorite_repository.delete_by_id(favorite.id).await?;

                Ok(FavoriteToggle::Removed)
            }
            None => {
                let favorite = favorite_repository
                    .create(user_id, place_code, state_code)
                    .await?;

                Ok(FavoriteToggle::Added(favorite))
            }
        }
    }

    /// Lists a user's favorites with display names resolved from the Census
    /// directory.
    ///
    /// Favorites whose place code no longer resolves are skipped rather than
    /// failing the whole list.
    pub async fn list(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorite_repository = FavoriteRepository::new(self.db);
        let geocode_service = GeocodeService::new(self.census_client);

        let favorites = favorite_repository.list_by_user(user_id).await?;

        let mut resolved = Vec::with_capacity(favorites.len());

        for favorite in favorites {
            let code = CityCode {
                place_code: favorite.place_code.clone(),
                state_code: favorite.state_code.clone(),
            };

            match geocode_service.describe(&code).await? {
                Some((city, state)) => resolved.push(FavoriteDto {
                    id: favorite.id,
                    city,
                    state,
                    code,
                }),
                None => {
                    tracing::warn!(
                        favorite_id = %favorite.id,
                        place_code = %favorite.place_code,
                        state_code = %favorite.state_code,
                        "skipping favorite that no longer resolves in the Census directory"
                    );
                }
            }
        }

        Ok(resolved)
    }

    /// Removes one of the user's favorites by its ID.
    ///
    /// Returns false when the favorite does not exist or belongs to another
    /// user.
    pub async fn remove(&self, user_id: i32, favorite_id: i32) -> Result<bool, Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        let favorite = match favorite_repository.get_by_id(favorite_id).await? {
            Some(favorite) if favorite.user_id == user_id => favorite,
            _ => return Ok(false),
        };

        let result = favorite_repository.delete_by_id(favorite.id).await?;

        Ok(result.rows_affected > 0)
    }
}
