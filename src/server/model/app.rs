use reloc_client::{CensusClient, WeatherClient};
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub census_client: CensusClient,
    pub weather_client: WeatherClient,
}

impl From<(DatabaseConnection, CensusClient, WeatherClient)> for AppState {
    fn from(
        (db, census_client, weather_client): (DatabaseConnection, CensusClient, WeatherClient),
    ) -> Self {
        Self {
            db,
            census_client,
            weather_client,
        }
    }
}
