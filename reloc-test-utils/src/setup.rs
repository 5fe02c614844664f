use std::sync::Arc;

use mockito::{Server, ServerGuard};
use reloc_client::{CensusClient, WeatherClient};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::TEST_WEATHER_API_KEY,
    error::TestError,
    fixtures::{census::CensusFixtures, user::UserFixtures, weather::WeatherFixtures},
};

pub struct TestAppState {
    pub db: DatabaseConnection,
    pub census_client: CensusClient,
    pub weather_client: WeatherClient,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, CensusClient, WeatherClient)>,
    {
        T::from((
            self.state.db.clone(),
            self.state.census_client.clone(),
            self.state.weather_client.clone(),
        ))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        // Both provider clients point at the same mockito server; the
        // fixture paths are distinct so mocks never collide.
        let census_client = CensusClient::new(&mock_server_url);
        let weather_client = WeatherClient::new(&mock_server_url, TEST_WEATHER_API_KEY);

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        // The in-memory fake is seeded with bare foreign keys (e.g. favorites
        // for user ids that have no user row), so FK enforcement stays off.
        // sea-orm uses a single pooled connection for sqlite, so the pragma
        // applies for the lifetime of the test database.
        db.execute_unprepared("PRAGMA foreign_keys = OFF;").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState {
                db,
                census_client,
                weather_client,
            },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Census API mock fixtures bound to this setup's server.
    pub fn census(&mut self) -> CensusFixtures<'_> {
        CensusFixtures {
            server: &mut self.server,
        }
    }

    /// OpenWeather API mock fixtures bound to this setup's server.
    pub fn weather(&mut self) -> WeatherFixtures<'_> {
        WeatherFixtures {
            server: &mut self.server,
        }
    }

    /// Database fixtures for user and favorite rows.
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures {
            db: &self.state.db,
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: Standard application tables only
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::RelocUser),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};

    // Pattern 2: Additional entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::RelocUser),
                schema.create_table_from_entity(entity::prelude::Favorite),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
