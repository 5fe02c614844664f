use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::city::CityComparisonSide, server::error::Error};

pub const SESSION_COMPARISON_KEY: &str = "reloc:comparison";

/// The most recent comparison for this session, kept so the advice endpoint
/// can run without refetching provider data.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct SessionComparison {
    pub current: CityComparisonSide,
    pub destination: CityComparisonSide,
}

impl SessionComparison {
    /// Insert comparison into session, replacing any previous one
    pub async fn insert(session: &Session, comparison: &SessionComparison) -> Result<(), Error> {
        session.insert(SESSION_COMPARISON_KEY, comparison).await?;

        Ok(())
    }

    /// Get comparison from session
    pub async fn get(session: &Session) -> Result<Option<SessionComparison>, Error> {
        let comparison = session
            .get::<SessionComparison>(SESSION_COMPARISON_KEY)
            .await?;

        Ok(comparison)
    }
}
