use reloc_client::{model::PlaceEntry, CensusClient};

use crate::{
    model::city::{CensusRecord, CityCode, NO_DATA},
    server::{error::Error, service::city::geocode::split_place_label},
};

/// Sentinel value the ACS API uses for suppressed estimates.
const SUPPRESSED: &str = "-888888888";

/// Fetches and prepares demographic records for resolved places.
pub struct CensusService<'a> {
    census_client: &'a CensusClient,
}

impl<'a> CensusService<'a> {
    /// Creates a new instance of [`CensusService`]
    pub fn new(census_client: &'a CensusClient) -> Self {
        Self { census_client }
    }

    /// Fetches the demographic record for a resolved place.
    ///
    /// Suppressed estimates are replaced with the [`NO_DATA`] placeholder so
    /// the record is always displayable as-is.
    pub async fn get_record(&self, place: &PlaceEntry) -> Result<CensusRecord, Error> {
        let profile = self
            .census_client
            .get_profile(&place.place_code, &place.state_code)
            .await?;

        let (city, state) = split_place_label(&profile.name);

        Ok(CensusRecord {
            city,
            state,
            population: desuppress(profile.population),
            median_age: desuppress(profile.median_age),
            median_income: desuppress(profile.median_income),
            median_home_value: desuppress(profile.median_home_value),
            code: CityCode {
                place_code: profile.place_code,
                state_code: profile.state_code,
            },
        })
    }
}

fn desuppress(value: String) -> String {
    if value == SUPPRESSED {
        NO_DATA.to_string()
    } else {
        value
    }
}
