use reloc_client::{model::PlaceEntry, CensusClient};

use crate::{
    model::city::CityCode,
    server::error::{city::CityError, Error},
};

/// Resolves user-typed city and state names to Census place entries.
pub struct GeocodeService<'a> {
    census_client: &'a CensusClient,
}

impl<'a> GeocodeService<'a> {
    /// Creates a new instance of [`GeocodeService`]
    pub fn new(census_client: &'a CensusClient) -> Self {
        Self { census_client }
    }

    /// Resolves a city within a state to its Census place entry.
    ///
    /// State and city names must match the Census directories exactly,
    /// including case. "New York City" is aliased to "New York", the name
    /// the Census place directory actually carries.
    ///
    /// # Returns
    /// - `Err(CityError::StateNotFound)` - No state matched the given name
    /// - `Err(CityError::CityNotFound)` - No place in the state matched the city
    pub async fn resolve(&self, city: &str, state: &str) -> Result<PlaceEntry, Error> {
        let city = if city == "New York City" {
            "New York"
        } else {
            city
        };

        let states = self.census_client.get_states().await?;
        let state_entry = states
            .iter()
            .find(|entry| entry.name == state)
            .ok_or_else(|| CityError::StateNotFound(state.to_string()))?;

        let places = self.census_client.get_places(&state_entry.code).await?;

        places
            .into_iter()
            .find(|place| normalize_place_name(&place.name) == city)
            .ok_or_else(|| CityError::CityNotFound(city.to_string()).into())
    }

    /// Looks up the display names for a stored place/state code pair.
    ///
    /// Returns the short city name and full state name, or `None` when the
    /// Census directory no longer carries the place.
    pub async fn describe(&self, code: &CityCode) -> Result<Option<(String, String)>, Error> {
        let place = self
            .census_client
            .get_place(&code.place_code, &code.state_code)
            .await?;

        Ok(place.map(|place| split_place_label(&place.name)))
    }
}

/// Strips the state suffix and legal-entity type from a Census place label.
///
/// Census labels look like `"Chicago city, Illinois"`: everything after the
/// last comma is the state, and the last word before it is the entity type
/// (`city`, `town`, `village`, `CDP`).
pub fn normalize_place_name(label: &str) -> String {
    let without_state = label.rsplit_once(',').map_or(label, |(name, _)| name);

    without_state
        .rsplit_once(' ')
        .map_or(without_state, |(name, _)| name)
        .to_string()
}

/// Splits a Census place label into short city name and full state name.
pub fn split_place_label(label: &str) -> (String, String) {
    let state = label
        .rsplit_once(',')
        .map_or("", |(_, state)| state.trim())
        .to_string();

    (normalize_place_name(label), state)
}
