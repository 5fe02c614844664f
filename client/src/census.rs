use serde_json::Value;

use crate::error::Error;
use crate::model::{DemographicProfile, PlaceEntry, StateEntry};

pub static DEFAULT_CENSUS_URL: &str = "https://api.census.gov/data";

/// ACS 5-year data-profile variables fetched for a place: name, total
/// population, median age, median household income, median home value.
static PROFILE_VARIABLES: &str = "NAME,DP05_0001E,DP05_0018E,DP03_0062E,DP04_0089E";

static SUBJECT_PATH: &str = "/2019/acs/acs5/subject";
static PROFILE_PATH: &str = "/2019/acs/acs5/profile";

/// Client for the US Census ACS 5-year API.
///
/// The ACS directory endpoints need no API key. Responses are JSON arrays
/// of arrays whose first row is a header, which [`decode_rows`] strips.
#[derive(Clone, Debug)]
pub struct CensusClient {
    client: reqwest::Client,
    base_url: String,
}

impl CensusClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches every US state with its FIPS code.
    pub async fn get_states(&self) -> Result<Vec<StateEntry>, Error> {
        let endpoint = "census states";
        let response = self
            .client
            .get(format!("{}{}", self.base_url, SUBJECT_PATH))
            .query(&[("get", "NAME"), ("for", "state:*")])
            .send()
            .await?;

        let rows = decode_rows(endpoint, response).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match <[String; 2]>::try_from(row) {
                Ok([name, code]) => Some(StateEntry { name, code }),
                Err(_) => None,
            })
            .collect())
    }

    /// Fetches every Census place within one state.
    pub async fn get_places(&self, state_code: &str) -> Result<Vec<PlaceEntry>, Error> {
        let endpoint = "census places";
        let state_filter = format!("state:{}", state_code);
        let response = self
            .client
            .get(format!("{}{}", self.base_url, SUBJECT_PATH))
            .query(&[
                ("get", "NAME"),
                ("for", "place:*"),
                ("in", state_filter.as_str()),
            ])
            .send()
            .await?;

        let rows = decode_rows(endpoint, response).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match <[String; 3]>::try_from(row) {
                Ok([name, state_code, place_code]) => Some(PlaceEntry {
                    name,
                    state_code,
                    place_code,
                }),
                Err(_) => None,
            })
            .collect())
    }

    /// Fetches a single place by place and state FIPS codes.
    ///
    /// Returns `Ok(None)` when the Census API has no row for the pair.
    pub async fn get_place(
        &self,
        place_code: &str,
        state_code: &str,
    ) -> Result<Option<PlaceEntry>, Error> {
        let endpoint = "census place";
        let place_filter = format!("place:{}", place_code);
        let state_filter = format!("state:{}", state_code);
        let response = self
            .client
            .get(format!("{}{}", self.base_url, SUBJECT_PATH))
            .query(&[
                ("get", "NAME"),
                ("for", place_filter.as_str()),
                ("in", state_filter.as_str()),
            ])
            .send()
            .await?;

        // The directory endpoint 404s for unknown place codes.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let rows = decode_rows(endpoint, response).await?;

        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| match <[String; 3]>::try_from(row) {
                Ok([name, state_code, place_code]) => Some(PlaceEntry {
                    name,
                    state_code,
                    place_code,
                }),
                Err(_) => None,
            }))
    }

    /// Fetches the demographic profile for one place.
    pub async fn get_profile(
        &self,
        place_code: &str,
        state_code: &str,
    ) -> Result<DemographicProfile, Error> {
        let endpoint = "census profile";
        let place_filter = format!("place:{}", place_code);
        let state_filter = format!("state:{}", state_code);
        let response = self
            .client
            .get(format!("{}{}", self.base_url, PROFILE_PATH))
            .query(&[
                ("get", PROFILE_VARIABLES),
                ("for", place_filter.as_str()),
                ("in", state_filter.as_str()),
            ])
            .send()
            .await?;

        let rows = decode_rows(endpoint, response).await?;

        rows.into_iter()
            .next()
            .and_then(|row| match <[String; 7]>::try_from(row) {
                Ok(
                    [
                        name,
                        population,
                        median_age,
                        median_income,
                        median_home_value,
                        state_code,
                        place_code,
                    ],
                ) => Some(DemographicProfile {
                    name,
                    population,
                    median_age,
                    median_income,
                    median_home_value,
                    state_code,
                    place_code,
                }),
                Err(_) => None,
            })
            .ok_or_else(|| Error::Decode {
                endpoint,
                reason: "no data row in profile response".to_string(),
            })
    }
}

/// Decodes a Census array-of-arrays body and drops the header row.
///
/// Cells are usually strings but numeric estimates occasionally come back
/// as bare JSON numbers or nulls, so every cell is normalized to a string.
async fn decode_rows(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<Vec<Vec<String>>, Error> {
    let status = response.status();

    if !status.is_success() {
        return Err(Error::UnexpectedStatus { endpoint, status });
    }

    let rows: Vec<Vec<Value>> = response.json().await.map_err(|error| Error::Decode {
        endpoint,
        reason: error.to_string(),
    })?;

    Ok(rows
        .into_iter()
        .skip(1)
        .map(|row| row.into_iter().map(cell_string).collect())
        .collect())
}

fn cell_string(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
