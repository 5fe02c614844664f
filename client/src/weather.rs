use crate::error::Error;
use crate::model::CurrentWeather;

pub static DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org";

static CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Client for the OpenWeather current-weather API.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetches current conditions for a US city in imperial units.
    ///
    /// OpenWeather's geocoder does not know every Census place, so a 404
    /// is an expected outcome and maps to `Ok(None)`.
    pub async fn get_current(
        &self,
        city: &str,
        state_abbr: &str,
    ) -> Result<Option<CurrentWeather>, Error> {
        let endpoint = "current weather";
        let location = format!("{},{},US", city, state_abbr);
        let response = self
            .client
            .get(format!("{}{}", self.base_url, CURRENT_WEATHER_PATH))
            .query(&[
                ("q", location.as_str()),
                ("units", "imperial"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(Error::UnexpectedStatus { endpoint, status });
        }

        let weather = response.json().await.map_err(|error| Error::Decode {
            endpoint,
            reason: error.to_string(),
        })?;

        Ok(Some(weather))
    }
}
