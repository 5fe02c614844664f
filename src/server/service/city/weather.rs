use reloc_client::WeatherClient;

use crate::{model::city::WeatherSnapshot, server::error::Error};

/// Fetches current weather snapshots for display alongside census data.
pub struct WeatherService<'a> {
    weather_client: &'a WeatherClient,
}

impl<'a> WeatherService<'a> {
    /// Creates a new instance of [`WeatherService`]
    pub fn new(weather_client: &'a WeatherClient) -> Self {
        Self { weather_client }
    }

    /// Fetches current conditions for a city.
    ///
    /// OpenWeather's geocoder covers fewer places than the Census directory,
    /// so an unknown city yields the placeholder snapshot rather than an error.
    pub async fn get_snapshot(
        &self,
        city: &str,
        state_abbr: &str,
    ) -> Result<WeatherSnapshot, Error> {
        match self.weather_client.get_current(city, state_abbr).await? {
            Some(weather) => {
                let condition = weather.weather.into_iter().next();

                Ok(WeatherSnapshot {
                    icon: condition
                        .as_ref()
                        .map(|c| c.icon.clone())
                        .unwrap_or_else(|| WeatherSnapshot::not_found().icon),
                    temp: Some(weather.main.temp),
                    description: condition.map(|c| c.description),
                })
            }
            None => {
                tracing::debug!(
                    city = %city,
                    state_abbr = %state_abbr,
                    "city unknown to OpenWeather, using placeholder snapshot"
                );

                Ok(WeatherSnapshot::not_found())
            }
        }
    }
}
