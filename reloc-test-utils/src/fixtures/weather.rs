//! OpenWeather API mock endpoint creation utilities.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

use crate::constant::TEST_WEATHER_API_KEY;

static CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

pub struct WeatherFixtures<'a> {
    pub server: &'a mut ServerGuard,
}

impl<'a> WeatherFixtures<'a> {
    /// Create a mock endpoint for current weather in one city.
    ///
    /// # Arguments
    /// - `city` - City name as queried, e.g. `"Chicago"`
    /// - `state_abbr` - Two-letter state abbreviation
    /// - `icon` - OpenWeather icon code to return
    /// - `temp` - Temperature in Fahrenheit to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_current_weather_endpoint(
        &mut self,
        city: &str,
        state_abbr: &str,
        icon: &str,
        temp: f64,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "weather": [{"icon": icon, "description": "scattered clouds"}],
            "main": {"temp": temp},
        });

        self.server
            .mock("GET", CURRENT_WEATHER_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), format!("{},{},US", city, state_abbr)),
                Matcher::UrlEncoded("units".into(), "imperial".into()),
                Matcher::UrlEncoded("appid".into(), TEST_WEATHER_API_KEY.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that 404s for a city OpenWeather cannot geocode.
    pub fn create_current_weather_not_found_endpoint(
        &mut self,
        city: &str,
        state_abbr: &str,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", CURRENT_WEATHER_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), format!("{},{},US", city, state_abbr)),
                Matcher::UrlEncoded("units".into(), "imperial".into()),
                Matcher::UrlEncoded("appid".into(), TEST_WEATHER_API_KEY.into()),
            ]))
            .with_status(404)
            .with_body(r#"{"cod":"404","message":"city not found"}"#)
            .expect(expected_requests)
            .create()
    }
}
