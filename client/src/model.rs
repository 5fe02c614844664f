use serde::Deserialize;

/// A state row from the ACS subject table directory (`NAME` + state FIPS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub name: String,
    pub code: String,
}

/// A place row from the ACS subject table directory for one state.
///
/// `name` is the raw Census label, e.g. `"Chicago city, Illinois"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceEntry {
    pub name: String,
    pub state_code: String,
    pub place_code: String,
}

/// Selected ACS data-profile variables for one place.
///
/// Values are kept as strings: the Census API returns every cell as text
/// and uses negative sentinel values for suppressed estimates, which the
/// caller interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemographicProfile {
    pub name: String,
    pub population: String,
    pub median_age: String,
    pub median_income: String,
    pub median_home_value: String,
    pub state_code: String,
    pub place_code: String,
}

/// OpenWeather current-weather response, trimmed to the fields we render.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub weather: Vec<WeatherCondition>,
    pub main: WeatherMain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
}
