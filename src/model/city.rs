use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder shown for ACS estimates the Census Bureau suppressed.
pub static NO_DATA: &str = "no data available";

/// The Census place/state FIPS code pair that uniquely identifies a city.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CityCode {
    pub place_code: String,
    pub state_code: String,
}

/// One side of a city comparison request.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CityQueryDto {
    /// City name as the user typed it, e.g. `"Chicago"`.
    pub city: String,
    /// Full state name, e.g. `"Illinois"`.
    pub state: String,
    /// Two-letter state abbreviation, used for the weather lookup.
    pub state_abbr: String,
}

/// Demographic figures for one city, ready for display.
///
/// Numeric fields stay as strings: suppressed estimates are replaced with
/// [`NO_DATA`], so a field is either a number or that placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CensusRecord {
    /// Short city name, e.g. `"Chicago"`.
    pub city: String,
    /// Full state name, e.g. `"Illinois"`.
    pub state: String,
    pub population: String,
    pub median_age: String,
    pub median_income: String,
    pub median_home_value: String,
    pub code: CityCode,
}

/// Current weather for one city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherSnapshot {
    /// OpenWeather icon code, e.g. `"04d"`.
    pub icon: String,
    /// Temperature in Fahrenheit, absent when the city is unknown to
    /// OpenWeather.
    pub temp: Option<f64>,
    pub description: Option<String>,
}

impl WeatherSnapshot {
    /// Snapshot used when OpenWeather cannot geocode a city. The night-sky
    /// icon renders as a neutral placeholder.
    pub fn not_found() -> Self {
        Self {
            icon: "01n".to_string(),
            temp: None,
            description: None,
        }
    }
}

/// Everything displayed for one side of a comparison.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CityComparisonSide {
    pub census: CensusRecord,
    pub weather: WeatherSnapshot,
}

/// The response for a completed comparison.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ComparisonDto {
    pub current: CityComparisonSide,
    pub destination: CityComparisonSide,
}

/// Whether the destination's median income is higher or lower than the
/// current city's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IncomeDirection {
    Higher,
    Lower,
}

/// The affordability verdict for a comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisDto {
    /// Percentage difference in median income, rounded to a whole number.
    pub income_percent: i64,
    pub income_direction: IncomeDirection,
    /// Sentence fragment describing how home values compare.
    pub home_description: String,
    pub advice: String,
}
