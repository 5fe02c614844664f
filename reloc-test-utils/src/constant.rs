/// API key handed to the weather client under test; every weather fixture
/// expects this key in the request query.
pub static TEST_WEATHER_API_KEY: &str = "test-weather-key";
