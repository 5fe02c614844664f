pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub weather_api_key: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            valkey_url: std::env::var("VALKEY_URL")?,
            weather_api_key: std::env::var("WEATHER_API_KEY")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}
