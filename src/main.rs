use reloc::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let census_client = startup::build_census_client();
    let weather_client = startup::build_weather_client(&config);
    let session = startup::connect_to_session(&config).await.unwrap();
    let db = startup::connect_to_database(&config).await.unwrap();

    let routes = router::routes()
        .with_state(AppState {
            db,
            census_client,
            weather_client,
        })
        .layer(session);

    tracing::info!("Starting server on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind listen address");

    axum::serve(listener, routes)
        .await
        .expect("Server exited with an error");
}
