use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod cache;
mod config;
mod derived;
mod error;
mod i18n;
mod inflight;
mod logging;
mod routes;
mod service;
mod weather;

use config::Config;
use i18n::Translations;
use routes::{cors_layer, create_router, AppState};
use service::WeatherService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Load configuration
    let config = Arc::new(Config::from_env()?);

    let _log_guard = logging::init_logging(&config.log_dir, "weather-app");

    // Load translations
    let translations = Arc::new(Translations::load(
        &config.locales_path,
        &config.default_lang,
    ));

    // Initialize weather service and its cache sweepers
    let service = Arc::new(WeatherService::new(Arc::clone(&config))?);
    let _sweepers = service.spawn_sweepers();

    // Create application state
    let state = AppState {
        config: Arc::clone(&config),
        service,
        translations,
    };

    let app = create_router(state)
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Weather agent starting on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
