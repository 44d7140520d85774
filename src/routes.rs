use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    config::Config,
    error::WeatherError,
    i18n::Translations,
    service::WeatherService,
    weather::types::{IpLookupResponse, WeatherResponse},
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<WeatherService>,
    pub translations: Arc<Translations>,
}

// Request/Response types
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IpQuery {
    pub ip: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub agent: String,
    pub version: String,
    pub admin: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cache: CacheStats,
}

#[derive(Debug, Serialize)]
pub struct CacheStats {
    pub weather_entries: usize,
    pub ip_entries: usize,
}

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub available_locales: Vec<String>,
    pub current_locale: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn status_for(err: &WeatherError) -> StatusCode {
    match err {
        WeatherError::Validation(_) => StatusCode::BAD_REQUEST,
        WeatherError::Transport(_) | WeatherError::Upstream { .. } | WeatherError::Parse(_) => {
            StatusCode::BAD_GATEWAY
        }
        WeatherError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn api_error(status: StatusCode, error: String, details: Option<String>) -> ApiError {
    (status, Json(ErrorResponse { error, details }))
}

impl AppState {
    fn lang(&self, requested: Option<String>) -> String {
        requested
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| self.translations.default_lang().to_string())
    }

    /// Translated message for a failed lookup; `fallback_key` covers
    /// everything except an unreachable provider.
    fn fetch_error(&self, lang: &str, err: &WeatherError, fallback_key: &str) -> ApiError {
        let key = match err {
            WeatherError::Transport(_) => "errors.upstream_unavailable",
            _ => fallback_key,
        };
        api_error(
            status_for(err),
            self.translations.translate(lang, key),
            Some(err.to_string()),
        )
    }
}

/// Client address as seen through proxies, else the socket peer.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    forwarded
        .or(real_ip)
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
}

// Route handlers
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<Arc<WeatherResponse>>, ApiError> {
    let lang = state.lang(params.lang);
    let location = params.location.unwrap_or_default();

    if location.trim().is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            state.translations.translate(&lang, "errors.location_required"),
            None,
        ));
    }

    match state.service.get_weather(&location).await {
        Ok(weather) => Ok(Json(weather)),
        Err(e) => {
            tracing::error!("Weather fetch error: {}", e);
            Err(state.fetch_error(&lang, &e, "errors.weather_not_found"))
        }
    }
}

pub async fn ip_lookup(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Query(params): Query<IpQuery>,
) -> Result<Json<Arc<IpLookupResponse>>, ApiError> {
    let lang = state.lang(params.lang);
    let requested = params
        .ip
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty() && ip != "auto");
    let ip = requested
        .or_else(|| client_ip(&headers, peer.map(|ConnectInfo(addr)| addr)))
        .unwrap_or_default();

    match state.service.get_ip_lookup(&ip).await {
        Ok(lookup) => Ok(Json(lookup)),
        Err(e) => {
            tracing::error!("IP lookup error: {}", e);
            Err(state.fetch_error(&lang, &e, "errors.ip_lookup_failed"))
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (weather_entries, ip_entries) = state.service.cache_sizes().await;
    Json(HealthResponse {
        status: "healthy".to_string(),
        agent: "Weather Agent".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        admin: state.config.admin_email.clone(),
        timestamp: chrono::Utc::now(),
        cache: CacheStats {
            weather_entries,
            ip_entries,
        },
    })
}

pub async fn translations(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Json<TranslationsResponse> {
    Json(TranslationsResponse {
        available_locales: state.translations.available_locales(),
        current_locale: state.lang(Some(lang)),
    })
}

pub fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    let static_dir = std::path::Path::new(&state.config.static_dir);
    let index = ServeFile::new(static_dir.join("index.html"));
    let assets = ServeDir::new(static_dir);

    let api = Router::new()
        .route("/weather", get(get_weather))
        .route("/ip", get(ip_lookup))
        .route("/health", get(health))
        .route("/translations/:lang", get(translations));

    Router::new()
        .nest("/api/v1", api)
        .nest_service("/static", assets)
        .route_service("/", index)
        .with_state(state)
}
