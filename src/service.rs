use crate::config::Config;
use crate::derived;
use crate::error::{FetchOutcome, WeatherError};
use crate::inflight::InFlight;
use crate::weather::client::WeatherApiClient;
use crate::weather::normalize::parse_forecast;
use crate::weather::types::{IpLookupResponse, WeatherResponse};
use crate::weather::{ip_cache_key, weather_cache_key, IpCache, WeatherCache};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Cache-first access to weather and IP lookups.
///
/// All mutable state lives in the two caches; concurrent misses for the same
/// key share a single upstream fetch.
pub struct WeatherService {
    config: Arc<Config>,
    client: Arc<WeatherApiClient>,
    weather_cache: WeatherCache,
    ip_cache: IpCache,
    weather_fetches: InFlight<WeatherResponse>,
    ip_fetches: InFlight<IpLookupResponse>,
}

impl WeatherService {
    pub fn new(config: Arc<Config>) -> Result<Self, WeatherError> {
        let client = Arc::new(WeatherApiClient::new(&config)?);
        Ok(Self {
            config,
            client,
            weather_cache: WeatherCache::new(),
            ip_cache: IpCache::new(),
            weather_fetches: InFlight::new(),
            ip_fetches: InFlight::new(),
        })
    }

    /// Starts the periodic expiry sweep for both caches.
    pub fn spawn_sweepers(&self) -> Vec<JoinHandle<()>> {
        let interval = self.config.cleanup_interval;
        vec![
            self.weather_cache.spawn_sweeper("weather", interval),
            self.ip_cache.spawn_sweeper("ip", interval),
        ]
    }

    /// Stored entry counts (weather, ip), including expired entries awaiting a sweep.
    pub async fn cache_sizes(&self) -> (usize, usize) {
        (self.weather_cache.len().await, self.ip_cache.len().await)
    }

    pub async fn get_weather(&self, location: &str) -> FetchOutcome<WeatherResponse> {
        if location.trim().is_empty() {
            return Err(WeatherError::Validation("location cannot be empty".to_string()));
        }

        let key = weather_cache_key(location);
        if let Some(cached) = self.weather_cache.get(&key).await {
            tracing::info!("Cache hit for location: {}", location);
            return Ok(cached);
        }
        tracing::info!("Cache miss for location: {}", location);

        let cache = self.weather_cache.clone();
        let client = Arc::clone(&self.client);
        let ttl = self.config.cache_duration;
        let location = location.to_string();
        let store_key = key.clone();

        self.weather_fetches
            .run(&key, async move {
                // A fetch that finished between our miss and registration
                // has already stored its result.
                if let Some(cached) = cache.get(&store_key).await {
                    return Ok(cached);
                }

                tracing::info!("Fetching weather for: {}", location);
                let body = client.get_forecast(&location).await.map_err(|e| {
                    tracing::error!("Weather fetch failed for {}: {}", location, e);
                    e
                })?;

                let mut response = parse_forecast(&body).map_err(|e| {
                    tracing::error!("Weather response for {} could not be parsed: {}", location, e);
                    e
                })?;

                derived::augment(&mut response, chrono::Local::now().date_naive());
                let now = chrono::Utc::now();
                response.timestamp = now;
                response.expires_at =
                    now + chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::zero());

                let response = Arc::new(response);
                cache.set(store_key, Arc::clone(&response), ttl).await;
                tracing::info!("Cached weather for {} for {:?}", location, ttl);
                Ok(response)
            })
            .await
    }

    pub async fn get_ip_lookup(&self, address: &str) -> FetchOutcome<IpLookupResponse> {
        if address.trim().is_empty() {
            return Err(WeatherError::Validation("IP address cannot be empty".to_string()));
        }

        let key = ip_cache_key(address);
        if let Some(cached) = self.ip_cache.get(&key).await {
            tracing::info!("Cache hit for IP: {}", address);
            return Ok(cached);
        }
        tracing::info!("Cache miss for IP: {}", address);

        let cache = self.ip_cache.clone();
        let client = Arc::clone(&self.client);
        let ttl = self.config.cache_duration;
        let address = address.to_string();
        let store_key = key.clone();

        self.ip_fetches
            .run(&key, async move {
                if let Some(cached) = cache.get(&store_key).await {
                    return Ok(cached);
                }

                tracing::info!("Looking up IP: {}", address);
                let body = client.get_ip_lookup(&address).await.map_err(|e| {
                    tracing::error!("IP lookup failed for {}: {}", address, e);
                    e
                })?;

                let response: IpLookupResponse = serde_json::from_slice(&body).map_err(|e| {
                    tracing::error!("IP lookup response for {} could not be parsed: {}", address, e);
                    WeatherError::from(e)
                })?;

                let response = Arc::new(response);
                cache.set(store_key, Arc::clone(&response), ttl).await;
                Ok(response)
            })
            .await
    }
}
