use crate::config::Config;
use crate::error::WeatherError;
use reqwest::Client;

pub const FORECAST_ENDPOINT: &str = "forecast.json";
pub const IP_ENDPOINT: &str = "ip.json";

/// Thin GET client for the weather provider. One attempt per call; any
/// failure goes straight back to the caller.
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(concat!("WeatherAgent/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.weather_base_url.trim_end_matches('/').to_string(),
            api_key: config.weather_api_key.clone(),
        })
    }

    /// `GET {base}/{endpoint}?key={api_key}&{params}`, returning the raw body
    /// of a 200 response.
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => Ok(response.bytes().await?.to_vec()),
            status => {
                let body = response.text().await?;
                Err(WeatherError::Upstream {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    pub async fn get_forecast(&self, location: &str) -> Result<Vec<u8>, WeatherError> {
        self.fetch(
            FORECAST_ENDPOINT,
            &[
                ("q", location),
                ("days", "7"),
                ("aqi", "yes"),
                ("alerts", "yes"),
            ],
        )
        .await
    }

    pub async fn get_ip_lookup(&self, address: &str) -> Result<Vec<u8>, WeatherError> {
        self.fetch(IP_ENDPOINT, &[("q", address)]).await
    }
}
