pub mod client;
pub mod lookup;
pub mod normalize;
pub mod types;

#[cfg(test)]
pub mod fixtures;

use crate::cache::TtlCache;
use std::sync::Arc;
use types::{IpLookupResponse, WeatherResponse};

pub type WeatherCache = TtlCache<Arc<WeatherResponse>>;
pub type IpCache = TtlCache<Arc<IpLookupResponse>>;

pub fn weather_cache_key(location: &str) -> String {
    format!("weather:{}", location)
}

pub fn ip_cache_key(address: &str) -> String {
    format!("ip:{}", address)
}
