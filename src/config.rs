use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub weather_api_key: String,
    pub weather_base_url: String,
    pub request_timeout: Duration,
    pub cache_duration: Duration,
    pub cleanup_interval: Duration,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub locales_path: String,
    pub default_lang: String,
    pub log_dir: String,
    pub admin_email: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            weather_api_key: env::var("WEATHER_API_KEY")
                .map_err(|_| anyhow::anyhow!("WEATHER_API_KEY not set"))?,
            weather_base_url: env::var("WEATHER_BASE_URL")
                .unwrap_or_else(|_| "https://api.weatherapi.com/v1".to_string()),
            request_timeout: secs_var("WEATHER_TIMEOUT_SECS", 10)?,
            cache_duration: secs_var("CACHE_DURATION_SECS", 15 * 60)?,
            cleanup_interval: secs_var("CACHE_CLEANUP_SECS", 5 * 60)?,
            port: match env::var("PORT") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {:?}", raw))?,
                Err(_) => 8080,
            },
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            locales_path: env::var("LOCALES_PATH")
                .unwrap_or_else(|_| "./configs/locales".to_string()),
            default_lang: env::var("DEFAULT_LANG").unwrap_or_else(|_| "en".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_default(),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
        })
    }
}

/// Reads a whole-second duration, falling back to `default_secs` when unset.
/// Zero is an error.
fn secs_var(name: &str, default_secs: u64) -> anyhow::Result<Duration> {
    let secs = match env::var(name) {
        Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
            anyhow::anyhow!("{} must be a whole number of seconds, got {:?}", name, raw)
        })?,
        Err(_) => default_secs,
    };
    if secs == 0 {
        anyhow::bail!("{} must be greater than zero", name);
    }
    Ok(Duration::from_secs(secs))
}
