//! Canned provider payloads for tests.

use crate::config::Config;
use serde_json::{json, Value};
use std::time::Duration;

/// Default settings pointed at a mock provider.
pub fn test_config(base_url: &str) -> Config {
    Config {
        weather_api_key: "test-key".to_string(),
        weather_base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(10),
        cache_duration: Duration::from_secs(15 * 60),
        cleanup_interval: Duration::from_secs(5 * 60),
        port: 0,
        allowed_origins: vec!["*".to_string()],
        locales_path: "./configs/locales".to_string(),
        default_lang: "en".to_string(),
        log_dir: "./logs".to_string(),
        admin_email: String::new(),
        static_dir: "./static".to_string(),
    }
}

/// A `forecast.json` body for `name` with `days` days of 26 hourly points each.
pub fn forecast_payload(name: &str, days: usize) -> Value {
    let forecastday: Vec<Value> = (0..days)
        .map(|day| {
            let hour: Vec<Value> = (0..26)
                .map(|h| {
                    json!({
                        "time_epoch": 1_758_326_400 + (day * 24 + h) * 3600,
                        "time": format!("2025-09-{:02} {:02}:00", 20 + day, h % 24),
                        "temp_c": 12.0 + (h % 24) as f64 * 0.5,
                        "condition": {"text": "Clear", "icon": "//cdn/113.png", "code": 1000},
                        "wind_kph": 9.4,
                        "humidity": 80,
                        "cloud": 10,
                        "chance_of_rain": 0,
                        "chance_of_snow": 0,
                        "feelslike_c": 11.1
                    })
                })
                .collect();
            let moon_phase = match day {
                0 => "Waxing Crescent",
                3 => "Full Moon",
                _ => "Waning Gibbous",
            };
            json!({
                "date": format!("2025-09-{:02}", 20 + day),
                "day": {
                    "maxtemp_c": 22.3,
                    "mintemp_c": 11.8,
                    "avgtemp_c": 16.4,
                    "maxwind_kph": 18.0,
                    "totalprecip_mm": 0.2,
                    "avghumidity": 70,
                    "condition": {"text": "Sunny", "icon": "//cdn/113.png", "code": 1000},
                    "daily_chance_of_rain": 10,
                    "daily_chance_of_snow": 0,
                    "uv": 4.0
                },
                "astro": {
                    "sunrise": "07:31 AM",
                    "sunset": "07:45 PM",
                    "moonrise": "05:12 AM",
                    "moonset": "06:58 PM",
                    "moon_phase": moon_phase,
                    "moon_illumination": 4,
                    "is_moon_up": 0,
                    "is_sun_up": 1
                },
                "hour": hour
            })
        })
        .collect();

    json!({
        "location": {
            "name": name,
            "region": "Ile-de-France",
            "country": "France",
            "lat": 48.87,
            "lon": 2.33,
            "tz_id": "Europe/Paris",
            "localtime_epoch": 1_758_370_000,
            "localtime": "2025-09-20 14:06"
        },
        "current": {
            "last_updated": "2025-09-20 14:00",
            "temp_c": 18.0,
            "temp_f": 64.4,
            "is_day": 1,
            "condition": {"text": "Partly cloudy", "icon": "//cdn/116.png", "code": 1003},
            "wind_mph": 8.1,
            "wind_kph": 13.0,
            "wind_dir": "WSW",
            "pressure_mb": 1019.0,
            "precip_mm": 0.0,
            "humidity": 72,
            "cloud": 50,
            "feelslike_c": 18.0,
            "feelslike_f": 64.4,
            "vis_km": 10.0,
            "uv": 3.0,
            "gust_kph": 16.6,
            "air_quality": {
                "co": 223.3,
                "no2": 12.4,
                "o3": 61.0,
                "so2": 1.9,
                "pm2_5": 8.5,
                "pm10": 10.2,
                "us-epa-index": 1,
                "gb-defra-index": 1
            }
        },
        "forecast": {"forecastday": forecastday},
        "alerts": {
            "alert": [{
                "headline": "Wind warning",
                "severity": "Moderate",
                "urgency": "Expected",
                "areas": "Paris",
                "category": "Met",
                "event": "Wind",
                "effective": "2025-09-20T12:00:00+00:00",
                "expires": "2025-09-21T06:00:00+00:00",
                "desc": "Strong winds expected.",
                "instruction": ""
            }]
        }
    })
}

/// An `ip.json` body for `ip`.
pub fn ip_payload(ip: &str) -> Value {
    json!({
        "ip": ip,
        "type": "ipv4",
        "continent_code": "EU",
        "continent_name": "Europe",
        "country_code": "FR",
        "country_name": "France",
        "is_eu": "true",
        "city": "Paris",
        "region": "Ile-de-France",
        "lat": 48.86,
        "lon": 2.35,
        "tz_id": "Europe/Paris",
        "localtime_epoch": 1_758_370_000,
        "localtime": "2025-09-20 14:06"
    })
}
