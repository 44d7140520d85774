use super::lookup::Lookup;
use super::types::*;
use crate::error::WeatherError;
use serde_json::{Map, Value};

/// Hourly points kept per forecast day.
pub const MAX_HOURS_PER_DAY: usize = 24;

/// Builds a [`WeatherResponse`] from a raw `forecast.json` body.
///
/// Only a body that is not a JSON object fails. Every field below the top
/// level falls back to its zero value. Derived blocks (prayer and hunt
/// times) and the timestamps are left for the caller to fill in.
pub fn parse_forecast(body: &[u8]) -> Result<WeatherResponse, WeatherError> {
    let root = Value::Object(serde_json::from_slice::<Map<String, Value>>(body)?);
    Ok(normalize_forecast(Lookup::new(&root)))
}

pub fn normalize_forecast(root: Lookup<'_>) -> WeatherResponse {
    let current = root.key("current");
    let forecast = ForecastData {
        days: root
            .key("forecast")
            .key("forecastday")
            .items()
            .filter(|day| day.is_object())
            .map(forecast_day)
            .collect(),
    };
    let astronomy = forecast
        .days
        .first()
        .map(|day| AstronomyData::from(&day.astro))
        .unwrap_or_default();

    WeatherResponse {
        location: location(root.key("location")),
        current: current_weather(current),
        air_quality: air_quality(current.key("air_quality")),
        forecast,
        astronomy,
        alerts: root
            .key("alerts")
            .key("alert")
            .items()
            .filter(|alert| alert.is_object())
            .map(alert)
            .collect(),
        ..Default::default()
    }
}

fn location(loc: Lookup<'_>) -> LocationData {
    LocationData {
        name: loc.key("name").str(),
        region: loc.key("region").str(),
        country: loc.key("country").str(),
        lat: loc.key("lat").f64(),
        lon: loc.key("lon").f64(),
        tz_id: loc.key("tz_id").str(),
        local_time: loc.key("localtime").str(),
        local_time_epoch: loc.key("localtime_epoch").int(),
    }
}

fn condition(cond: Lookup<'_>) -> ConditionData {
    ConditionData {
        text: cond.key("text").str(),
        icon: cond.key("icon").str(),
        code: cond.key("code").int(),
    }
}

fn current_weather(curr: Lookup<'_>) -> CurrentWeather {
    CurrentWeather {
        temp_c: curr.key("temp_c").f64(),
        temp_f: curr.key("temp_f").f64(),
        condition: condition(curr.key("condition")),
        wind_kph: curr.key("wind_kph").f64(),
        wind_mph: curr.key("wind_mph").f64(),
        wind_dir: curr.key("wind_dir").str(),
        humidity: curr.key("humidity").int(),
        feels_like_c: curr.key("feelslike_c").f64(),
        feels_like_f: curr.key("feelslike_f").f64(),
        uv: curr.key("uv").f64(),
        visibility_km: curr.key("vis_km").f64(),
        pressure_mb: curr.key("pressure_mb").f64(),
        precip_mm: curr.key("precip_mm").f64(),
        cloud: curr.key("cloud").int(),
        gust_kph: curr.key("gust_kph").f64(),
        is_day: curr.key("is_day").int(),
        last_updated: curr.key("last_updated").str(),
    }
}

fn air_quality(aqi: Lookup<'_>) -> AirQualityData {
    AirQualityData {
        co: aqi.key("co").f64(),
        no2: aqi.key("no2").f64(),
        o3: aqi.key("o3").f64(),
        so2: aqi.key("so2").f64(),
        pm25: aqi.key("pm2_5").f64(),
        pm10: aqi.key("pm10").f64(),
        us_epa_index: aqi.key("us-epa-index").int(),
        gb_defra_index: aqi.key("gb-defra-index").int(),
    }
}

fn forecast_day(day: Lookup<'_>) -> ForecastDay {
    let summary = day.key("day");
    let astro = day.key("astro");

    ForecastDay {
        date: day.key("date").str(),
        day: DayData {
            max_temp_c: summary.key("maxtemp_c").f64(),
            min_temp_c: summary.key("mintemp_c").f64(),
            avg_temp_c: summary.key("avgtemp_c").f64(),
            max_wind_kph: summary.key("maxwind_kph").f64(),
            total_precip_mm: summary.key("totalprecip_mm").f64(),
            avg_humidity: summary.key("avghumidity").int(),
            condition: condition(summary.key("condition")),
            chance_of_rain: summary.key("daily_chance_of_rain").int(),
            chance_of_snow: summary.key("daily_chance_of_snow").int(),
            uv: summary.key("uv").f64(),
        },
        astro: AstroData {
            sunrise: astro.key("sunrise").str(),
            sunset: astro.key("sunset").str(),
            moonrise: astro.key("moonrise").str(),
            moonset: astro.key("moonset").str(),
            moon_phase: astro.key("moon_phase").str(),
            moon_illum: astro.key("moon_illumination").str(),
        },
        hour: day
            .key("hour")
            .items()
            .filter(|hour| hour.is_object())
            .take(MAX_HOURS_PER_DAY)
            .map(hourly)
            .collect(),
    }
}

fn hourly(hour: Lookup<'_>) -> HourlyData {
    HourlyData {
        time_epoch: hour.key("time_epoch").int(),
        time: hour.key("time").str(),
        temp_c: hour.key("temp_c").f64(),
        condition: condition(hour.key("condition")),
        wind_kph: hour.key("wind_kph").f64(),
        humidity: hour.key("humidity").int(),
        cloud: hour.key("cloud").int(),
        chance_of_rain: hour.key("chance_of_rain").int(),
        chance_of_snow: hour.key("chance_of_snow").int(),
        feels_like_c: hour.key("feelslike_c").f64(),
    }
}

fn alert(alert: Lookup<'_>) -> WeatherAlert {
    WeatherAlert {
        headline: alert.key("headline").str(),
        severity: alert.key("severity").str(),
        urgency: alert.key("urgency").str(),
        areas: alert.key("areas").str(),
        category: alert.key("category").str(),
        event: alert.key("event").str(),
        effective: alert.key("effective").str(),
        expires: alert.key("expires").str(),
        description: alert.key("desc").str(),
        instruction: alert.key("instruction").str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::fixtures::forecast_payload;
    use serde_json::json;

    fn parse(doc: &Value) -> WeatherResponse {
        parse_forecast(&serde_json::to_vec(doc).unwrap()).unwrap()
    }

    #[test]
    fn test_full_payload() {
        let response = parse(&forecast_payload("Paris", 7));

        assert_eq!(response.location.name, "Paris");
        assert_eq!(response.location.country, "France");
        assert_eq!(response.location.lat, 48.87);
        assert_eq!(response.current.temp_c, 18.0);
        assert_eq!(response.current.humidity, 72);
        assert_eq!(response.current.condition.text, "Partly cloudy");
        assert_eq!(response.current.condition.code, 1003);
        assert_eq!(response.air_quality.pm25, 8.5);
        assert_eq!(response.air_quality.us_epa_index, 1);
        assert_eq!(response.forecast.days.len(), 7);
        assert_eq!(response.forecast.days[0].hour.len(), MAX_HOURS_PER_DAY);
        assert_eq!(response.forecast.days[2].date, "2025-09-22");
        assert_eq!(response.alerts.len(), 1);
        assert_eq!(response.alerts[0].severity, "Moderate");
        assert_eq!(response.alerts[0].description, "Strong winds expected.");
    }

    #[test]
    fn test_astronomy_comes_from_first_day() {
        let response = parse(&forecast_payload("Paris", 3));

        assert_eq!(response.astronomy.sunrise, "07:31 AM");
        assert_eq!(response.astronomy.sunset, "07:45 PM");
        assert_eq!(response.astronomy.moon_phase, "Waxing Crescent");
        assert_eq!(response.astronomy, AstronomyData::from(&response.forecast.days[0].astro));
    }

    #[test]
    fn test_missing_current_yields_zero_values() {
        let mut doc = forecast_payload("Paris", 1);
        doc.as_object_mut().unwrap().remove("current");

        let response = parse(&doc);
        assert_eq!(response.current, CurrentWeather::default());
        assert_eq!(response.air_quality, AirQualityData::default());
        assert_eq!(response.location.name, "Paris");
    }

    #[test]
    fn test_missing_alerts_yield_empty_list() {
        let mut doc = forecast_payload("Paris", 1);
        doc.as_object_mut().unwrap().remove("alerts");

        let response = parse(&doc);
        assert!(response.alerts.is_empty());
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["alerts"], json!([]));
    }

    #[test]
    fn test_string_numerics_are_zero() {
        let doc = json!({
            "location": {"name": "X", "lat": "48.8", "lon": 2.35},
            "current": {"temp_c": "20", "humidity": 55.9}
        });

        let response = parse(&doc);
        assert_eq!(response.location.lat, 0.0);
        assert_eq!(response.location.lon, 2.35);
        assert_eq!(response.current.temp_c, 0.0);
        assert_eq!(response.current.humidity, 55);
    }

    #[test]
    fn test_no_forecast_days() {
        let response = parse(&json!({"forecast": {"forecastday": []}}));

        assert!(response.forecast.days.is_empty());
        assert_eq!(response.astronomy, AstronomyData::default());
    }

    #[test]
    fn test_wrongly_typed_blocks_are_ignored() {
        let doc = json!({
            "location": "Paris",
            "current": [1, 2, 3],
            "forecast": {"forecastday": ["not a day", {"date": "2025-09-20"}]},
            "alerts": {"alert": {"headline": "not a list"}}
        });

        let response = parse(&doc);
        assert_eq!(response.location, LocationData::default());
        assert_eq!(response.current, CurrentWeather::default());
        assert_eq!(response.forecast.days.len(), 1);
        assert_eq!(response.forecast.days[0].date, "2025-09-20");
        assert!(response.alerts.is_empty());
    }

    #[test]
    fn test_malformed_top_level_is_parse_error() {
        assert!(matches!(parse_forecast(b"{not json"), Err(WeatherError::Parse(_))));
        assert!(matches!(parse_forecast(b"[1, 2]"), Err(WeatherError::Parse(_))));
        assert!(matches!(parse_forecast(b""), Err(WeatherError::Parse(_))));
    }
}
