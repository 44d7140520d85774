use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: LocationData,
    pub current: CurrentWeather,
    pub forecast: ForecastData,
    pub astronomy: AstronomyData,
    pub air_quality: AirQualityData,
    pub alerts: Vec<WeatherAlert>,
    pub prayer_times: PrayerTimesData,
    pub hunt_times: HuntTimesData,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    #[serde(rename = "localtime")]
    pub local_time: String,
    #[serde(rename = "localtime_epoch")]
    pub local_time_epoch: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: ConditionData,
    pub wind_kph: f64,
    pub wind_mph: f64,
    pub wind_dir: String,
    pub humidity: i64,
    #[serde(rename = "feelslike_c")]
    pub feels_like_c: f64,
    #[serde(rename = "feelslike_f")]
    pub feels_like_f: f64,
    pub uv: f64,
    #[serde(rename = "vis_km")]
    pub visibility_km: f64,
    pub pressure_mb: f64,
    pub precip_mm: f64,
    pub cloud: i64,
    pub gust_kph: f64,
    pub is_day: i64,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionData {
    pub text: String,
    pub icon: String,
    pub code: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    #[serde(rename = "forecastday")]
    pub days: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: DayData,
    pub astro: AstroData,
    pub hour: Vec<HourlyData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayData {
    #[serde(rename = "maxtemp_c")]
    pub max_temp_c: f64,
    #[serde(rename = "mintemp_c")]
    pub min_temp_c: f64,
    #[serde(rename = "avgtemp_c")]
    pub avg_temp_c: f64,
    #[serde(rename = "maxwind_kph")]
    pub max_wind_kph: f64,
    #[serde(rename = "totalprecip_mm")]
    pub total_precip_mm: f64,
    #[serde(rename = "avghumidity")]
    pub avg_humidity: i64,
    pub condition: ConditionData,
    #[serde(rename = "daily_chance_of_rain")]
    pub chance_of_rain: i64,
    #[serde(rename = "daily_chance_of_snow")]
    pub chance_of_snow: i64,
    pub uv: f64,
}

/// Per-day astronomical facts as the provider reports them ("06:42 AM").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AstroData {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    #[serde(rename = "moon_illumination")]
    pub moon_illum: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyData {
    pub time_epoch: i64,
    pub time: String,
    pub temp_c: f64,
    pub condition: ConditionData,
    pub wind_kph: f64,
    pub humidity: i64,
    pub cloud: i64,
    pub chance_of_rain: i64,
    pub chance_of_snow: i64,
    #[serde(rename = "feelslike_c")]
    pub feels_like_c: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AstronomyData {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    #[serde(rename = "moon_illumination")]
    pub moon_illum: String,
    pub solar_noon: String,
    pub day_length: String,
}

impl From<&AstroData> for AstronomyData {
    fn from(astro: &AstroData) -> Self {
        Self {
            sunrise: astro.sunrise.clone(),
            sunset: astro.sunset.clone(),
            moonrise: astro.moonrise.clone(),
            moonset: astro.moonset.clone(),
            moon_phase: astro.moon_phase.clone(),
            moon_illum: astro.moon_illum.clone(),
            solar_noon: String::new(),
            day_length: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityData {
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    #[serde(rename = "pm2_5")]
    pub pm25: f64,
    pub pm10: f64,
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: i64,
    #[serde(rename = "gb-defra-index")]
    pub gb_defra_index: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub headline: String,
    pub severity: String,
    pub urgency: String,
    pub areas: String,
    pub category: String,
    pub event: String,
    pub effective: String,
    pub expires: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub instruction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimesData {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub sunset: String,
    pub maghrib: String,
    pub isha: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HuntTimesData {
    pub morning_start: String,
    pub morning_end: String,
    pub evening_start: String,
    pub evening_end: String,
    pub moon_phase: String,
    pub quality: String,
}

/// Geolocation answer for an IP address; fields the provider omits stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpLookupResponse {
    pub ip: String,
    #[serde(rename = "type")]
    pub ip_type: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub country_name: String,
    pub country_code: String,
    pub continent_code: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub tz_id: String,
    #[serde(rename = "localtime")]
    pub local_time: String,
}
