use crate::weather::types::{AstroData, HuntTimesData, PrayerTimesData, WeatherResponse};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const HUNT_MORNING_END: &str = "10:00 AM";
pub const HUNT_EVENING_START: &str = "4:00 PM";

fn at(date: NaiveDate, hour: u32, min: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default())
}

fn hhmm(time: NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

/// Prayer times on `date` using a fixed 06:00 sunrise and 18:30 sunset.
///
/// `lat` and `lon` do not affect the result; every location and every date
/// gets the same schedule.
pub fn calculate_prayer_times(_lat: f64, _lon: f64, date: NaiveDate) -> PrayerTimesData {
    let sunrise = at(date, 6, 0);
    let sunset = at(date, 18, 30);

    PrayerTimesData {
        fajr: hhmm(sunrise - Duration::minutes(90)),
        sunrise: hhmm(sunrise),
        dhuhr: hhmm(sunrise + Duration::hours(6) + Duration::minutes(30)),
        asr: hhmm(sunrise + Duration::hours(10)),
        sunset: hhmm(sunset),
        maghrib: hhmm(sunset + Duration::minutes(5)),
        isha: hhmm(sunset + Duration::minutes(90)),
    }
}

/// Hunting windows for one day, rated by the moon phase.
pub fn calculate_hunt_times(astro: &AstroData) -> HuntTimesData {
    let quality = if astro.moon_phase.contains("Full") {
        "Fair"
    } else if astro.moon_phase.contains("New") {
        "Excellent"
    } else {
        "Good"
    };

    HuntTimesData {
        morning_start: astro.sunrise.clone(),
        morning_end: HUNT_MORNING_END.to_string(),
        evening_start: HUNT_EVENING_START.to_string(),
        evening_end: astro.sunset.clone(),
        moon_phase: astro.moon_phase.clone(),
        quality: quality.to_string(),
    }
}

/// Fills the prayer and hunt blocks from the first forecast day. A response
/// without forecast days is left untouched.
pub fn augment(response: &mut WeatherResponse, today: NaiveDate) {
    let Some(first_day) = response.forecast.days.first() else {
        return;
    };
    response.hunt_times = calculate_hunt_times(&first_day.astro);
    response.prayer_times =
        calculate_prayer_times(response.location.lat, response.location.lon, today);
}
