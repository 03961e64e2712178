//! Shared test data.

use crate::model::WeatherReading;

/// A Pune-like reading with round numbers.
pub(crate) fn sample_reading(city: &str) -> WeatherReading {
    WeatherReading {
        city: city.to_string(),
        country: "IN".to_string(),
        utc_offset_seconds: 19800,
        temperature_c: 20.0,
        feels_like_c: 19.0,
        temp_min_c: 17.5,
        temp_max_c: 22.25,
        humidity_pct: 50,
        pressure_hpa: 1012.0,
        cloud_cover_pct: 40,
        visibility_m: Some(6500),
        wind_speed_mps: 3.1,
        wind_direction_deg: 350.0,
        sunrise: 1_705_282_503,
        sunset: 1_705_322_780,
        condition: "Clouds".to_string(),
    }
}
