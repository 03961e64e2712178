use std::fmt;

/// A search term that is known to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityName(String);

impl CityName {
    /// Trim `input`; blank input yields `None` so no request is ever issued for it.
    pub fn new(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of one successful current-weather response.
///
/// Temperatures are °C, wind speed m/s, visibility metres, timestamps Unix seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    /// Offset of the city's local time from UTC, in seconds.
    pub utc_offset_seconds: i32,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: f64,
    pub cloud_cover_pct: u8,
    pub visibility_m: Option<u32>,
    pub wind_speed_mps: f64,
    pub wind_direction_deg: f64,
    pub sunrise: i64,
    pub sunset: i64,
    pub condition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_name_is_trimmed() {
        let city = CityName::new("  Pune ").unwrap();
        assert_eq!(city.as_str(), "Pune");
        assert_eq!(city.to_string(), "Pune");
    }

    #[test]
    fn blank_city_name_is_rejected() {
        assert_eq!(CityName::new(""), None);
        assert_eq!(CityName::new("   \t"), None);
    }
}
