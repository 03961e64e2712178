//! Temperature and wind-speed unit conversion.
//!
//! Readings always arrive in metric (`units=metric`), so conversion is one-way:
//! Celsius to Fahrenheit, metres per second to miles per hour.

use std::{fmt, str::FromStr};

use crate::error::ParseError;

const MPH_PER_MPS: f64 = 2.23694;

/// Convert degrees Celsius to degrees Fahrenheit.
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert metres per second to miles per hour.
pub fn to_mph(meters_per_second: f64) -> f64 {
    meters_per_second * MPH_PER_MPS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Express a Celsius reading in this unit.
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => to_fahrenheit(celsius),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(ParseError::new("temperature unit", s, "c, f")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindUnit {
    #[default]
    MetersPerSecond,
    MilesPerHour,
}

impl WindUnit {
    pub const fn all() -> &'static [WindUnit] {
        &[WindUnit::MetersPerSecond, WindUnit::MilesPerHour]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WindUnit::MetersPerSecond => "m/s",
            WindUnit::MilesPerHour => "mph",
        }
    }

    /// Express a metres-per-second reading in this unit.
    pub fn convert(&self, meters_per_second: f64) -> f64 {
        match self {
            WindUnit::MetersPerSecond => meters_per_second,
            WindUnit::MilesPerHour => to_mph(meters_per_second),
        }
    }
}

impl fmt::Display for WindUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WindUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m/s" | "mps" | "ms" => Ok(WindUnit::MetersPerSecond),
            "mph" => Ok(WindUnit::MilesPerHour),
            _ => Err(ParseError::new("wind unit", s, "m/s, mph")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_fixed_points() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn fahrenheit_accepts_physically_impossible_input() {
        assert_eq!(to_fahrenheit(-300.0), -508.0);
    }

    #[test]
    fn mph_conversion() {
        assert!((to_mph(1.0) - 2.23694).abs() < 1e-9);
        assert_eq!(to_mph(0.0), 0.0);
    }

    #[test]
    fn unit_convert_dispatches_on_variant() {
        assert_eq!(TemperatureUnit::Celsius.convert(20.0), 20.0);
        assert_eq!(TemperatureUnit::Fahrenheit.convert(20.0), 68.0);
        assert_eq!(WindUnit::MetersPerSecond.convert(3.5), 3.5);
        assert!((WindUnit::MilesPerHour.convert(10.0) - 22.3694).abs() < 1e-9);
    }

    #[test]
    fn units_parse_from_cli_strings() {
        assert_eq!("F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("celsius".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("MPH".parse::<WindUnit>().unwrap(), WindUnit::MilesPerHour);
        assert_eq!("m/s".parse::<WindUnit>().unwrap(), WindUnit::MetersPerSecond);

        let err = "kelvin".parse::<TemperatureUnit>().unwrap_err();
        assert!(err.to_string().contains("Unknown temperature unit 'kelvin'"));
    }
}
