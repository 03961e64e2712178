//! Plain-text `Parameter | Value` tables built from a reading and a selection.

use chrono::TimeZone;
use std::fmt::{self, Display};

use crate::{
    model::WeatherReading,
    selection::{DisplaySelection, Field, TemperatureVariant, WindVariant},
    time::{format_local_time, format_utc_offset, zone_abbreviation},
    units::{TemperatureUnit, WindUnit},
};

const MISSING: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    rows: Vec<Row>,
}

impl Report {
    /// Full table when nothing is filtered, otherwise only the selected fields.
    pub fn build<Z>(reading: &WeatherReading, selection: &DisplaySelection, zone: &Z) -> Self
    where
        Z: TimeZone,
        Z::Offset: Display,
    {
        if selection.fields().is_empty() {
            Self::full(reading, selection, zone)
        } else {
            Self::filtered(reading, selection, zone)
        }
    }

    pub fn full<Z>(reading: &WeatherReading, selection: &DisplaySelection, zone: &Z) -> Self
    where
        Z: TimeZone,
        Z::Offset: Display,
    {
        let temp_variant = selection.temperature_variant();
        let wind_variant = selection.wind_variant();

        let rows = vec![
            Row::new("City, Country", format!("{}, {}", reading.city, reading.country)),
            Row::new("Timezone", format_utc_offset(reading.utc_offset_seconds)),
            Row::new("Weather", reading.condition.clone()),
            Row::new("Sunrise", local_time_with_zone(reading.sunrise, zone)),
            Row::new("Sunset", local_time_with_zone(reading.sunset, zone)),
            Row::new(
                temp_variant.label(),
                temperature_display(reading, temp_variant, selection.temperature_unit()),
            ),
            Row::new(
                wind_variant.label(),
                wind_display(reading, wind_variant, selection.wind_unit()),
            ),
            Row::new("Humidity", format!("{} %", reading.humidity_pct)),
            Row::new("Pressure", format!("{} hPa", reading.pressure_hpa)),
            Row::new("Cloudy", format!("{}%", reading.cloud_cover_pct)),
            Row::new("Visibility", visibility_display(reading)),
        ];

        Self { rows }
    }

    pub fn filtered<Z>(reading: &WeatherReading, selection: &DisplaySelection, zone: &Z) -> Self
    where
        Z: TimeZone,
        Z::Offset: Display,
    {
        let rows = selection
            .fields()
            .iter()
            .map(|field| match field {
                Field::Temperature => {
                    let variant = selection.temperature_variant();
                    Row::new(
                        variant.label(),
                        temperature_display(reading, variant, selection.temperature_unit()),
                    )
                }
                Field::Weather => Row::new("Weather", reading.condition.clone()),
                Field::Cloudy => Row::new("Cloudy", format!("{}%", reading.cloud_cover_pct)),
                Field::Visibility => Row::new("Visibility", visibility_display(reading)),
                Field::Sunrise => Row::new("Sunrise", local_time(reading.sunrise, zone)),
                Field::Sunset => Row::new("Sunset", local_time(reading.sunset, zone)),
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Value of the first row with `label`, if any.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows.iter().find(|r| r.label == label).map(|r| r.value.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const HEADER: (&str, &str) = ("Parameter", "Value");

        let label_w = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .chain(std::iter::once(HEADER.0.len()))
            .max()
            .unwrap_or_default();
        let value_w = self
            .rows
            .iter()
            .map(|r| r.value.chars().count())
            .chain(std::iter::once(HEADER.1.len()))
            .max()
            .unwrap_or_default();

        writeln!(f, "{:<label_w$} | {:>value_w$}", HEADER.0, HEADER.1)?;
        writeln!(f, "{}-+-{}", "-".repeat(label_w), "-".repeat(value_w))?;
        for row in &self.rows {
            writeln!(f, "{:<label_w$} | {:>value_w$}", row.label, row.value)?;
        }
        Ok(())
    }
}

/// The selected temperature reading in `unit`, e.g. `20.00 °C`.
pub fn temperature_display(
    reading: &WeatherReading,
    variant: TemperatureVariant,
    unit: TemperatureUnit,
) -> String {
    let celsius = match variant {
        TemperatureVariant::Current => reading.temperature_c,
        TemperatureVariant::FeelsLike => reading.feels_like_c,
        TemperatureVariant::Min => reading.temp_min_c,
        TemperatureVariant::Max => reading.temp_max_c,
    };
    format!("{:.2} {}", unit.convert(celsius), unit.symbol())
}

/// Wind speed in `unit`, or the direction in degrees (unit does not apply).
pub fn wind_display(reading: &WeatherReading, variant: WindVariant, unit: WindUnit) -> String {
    match variant {
        WindVariant::Speed => {
            format!("{:.2} {}", unit.convert(reading.wind_speed_mps), unit.symbol())
        }
        WindVariant::Degree => format!("{} °", reading.wind_direction_deg),
    }
}

fn visibility_display(reading: &WeatherReading) -> String {
    match reading.visibility_m {
        Some(metres) => format!("{} km", f64::from(metres) / 1000.0),
        None => MISSING.to_string(),
    }
}

fn local_time<Z>(ts: i64, zone: &Z) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    format_local_time(ts, zone).unwrap_or_else(|| MISSING.to_string())
}

fn local_time_with_zone<Z>(ts: i64, zone: &Z) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    match (format_local_time(ts, zone), zone_abbreviation(ts, zone)) {
        (Some(time), Some(abbr)) => format!("{time} {abbr}"),
        _ => MISSING.to_string(),
    }
}
