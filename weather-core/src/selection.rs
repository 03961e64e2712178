//! Which parameters are shown, which reading backs the temperature and wind
//! rows, and which units they are expressed in.

use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::{
    error::ParseError,
    units::{TemperatureUnit, WindUnit},
};

/// Optional parameters a user can filter the report down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Temperature,
    Weather,
    Cloudy,
    Visibility,
    Sunrise,
    Sunset,
}

impl Field {
    pub const fn all() -> &'static [Field] {
        &[
            Field::Temperature,
            Field::Weather,
            Field::Cloudy,
            Field::Visibility,
            Field::Sunrise,
            Field::Sunset,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Temperature => "Temperature",
            Field::Weather => "Weather",
            Field::Cloudy => "Cloudy",
            Field::Visibility => "Visibility",
            Field::Sunrise => "Sunrise",
            Field::Sunset => "Sunset",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::all()
            .iter()
            .copied()
            .find(|field| field.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ParseError::new(
                    "field",
                    s,
                    "temperature, weather, cloudy, visibility, sunrise, sunset",
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureVariant {
    #[default]
    Current,
    FeelsLike,
    Min,
    Max,
}

impl TemperatureVariant {
    pub const fn all() -> &'static [TemperatureVariant] {
        &[
            TemperatureVariant::Current,
            TemperatureVariant::FeelsLike,
            TemperatureVariant::Min,
            TemperatureVariant::Max,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureVariant::Current => "Temperature",
            TemperatureVariant::FeelsLike => "Feels Like",
            TemperatureVariant::Min => "Temperature Min",
            TemperatureVariant::Max => "Temperature Max",
        }
    }
}

impl fmt::Display for TemperatureVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TemperatureVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" | "temperature" => Ok(TemperatureVariant::Current),
            "feels-like" | "feels_like" | "feels like" => Ok(TemperatureVariant::FeelsLike),
            "min" => Ok(TemperatureVariant::Min),
            "max" => Ok(TemperatureVariant::Max),
            _ => Err(ParseError::new("temperature reading", s, "current, feels-like, min, max")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindVariant {
    #[default]
    Speed,
    Degree,
}

impl WindVariant {
    pub const fn all() -> &'static [WindVariant] {
        &[WindVariant::Speed, WindVariant::Degree]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindVariant::Speed => "Wind Speed",
            WindVariant::Degree => "Wind Degree",
        }
    }
}

impl fmt::Display for WindVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WindVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "speed" => Ok(WindVariant::Speed),
            "degree" | "deg" | "direction" => Ok(WindVariant::Degree),
            _ => Err(ParseError::new("wind reading", s, "speed, degree")),
        }
    }
}

/// A variant choice for one of the multi-reading rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Temperature(TemperatureVariant),
    Wind(WindVariant),
}

/// A unit choice for one of the convertible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Temperature(TemperatureUnit),
    Wind(WindUnit),
}

/// Transient display state for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySelection {
    fields: BTreeSet<Field>,
    temperature_variant: TemperatureVariant,
    wind_variant: WindVariant,
    temperature_unit: TemperatureUnit,
    wind_unit: WindUnit,
}

impl DisplaySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &BTreeSet<Field> {
        &self.fields
    }

    pub fn is_selected(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn temperature_variant(&self) -> TemperatureVariant {
        self.temperature_variant
    }

    pub fn wind_variant(&self) -> WindVariant {
        self.wind_variant
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    pub fn wind_unit(&self) -> WindUnit {
        self.wind_unit
    }

    /// Add `field` if absent, remove it if present.
    pub fn toggle_field(&mut self, field: Field) {
        if !self.fields.remove(&field) {
            self.fields.insert(field);
        }
    }

    /// Replace the whole field set, e.g. with the filters a search was issued with.
    pub fn set_fields(&mut self, fields: impl IntoIterator<Item = Field>) {
        self.fields = fields.into_iter().collect();
    }

    pub fn select_variant(&mut self, variant: Variant) {
        match variant {
            Variant::Temperature(v) => self.temperature_variant = v,
            Variant::Wind(v) => self.wind_variant = v,
        }
    }

    /// Empty the field set. Variants and units keep their last values.
    pub fn clear_all(&mut self) {
        self.fields.clear();
    }

    /// Switch a display unit. `None` (a re-click on the active toggle) is ignored.
    pub fn change_unit(&mut self, unit: Option<Unit>) {
        match unit {
            Some(Unit::Temperature(u)) => self.temperature_unit = u,
            Some(Unit::Wind(u)) => self.wind_unit = u,
            None => {}
        }
    }
}
