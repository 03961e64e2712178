use anyhow::{Context, bail};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text, validator::Validation};
use weather_core::{
    CityName, Config, Field, Report, TemperatureUnit, TemperatureVariant, Unit, Variant, View,
    WeatherQuery, WindUnit, WindVariant, config::parse_timezone, provider_from_config,
};

use crate::interactive;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and the display timezone.
    Configure,

    /// Show current weather for a city.
    Show(ShowArgs),

    /// Search repeatedly and adjust filters and units between searches.
    Interactive,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// City name, e.g. "Pune" or "London,GB".
    pub city: String,

    /// Only show these parameters (repeatable): temperature, weather,
    /// cloudy, visibility, sunrise, sunset.
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<Field>,

    /// Temperature unit: c or f.
    #[arg(long)]
    pub temp_unit: Option<TemperatureUnit>,

    /// Wind speed unit: m/s or mph.
    #[arg(long)]
    pub wind_unit: Option<WindUnit>,

    /// Temperature reading: current, feels-like, min or max.
    #[arg(long)]
    pub temp_reading: Option<TemperatureVariant>,

    /// Wind reading: speed or degree.
    #[arg(long)]
    pub wind_reading: Option<WindVariant>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show(args) => {
                let config = Config::load_with_env()?;
                let zone = config.display_zone()?;
                let mut query = WeatherQuery::new(provider_from_config(&config)?);

                // A `QueryError` returned from here makes the process exit with status 1.
                show(&mut query, args).await?;
                print_view(&query, &zone);
                Ok(())
            }
            Command::Interactive => {
                let config = Config::load_with_env()?;
                interactive::run(&config).await
            }
        }
    }
}

/// Apply the display flags and run the single query `weather show` performs.
pub(crate) async fn show(query: &mut WeatherQuery, args: ShowArgs) -> anyhow::Result<()> {
    let Some(city) = CityName::new(&args.city) else {
        bail!("City name must not be empty.");
    };

    let selection = query.selection_mut();
    selection.change_unit(args.temp_unit.map(Unit::Temperature));
    selection.change_unit(args.wind_unit.map(Unit::Wind));
    if let Some(v) = args.temp_reading {
        selection.select_variant(Variant::Temperature(v));
    }
    if let Some(v) = args.wind_reading {
        selection.select_variant(Variant::Wind(v));
    }

    query.fetch(&city, args.fields.into_iter().collect()).await?;
    Ok(())
}

/// Print whatever the query currently holds.
pub(crate) fn print_view(query: &WeatherQuery, zone: &Tz) {
    match query.view() {
        View::Empty => {}
        View::Failed(err) => eprintln!("{err}"),
        View::Ready(reading) => print!("{}", Report::build(reading, query.selection(), zone)),
    }
}

fn configure() -> anyhow::Result<()> {
    // Edit the file as stored, without environment overrides.
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }

    let current_zone = config.display_zone().unwrap_or(weather_core::time::DEFAULT_TIMEZONE);
    let zone = Text::new("Display timezone (IANA name):")
        .with_default(current_zone.name())
        .with_validator(|input: &str| {
            Ok(match parse_timezone(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()
        .context("Failed to read timezone")?;
    config.set_timezone(parse_timezone(&zone)?);

    if config.api_key().is_err() {
        bail!("An API key is required; get one at https://openweathermap.org/api");
    }

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}
