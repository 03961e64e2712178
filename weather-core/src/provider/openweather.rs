use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    Config,
    config::DEFAULT_BASE_URL,
    model::{CityName, WeatherReading},
};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

// Hand-written so the key never ends up in a log line.
impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, Duration::from_secs(10))
    }

    pub fn with_base_url(api_key: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?.to_owned();
        Self::with_base_url(api_key, config.base_url(), config.timeout())
    }

    async fn fetch_current(&self, city: &CityName) -> Result<WeatherReading> {
        let url = format!("{}{CURRENT_WEATHER_PATH}", self.base_url);

        tracing::debug!(%city, "requesting current weather");

        // Query strings carry the key, so strip URLs from transport errors.
        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        Ok(parsed.into_reading())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    timezone: i32,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    clouds: OwClouds,
    #[serde(default)]
    visibility: Option<u32>,
    sys: OwSys,
}

impl OwCurrentResponse {
    fn into_reading(self) -> WeatherReading {
        let condition = self
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .unwrap_or_else(|| "Unknown".to_string());

        WeatherReading {
            city: self.name,
            country: self.sys.country,
            utc_offset_seconds: self.timezone,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            temp_min_c: self.main.temp_min,
            temp_max_c: self.main.temp_max,
            humidity_pct: self.main.humidity,
            pressure_hpa: self.main.pressure,
            cloud_cover_pct: self.clouds.all,
            visibility_m: self.visibility,
            wind_speed_mps: self.wind.speed,
            wind_direction_deg: self.wind.deg,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
            condition,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &CityName) -> Result<WeatherReading> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "coord": {"lon": 73.8553, "lat": 18.5196},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 29.5, "feels_like": 28.9, "temp_min": 27.1, "temp_max": 30.2,
                 "pressure": 1012, "humidity": 33},
        "visibility": 10000,
        "wind": {"speed": 3.6, "deg": 290},
        "clouds": {"all": 0},
        "dt": 1705311000,
        "sys": {"country": "IN", "sunrise": 1705282503, "sunset": 1705322780},
        "timezone": 19800,
        "id": 1259229,
        "name": "Pune",
        "cod": 200
    }"#;

    #[test]
    fn decodes_current_weather_payload() {
        let parsed: OwCurrentResponse = serde_json::from_str(SAMPLE).unwrap();
        let reading = parsed.into_reading();

        assert_eq!(reading.city, "Pune");
        assert_eq!(reading.country, "IN");
        assert_eq!(reading.utc_offset_seconds, 19800);
        assert_eq!(reading.temperature_c, 29.5);
        assert_eq!(reading.temp_max_c, 30.2);
        assert_eq!(reading.pressure_hpa, 1012.0);
        assert_eq!(reading.visibility_m, Some(10000));
        assert_eq!(reading.wind_direction_deg, 290.0);
        assert_eq!(reading.condition, "Clear");
    }

    #[test]
    fn missing_visibility_and_empty_weather_are_tolerated() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value.as_object_mut().unwrap().remove("visibility");
        value["weather"] = serde_json::json!([]);

        let parsed: OwCurrentResponse = serde_json::from_value(value).unwrap();
        let reading = parsed.into_reading();

        assert_eq!(reading.visibility_m, None);
        assert_eq!(reading.condition, "Unknown");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value.as_object_mut().unwrap().remove("main");

        assert!(serde_json::from_value::<OwCurrentResponse>(value).is_err());
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let truncated = truncate_body(&long);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn debug_does_not_expose_key() {
        let provider = OpenWeatherProvider::new("SECRET".into()).unwrap();
        assert!(!format!("{provider:?}").contains("SECRET"));
    }
}
