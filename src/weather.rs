use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::WeatherError;

pub const WEATHER_PATH: &str = "/data/2.5/weather";

// API response structs, only the fields the panel reads
#[derive(Debug, Deserialize)]
pub struct Condition {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Main {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: Main,
    pub weather: Vec<Condition>,
}

/// One successful lookup, already reduced to what gets rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_kelvin: f64,
    pub condition_code: i64,
    pub condition_description: String,
}

fn is_success_code(cod: Option<&Value>) -> bool {
    match cod {
        Some(Value::Number(n)) => n.as_i64() == Some(200),
        Some(Value::String(s)) => s == "200",
        _ => false,
    }
}

/// Interprets a 2xx body from the current-weather endpoint.
pub fn parse_weather_body(body: &str) -> Result<WeatherReport, WeatherError> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| WeatherError::Request(format!("invalid JSON in response: {}", e)))?;

    if !is_success_code(json.get("cod")) {
        return Err(WeatherError::CityNotFound);
    }

    let response: CurrentWeatherResponse = serde_json::from_value(json)
        .map_err(|e| WeatherError::Request(format!("unexpected response shape: {}", e)))?;

    let condition = response
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Request("no weather conditions in response".to_string()))?;

    Ok(WeatherReport {
        temperature_kelvin: response.main.temp,
        condition_code: condition.id,
        condition_description: condition.description,
    })
}

pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

pub struct WeatherClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{}", config.base_url, WEATHER_PATH),
            api_key: config.api_key.clone(),
        })
    }

    /// Current conditions for `city`, passed through verbatim as the `q` parameter.
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        debug!("GET {} q={:?}", self.endpoint, city);

        let result = self.request(city).await;
        match &result {
            Ok(report) => info!(
                "Weather for {:?}: {:.2}K, code {}",
                city, report.temperature_kelvin, report.condition_code
            ),
            Err(e) => warn!("Weather fetch for {:?} failed: {}", city, e),
        }
        result
    }

    async fn request(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_weather_body(&body)
    }
}
