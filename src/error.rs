use thiserror::Error;

/// Everything that can end a fetch without a weather report. The `Display`
/// text is exactly what the panel shows in the temperature slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("HTTP Error: {0}")]
    Http(String),

    #[error("Connection Error: Check your internet connection.")]
    Connection,

    #[error("Timeout Error: The request timed out.")]
    Timeout,

    #[error("Request Error: {0}")]
    Request(String),

    #[error("City not found.")]
    CityNotFound,

    #[error("API Key Missing: Please set OPENWEATHERMAP_API_KEY environment variable.")]
    MissingApiKey,
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return WeatherError::Http(status.to_string());
        }
        if err.is_connect() {
            WeatherError::Connection
        } else if err.is_timeout() {
            WeatherError::Timeout
        } else {
            // the url carries the api key
            WeatherError::Request(err.without_url().to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENWEATHERMAP_API_KEY is not set")]
    MissingApiKey,

    #[error("WEATHER_TIMEOUT_SECS must be a positive whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

impl From<&ConfigError> for WeatherError {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingApiKey => WeatherError::MissingApiKey,
            other => WeatherError::Request(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_the_panel_shows() {
        assert_eq!(
            WeatherError::Connection.to_string(),
            "Connection Error: Check your internet connection."
        );
        assert_eq!(
            WeatherError::Timeout.to_string(),
            "Timeout Error: The request timed out."
        );
        assert_eq!(WeatherError::CityNotFound.to_string(), "City not found.");
        assert_eq!(
            WeatherError::Http("401 Unauthorized".into()).to_string(),
            "HTTP Error: 401 Unauthorized"
        );
        assert_eq!(
            WeatherError::Request("boom".into()).to_string(),
            "Request Error: boom"
        );
    }

    #[test]
    fn missing_key_maps_to_panel_error() {
        assert_eq!(
            WeatherError::from(&ConfigError::MissingApiKey),
            WeatherError::MissingApiKey
        );
    }
}
