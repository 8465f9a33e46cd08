pub mod app;
pub mod config;
pub mod error;
pub mod panel;
pub mod unit;
pub mod weather;
pub mod weather_type;

pub use app::WeatherApp;
pub use config::{load_env_file, Config};
pub use error::{ConfigError, WeatherError};
pub use panel::{FetchRequest, WeatherPanel};
pub use unit::TemperatureUnit;
pub use weather::{WeatherClient, WeatherReport};
pub use weather_type::{determine_weather_type, resolve_emoji, WeatherType};
