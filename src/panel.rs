//! Panel state, kept apart from egui so it can be driven from tests.

use log::{debug, info};

use crate::error::WeatherError;
use crate::unit::TemperatureUnit;
use crate::weather::{capitalize_first_letter, WeatherReport};
use crate::weather_type::resolve_emoji;

/// A fetch the UI should run in the background and hand back to
/// [`WeatherPanel::apply`] with the same `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: u64,
    pub city: String,
    pub unit: TemperatureUnit,
}

#[derive(Debug, Default)]
pub struct WeatherPanel {
    city: String,
    unit: TemperatureUnit,
    temperature_text: String,
    emoji: String,
    description: String,
    is_error: bool,
    // id of the newest request issued, and whether it is still outstanding
    latest_request: u64,
    pending: bool,
    config_error: Option<WeatherError>,
}

impl WeatherPanel {
    /// A `config_error` is shown on every fetch attempt instead of issuing a request.
    pub fn new(config_error: Option<WeatherError>) -> Self {
        Self {
            config_error,
            ..Self::default()
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn city_mut(&mut self) -> &mut String {
        &mut self.city
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn toggle_label(&self) -> String {
        self.unit.toggle_label()
    }

    pub fn temperature_text(&self) -> &str {
        &self.temperature_text
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn is_loading(&self) -> bool {
        self.pending
    }

    /// Starts a fetch for whatever is in the city field right now.
    pub fn request_fetch(&mut self) -> Option<FetchRequest> {
        if let Some(err) = self.config_error.clone() {
            self.display_error(&err);
            return None;
        }

        self.latest_request += 1;
        self.pending = true;
        let request = FetchRequest {
            id: self.latest_request,
            city: self.city.clone(),
            unit: self.unit,
        };
        info!(
            "Fetching weather for {:?} in {} (request {})",
            request.city,
            request.unit.symbol(),
            request.id
        );
        Some(request)
    }

    /// Flips the unit and refetches so the display follows without another click.
    pub fn toggle_unit(&mut self) -> Option<FetchRequest> {
        self.unit = self.unit.toggle();
        self.request_fetch()
    }

    /// Renders a finished fetch. Results of anything but the newest request
    /// are dropped; returns whether this one was shown.
    pub fn apply(&mut self, id: u64, result: Result<WeatherReport, WeatherError>) -> bool {
        if id != self.latest_request {
            debug!(
                "Discarding stale result for request {} (latest is {})",
                id, self.latest_request
            );
            return false;
        }
        self.pending = false;

        match result {
            Ok(report) => self.display_weather(&report),
            Err(err) => self.display_error(&err),
        }
        true
    }

    fn display_weather(&mut self, report: &WeatherReport) {
        self.temperature_text = self.unit.format_kelvin(report.temperature_kelvin);
        self.emoji = resolve_emoji(report.condition_code).to_string();
        self.description = capitalize_first_letter(&report.condition_description);
        self.is_error = false;
    }

    fn display_error(&mut self, err: &WeatherError) {
        self.temperature_text = err.to_string();
        self.emoji.clear();
        self.description.clear();
        self.is_error = true;
    }
}
