/// Temperature unit the panel renders in. The API always reports Kelvin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn toggle(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => kelvin - 273.15,
            TemperatureUnit::Fahrenheit => kelvin * 9.0 / 5.0 - 459.67,
        }
    }

    /// Rounded to whole degrees with the unit glyph, e.g. `80°F`.
    pub fn format_kelvin(self, kelvin: f64) -> String {
        let value = self.from_kelvin(kelvin);
        // keep "-0°C" from showing up for values just below zero
        let rounded = if value.round() == 0.0 { 0.0 } else { value };
        format!("{:.0}{}", rounded, self.symbol())
    }

    /// Label for the toggle button: always names the unit not in use.
    pub fn toggle_label(self) -> String {
        format!("Switch to {}", self.toggle().symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fahrenheit() {
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn converts_kelvin() {
        let c = TemperatureUnit::Celsius.from_kelvin(300.15);
        let f = TemperatureUnit::Fahrenheit.from_kelvin(300.15);
        assert!((c - 27.0).abs() < 1e-9);
        assert!((f - 80.6).abs() < 1e-9);
        assert!((TemperatureUnit::Fahrenheit.from_kelvin(273.15) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn formats_rounded_with_symbol() {
        assert_eq!(TemperatureUnit::Fahrenheit.format_kelvin(300.15), "81°F");
        assert_eq!(TemperatureUnit::Celsius.format_kelvin(300.15), "27°C");
        assert_eq!(TemperatureUnit::Celsius.format_kelvin(273.0), "0°C");
        assert_eq!(TemperatureUnit::Celsius.format_kelvin(263.15), "-10°C");
    }

    #[test]
    fn toggle_label_names_the_other_unit() {
        assert_eq!(TemperatureUnit::Fahrenheit.toggle_label(), "Switch to °C");
        assert_eq!(TemperatureUnit::Celsius.toggle_label(), "Switch to °F");
        let unit = TemperatureUnit::Fahrenheit;
        assert_eq!(unit.toggle().toggle(), unit);
    }
}
