/// Coarse sky/precipitation classes of the OpenWeatherMap condition codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherType {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Haze,
    VolcanicAsh,
    Squall,
    Tornado,
    Clear,
    Clouds,
    Other,
}

pub fn determine_weather_type(code: i64) -> WeatherType {
    match code {
        200..=232 => WeatherType::Thunderstorm,
        300..=321 => WeatherType::Drizzle,
        500..=531 => WeatherType::Rain,
        600..=622 => WeatherType::Snow,
        701..=741 => WeatherType::Haze,
        762 => WeatherType::VolcanicAsh,
        771 => WeatherType::Squall,
        781 => WeatherType::Tornado,
        800 => WeatherType::Clear,
        801..=804 => WeatherType::Clouds,
        _ => WeatherType::Other,
    }
}

impl WeatherType {
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherType::Thunderstorm => "\u{26C8}",
            WeatherType::Drizzle => "\u{1F326}",
            WeatherType::Rain => "\u{1F327}",
            WeatherType::Snow => "\u{2744}",
            WeatherType::Haze => "\u{1F32B}",
            WeatherType::VolcanicAsh => "\u{1F30B}",
            WeatherType::Squall => "\u{1F4A8}",
            WeatherType::Tornado => "\u{1F32A}",
            WeatherType::Clear => "\u{2600}",
            WeatherType::Clouds => "\u{2601}",
            WeatherType::Other => "\u{1F308}",
        }
    }
}

/// Glyph for a condition code. Total: unknown codes get the rainbow.
pub fn resolve_emoji(code: i64) -> &'static str {
    determine_weather_type(code).emoji()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_boundaries() {
        let cases = [
            (200, WeatherType::Thunderstorm),
            (232, WeatherType::Thunderstorm),
            (300, WeatherType::Drizzle),
            (321, WeatherType::Drizzle),
            (500, WeatherType::Rain),
            (531, WeatherType::Rain),
            (600, WeatherType::Snow),
            (622, WeatherType::Snow),
            (701, WeatherType::Haze),
            (741, WeatherType::Haze),
            (762, WeatherType::VolcanicAsh),
            (771, WeatherType::Squall),
            (781, WeatherType::Tornado),
            (800, WeatherType::Clear),
            (801, WeatherType::Clouds),
            (804, WeatherType::Clouds),
        ];
        for (code, expected) in cases {
            assert_eq!(determine_weather_type(code), expected, "code {}", code);
        }
    }

    #[test]
    fn gaps_fall_back_to_default() {
        for code in [-5, 0, 199, 233, 322, 532, 623, 700, 742, 761, 770, 780, 805, 900] {
            assert_eq!(resolve_emoji(code), "\u{1F308}", "code {}", code);
        }
    }

    #[test]
    fn every_listed_code_has_its_own_glyph() {
        let ranges = [200..=232, 300..=321, 500..=531, 600..=622, 701..=741, 801..=804];
        for range in ranges {
            let first = resolve_emoji(*range.start());
            for code in range {
                assert_eq!(resolve_emoji(code), first);
                assert_ne!(resolve_emoji(code), "\u{1F308}");
            }
        }
        assert_eq!(resolve_emoji(800), "\u{2600}");
        assert_eq!(resolve_emoji(781), "\u{1F32A}");
    }
}
