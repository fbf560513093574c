use chrono::DateTime;

use crate::constants::OPENWEATHER_ICON_BASE;
use crate::models::{CurrentConditions, DailySummary, TemperatureUnit, WeatherReport};

/// Converts a Celsius reading for display, rounding halves up
pub fn convert_temperature(celsius: f64, unit: TemperatureUnit) -> i64 {
    let value = match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    };
    (value + 0.5).floor() as i64
}

/// Describes how a Celsius temperature feels
pub fn temperature_description(celsius: f64) -> &'static str {
    if celsius < 0.0 {
        "freezing"
    } else if celsius < 10.0 {
        "chilly"
    } else if celsius < 20.0 {
        "mild"
    } else if celsius < 30.0 {
        "warm"
    } else {
        "hot"
    }
}

/// Describes a wind speed in m/s
pub fn wind_description(speed: f64) -> &'static str {
    if speed < 2.0 {
        "calm"
    } else if speed < 5.0 {
        "breezy"
    } else if speed < 10.0 {
        "windy"
    } else {
        "blustery"
    }
}

/// Pictogram URL for an OpenWeatherMap icon code
pub fn icon_url(icon: &str) -> String {
    format!("{}/{}@2x.png", OPENWEATHER_ICON_BASE, icon)
}

fn format_timestamp(timestamp: i64, pattern: &str) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// "Wednesday, July 7" in UTC
pub fn format_long_date(timestamp: i64) -> String {
    format_timestamp(timestamp, "%A, %B %-d")
}

/// "Wed" in UTC
pub fn format_day_name(timestamp: i64) -> String {
    format_timestamp(timestamp, "%a")
}

/// Formats current conditions into a human-readable string
pub fn format_current(current: &CurrentConditions, unit: TemperatureUnit) -> String {
    let place = if current.country.is_empty() {
        current.name.clone()
    } else {
        format!("{}, {}", current.name, current.country)
    };

    format!(
        "{}\n{}\n\n  Temperature: {}\u{00b0}{}\n  Feels Like: {}\u{00b0}{}\n  Conditions: {}\n  Icon: {}\n  Humidity: {}%\n  Wind Speed: {} m/s\n  Pressure: {} hPa\n  Visibility: {} km\n",
        place,
        format_long_date(current.observed_at),
        convert_temperature(current.temperature, unit),
        unit.symbol(),
        convert_temperature(current.feels_like, unit),
        unit.symbol(),
        current.condition_description,
        icon_url(&current.condition_icon),
        current.humidity,
        current.wind_speed,
        current.pressure,
        current.visibility_m / 1000.0
    )
}

/// Formats the one-paragraph live report
pub fn format_live_report(current: &CurrentConditions, unit: TemperatureUnit) -> String {
    format!(
        "Live Report:\n  Currently in {}, expect {} conditions. It feels {} outside with a temperature of {}\u{00b0}{}. Conditions are {} with winds at {} m/s.\n",
        current.name,
        current.condition_description,
        temperature_description(current.temperature),
        convert_temperature(current.temperature, unit),
        unit.symbol(),
        wind_description(current.wind_speed),
        current.wind_speed
    )
}

/// Formats daily summaries into a human-readable string
pub fn format_daily_forecast(days: &[DailySummary], unit: TemperatureUnit) -> String {
    if days.is_empty() {
        return "No forecast data available.\n".to_string();
    }

    let mut output = String::from("5-Day Forecast:\n\n");
    for day in days {
        output.push_str(&format!(
            "{}:\n  High: {}\u{00b0}{}\n  Low: {}\u{00b0}{}\n  Conditions: {}\n  Icon: {}\n\n",
            format_day_name(day.day_timestamp),
            convert_temperature(day.temp_max, unit),
            unit.symbol(),
            convert_temperature(day.temp_min, unit),
            unit.symbol(),
            day.condition_description,
            icon_url(&day.condition_icon)
        ));
    }
    output
}

/// Formats a whole report: current conditions, live report, then the forecast
pub fn format_report(report: &WeatherReport, unit: TemperatureUnit) -> String {
    format!(
        "{}\n{}\n{}",
        format_current(&report.current, unit),
        format_live_report(&report.current, unit),
        format_daily_forecast(&report.forecast, unit)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> CurrentConditions {
        CurrentConditions {
            name: "London".to_string(),
            country: "GB".to_string(),
            observed_at: 1_625_662_800,
            temperature: 20.5,
            feels_like: 20.1,
            humidity: 53.0,
            pressure: 1012.0,
            wind_speed: 3.6,
            visibility_m: 10_000.0,
            condition_main: "Clear".to_string(),
            condition_icon: "01d".to_string(),
            condition_description: "clear sky".to_string(),
        }
    }

    #[test]
    fn test_convert_temperature() {
        assert_eq!(convert_temperature(20.4, TemperatureUnit::Celsius), 20);
        assert_eq!(convert_temperature(0.0, TemperatureUnit::Fahrenheit), 32);
        assert_eq!(convert_temperature(100.0, TemperatureUnit::Fahrenheit), 212);
        assert_eq!(convert_temperature(20.5, TemperatureUnit::Fahrenheit), 69);
    }

    #[test]
    fn test_convert_temperature_rounds_halves_up() {
        assert_eq!(convert_temperature(2.5, TemperatureUnit::Celsius), 3);
        assert_eq!(convert_temperature(-2.5, TemperatureUnit::Celsius), -2);
    }

    #[test]
    fn test_temperature_description_thresholds() {
        assert_eq!(temperature_description(-0.1), "freezing");
        assert_eq!(temperature_description(0.0), "chilly");
        assert_eq!(temperature_description(10.0), "mild");
        assert_eq!(temperature_description(20.0), "warm");
        assert_eq!(temperature_description(30.0), "hot");
    }

    #[test]
    fn test_wind_description_thresholds() {
        assert_eq!(wind_description(1.9), "calm");
        assert_eq!(wind_description(2.0), "breezy");
        assert_eq!(wind_description(5.0), "windy");
        assert_eq!(wind_description(10.0), "blustery");
    }

    #[test]
    fn test_dates_are_utc() {
        assert_eq!(format_long_date(1_625_662_800), "Wednesday, July 7");
        assert_eq!(format_day_name(1_625_616_000), "Wed");
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(icon_url("10d"), "https://openweathermap.org/img/wn/10d@2x.png");
    }

    #[test]
    fn test_live_report_text() {
        let text = format_live_report(&london(), TemperatureUnit::Fahrenheit);
        assert!(text.contains("Currently in London, expect clear sky conditions."));
        assert!(text.contains("It feels warm outside with a temperature of 69\u{00b0}F."));
        assert!(text.contains("Conditions are breezy with winds at 3.6 m/s."));
    }

    #[test]
    fn test_current_includes_details() {
        let text = format_current(&london(), TemperatureUnit::Celsius);
        assert!(text.starts_with("London, GB\nWednesday, July 7\n"));
        assert!(text.contains("Temperature: 21\u{00b0}C"));
        assert!(text.contains("Humidity: 53%"));
        assert!(text.contains("Pressure: 1012 hPa"));
        assert!(text.contains("Visibility: 10 km"));
    }

    #[test]
    fn test_daily_forecast_lists_each_day() {
        let days = vec![DailySummary {
            day_timestamp: 1_625_616_000,
            temp_min: 13.2,
            temp_max: 22.9,
            condition_icon: "10d".to_string(),
            condition_description: "light rain".to_string(),
        }];
        let text = format_daily_forecast(&days, TemperatureUnit::Celsius);
        assert!(text.starts_with("5-Day Forecast:\n\n"));
        assert!(text.contains("Wed:\n  High: 23\u{00b0}C\n  Low: 13\u{00b0}C\n  Conditions: light rain"));
    }

    #[test]
    fn test_empty_forecast() {
        assert_eq!(
            format_daily_forecast(&[], TemperatureUnit::Celsius),
            "No forecast data available.\n"
        );
    }
}
