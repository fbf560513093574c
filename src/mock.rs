//! Static London data served when no API key is configured.

use crate::client::build_report;
use crate::error::WeatherError;
use crate::models::{
    CurrentSys, CurrentWeatherResponse, ForecastItem, ForecastMain, MainReadings,
    WeatherCondition, WeatherQuery, WeatherReport, Wind,
};

const MOCK_START: i64 = 1_625_662_800;
const MOCK_STEP: i64 = 3 * 3600;
const MOCK_SAMPLES: i64 = 40;

fn clear_sky() -> WeatherCondition {
    WeatherCondition {
        main: "Clear".to_string(),
        description: "clear sky".to_string(),
        icon: "01d".to_string(),
    }
}

fn light_rain() -> WeatherCondition {
    WeatherCondition {
        main: "Rain".to_string(),
        description: "light rain".to_string(),
        icon: "10d".to_string(),
    }
}

fn current(name: String) -> CurrentWeatherResponse {
    CurrentWeatherResponse {
        weather: vec![clear_sky()],
        main: MainReadings {
            temp: 20.5,
            feels_like: 20.1,
            pressure: 1012.0,
            humidity: 53.0,
        },
        visibility: 10_000.0,
        wind: Wind { speed: 3.6 },
        dt: MOCK_START,
        sys: CurrentSys {
            country: "GB".to_string(),
        },
        name,
    }
}

/// Five days of 3-hour entries; every fifth entry is rainy
fn forecast_list() -> Vec<ForecastItem> {
    (0..MOCK_SAMPLES)
        .map(|i| ForecastItem {
            dt: MOCK_START + i * MOCK_STEP,
            main: ForecastMain {
                temp: 18.0 + (i as f64).sin() * 5.0,
            },
            weather: vec![if i % 5 == 0 { light_rain() } else { clear_sky() }],
        })
        .collect()
}

/// Builds a mock report labelled after the query
pub fn report(query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
    query.validate()?;

    let name = match query {
        WeatherQuery::City(city) => city.trim().to_string(),
        WeatherQuery::Coordinates { .. } => "Current Location (Mock)".to_string(),
    };

    build_report(current(name), forecast_list())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FORECAST_DAYS;

    #[test]
    fn test_city_name_is_echoed() {
        let report = report(&WeatherQuery::City(" Paris ".to_string())).unwrap();
        assert_eq!(report.current.name, "Paris");
        assert_eq!(report.current.country, "GB");
        assert_eq!(report.current.temperature, 20.5);
    }

    #[test]
    fn test_coordinates_use_location_label() {
        let query = WeatherQuery::Coordinates { latitude: 48.85, longitude: 2.35 };
        let report = report(&query).unwrap();
        assert_eq!(report.current.name, "Current Location (Mock)");
    }

    #[test]
    fn test_mock_forecast_spans_five_days() {
        let report = report(&WeatherQuery::City("London".to_string())).unwrap();
        assert_eq!(report.forecast.len(), FORECAST_DAYS);
        // First entry of the list (i = 0) is rainy and opens day one
        assert_eq!(report.forecast[0].condition_icon, "10d");
        assert_eq!(report.forecast[0].day_timestamp, 1_625_616_000);
    }

    #[test]
    fn test_blank_city_is_rejected() {
        assert!(matches!(
            report(&WeatherQuery::City(String::new())),
            Err(WeatherError::EmptyQuery)
        ));
    }
}
