use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherCondition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CurrentSys {
    #[serde(default)]
    pub country: String,
}

/// Response of the `/weather` endpoint, limited to the fields that are rendered
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrentWeatherResponse {
    pub weather: Vec<WeatherCondition>,
    pub main: MainReadings,
    #[serde(default)]
    pub visibility: f64,
    pub wind: Wind,
    pub dt: i64,
    #[serde(default)]
    pub sys: CurrentSys,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastMain {
    pub temp: f64,
}

/// One 3-hour entry of the `/forecast` list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: ForecastMain,
    pub weather: Vec<WeatherCondition>,
}

/// Response of the `/forecast` endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
}

impl ForecastItem {
    /// Flattens one list entry into a sample; entries without a condition are rejected
    pub fn into_sample(self) -> Result<ForecastSample, WeatherError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::Parse(format!("Forecast entry at {} has no weather condition", self.dt))
        })?;

        Ok(ForecastSample {
            timestamp: self.dt,
            temperature: self.main.temp,
            condition_icon: condition.icon,
            condition_description: condition.description,
        })
    }
}

impl CurrentWeatherResponse {
    pub fn into_conditions(self) -> Result<CurrentConditions, WeatherError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::Parse("Current weather has no weather condition".to_string())
        })?;

        Ok(CurrentConditions {
            name: self.name,
            country: self.sys.country,
            observed_at: self.dt,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            wind_speed: self.wind.speed,
            visibility_m: self.visibility,
            condition_main: condition.main,
            condition_icon: condition.icon,
            condition_description: condition.description,
        })
    }
}

// ============================================================================
// Domain Models
// ============================================================================

/// One fine-grained forecast record, typically 3 hours apart
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: i64,
    pub temperature: f64,
    pub condition_icon: String,
    pub condition_description: String,
}

/// Aggregated forecast for one UTC calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub day_timestamp: i64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition_icon: String,
    pub condition_description: String,
}

/// Current conditions for the searched place, temperatures in Celsius
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub name: String,
    pub country: String,
    pub observed_at: i64,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub visibility_m: f64,
    pub condition_main: String,
    pub condition_icon: String,
    pub condition_description: String,
}

/// Everything a single fetch produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<DailySummary>,
}

/// What to look up
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl WeatherQuery {
    /// Rejects blank city names and out-of-range coordinates
    pub fn validate(&self) -> Result<(), WeatherError> {
        match self {
            Self::City(city) if city.trim().is_empty() => Err(WeatherError::EmptyQuery),
            Self::City(_) => Ok(()),
            Self::Coordinates { latitude, longitude } => {
                if !(-90.0..=90.0).contains(latitude) || !(-180.0..=180.0).contains(longitude) {
                    return Err(WeatherError::InvalidCoordinates);
                }
                Ok(())
            }
        }
    }

    /// Message reported when the upstream rejects this query
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::City(_) => "City not found or API error",
            Self::Coordinates { .. } => "Failed to fetch weather data",
        }
    }
}

/// Display unit; upstream data is always Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C", alias = "c", alias = "celsius")]
    Celsius,
    #[serde(rename = "F", alias = "f", alias = "fahrenheit")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// City name, e.g. "London" or "Paris,FR"; defaults to London
    pub city: Option<String>,
    /// "C" or "F"; defaults to Celsius
    #[serde(default)]
    pub unit: TemperatureUnit,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherByCoordinatesRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// "C" or "F"; defaults to Celsius
    #[serde(default)]
    pub unit: TemperatureUnit,
}
