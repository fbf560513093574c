use crate::client::OpenWeatherClient;
use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::mock;
use crate::models::{WeatherQuery, WeatherReport};

/// Where weather reports come from
#[derive(Debug, Clone)]
pub enum WeatherSource {
    Live(OpenWeatherClient),
    Mock,
}

impl WeatherSource {
    /// Live when an API key is configured, mock data otherwise
    pub fn from_config(config: &WeatherConfig) -> Result<Self, WeatherError> {
        match config.api_key() {
            Some(key) => {
                tracing::info!("Using OpenWeatherMap at {}", config.base_url);
                Ok(Self::Live(OpenWeatherClient::new(config, key)?))
            }
            None => {
                tracing::warn!("Using mock data (no API key found)");
                Ok(Self::Mock)
            }
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }

    /// Fetches and aggregates one report
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let result = match self {
            Self::Live(client) => client.fetch(query).await,
            Self::Mock => mock::report(query),
        };

        if let Err(e) = &result {
            tracing::error!("Weather fetch for {:?} failed: {}", query, e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_selects_mock() {
        let source = WeatherSource::from_config(&WeatherConfig::default()).unwrap();
        assert!(source.is_mock());
    }

    #[test]
    fn test_key_selects_live() {
        let config = WeatherConfig {
            api_key: Some("abc".to_string()),
            ..Default::default()
        };
        let source = WeatherSource::from_config(&config).unwrap();
        assert!(!source.is_mock());
    }

    #[tokio::test]
    async fn test_mock_fetch_returns_report() {
        let report = WeatherSource::Mock
            .fetch(&WeatherQuery::City("Berlin".to_string()))
            .await
            .unwrap();
        assert_eq!(report.current.name, "Berlin");
        assert_eq!(report.forecast.len(), 5);
    }
}
