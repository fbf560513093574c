use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::aggregator::aggregate;
use crate::config::WeatherConfig;
use crate::constants::USER_AGENT;
use crate::error::WeatherError;
use crate::models::{
    CurrentWeatherResponse, ForecastItem, ForecastResponse, ForecastSample, WeatherQuery,
    WeatherReport,
};

/// HTTP client for the OpenWeatherMap current and 3-hour forecast endpoints
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Creates a new client for the configured base URL
    pub fn new(config: &WeatherConfig, api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Query parameters shared by both endpoints
    fn query_params(&self, query: &WeatherQuery) -> Vec<(&'static str, String)> {
        let mut params = match query {
            WeatherQuery::City(city) => vec![("q", city.trim().to_string())],
            WeatherQuery::Coordinates { latitude, longitude } => {
                vec![("lat", latitude.to_string()), ("lon", longitude.to_string())]
            }
        };
        params.push(("units", "metric".to_string()));
        params.push(("appid", self.api_key.clone()));
        params
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
        failure: &str,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} request failed with status: {}", endpoint, status);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: failure.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::Parse(format!("{} response: {}", endpoint, e)))
    }

    /// Fetches current conditions and the forecast together; either failing fails both
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        query.validate()?;

        let params = self.query_params(query);
        let failure = query.failure_message();

        let (current, forecast) = tokio::try_join!(
            self.make_request::<CurrentWeatherResponse>("weather", &params, failure),
            self.make_request::<ForecastResponse>("forecast", &params, failure),
        )?;

        build_report(current, forecast.list)
    }
}

/// Normalizes the two raw payloads into a report with aggregated days
pub fn build_report(
    current: CurrentWeatherResponse,
    list: Vec<ForecastItem>,
) -> Result<WeatherReport, WeatherError> {
    let samples = list
        .into_iter()
        .map(ForecastItem::into_sample)
        .collect::<Result<Vec<ForecastSample>, _>>()?;

    Ok(WeatherReport {
        current: current.into_conditions()?,
        forecast: aggregate(&samples),
    })
}
