use thiserror::Error;

/// Weather fetch errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be built or the request never completed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// Upstream payload did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl WeatherError {
    /// Short text shown to the user for a failed fetch
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::EmptyQuery | Self::InvalidCoordinates => self.to_string(),
            Self::Network(_) | Self::Parse(_) => "Failed to fetch weather data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status() {
        let err = WeatherError::Api {
            status: 404,
            message: "City not found or API error".to_string(),
        };
        assert_eq!(err.to_string(), "City not found or API error (HTTP 404)");
        assert_eq!(err.user_message(), "City not found or API error");
    }

    #[test]
    fn test_parse_error_user_message_is_generic() {
        let err = WeatherError::Parse("missing field `dt`".to_string());
        assert_eq!(err.user_message(), "Failed to fetch weather data");
    }
}
