/// User agent string for HTTP requests
pub const USER_AGENT: &str = "skycast/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// OpenWeatherMap icon base URL
pub const OPENWEATHER_ICON_BASE: &str = "https://openweathermap.org/img/wn";

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";

/// Number of daily summaries kept from a forecast
pub const FORECAST_DAYS: usize = 5;

/// Seconds in one UTC calendar day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// City used when a search is retried without a query
pub const DEFAULT_CITY: &str = "London";
