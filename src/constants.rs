/// User agent string for HTTP requests
pub const USER_AGENT: &str = "travel-advisor/0.1.0";

/// Open-Meteo geocoding API base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Google Generative Language API base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Model used for travel advice unless overridden
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Daily fields requested from the forecast API, in response order
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_probability_max";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
