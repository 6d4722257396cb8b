use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Open-Meteo Geocoding API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

// ============================================================================
// Open-Meteo Forecast API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenMeteoResponse {
    pub daily: Option<DailyData>,
}

/// Daily arrays as returned by the provider. Entries may be null for days the
/// model has no data for.
#[derive(Debug, Deserialize)]
pub struct DailyData {
    #[serde(rename = "temperature_2m_max", default)]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min", default)]
    pub temperature_min: Vec<Option<f64>>,
    #[serde(rename = "precipitation_probability_max", default)]
    pub precipitation_probability_max: Vec<Option<u8>>,
}

// ============================================================================
// Gemini API Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorDetail {
    pub message: String,
}

// ============================================================================
// Domain Models
// ============================================================================

/// First geocoder match for a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Today's values for one location, taken from index 0 of the daily arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub temp_max: f64,
    pub temp_min: f64,
    pub precip_prob: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub city: String,
    pub country: String,
    pub temp_max: f64,
    pub temp_min: f64,
    pub precip_prob: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub advice: String,
    pub weather: WeatherSummary,
}

// ============================================================================
// HTTP Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct TravelRequest {
    pub destination: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub destination: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// The city name (e.g., "Paris").
    pub city: String,
    /// The date or day for the forecast (e.g., "Sunday").
    pub date: String,
}
