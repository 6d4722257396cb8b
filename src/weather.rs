use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::Config;
use crate::constants::{DAILY_FIELDS, USER_AGENT};
use crate::error::WeatherError;
use crate::models::{
    DailyData, DailyForecast, GeocodingResponse, OpenMeteoResponse, Place, WeatherSummary,
};

/// Shared weather lookup used by both the HTTP API and the agent tool.
///
/// Resolves a city name through the Open-Meteo geocoder, then fetches today's
/// daily forecast for the resulting coordinates. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    geocoding_api_base: String,
    forecast_api_base: String,
}

impl WeatherClient {
    /// Creates a new lookup client from the process configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            geocoding_api_base: config.geocoding_api_base.trim_end_matches('/').to_string(),
            forecast_api_base: config.forecast_api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Makes an HTTP GET request, logs the raw body and deserializes it
    async fn make_request<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%url, %status, %body, "Upstream response");

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Resolves a free-text place name to its first ranked match.
    ///
    /// Any failure, including zero results, yields `None`.
    pub async fn geocode(&self, city: &str) -> Option<Place> {
        let url = format!("{}/search", self.geocoding_api_base);
        let query = [
            ("name", city.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let response = match self.make_request::<GeocodingResponse>(&url, &query).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Geocoding request for '{}' failed: {}", city, e);
                return None;
            }
        };

        let Some(first) = response.results.into_iter().next() else {
            tracing::info!("No geocoding results for '{}'", city);
            return None;
        };

        Some(Place {
            name: first.name,
            country: first.country.unwrap_or_default(),
            latitude: first.latitude,
            longitude: first.longitude,
        })
    }

    /// Fetches today's daily summary for the given coordinates.
    ///
    /// Returns `None` when the daily section is missing, any array is empty or
    /// its first entry is null, or the request fails.
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Option<DailyForecast> {
        let url = format!("{}/forecast", self.forecast_api_base);
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];

        let response = match self.make_request::<OpenMeteoResponse>(&url, &query).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(
                    "Forecast request for {}, {} failed: {}",
                    latitude,
                    longitude,
                    e
                );
                return None;
            }
        };

        let Some(daily) = response.daily else {
            tracing::warn!("Forecast response for {}, {} has no daily data", latitude, longitude);
            return None;
        };

        let today = first_day(&daily);

        if today.is_none() {
            tracing::warn!("Forecast response for {}, {} is incomplete", latitude, longitude);
        }
        today
    }

    /// Looks up today's weather for a city: geocode, then forecast.
    pub async fn lookup(&self, city: &str) -> Result<WeatherSummary, WeatherError> {
        tracing::info!("Looking up weather for: {}", city);

        let place = self
            .geocode(city)
            .await
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;
        tracing::debug!(
            "Resolved '{}' to {}, {} ({}, {})",
            city,
            place.name,
            place.country,
            place.latitude,
            place.longitude
        );

        let today = self
            .forecast(place.latitude, place.longitude)
            .await
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

        Ok(WeatherSummary {
            city: city.to_string(),
            country: place.country,
            temp_max: today.temp_max,
            temp_min: today.temp_min,
            precip_prob: today.precip_prob,
        })
    }
}

/// Index 0 of each daily array is today in the location's own timezone.
fn first_day(daily: &DailyData) -> Option<DailyForecast> {
    Some(DailyForecast {
        temp_max: daily.temperature_max.first().copied().flatten()?,
        temp_min: daily.temperature_min.first().copied().flatten()?,
        precip_prob: daily.precipitation_probability_max.first().copied().flatten()?,
    })
}
