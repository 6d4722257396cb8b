use anyhow::{Context, Result};
use std::net::SocketAddr;

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_MODEL, GEMINI_API_BASE, GEOCODING_API_BASE, OPEN_METEO_API_BASE,
};

/// Process-wide settings, built once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the generative-text service. Advice requests fail without it.
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub model: String,
    pub geocoding_api_base: String,
    pub forecast_api_base: String,
    pub bind_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_base_url: GEMINI_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            geocoding_api_base: GEOCODING_API_BASE.to_string(),
            forecast_api_base: OPEN_METEO_API_BASE.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR '{bind_addr}'"))?;

        Ok(Self {
            gemini_api_key: get("AI_INTEGRATIONS_GEMINI_API_KEY"),
            gemini_base_url: get("AI_INTEGRATIONS_GEMINI_BASE_URL")
                .unwrap_or_else(|| GEMINI_API_BASE.to_string()),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            geocoding_api_base: get("GEOCODING_API_BASE")
                .unwrap_or_else(|| GEOCODING_API_BASE.to_string()),
            forecast_api_base: get("OPEN_METEO_API_BASE")
                .unwrap_or_else(|| OPEN_METEO_API_BASE.to_string()),
            bind_addr,
        })
    }
}
