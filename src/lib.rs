//! Travel advisor backend.
//!
//! Looks up today's weather for a city via Open-Meteo, asks a Gemini model for
//! travel advice, and exposes the lookup both over HTTP and as an MCP tool for
//! agent runtimes.

pub mod advice;
pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;
pub mod weather;

pub use advice::AdviceSynthesizer;
pub use config::Config;
pub use error::{AdviceError, WeatherError};
pub use models::{AdviceResult, WeatherSummary};
pub use service::{weather_report, WeatherAgent};
pub use weather::WeatherClient;
