//! Shared wiremock fixtures for Open-Meteo and Gemini.

#![allow(dead_code)]

use serde_json::{json, Value};
use travel_advisor::Config;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

/// Config pointing every upstream at the mock server
pub fn config_for(server: &MockServer) -> Config {
    Config {
        gemini_api_key: Some("test-key".to_string()),
        gemini_base_url: server.uri(),
        geocoding_api_base: format!("{}/v1", server.uri()),
        forecast_api_base: format!("{}/v1", server.uri()),
        ..Config::default()
    }
}

pub fn geocoding_body(name: &str, country: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "results": [{
            "id": 2988507,
            "name": name,
            "latitude": latitude,
            "longitude": longitude,
            "country": country,
            "timezone": "Europe/Paris"
        }],
        "generationtime_ms": 0.7
    })
}

pub fn forecast_body(temp_max: Value, temp_min: Value, precip: Value) -> Value {
    json!({
        "latitude": 48.86,
        "longitude": 2.35,
        "timezone": "Europe/Paris",
        "daily_units": {
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C",
            "precipitation_probability_max": "%"
        },
        "daily": {
            "time": ["2026-10-16", "2026-10-17"],
            "temperature_2m_max": temp_max,
            "temperature_2m_min": temp_min,
            "precipitation_probability_max": precip
        }
    })
}

pub async fn mount_geocoding(server: &MockServer, city: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_no_results(server: &MockServer, city: &str) {
    mount_geocoding(server, city, json!({ "generationtime_ms": 0.3 })).await;
}

pub async fn mount_forecast(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Paris geocodes and has a two-day forecast
pub async fn mount_paris(server: &MockServer) {
    mount_geocoding(server, "Paris", geocoding_body("Paris", "France", 48.85341, 2.3488)).await;
    mount_forecast(
        server,
        forecast_body(json!([18.5, 20.1]), json!([9.2, 11.0]), json!([35, 10])),
    )
    .await;
}

pub async fn mount_advice(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })))
        .mount(server)
        .await;
}
