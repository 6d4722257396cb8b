//! HTTP surface: raw weather, travel advice and the static page.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::advice::AdviceSynthesizer;
use crate::error::AdviceError;
use crate::formatters::{render_error, render_result};
use crate::models::{AdviceResult, IndexQuery, TravelRequest, WeatherSummary};
use crate::weather::WeatherClient;

const INDEX_HTML: &str = include_str!("../static/index.html");
const RESULT_SLOT: &str = "<!--result-->";

/// Error body returned by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    CityNotFound,
    DestinationNotFound,
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::CityNotFound | ApiError::DestinationNotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::CityNotFound => "City not found".to_string(),
            ApiError::DestinationNotFound => "Weather data not found for destination".to_string(),
            ApiError::Upstream(message) => format!("AI Agent error: {}", message),
        }
    }
}

impl From<AdviceError> for ApiError {
    fn from(err: AdviceError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse { detail: self.detail() })).into_response()
    }
}

/// Shared state for the HTTP handlers. Immutable once built.
pub struct AppState {
    pub weather: WeatherClient,
    pub advisor: AdviceSynthesizer,
}

/// Build the router with permissive CORS (any origin, method and header).
pub fn router(weather: WeatherClient, advisor: AdviceSynthesizer) -> Router {
    let state = Arc::new(AppState { weather, advisor });

    Router::new()
        .route("/", get(index))
        .route("/weather/{city}", get(get_weather))
        .route("/travel_advice", post(travel_advice))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn travel_advice_for(state: &AppState, destination: &str) -> Result<AdviceResult, ApiError> {
    let weather = state
        .weather
        .lookup(destination)
        .await
        .map_err(|_| ApiError::DestinationNotFound)?;

    let advice = state.advisor.synthesize(&weather).await?;

    Ok(AdviceResult { advice, weather })
}

// Handler implementations

/// GET /weather/{city} - Raw weather without advice
async fn get_weather(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<WeatherSummary>, ApiError> {
    state
        .weather
        .lookup(&city)
        .await
        .map(Json)
        .map_err(|_| ApiError::CityNotFound)
}

/// POST /travel_advice - Weather plus generated advice
async fn travel_advice(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TravelRequest>,
) -> Result<Json<AdviceResult>, ApiError> {
    tracing::info!("Travel advice requested for: {}", request.destination);
    travel_advice_for(&state, &request.destination).await.map(Json)
}

/// GET / - The page; `?destination=` renders a result without the script
async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let destination = query
        .destination
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    let Some(destination) = destination else {
        return Html(INDEX_HTML.to_string());
    };

    let rendered = match travel_advice_for(&state, destination).await {
        Ok(result) => render_result(&result),
        Err(e) => render_error(&e.detail()),
    };

    Html(INDEX_HTML.replacen(RESULT_SLOT, &rendered, 1))
}
