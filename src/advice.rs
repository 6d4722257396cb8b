use anyhow::Result;
use reqwest::Client;
use std::sync::Arc;

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AdviceError;
use crate::models::{
    Content, GeminiErrorResponse, GenerateContentRequest, GenerateContentResponse, Part,
    WeatherSummary,
};

/// Turns a weather summary into travel advice through a Gemini-compatible
/// `generateContent` endpoint. One call per request, no history, no tools.
#[derive(Debug, Clone)]
pub struct AdviceSynthesizer {
    client: Arc<Client>,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl AdviceSynthesizer {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Asks the model for advice. Failures are returned, never retried.
    pub async fn synthesize(&self, summary: &WeatherSummary) -> Result<String, AdviceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AdviceError::Upstream("API key is not configured".to_string()))?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(build_prompt(summary)),
                }],
            }],
        };

        tracing::info!("Requesting travel advice for {} from {}", summary.city, self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            tracing::error!("AI Error: {} {}", status, message);
            return Err(AdviceError::Upstream(format!("{status}: {message}")));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| AdviceError::Upstream(format!("Malformed model response: {e}")))?;

        extract_text(parsed)
            .ok_or_else(|| AdviceError::Upstream("Model returned no text".to_string()))
    }
}

/// Builds the advisor prompt. Output is fully determined by the summary.
pub fn build_prompt(summary: &WeatherSummary) -> String {
    let weather_info = format!(
        "Destination: {}, {}. Forecast: Max {}\u{00b0}C, Min {}\u{00b0}C, Precipitation Probability: {}%.",
        summary.city, summary.country, summary.temp_max, summary.temp_min, summary.precip_prob
    );

    format!(
        "Act as a Travel Advisor. Based on the following destination and weather info, \
         provide clothing and travel recommendations. Do NOT use asterisks for bolding. \
         Instead, put the topic at the start of the line, followed by a relevant emoji, \
         then the description. Use clear headings (using ###):\n\n{weather_info}"
    )
}

/// Concatenates the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> WeatherSummary {
        WeatherSummary {
            city: "Paris".to_string(),
            country: "France".to_string(),
            temp_max: 18.5,
            temp_min: 9.2,
            precip_prob: 35,
        }
    }

    #[test]
    fn prompt_embeds_weather_fields() {
        let prompt = build_prompt(&paris());

        assert!(prompt.starts_with("Act as a Travel Advisor."));
        assert!(prompt.ends_with(
            "Destination: Paris, France. Forecast: Max 18.5\u{00b0}C, Min 9.2\u{00b0}C, \
             Precipitation Probability: 35%."
        ));
    }

    #[test]
    fn prompt_carries_formatting_instructions() {
        let prompt = build_prompt(&paris());

        assert!(prompt.contains("Do NOT use asterisks for bolding"));
        assert!(prompt.contains("followed by a relevant emoji"));
        assert!(prompt.contains("Use clear headings (using ###)"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(build_prompt(&paris()), build_prompt(&paris()));
    }

    #[test]
    fn whole_number_temperatures_render_without_fraction() {
        let mut summary = paris();
        summary.temp_max = 20.0;
        assert!(build_prompt(&summary).contains("Max 20\u{00b0}C"));
    }

    #[test]
    fn extract_text_joins_parts_of_first_candidate() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r####"{"candidates": [
                {"content": {"parts": [{"text": "### Clothing\n"}, {"text": "Bring a coat"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]}"####,
        )
        .unwrap();

        assert_eq!(extract_text(parsed).as_deref(), Some("### Clothing\nBring a coat"));
    }

    #[test]
    fn extract_text_empty_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(extract_text(parsed).is_none());
    }

    #[tokio::test]
    async fn missing_api_key_is_upstream_error() {
        let synthesizer = AdviceSynthesizer::new(&Config::default()).unwrap();
        let err = synthesizer.synthesize(&paris()).await.unwrap_err();

        assert_eq!(err, AdviceError::Upstream("API key is not configured".to_string()));
    }
}
