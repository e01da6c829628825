use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::rate::RateObservation;
use super::traits::RateSource;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Rate source that asks a generative-AI endpoint for historical monthly
/// averages instead of reading a local table.
///
/// Non-deterministic and possibly failing — the same contract as the
/// static source, but every answer crosses the network and depends on the
/// model's output. Returned rates are validated (finite, strictly
/// positive) before use; anything else is reported as an API error.
/// Callers wanting timeouts or retries impose them around the call.
pub struct GenerativeRateSource {
    client: Client,
    api_key: String,
    model: String,
}

impl GenerativeRateSource {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    pub fn with_model(api_key: String, model: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
            model: model.into(),
        }
    }

    fn prompt_for(year: i32, month: u32) -> String {
        format!(
            "Provide the average historical monthly exchange rates for the Turkish Lira (TRY) \
             relative to USD, EUR, and Gram Gold (price of 1 gram in TRY) for {month}/{year}. \
             Format the output as a JSON array containing one object with the keys: \
             year (number), month (number, 1-12), usd (number, average TRY needed for 1 USD), \
             eur (number, average TRY needed for 1 EUR), gold (number, average TRY needed for \
             1 gram of gold). Ensure the rates are as accurate as possible for the period."
        )
    }

    /// The response schema sent with every request: a JSON array of
    /// per-month rate objects. Constrains the model's output shape so the
    /// reply parses directly into observations.
    pub fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "year": { "type": "NUMBER" },
                    "month": { "type": "NUMBER" },
                    "usd": { "type": "NUMBER" },
                    "eur": { "type": "NUMBER" },
                    "gold": { "type": "NUMBER" }
                },
                "required": ["year", "month", "usd", "eur", "gold"]
            }
        })
    }

    /// Parse the model's JSON text into observations and pick the one for
    /// the requested month. Split out so it can be tested without a server.
    pub fn parse_response(
        text: &str,
        year: i32,
        month: u32,
    ) -> Result<RateObservation, CoreError> {
        let observations: Vec<RateObservation> = serde_json::from_str(text)?;

        let obs = observations
            .into_iter()
            .find(|o| o.year == year && o.month == month)
            .ok_or(CoreError::RateNotAvailable { year, month })?;

        for (label, rate) in [("usd", obs.usd), ("eur", obs.eur), ("gold", obs.gold)] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(CoreError::Api {
                    source_name: "Generative".to_string(),
                    message: format!(
                        "Invalid {label} rate {rate} for {year}-{month:02}: must be finite and positive"
                    ),
                });
            }
        }

        Ok(obs)
    }
}

// ── Gemini generateContent request/response types ───────────────────

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RateSource for GenerativeRateSource {
    fn name(&self) -> &str {
        "Generative"
    }

    async fn rate_for(&self, year: i32, month: u32) -> Result<RateObservation, CoreError> {
        let url = format!(
            "{BASE_URL}/{model}:generateContent?key={key}",
            model = self.model,
            key = self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt_for(year, month),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: Self::response_schema(),
            },
        };

        let resp: GenerateResponse = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                source_name: "Generative".to_string(),
                message: format!("Failed to parse response for {year}-{month:02}: {e}"),
            })?;

        let text = resp
            .candidates
            .and_then(|mut c| {
                if c.is_empty() {
                    None
                } else {
                    c.swap_remove(0).content.parts.into_iter().next()
                }
            })
            .map(|p| p.text)
            .ok_or_else(|| CoreError::Api {
                source_name: "Generative".to_string(),
                message: format!("Empty response for {year}-{month:02}"),
            })?;

        let obs = Self::parse_response(&text, year, month);
        if obs.is_err() {
            log::warn!("generative source returned unusable data for {year}-{month:02}");
        }
        obs
    }
}
