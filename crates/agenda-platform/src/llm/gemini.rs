//! Gemini briefing adapter.
//!
//! Speaks the `generateContent` REST API with a structured-output schema.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use agenda_core::briefing::{build_prompt, parse_briefing, response_schema};
use agenda_core::ports::BriefingPort;
use agenda_types::{
    AppError, Result,
    briefing::{Briefing, BriefingRequest},
    config::BriefingConfig,
};

/// Briefing generator backed by a Gemini model.
pub struct GeminiBriefingProvider {
    config: BriefingConfig,
}

impl GeminiBriefingProvider {
    /// Fails when no API key is configured, so a missing credential is
    /// caught once at startup rather than on every call.
    pub fn new(config: BriefingConfig) -> Result<Self> {
        if !config.has_credential() {
            return Err(AppError::Config(
                "API_KEY environment variable not set".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            self.config.model
        )
    }

    pub fn build_request_body(&self, req: &BriefingRequest) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": build_prompt(req) }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                "temperature": self.config.temperature,
            },
        })
    }

    async fn call(&self, body: Value) -> Result<String> {
        let response = Request::post(&self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .map_err(|e| AppError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(status_error(status, &text));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Briefing(e.to_string()))?;

        response_text(data)
    }
}

#[async_trait(?Send)]
impl BriefingPort for GeminiBriefingProvider {
    async fn generate(&self, req: BriefingRequest) -> Result<Briefing> {
        log::debug!(
            "Requesting briefing for {:?} with {} attendee(s)",
            req.title,
            req.attendees.len()
        );
        let body = self.build_request_body(&req);

        let text = match self.config.timeout_ms {
            None => self.call(body).await?,
            Some(ms) => {
                let call = Box::pin(self.call(body));
                let timer = Box::pin(TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX)));
                match future::select(call, timer).await {
                    Either::Left((result, _)) => result?,
                    Either::Right(_) => return Err(timeout_error(ms)),
                }
            }
        };

        parse_briefing(&text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// Error for a non-2xx reply.
pub fn status_error(status: u16, body: &str) -> AppError {
    log::warn!("Gemini returned HTTP {}", status);
    AppError::Briefing(format!("HTTP {}: {}", status, body))
}

pub fn timeout_error(ms: u64) -> AppError {
    log::warn!("Gemini call timed out after {}ms", ms);
    AppError::Timeout(ms)
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Deserialize)]
struct ApiCandidate {
    content: Option<ApiContent>,
}

#[derive(Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Deserialize)]
struct ApiPart {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenated text of the first candidate.
pub fn response_text(data: ApiResponse) -> Result<String> {
    let content = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| AppError::Briefing("No candidates in response".to_string()))?;

    let text: String = content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        return Err(AppError::MalformedBriefing("empty response text".to_string()));
    }
    Ok(text)
}
