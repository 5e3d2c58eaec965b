//! EN/PL translation through the Gemini `generateContent` API.
//!
//! Whitespace is the fragile part: models collapse runs of spaces and
//! rewrite line breaks. Text is therefore sent through the sentinel codec in
//! [`models::whitespace`] and decoded on the way back, so code blocks and
//! markdown indentation survive the round trip.

#[cfg(test)]
#[path = "translate_test.rs"]
mod translate_test;

use std::time::Duration;

use models::{TranslatedText, whitespace};
use serde::Serialize;
use serde_json::{Value, json};

use crate::config::{GeminiConfig, HttpTimeouts};
use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("API request failed: {0}")]
    ApiRequest(String),
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },
    #[error("API response parse failed: {0}")]
    ApiParse(String),
    #[error("API returned no text")]
    EmptyResponse,
}

impl ErrorCode for TranslateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::EmptyResponse => "E_EMPTY_RESPONSE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. } | Self::EmptyResponse)
    }
}

/// Produces both language versions of an already-encoded text.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, encoded: &str) -> Result<TranslatedText, TranslateError>;
}

/// Translate `text` into both site languages, preserving its whitespace.
/// Empty input returns an empty pair without calling the translator.
///
/// # Errors
///
/// Whatever the translator reports.
pub async fn translate_preserving_whitespace(
    translator: &dyn Translator,
    text: &str,
) -> Result<TranslatedText, TranslateError> {
    if text.is_empty() {
        return Ok(TranslatedText::default());
    }
    let encoded = whitespace::encode(text);
    let translated = translator.translate(&encoded).await?;
    Ok(translated.map(whitespace::decode))
}

// =============================================================================
// GEMINI
// =============================================================================

pub struct GeminiTranslator {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiTranslator {
    /// # Errors
    ///
    /// Returns [`TranslateError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig, timeouts: HttpTimeouts) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| TranslateError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, model: config.model, base_url: config.base_url })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl Translator for GeminiTranslator {
    async fn translate(&self, encoded: &str) -> Result<TranslatedText, TranslateError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(encoded))
            .send()
            .await
            .map_err(|e| TranslateError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TranslateError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(TranslateError::ApiResponse { status, body: text });
        }
        parse_response(&text)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Value>,
    generation_config: Value,
}

fn request_body(encoded: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![json!({ "role": "user", "parts": [{ "text": prompt(encoded) }] })],
        generation_config: json!({
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "en": { "type": "STRING" },
                    "pl": { "type": "STRING" }
                },
                "required": ["en", "pl"],
                "propertyOrdering": ["en", "pl"]
            }
        }),
    }
}

pub(crate) fn prompt(encoded: &str) -> String {
    format!(
        "Translate the text below into English and Polish.\n\
         \n\
         Rules:\n\
         - Leave code untouched, both fenced (```) and inline (`).\n\
         - Copy every marker of the form |||NAME||| or |||SPACES_N||| exactly; they stand for whitespace.\n\
         - Keep markdown formatting markers such as **, *, <u> and headings as they are.\n\
         - Translate only the readable prose.\n\
         - If the text is already English or Polish, still return both versions.\n\
         \n\
         Answer with JSON: {{\"en\": \"...\", \"pl\": \"...\"}}\n\
         \n\
         Text:\n\
         {encoded}\n"
    )
}

/// Extract `{en, pl}` from a `generateContent` response body.
///
/// # Errors
///
/// [`TranslateError::EmptyResponse`] when no candidate carries text,
/// [`TranslateError::ApiParse`] when the body or the candidate JSON is invalid.
pub fn parse_response(body: &str) -> Result<TranslatedText, TranslateError> {
    let root: Value = serde_json::from_str(body).map_err(|e| TranslateError::ApiParse(e.to_string()))?;
    let text: String = root
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .map(|parts| parts.iter().filter_map(|p| p.get("text").and_then(Value::as_str)).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(TranslateError::EmptyResponse);
    }
    serde_json::from_str::<TranslatedText>(&text).map_err(|e| TranslateError::ApiParse(e.to_string()))
}
