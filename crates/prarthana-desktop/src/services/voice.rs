//! Optional voice-search capability.
//!
//! Disabled unless a recognition endpoint is configured in the
//! environment. When enabled, a one-shot recognition request turns spoken
//! audio into ranked transcript alternatives; the caller writes the top
//! alternative into the search field. Not wired to a visible trigger yet.
#![allow(dead_code)] // Dormant capability; the UI trigger lands with microphone capture.

use reqwest::{multipart, Client, Request, StatusCode};
use serde::Deserialize;
use thiserror::Error;

const ENV_VOICE_API_KEY: &str = "PRARTHANA_VOICE_API_KEY";
const ENV_VOICE_BASE_URL: &str = "PRARTHANA_VOICE_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_LANGUAGE: &str = "hi-IN";

/// One-shot recognition session settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognitionConfig {
    /// Spoken-language tag sent with each request
    pub language: String,
    /// Whether partial results are requested (always off for one-shot)
    pub interim_results: bool,
    /// How many ranked alternatives to request
    pub max_alternatives: u32,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum VoiceSearchMode {
    Disabled,
    Remote { base_url: String, api_key: String },
}

/// Basic configuration status for voice search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceConfigStatus {
    pub enabled: bool,
    pub language: String,
    pub max_alternatives: u32,
}

/// Errors from voice-search setup and requests.
#[derive(Debug, Error)]
pub enum VoiceSearchError {
    #[error("Voice search is not configured. Set PRARTHANA_VOICE_API_KEY to enable it.")]
    NotConfigured,
    #[error("Invalid voice search configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Recognition API error: {0}")]
    Api(String),
}

type VoiceSearchResult<T> = Result<T, VoiceSearchError>;

/// Ranked transcript alternatives from one recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub alternatives: Vec<String>,
}

impl Transcript {
    /// The top-ranked alternative, if the session produced any
    #[must_use]
    pub fn top(&self) -> Option<&str> {
        self.alternatives.first().map(String::as_str)
    }
}

#[derive(Clone)]
pub struct VoiceSearchService {
    client: Client,
    mode: VoiceSearchMode,
    config: RecognitionConfig,
}

impl VoiceSearchService {
    /// Build the voice-search service from the environment.
    ///
    /// Without `PRARTHANA_VOICE_API_KEY` the service is disabled and every
    /// recognition attempt is a no-op at the call site.
    pub fn from_env() -> VoiceSearchResult<Self> {
        let api_key = std::env::var(ENV_VOICE_API_KEY)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let mode = if let Some(api_key) = api_key {
            let base_url = std::env::var(ENV_VOICE_BASE_URL)
                .ok()
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

            if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
                return Err(VoiceSearchError::InvalidConfiguration(
                    "PRARTHANA_VOICE_BASE_URL must start with http:// or https://",
                ));
            }

            VoiceSearchMode::Remote { base_url, api_key }
        } else {
            VoiceSearchMode::Disabled
        };

        Ok(Self {
            client: Client::builder().build()?,
            mode,
            config: RecognitionConfig::default(),
        })
    }

    #[must_use]
    pub fn config_status(&self) -> VoiceConfigStatus {
        VoiceConfigStatus {
            enabled: matches!(self.mode, VoiceSearchMode::Remote { .. }),
            language: self.config.language.clone(),
            max_alternatives: self.config.max_alternatives,
        }
    }

    /// Run one recognition session over captured audio (when configured).
    ///
    /// Errors are for the caller to log; they never surface in the UI.
    pub async fn recognize_audio_bytes(
        &self,
        file_name: &str,
        mime_type: &str,
        audio_bytes: Vec<u8>,
    ) -> VoiceSearchResult<Transcript> {
        if file_name.trim().is_empty() {
            return Err(VoiceSearchError::InvalidConfiguration(
                "file_name must not be empty",
            ));
        }
        if !mime_type.trim().to_ascii_lowercase().starts_with("audio/") {
            return Err(VoiceSearchError::InvalidConfiguration(
                "mime_type must start with audio/",
            ));
        }
        if audio_bytes.is_empty() {
            return Err(VoiceSearchError::InvalidConfiguration(
                "audio payload must not be empty",
            ));
        }

        let request = self.build_recognition_request(file_name, mime_type, audio_bytes)?;
        let response = self.client.execute(request).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(VoiceSearchError::Api(
                "Unauthorized recognition request (check the configured API key)".to_string(),
            ));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceSearchError::Api(format!(
                "Recognition request failed with {status}: {body}"
            )));
        }

        let payload: RecognitionResponse = response.json().await?;
        let alternatives: Vec<String> = payload
            .alternatives
            .into_iter()
            .take(self.config.max_alternatives as usize)
            .map(|alternative| alternative.transcript.trim().to_string())
            .filter(|transcript| !transcript.is_empty())
            .collect();

        Ok(Transcript { alternatives })
    }

    fn build_recognition_request(
        &self,
        file_name: &str,
        mime_type: &str,
        audio_bytes: Vec<u8>,
    ) -> VoiceSearchResult<Request> {
        let (base_url, api_key) = match &self.mode {
            VoiceSearchMode::Disabled => return Err(VoiceSearchError::NotConfigured),
            VoiceSearchMode::Remote { base_url, api_key } => (base_url, api_key),
        };

        let endpoint = format!("{base_url}/v1/audio/recognize");
        let file_part = multipart::Part::bytes(audio_bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(VoiceSearchError::Http)?;

        let form = multipart::Form::new()
            .text("language", self.config.language.clone())
            .text("max_alternatives", self.config.max_alternatives.to_string())
            .part("audio", file_part);

        self.client
            .post(endpoint)
            .bearer_auth(api_key)
            .multipart(form)
            .build()
            .map_err(VoiceSearchError::Http)
    }
}

#[derive(Debug, Deserialize)]
struct RecognitionResponse {
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognitionAlternative {
    transcript: String,
}
