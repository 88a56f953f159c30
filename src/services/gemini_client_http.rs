//! Gemini image-editing client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig, GenerationError, Image, Instruction};
use crate::ports::ImageGenerator;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// The API key is read from `api_key_env` on every call, never cached.
#[derive(Clone)]
pub struct HttpGeminiClient {
    endpoint: Url,
    api_key_env: String,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key_env", &self.api_key_env)
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint()?,
            api_key_env: config.api_key_env.clone(),
            client,
        })
    }

    fn api_key(&self) -> Result<String, GenerationError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(GenerationError::MissingCredential { env: self.api_key_env.clone() }),
        }
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl ImageGenerator for HttpGeminiClient {
    fn generate(&self, image: &Image, instruction: &Instruction) -> Result<Image, GenerationError> {
        let api_key = self.api_key()?;

        let api_request = ApiRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: image.mime_type().to_string(),
                            data: image.to_base64(),
                        }),
                        text: None,
                    },
                    Part { inline_data: None, text: Some(instruction.with_output_directive()) },
                ],
            }],
        };

        // Single attempt; a failed generation is re-triggered by the user.
        let response = self.send_request(&api_key, &api_request)?;
        Self::extract_image(response)
    }
}

impl HttpGeminiClient {
    fn send_request(
        &self,
        api_key: &str,
        request: &ApiRequest,
    ) -> Result<ApiResponse, GenerationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| GenerationError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            response
                .json()
                .map_err(|e| GenerationError::Transport(format!("Failed to parse response: {}", e)))
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let error_text = response.text().unwrap_or_default();
            Err(GenerationError::InvalidCredential(format!("{} {}", status.as_u16(), error_text)))
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Err(GenerationError::Transport("Rate limited (429)".into()))
        } else if status.is_server_error() {
            Err(GenerationError::Transport(format!("Server error ({})", status.as_u16())))
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            if error_text.contains("API_KEY_INVALID") || error_text.contains("API key not valid") {
                return Err(GenerationError::InvalidCredential(error_text));
            }
            Err(GenerationError::Transport(format!("API error ({}): {}", status.as_u16(), error_text)))
        }
    }

    fn extract_image(response: ApiResponse) -> Result<Image, GenerationError> {
        let parts: Vec<Part> = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();

        if let Some(inline) = parts.iter().find_map(|p| p.inline_data.as_ref()) {
            return Image::from_base64(&inline.mime_type, &inline.data).map_err(|e| {
                GenerationError::Transport(format!("Failed to decode returned image: {}", e))
            });
        }

        if let Some(text) = parts.iter().find_map(|p| p.text.as_deref()).map(str::trim) {
            if !text.is_empty() {
                tracing::warn!(reason = text, "Model declined to return an image");
                return Err(GenerationError::Refused(text.to_string()));
            }
        }

        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            tracing::warn!(%reason, "Request blocked by the model");
            return Err(GenerationError::Refused(format!("request blocked ({})", reason)));
        }

        Err(GenerationError::EmptyResponse)
    }
}
