use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::AppConfig;
use crate::engine::gemini_types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::engine::prompt_builder::CopyPrompt;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to generation backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("generation backend error: {0}")]
    Api(String),
}

/// A structured-generation service. One call per prompt, raw text back.
pub trait CopyBackend: Send {
    fn generate(&self, prompt: &CopyPrompt) -> Result<String, BackendError>;
}

pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::from_parts(
            builder.build()?,
            &config.api_base,
            &config.model,
            &config.api_key,
        ))
    }

    fn from_parts(client: Client, api_base: &str, model: &str, api_key: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/{}:generateContent",
            self.api_base,
            Self::model_name(&self.model)
        )
    }

    fn build_request(prompt: &CopyPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.text.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: prompt.schema.clone(),
            },
        }
    }

    /// Text of the first candidate. Empty when the backend produced nothing.
    fn extract_text(result: &GenerateContentResponse) -> String {
        let Some(candidate) = result.candidates.as_ref().and_then(|c| c.first()) else {
            let reason = result
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
                .unwrap_or("none");
            tracing::warn!(block_reason = reason, "backend returned no candidates");
            return String::new();
        };

        let text: String = candidate
            .content
            .iter()
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() {
            tracing::warn!(
                finish_reason = candidate.finish_reason.as_deref().unwrap_or("none"),
                "candidate carried no text"
            );
        }

        text
    }
}

impl CopyBackend for GeminiClient {
    fn generate(&self, prompt: &CopyPrompt) -> Result<String, BackendError> {
        let request = Self::build_request(prompt);

        tracing::info!(model = %self.model, prompt_chars = prompt.text.chars().count(), "requesting event copy");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let result: GenerateContentResponse = response.json()?;

        if let Some(err) = result.error.as_ref() {
            return Err(BackendError::Api(err.message.clone()));
        }

        Ok(Self::extract_text(&result))
    }
}
