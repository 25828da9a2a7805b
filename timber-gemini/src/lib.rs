mod factory;
mod protocol;

use async_trait::async_trait;
use reqwest::Client;
use timber_core::{AdvisorConfig, AdvisoryError, TextGenerator};
use tracing::debug;

pub use factory::GeminiFactory;
pub use protocol::{GenerateContentRequest, GenerateContentResponse};

/// [`TextGenerator`] backed by the Gemini `generateContent` REST call.
pub struct GeminiGenerator {
    client: Client,
    url: String,
    api_key: Option<String>,
    temperature: f32,
}

impl GeminiGenerator {
    pub fn new(config: &AdvisorConfig) -> Self {
        Self {
            client: Client::new(),
            url: generate_content_url(&config.endpoint, &config.model),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
        }
    }
}

/// `{endpoint}/models/{model}:generateContent`, tolerating a trailing `/`.
pub fn generate_content_url(
    endpoint: &str,
    model: &str,
) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    )
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn backend_name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<Option<String>, AdvisoryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AdvisoryError::MissingCredential("gemini".to_string()))?;

        let body = GenerateContentRequest::new(prompt, self.temperature);
        debug!(url = %self.url, "sending generateContent request");

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdvisoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AdvisoryError::Decode(e.to_string()))?;

        Ok(parsed.text())
    }
}
