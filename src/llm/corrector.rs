//! Core `LlmCorrector` trait and `ApiCorrector` implementation.
//!
//! `ApiCorrector` calls any OpenAI-compatible `/v1/chat/completions` endpoint
//! — Ollama (OpenAI mode), OpenAI, Groq, LM Studio, vLLM, etc.
//! All connection details come from [`LlmConfig`]; nothing is hardcoded.
//!
//! [`MockCorrector`] (available under `#[cfg(test)]`) returns a
//! pre-configured response — useful for unit-testing the pipeline without a
//! running model server.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmConfig;
use crate::llm::prompt::PromptTemplate;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur during LLM correction.
///
/// All variants are recovered inside the pipeline (fallback to the rule-based
/// corrector or a no-op); none reach the caller.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// The adapter is not ready to serve requests (no endpoint configured,
    /// model not loaded).  Expected, not exceptional.
    #[error("LLM backend is not available")]
    InferenceUnavailable,

    /// Transport error, timeout, or a runtime error from the model.
    #[error("LLM inference failed: {0}")]
    InferenceFailed(String),

    /// Sanitization rejected the model output as degenerate (empty, or
    /// runaway generation past the length bound).
    #[error("LLM returned a degenerate response")]
    InvalidResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::InferenceFailed("request timed out".into())
        } else {
            LlmError::InferenceFailed(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// LlmCorrector trait
// ---------------------------------------------------------------------------

/// Async trait for LLM-based text correction.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn LlmCorrector>`).
///
/// The pipeline checks [`available`](Self::available) before calling
/// [`correct`](Self::correct), and treats every response as untrusted — raw
/// output goes through [`sanitize_response`](crate::llm::sanitize_response)
/// before use.
#[async_trait]
pub trait LlmCorrector: Send + Sync {
    /// Whether the backend is ready to serve a correction request.
    fn available(&self) -> bool;

    /// Correct `text` using the mode-specific `template`.
    ///
    /// Returns the model's raw output; sanitization happens at the call site.
    async fn correct(&self, text: &str, template: &PromptTemplate) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiCorrector
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// Works with: Ollama (OpenAI mode), OpenAI, Groq, Together.ai, LM Studio,
/// vLLM — any provider that speaks the OpenAI chat-completions wire format.
///
/// # No hardcoded URLs
/// All connection details (`base_url`, `api_key`, `model`) come exclusively
/// from the [`LlmConfig`] passed to [`ApiCorrector::from_config`].
pub struct ApiCorrector {
    client: reqwest::Client,
    config: LlmConfig,
}

impl ApiCorrector {
    /// Build an `ApiCorrector` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`; a timed-out request surfaces as
    /// [`LlmError::InferenceFailed`].  A default (no-timeout) client is used
    /// as a last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl LlmCorrector for ApiCorrector {
    /// Ready as soon as an endpoint is configured.  Network reachability is
    /// discovered at call time and maps to [`LlmError::InferenceFailed`],
    /// which takes the same fallback path.
    fn available(&self) -> bool {
        !self.config.base_url.is_empty()
    }

    /// Send `text` to the configured OpenAI-compatible endpoint.
    ///
    /// The `Authorization: Bearer …` header is attached **only** when
    /// `config.api_key` is `Some(key)` and `key` is non-empty — safe for
    /// Ollama and other local providers that require no authentication.
    async fn correct(&self, text: &str, template: &PromptTemplate) -> Result<String, LlmError> {
        if !self.available() {
            return Err(LlmError::InferenceUnavailable);
        }

        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": template.system },
                { "role": "user",   "content": template.render(text) }
            ],
            "stream":      false,
            "temperature": self.config.temperature,
            "max_tokens":  512
        });

        let mut req = self.client.post(&url).json(&body);

        // Attach Authorization header only when api_key is a non-empty string.
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::InferenceFailed(format!("response parse: {e}")))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(LlmError::InvalidResponse)?
            .to_string();

        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// MockCorrector  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response without any HTTP.
///
/// ```rust,ignore
/// let llm = MockCorrector::ok("corrected");
/// assert!(llm.available());
/// ```
#[cfg(test)]
pub struct MockCorrector {
    response: Result<String, LlmError>,
    available: bool,
}

#[cfg(test)]
impl MockCorrector {
    /// A mock that is available and always returns `Ok(text)`.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            available: true,
        }
    }

    /// A mock that is available but always returns `Err(error)`.
    pub fn err(error: LlmError) -> Self {
        Self {
            response: Err(error),
            available: true,
        }
    }

    /// A mock that reports itself unavailable.
    pub fn unavailable() -> Self {
        Self {
            response: Err(LlmError::InferenceUnavailable),
            available: false,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl LlmCorrector for MockCorrector {
    fn available(&self) -> bool {
        self.available
    }

    async fn correct(&self, _text: &str, _template: &PromptTemplate) -> Result<String, LlmError> {
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
