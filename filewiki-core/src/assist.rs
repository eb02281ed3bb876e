//! Assist Client - free-form questions about file formats
//!
//! Wraps one generative-text endpoint (Gemini `generateContent`). Each call
//! sends a single fixed-template prompt and returns display text. Failures
//! never reach the caller: they are logged and replaced by a localized
//! message.
//!
//! Whether the client can talk to the API at all is decided once, when it is
//! constructed. Without a credential it stays [disabled](AssistClient::is_configured)
//! for its whole lifetime and answers every call with
//! [`NOT_CONFIGURED_MESSAGE`].

use crate::{ExtensionRecord, FileWikiError, Result};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error, warn};

/// The only environment variable read by FileWiki
pub const API_KEY_ENV: &str = "API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Returned by a disabled client
pub const NOT_CONFIGURED_MESSAGE: &str = "Извините, API ключ не настроен.";

/// Returned when the model answers with no text
pub const EMPTY_RESPONSE_MESSAGE: &str = "Не удалось получить ответ от модели.";

/// Returned on any transport, API or decoding failure
pub const FAILURE_MESSAGE: &str = "Произошла ошибка при обращении к ИИ. Попробуйте позже.";

/// Logged once when a client is created without a credential
pub const DISABLED_WARNING: &str = "No API key configured. AI features will be disabled.";

/// Placeholder used in the prompt when no context is given
pub const NO_CONTEXT: &str = "Нет контекста";

/// Configuration for the Assist Client
#[derive(Clone)]
pub struct AssistConfig {
    /// API credential; `None` disables the client
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// API base URL, without trailing `/models/...`
    pub endpoint: String,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AssistConfig {
    /// Default configuration with the credential taken from `API_KEY`
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        if api_key.is_none() {
            debug!("{} environment variable is not set", API_KEY_ENV);
        }
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl fmt::Debug for AssistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

enum ClientState {
    Configured { http: reqwest::Client, api_key: String },
    Disabled,
}

/// Stateless question/answer client
pub struct AssistClient {
    state: ClientState,
    model: String,
    endpoint: String,
}

impl AssistClient {
    /// Create a client. A missing or blank key yields a disabled client and a warning.
    pub fn new(config: AssistConfig) -> Self {
        let AssistConfig { api_key, model, endpoint } = config;

        let state = match api_key.filter(|key| !key.trim().is_empty()) {
            None => {
                warn!("{}", DISABLED_WARNING);
                ClientState::Disabled
            }
            Some(api_key) => match reqwest::Client::builder().build() {
                Ok(http) => ClientState::Configured { http, api_key },
                Err(e) => {
                    warn!(error = %e, "Failed to create HTTP client. AI features will be disabled.");
                    ClientState::Disabled
                }
            },
        };

        Self { state, model, endpoint }
    }

    /// Client configured from the environment
    pub fn from_env() -> Self {
        Self::new(AssistConfig::from_env())
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, ClientState::Configured { .. })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask a question, optionally with context. Always resolves to display text.
    pub async fn ask(&self, question: &str, context: Option<&str>) -> String {
        let (http, api_key) = match &self.state {
            ClientState::Disabled => return NOT_CONFIGURED_MESSAGE.to_string(),
            ClientState::Configured { http, api_key } => (http, api_key),
        };

        let prompt = build_prompt(question, context);

        match self.generate(http, api_key, &prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => EMPTY_RESPONSE_MESSAGE.to_string(),
            Err(e) => {
                error!(error = %e, model = %self.model, "Assist API error");
                FAILURE_MESSAGE.to_string()
            }
        }
    }

    async fn generate(&self, http: &reqwest::Client, api_key: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );

        let body = serde_json::json!({
            "contents": [
                { "role": "user", "parts": [ { "text": prompt } ] }
            ]
        });

        debug!(%url, prompt_len = prompt.len(), "Sending assist request");

        let response = http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await?;

        if !status.is_success() {
            return Err(FileWikiError::Api {
                status: status.as_u16(),
                body: payload,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&payload)?;
        Ok(parsed.text())
    }
}

impl fmt::Debug for AssistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistClient")
            .field("configured", &self.is_configured())
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Fill the fixed prompt template. Empty context counts as no context.
pub fn build_prompt(question: &str, context: Option<&str>) -> String {
    let context = context.filter(|c| !c.is_empty()).unwrap_or(NO_CONTEXT);
    format!(
        "Ты эксперт по файловым системам и расширениям.\n\
         Ответь на вопрос пользователя максимально точно и полезно.\n\
         Контекст (если есть): {context}.\n\
         Вопрос пользователя: {question}\n\
         \n\
         Отвечай на русском языке. Будь краток и технически точен.\n"
    )
}

/// Context line describing a catalog record
pub fn record_context(record: &ExtensionRecord) -> String {
    format!(
        "Файл {} ({}), категория: {}. {}",
        record.extension,
        record.display_name,
        record.category.label(),
        record.short_description
    )
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
