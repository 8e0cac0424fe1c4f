use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use ns_core::{Error, RemoteSummarizer, Result, Settings};

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that produces concise, factual summaries of text and news articles.";

const TEMPERATURE: f32 = 0.2;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

pub fn user_prompt(text: &str, max_sentences: usize) -> String {
    format!(
        "Summarize the following text in at most {} sentences. \
         Keep key facts, names, and numbers. Return only the summary.\n\nText:\n{}",
        max_sentences, text
    )
}

/// Chat-completions client for OpenAI and compatible endpoints.
pub struct OpenAiModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl fmt::Debug for OpenAiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenAiModel {
    pub fn new(api_key: String, model: String, base_url: String, timeout: Duration) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::Config("OpenAI API key is required".to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            timeout,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings
            .openai_api_key
            .clone()
            .ok_or_else(|| Error::Config("OpenAI API key is required".to_string()))?;
        Self::new(
            api_key,
            settings.openai_model.clone(),
            settings.openai_base_url.clone(),
            settings.remote_timeout,
        )
    }

    async fn request_summary(&self, text: &str, max_sentences: usize) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt(text, max_sentences),
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteUnavailable(format!("{}: {}", status, body)));
        }

        let response = response.json::<ChatResponse>().await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(Error::RemoteUnavailable("empty completion".to_string()));
        }
        Ok(content)
    }
}

#[async_trait]
impl RemoteSummarizer for OpenAiModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn try_summarize(&self, text: &str, max_sentences: usize) -> Option<String> {
        match tokio::time::timeout(self.timeout, self.request_summary(text, max_sentences)).await {
            Ok(Ok(summary)) => Some(summary),
            Ok(Err(e)) => {
                tracing::warn!(model = %self.model, error = %e, "Remote summarization failed, falling back");
                None
            }
            Err(_) => {
                tracing::warn!(model = %self.model, timeout = ?self.timeout, "Remote summarization timed out, falling back");
                None
            }
        }
    }
}
