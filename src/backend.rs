//! HTTP client for the assistant backend (POST /api/chat/).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Config, SESSION_ID};
use crate::error::FetchError;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    session_id: &'a str,
}

/// Raw response body. Fields the panel does not show are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    reply: String,
    #[serde(default)]
    accuracy: Option<f64>,
}

/// A reply ready for the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub text: String,
    pub confidence: Option<f64>,
}

impl From<ChatResponse> for ChatReply {
    fn from(resp: ChatResponse) -> Self {
        Self {
            text: clean_reply(&resp.reply),
            confidence: resp.accuracy,
        }
    }
}

/// Drop every literal ``` marker and the surrounding whitespace.
pub fn clean_reply(raw: &str) -> String {
    raw.replace("```", "").trim().to_string()
}

#[derive(Clone)]
pub struct ChatClient {
    endpoint: String,
    client: reqwest::Client,
}

impl ChatClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one user message and wait for the assistant's reply.
    pub async fn send(&self, message: &str) -> Result<ChatReply, FetchError> {
        let body = ChatRequest {
            message,
            session_id: SESSION_ID,
        };
        let resp = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status { status, body: text });
        }
        debug!(bytes = text.len(), "reply body received");
        let parsed: ChatResponse = serde_json::from_str(&text)?;
        Ok(parsed.into())
    }
}
