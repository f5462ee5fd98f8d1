use reqwest::Response;
use serde::Deserialize;

use crate::error::SendError;

/// Status line and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl ApiResponse {
    /// Drains the body as text whatever the status.
    pub async fn read(response: Response) -> Result<Self, SendError> {
        let status = response.status();
        let body = response.text().await?;

        Ok(Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_result(self) -> Result<String, SendError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(SendError::ApiRequestFailed {
                status: self.status,
                reason: self.reason,
                body: self.body,
            })
        }
    }
}

/// Success body of the Cloud API `/messages` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    pub messaging_product: Option<String>,

    #[serde(default)]
    pub contacts: Vec<Contact>,

    #[serde(default)]
    pub messages: Vec<SentMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub input: String,
    pub wa_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub id: String,
    pub message_status: Option<String>,
}

impl SendMessageResponse {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn message_id(&self) -> Option<&str> {
        self.messages.first().map(|m| m.id.as_str())
    }
}
