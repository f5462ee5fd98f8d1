use reqwest::{Client, header::CONTENT_TYPE};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::debug;

use crate::{
    error::SendError,
    models::{
        response::ApiResponse,
        template::{TEMPLATE_NAME, TemplateRequest},
        validation::validate_required,
    },
};

pub const GRAPH_API_BASE_URL: &str = "https://graph.facebook.com/v20.0/";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Sends the `diagnosticMKt` template through the WhatsApp Cloud API.
///
/// The sender holds no transport of its own; the caller passes a shared
/// `reqwest::Client` on every call.
#[derive(Debug, Clone)]
pub struct TemplateMessageSender {
    base_url: String,
}

impl Default for TemplateMessageSender {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateMessageSender {
    pub fn new() -> Self {
        Self::with_base_url(GRAPH_API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `phone_number_id` is concatenated as-is; callers own its sanitizing.
    pub fn messages_url(&self, phone_number_id: &str) -> String {
        format!("{}{}/messages", self.base_url, phone_number_id)
    }

    /// Validates, posts the template once and returns the raw response body.
    ///
    /// A value received on `cancel` before the response body has been read
    /// ends the call with [`SendError::Cancelled`]. A closed channel never
    /// cancels.
    pub async fn send(
        &self,
        connection: Option<&Client>,
        phone_number_id: &str,
        access_token: &str,
        request: &TemplateRequest,
        cancel: &mut broadcast::Receiver<()>,
    ) -> Result<String, SendError> {
        let http_client = connection
            .ok_or_else(|| SendError::invalid_argument("connection", "HTTP client is required"))?;

        validate_required("phone_number_id", phone_number_id)?;
        validate_required("access_token", access_token)?;
        validate_required("to_phone_number", &request.to_phone_number)?;

        let url = self.messages_url(phone_number_id);
        let payload = serde_json::to_vec(&request.to_message())?;

        debug!(
            phone_number_id,
            template = TEMPLATE_NAME,
            language = %request.language_code,
            "Sending WhatsApp template message"
        );

        let exchange = async {
            let response = http_client
                .post(&url)
                .bearer_auth(access_token)
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(payload)
                .send()
                .await?;

            let response = ApiResponse::read(response).await?;
            Ok::<_, SendError>(response)
        };

        let response = tokio::select! {
            biased;

            _ = cancelled(cancel) => {
                debug!(phone_number_id, "WhatsApp template send cancelled");
                return Err(SendError::Cancelled);
            }
            response = exchange => response?,
        };

        debug!(
            status = response.status,
            body_len = response.body.len(),
            "WhatsApp API responded"
        );

        response.into_result()
    }
}

async fn cancelled(cancel: &mut broadcast::Receiver<()>) {
    match cancel.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => {}
        Err(RecvError::Closed) => std::future::pending().await,
    }
}
