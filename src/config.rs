use std::{fmt, time::Duration};

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    clients::whatsapp::{GRAPH_API_BASE_URL, TemplateMessageSender},
    models::template::TemplateRequest,
};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Clone, Deserialize)]
pub struct Config {
    pub whatsapp_phone_number_id: String,
    pub whatsapp_access_token: String,

    #[serde(default = "default_graph_api_base_url")]
    pub graph_api_base_url: String,

    #[serde(default = "default_http_timeout_seconds")]
    pub http_timeout_seconds: u64,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_graph_api_base_url() -> String {
    GRAPH_API_BASE_URL.to_string()
}

fn default_http_timeout_seconds() -> u64 {
    10
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("whatsapp_phone_number_id", &self.whatsapp_phone_number_id)
            .field("whatsapp_access_token", &"<redacted>")
            .field("graph_api_base_url", &self.graph_api_base_url)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;
        Ok(config)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))
    }

    pub fn http_client(&self) -> Result<Client, Error> {
        Client::builder()
            .timeout(Duration::from_secs(self.http_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))
    }

    pub fn sender(&self) -> TemplateMessageSender {
        TemplateMessageSender::with_base_url(self.graph_api_base_url.clone())
    }
}

/// Reads the template variables from `TEMPLATE_*` environment variables.
pub fn load_template_request() -> Result<TemplateRequest, Error> {
    dotenv().ok();

    envy::prefixed("TEMPLATE_")
        .from_env::<TemplateRequest>()
        .map_err(|e| anyhow!("Invalid or missing template variable: {}", e))
}

pub fn template_request_from_vars<I>(vars: I) -> Result<TemplateRequest, Error>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::prefixed("TEMPLATE_")
        .from_iter::<_, TemplateRequest>(vars)
        .map_err(|e| anyhow!("Invalid or missing template variable: {}", e))
}
