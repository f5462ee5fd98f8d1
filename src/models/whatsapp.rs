use serde::{Deserialize, Serialize};

pub const MESSAGING_PRODUCT: &str = "whatsapp";
pub const MESSAGE_TYPE: &str = "template";

/// Top-level body of a Cloud API `/messages` template send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMessage {
    pub messaging_product: String,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub template: Template,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub language: Language,
    pub components: [Component; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Header { parameters: [Parameter; 1] },
    Body { parameters: [Parameter; 5] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Parameter {
    Document { document: Document },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub link: String,
    pub filename: String,
}

impl Parameter {
    pub fn text(value: impl Into<String>) -> Self {
        Parameter::Text { text: value.into() }
    }

    pub fn document(link: impl Into<String>, filename: impl Into<String>) -> Self {
        Parameter::Document {
            document: Document {
                link: link.into(),
                filename: filename.into(),
            },
        }
    }
}
