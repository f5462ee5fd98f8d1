use serde::{Deserialize, Serialize};

use crate::models::whatsapp::{
    Component, Language, MESSAGE_TYPE, MESSAGING_PRODUCT, Parameter, Template, TemplateMessage,
};

/// Approved template this crate sends.
pub const TEMPLATE_NAME: &str = "diagnosticMKt";

/// Header attachment baked into every message.
pub const DOCUMENT_LINK: &str = "https://assets.diagnostic-offers.in/whatsapp/diagnostic_offer.pdf";
pub const DOCUMENT_FILENAME: &str = "Diagnostic_Offer.pdf";

pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Per-call inputs of the `diagnosticMKt` template.
///
/// The five text values and the language code are passed through as given;
/// only the recipient is checked, and only when the message is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRequest {
    pub to_phone_number: String,
    pub customer_name: String,
    pub doctor_consultation_discount: String,
    pub doctor_coupon_code: String,
    pub health_checkup_discount: String,
    pub diagnostic_coupon_code: String,

    #[serde(default = "default_language_code")]
    pub language_code: String,
}

fn default_language_code() -> String {
    DEFAULT_LANGUAGE_CODE.to_string()
}

impl TemplateRequest {
    pub fn new(
        to_phone_number: impl Into<String>,
        customer_name: impl Into<String>,
        doctor_consultation_discount: impl Into<String>,
        doctor_coupon_code: impl Into<String>,
        health_checkup_discount: impl Into<String>,
        diagnostic_coupon_code: impl Into<String>,
    ) -> Self {
        Self {
            to_phone_number: to_phone_number.into(),
            customer_name: customer_name.into(),
            doctor_consultation_discount: doctor_consultation_discount.into(),
            doctor_coupon_code: doctor_coupon_code.into(),
            health_checkup_discount: health_checkup_discount.into(),
            diagnostic_coupon_code: diagnostic_coupon_code.into(),
            language_code: default_language_code(),
        }
    }

    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    pub fn to_message(&self) -> TemplateMessage {
        let header = Component::Header {
            parameters: [Parameter::document(DOCUMENT_LINK, DOCUMENT_FILENAME)],
        };

        // Positional: the template body references {{1}}..{{5}} in this order.
        let body = Component::Body {
            parameters: [
                Parameter::text(&self.customer_name),
                Parameter::text(&self.doctor_consultation_discount),
                Parameter::text(&self.doctor_coupon_code),
                Parameter::text(&self.health_checkup_discount),
                Parameter::text(&self.diagnostic_coupon_code),
            ],
        };

        TemplateMessage {
            messaging_product: MESSAGING_PRODUCT.to_string(),
            to: self.to_phone_number.clone(),
            message_type: MESSAGE_TYPE.to_string(),
            template: Template {
                name: TEMPLATE_NAME.to_string(),
                language: Language {
                    code: self.language_code.clone(),
                },
                components: [header, body],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn sample_request() -> TemplateRequest {
        TemplateRequest::new(
            "+919876543210",
            "Asha",
            "20%",
            "DOC20",
            "15%",
            "DIAG15",
        )
    }

    fn serialized(request: &TemplateRequest) -> Value {
        let text = serde_json::to_string(&request.to_message()).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn payload_has_fixed_envelope() {
        let body = serialized(&sample_request());

        assert_eq!(body["messaging_product"], "whatsapp");
        assert_eq!(body["type"], "template");
        assert_eq!(body["to"], "+919876543210");
        assert_eq!(body["template"]["name"], "diagnosticMKt");
        assert_eq!(body["template"]["language"]["code"], "en");
    }

    #[test]
    fn language_code_is_overridable() {
        let body = serialized(&sample_request().with_language("hi"));

        assert_eq!(body["template"]["language"]["code"], "hi");
    }

    #[test]
    fn components_are_header_then_body() {
        let body = serialized(&sample_request());
        let components = body["template"]["components"].as_array().unwrap();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0]["type"], "header");
        assert_eq!(components[1]["type"], "body");
    }

    #[test]
    fn header_has_single_constant_document() {
        let other = TemplateRequest::new("1", "", "", "", "", "").with_language("");

        for request in [sample_request(), other] {
            let body = serialized(&request);
            let header = &body["template"]["components"][0];

            assert_eq!(
                header["parameters"],
                json!([{
                    "type": "document",
                    "document": {
                        "link": DOCUMENT_LINK,
                        "filename": DOCUMENT_FILENAME,
                    }
                }])
            );
        }
    }

    #[test]
    fn body_has_five_text_parameters_in_order() {
        let body = serialized(&sample_request());
        let parameters = body["template"]["components"][1]["parameters"]
            .as_array()
            .unwrap();

        assert_eq!(parameters.len(), 5);
        assert!(parameters.iter().all(|p| p["type"] == "text"));

        let texts: Vec<&str> = parameters
            .iter()
            .map(|p| p["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, ["Asha", "20%", "DOC20", "15%", "DIAG15"]);
    }

    #[test]
    fn empty_text_values_pass_through() {
        let request = TemplateRequest::new("+15550001111", "", "", "", "", "");
        let body = serialized(&request);

        let parameters = body["template"]["components"][1]["parameters"]
            .as_array()
            .unwrap();
        assert_eq!(parameters.len(), 5);
        assert!(parameters.iter().all(|p| p["text"] == ""));
    }

    #[test]
    fn recipient_is_not_normalized() {
        let request = TemplateRequest::new(" 98765 43210 ", "a", "b", "c", "d", "e");
        let body = serialized(&request);

        assert_eq!(body["to"], " 98765 43210 ");
    }

    #[test]
    fn deserialized_request_defaults_language() {
        let request: TemplateRequest = serde_json::from_value(json!({
            "to_phone_number": "+15550001111",
            "customer_name": "Sam",
            "doctor_consultation_discount": "10%",
            "doctor_coupon_code": "DOC10",
            "health_checkup_discount": "5%",
            "diagnostic_coupon_code": "DIAG5",
        }))
        .unwrap();

        assert_eq!(request.language_code, "en");
    }
}
