use thiserror::Error;

/// Failure modes of a template send.
///
/// `InvalidArgument` and `Serialization` are raised before any network
/// activity. `ApiRequestFailed` means the exchange completed with a non-2xx
/// status. `Transport` and `Cancelled` come from the transport layer or the
/// caller's cancellation handle and are passed through untouched.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Invalid argument `{parameter}`: {message}")]
    InvalidArgument {
        parameter: &'static str,
        message: String,
    },

    #[error("WhatsApp API request failed with status {status} {reason}: {body}")]
    ApiRequestFailed {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request was cancelled before a response was received")]
    Cancelled,
}

impl SendError {
    pub fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// HTTP status of a failed API exchange, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequestFailed { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_failure_message_carries_status_reason_and_body() {
        let err = SendError::ApiRequestFailed {
            status: 401,
            reason: "Unauthorized".to_string(),
            body: r#"{"error":"invalid token"}"#.to_string(),
        };

        assert_eq!(
            err.to_string(),
            r#"WhatsApp API request failed with status 401 Unauthorized: {"error":"invalid token"}"#
        );
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn invalid_argument_names_parameter() {
        let err = SendError::invalid_argument("access_token", "must not be empty");

        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument `access_token`: must not be empty"
        );
        assert_eq!(err.status(), None);
    }
}
