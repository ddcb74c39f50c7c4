//! Client error taxonomy

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: DNS, connect, TLS, body read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx answer to a read call
    #[error("server returned HTTP {status}")]
    Server { status: u16 },

    /// Non-2xx answer to a create call
    #[error("incident rejected (HTTP {status}){}", fmt_message(.message))]
    Validation { status: u16, message: String },

    /// 2xx answer whose body doesn't have the expected shape
    #[error("malformed response: {0}")]
    Decode(#[from] DecodeError),
}

fn fmt_message(message: &str) -> String {
    if message.trim().is_empty() {
        String::new()
    } else {
        format!(": {}", message.trim())
    }
}

impl ClientError {
    /// HTTP status if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status } | Self::Validation { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Body decoding failure at the client boundary
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("body is not JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON type name for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_includes_body() {
        let err = ClientError::Validation {
            status: 400,
            message: "name too long\n".into(),
        };
        assert_eq!(err.to_string(), "incident rejected (HTTP 400): name too long");
        assert_eq!(err.status(), Some(400));

        let err = ClientError::Validation {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "incident rejected (HTTP 500)");
    }

    #[test]
    fn server_error_display() {
        assert_eq!(
            ClientError::Server { status: 503 }.to_string(),
            "server returned HTTP 503"
        );
    }
}
