use thiserror::Error;

/// Errors returned by [`crate::GeminiClient`].
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `status` is the HTTP status, `api_status` the Google RPC status (e.g. `NOT_FOUND`).
    #[error("Gemini API error ({status}): {message}")]
    Api {
        status: u16,
        api_status: Option<String>,
        message: String,
    },

    #[error("Failed to decode Gemini response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prompt blocked by Gemini: {0}")]
    Blocked(String),
}

impl GeminiError {
    /// True when the requested model does not exist or does not support the method for this key.
    pub fn is_not_found(&self) -> bool {
        match self {
            GeminiError::Api {
                status, api_status, ..
            } => *status == 404 || api_status.as_deref() == Some("NOT_FOUND"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_by_http_status() {
        let e = GeminiError::Api {
            status: 404,
            api_status: None,
            message: "models/foo is not found".to_string(),
        };
        assert!(e.is_not_found());
    }

    #[test]
    fn test_not_found_by_rpc_status() {
        let e = GeminiError::Api {
            status: 400,
            api_status: Some("NOT_FOUND".to_string()),
            message: String::new(),
        };
        assert!(e.is_not_found());
    }

    #[test]
    fn test_message_text_alone_is_not_classified() {
        let e = GeminiError::Api {
            status: 500,
            api_status: Some("INTERNAL".to_string()),
            message: "backend not found".to_string(),
        };
        assert!(!e.is_not_found());
        assert!(!GeminiError::Blocked("SAFETY".to_string()).is_not_found());
    }
}
