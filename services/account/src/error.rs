//! Custom error types for the account API client

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single call to the account service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (unreachable host, connection reset, bad URL)
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The service answered successfully but the body was not the expected JSON
    #[error("{0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Build a rejection from a status and the raw response body.
    ///
    /// A JSON body carrying an `error` or `message` string contributes that
    /// string; any other non-blank body is used verbatim; otherwise the
    /// status reason phrase is used. That phrase is the canonical one for the
    /// code, not whatever reason text the server put on the status line.
    pub fn rejected(status: StatusCode, body: &str) -> Self {
        let message = rejection_message(status, body);
        ApiError::Rejected { status, message }
    }

    /// HTTP status of a rejection
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(e) | ApiError::Decode(e) => e.status(),
        }
    }
}

fn rejection_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();

    if !body.is_empty() {
        let extracted = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                ["error", "message"].iter().find_map(|key| {
                    json.get(*key)
                        .and_then(serde_json::Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                })
            });

        return extracted.unwrap_or_else(|| body.to_string());
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
