use thiserror::Error;

/// Why a form submission could not produce a response field.
///
/// These never reach the user: the bridge logs them and shows the
/// endpoint's fixed error message instead.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The backend answered, but outside the 2xx range.
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connecting, sending, or reading the response body failed.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payload could not be encoded, or the response body was not JSON.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response body was the JSON literal `null`, which has no fields to read.
    #[error("Response body is null")]
    NullBody,
}

impl SubmitError {
    /// Short machine-readable label for log fields.
    pub fn code(&self) -> &'static str {
        match self {
            SubmitError::Status { .. } => "HTTP_STATUS",
            SubmitError::Transport(_) => "TRANSPORT",
            SubmitError::Decode(_) => "DECODE",
            SubmitError::NullBody => "NULL_BODY",
        }
    }
}
