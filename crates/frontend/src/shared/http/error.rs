use contracts::shared::ErrorEnvelope;

/// Failure of a single API round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. Displays as the server-provided message only.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to serialize request: {0}")]
    Encode(String),

    #[error("invalid credentials")]
    InvalidCredentials,
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// The message is the `detail` of a JSON error envelope when the body is
    /// one, otherwise the raw body text, otherwise a generic message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            default_message(status)
        } else {
            ErrorEnvelope::parse(body)
                .and_then(|envelope| envelope.message())
                .unwrap_or_else(|| body.to_string())
        };
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn default_message(status: u16) -> String {
    format!("Request failed with status {}", status)
}
