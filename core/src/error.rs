//! Error types for the products client.
//!
//! # Design
//! Every operation reports failure through `FetchError`. The variant records
//! where the exchange broke: before a response arrived (`Transport`), after a
//! non-2xx status (`Rejected`), or while converting JSON in either direction
//! (`Decode`, `Encode`). `Rejected` keeps the server's body so a caller can
//! read validation messages.

/// Errors produced by `ProductsEndpoint`, transports, and `ProductsClient`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The network exchange could not be completed. Holds the underlying
    /// failure's message unchanged.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Rejected { status: u16, body: String },

    /// The response body was not the JSON the operation expects.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

/// Coarse classification of a `FetchError`, for callers that only branch on
/// the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Rejected,
    Decode,
    Encode,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::Rejected { .. } => FetchErrorKind::Rejected,
            FetchError::Decode(_) => FetchErrorKind::Decode,
            FetchError::Encode(_) => FetchErrorKind::Encode,
        }
    }

    /// HTTP status of a rejected exchange.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_is_passed_through() {
        let err = FetchError::Transport("Network error".to_string());
        assert_eq!(err.to_string(), "Network error");
        assert_eq!(err.kind(), FetchErrorKind::Transport);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn rejected_reports_status() {
        let err = FetchError::Rejected {
            status: 400,
            body: r#"{"message":"Validation failed"}"#.to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 400");
        assert_eq!(err.kind(), FetchErrorKind::Rejected);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn decode_and_encode_have_no_status() {
        assert_eq!(FetchError::Decode("eof".to_string()).status(), None);
        assert_eq!(FetchError::Encode("key".to_string()).kind(), FetchErrorKind::Encode);
    }
}
