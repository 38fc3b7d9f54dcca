//! Toll service error types.

use std::fmt;

/// Error payload returned by the toll service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// JSON error object with at least one of the known fields.
    Structured {
        code: Option<String>,
        value: Option<String>,
        message: Option<String>,
    },
    /// Body that was not a recognisable error object (possibly truncated).
    Raw(String),
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::Structured {
                code,
                value,
                message,
            } => {
                let parts: Vec<String> = [("code", code), ("value", value), ("message", message)]
                    .into_iter()
                    .filter_map(|(name, field)| field.as_ref().map(|v| format!("{name}={v}")))
                    .collect();
                f.write_str(&parts.join(", "))
            }
            ErrorDetail::Raw(text) => f.write_str(text),
        }
    }
}

/// Errors from the toll service.
#[derive(Debug, thiserror::Error)]
pub enum TollError {
    /// The service refused the request (non-success status, or an error
    /// object in place of a result).
    #[error("toll service rejected the request (status {status}): {detail}")]
    Rejected { status: u16, detail: ErrorDetail },

    /// A success response without a usable `route.costs`.
    #[error("malformed toll response: {reason}")]
    MalformedResponse { reason: String, body: String },

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API key contains characters not allowed in a header.
    #[error("invalid API key format")]
    InvalidApiKey,
}

impl TollError {
    /// HTTP status the service answered with, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            TollError::Rejected { status, .. } => Some(*status),
            TollError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Provider error code, when the error body was structured.
    pub fn code(&self) -> Option<&str> {
        match self {
            TollError::Rejected {
                detail: ErrorDetail::Structured { code, .. },
                ..
            } => code.as_deref(),
            _ => None,
        }
    }

    /// Provider error value, when the error body was structured.
    pub fn value(&self) -> Option<&str> {
        match self {
            TollError::Rejected {
                detail: ErrorDetail::Structured { value, .. },
                ..
            } => value.as_deref(),
            _ => None,
        }
    }
}
