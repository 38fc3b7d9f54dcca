//! Truncation of provider response bodies kept in errors.

/// Longest body excerpt kept in an error.
pub(crate) const MAX_BODY_CHARS: usize = 500;

/// The first [`MAX_BODY_CHARS`] characters of a response body.
pub(crate) fn excerpt(body: &str) -> String {
    body.chars().take(MAX_BODY_CHARS).collect()
}
