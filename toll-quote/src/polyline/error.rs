//! Polyline codec error types.

/// Errors from decoding or encoding a compact polyline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolylineError {
    /// Input is not a valid encoding (bad character, truncated value,
    /// bad header, partial coordinate, out-of-range coordinate).
    #[error("malformed polyline: {reason}")]
    Malformed { reason: String },

    /// A route with zero points cannot be encoded.
    #[error("cannot encode an empty geometry")]
    EmptyGeometry,

    /// Requested precision is outside what the format can carry.
    #[error("precision {0} out of range (0-15)")]
    InvalidPrecision(u8),
}

impl PolylineError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PolylineError::Malformed {
            reason: reason.into(),
        }
    }
}
