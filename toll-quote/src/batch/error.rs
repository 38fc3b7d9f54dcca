//! Batch runner errors.
//!
//! Only failures that stop the whole run live here; a failed row is
//! recorded in the output file instead.

/// Errors that abort a batch run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Input could not be read or output could not be written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output could not be flushed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required input column is missing from the header row
    #[error("input is missing the '{0}' column")]
    MissingColumn(&'static str),
}
