//! Error taxonomy for the import pipeline.

use thiserror::Error;

/// Fatal import failures.
///
/// Per-row validation problems and rejected batches are not errors in this
/// sense; they are reported as data in `ValidationResult` and
/// `ImportResult`.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The record kind maps to no endpoint. Raised before any network call.
    #[error("Unknown data type: {0}")]
    UnknownKind(String),

    /// The transport call itself failed. Batches already applied
    /// server-side are not rolled back.
    #[error("Upload request failed: {0}")]
    Transport(#[source] anyhow::Error),
}
