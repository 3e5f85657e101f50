//! Error types for the export layer.
//!
//! Export failures propagate to the caller unchanged; there is no retry
//! and no partial-write recovery. This is an offline batch tool: a
//! truncated file from a mid-write crash is re-created on the next run.

/// Errors that can occur while writing snapshot documents.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output path could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
