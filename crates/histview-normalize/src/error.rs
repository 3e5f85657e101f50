//! Error types for the normalization crate.
//!
//! The only hard failure in normalization is a building record without
//! coordinates: a building that cannot be placed in the 3D scene is
//! rejected loudly rather than dropped silently. All other absent fields
//! degrade to documented defaults.

use crate::profile::SourceKind;

/// Errors that can occur while normalizing a source record.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// A building record arrived without a `[lon, lat]` anchor point.
    #[error("{kind} building record '{name}' has no coordinates")]
    MissingCoordinates {
        /// The source family the record came from.
        kind: SourceKind,
        /// Resolved display name of the offending record.
        name: String,
    },
}
