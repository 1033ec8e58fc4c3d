//! Error types for the compass patcher.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while patching a snapshot.
#[derive(Debug, Error)]
pub enum PatchError {
    /// An angle argument could not be parsed as a number.
    #[error("invalid {name} value '{value}': expected a floating-point number")]
    InvalidAngle { name: &'static str, value: String },

    /// An angle was NaN or infinite, which JSON cannot represent.
    #[error("{name} must be a finite number, got {value}")]
    NonFiniteAngle { name: &'static str, value: f64 },

    /// The input file could not be read.
    #[error("failed to read {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file is not valid JSON.
    #[error("{} is not valid JSON", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document has no `"compass"` mapping at its root.
    #[error("document has no \"compass\" object")]
    MissingCompass,

    /// The patched document could not be rendered as JSON.
    #[error("failed to serialize snapshot")]
    Serialize(#[source] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
