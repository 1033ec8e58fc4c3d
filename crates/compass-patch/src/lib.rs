//! Compass patcher for device snapshot documents.
//!
//! A snapshot is an arbitrary JSON document with a `"compass"` mapping. The
//! patcher overwrites the orientation stored there (azimuth, elevation, bank
//! and their synonyms heading, pitch, roll) and leaves every other field as it
//! was read.

mod document;
mod error;
mod orientation;
mod patcher;

pub use document::SnapshotDocument;
pub use error::PatchError;
pub use orientation::{Orientation, SYNONYM_PAIRS};
pub use patcher::{patch, CompassPatcher, PatchOptions, PatchReport};

/// Result type for patch operations.
pub type Result<T> = std::result::Result<T, PatchError>;
