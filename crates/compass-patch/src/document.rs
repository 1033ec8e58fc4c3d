//! The snapshot document: a generic JSON tree with a typed view of its
//! `"compass"` mapping.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::PatchError;
use crate::orientation::{Orientation, SYNONYM_PAIRS};
use crate::Result;

/// Key of the compass record at the document root.
const COMPASS_KEY: &str = "compass";

/// A parsed snapshot.
///
/// Everything outside the compass record is kept as read, including key order.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotDocument {
    root: Value,
}

impl SnapshotDocument {
    /// Wrap an already parsed JSON tree.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Read and parse the snapshot at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PatchError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        let root: Value = serde_json::from_str(&text).map_err(|source| PatchError::MalformedJson {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded snapshot");
        Ok(Self { root })
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// The compass record, if the root is a mapping that holds one.
    pub fn compass(&self) -> Result<&Map<String, Value>> {
        self.root
            .get(COMPASS_KEY)
            .and_then(Value::as_object)
            .ok_or(PatchError::MissingCompass)
    }

    fn compass_mut(&mut self) -> Result<&mut Map<String, Value>> {
        self.root
            .get_mut(COMPASS_KEY)
            .and_then(Value::as_object_mut)
            .ok_or(PatchError::MissingCompass)
    }

    /// The orientation currently stored under the primary compass keys.
    ///
    /// Returns `None` when the compass is absent or any of azimuth, elevation
    /// and bank is not a number.
    pub fn orientation(&self) -> Option<Orientation> {
        let compass = self.compass().ok()?;
        let angle = |key: &str| compass.get(key).and_then(Value::as_f64);
        Some(Orientation {
            azimuth: angle("azimuth")?,
            elevation: angle("elevation")?,
            bank: angle("bank")?,
        })
    }

    /// Synonym pairs whose two keys currently hold different numbers.
    pub fn diverged_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let Ok(compass) = self.compass() else {
            return Vec::new();
        };
        SYNONYM_PAIRS
            .into_iter()
            .filter(|(primary, synonym)| {
                let a = compass.get(*primary).and_then(Value::as_f64);
                let b = compass.get(*synonym).and_then(Value::as_f64);
                a != b
            })
            .collect()
    }

    /// Overwrite all six compass keys with `orientation`.
    ///
    /// Existing keys keep their position; missing ones are appended.
    pub fn apply(&mut self, orientation: &Orientation) -> Result<()> {
        let compass = self.compass_mut()?;
        for (primary, synonym, angle) in orientation.fields() {
            compass.insert(primary.to_string(), Value::from(angle));
            compass.insert(synonym.to_string(), Value::from(angle));
        }
        Ok(())
    }

    /// Render the document with 2-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root).map_err(PatchError::Serialize)
    }

    /// Write the rendered document to `path`, replacing any existing file.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_pretty_json()?;
        fs::write(path, &json).map_err(|source| PatchError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "stored snapshot");
        Ok(())
    }
}
