//! Load, patch and store a snapshot in one run.

use std::path::{Path, PathBuf};

use crate::document::SnapshotDocument;
use crate::orientation::Orientation;
use crate::Result;

/// Options for a single patch run.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Snapshot to read.
    pub input: PathBuf,
    /// Destination of the patched snapshot.
    pub output: PathBuf,
    /// Angles to write into the compass record.
    pub orientation: Orientation,
}

impl PatchOptions {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        orientation: Orientation,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            orientation,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
    /// Orientation found in the input, if it had one.
    pub previous: Option<Orientation>,
    /// Orientation written to the output.
    pub applied: Orientation,
    pub output: PathBuf,
}

/// Runs the load, apply, store sequence.
///
/// Nothing is written unless the input was read, parsed and patched; the
/// input file is never modified unless it is also the output.
pub struct CompassPatcher {
    options: PatchOptions,
}

impl CompassPatcher {
    pub fn new(options: PatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PatchOptions {
        &self.options
    }

    pub fn patch(&self) -> Result<PatchReport> {
        let PatchOptions {
            input,
            output,
            orientation,
        } = &self.options;

        let mut document = SnapshotDocument::load(input)?;
        let previous = document.orientation();
        match previous {
            Some(previous) => {
                tracing::info!(input = %input.display(), "previous compass: {previous}")
            }
            None => tracing::info!(input = %input.display(), "no previous orientation"),
        }
        for (primary, synonym) in document.diverged_pairs() {
            tracing::debug!(primary, synonym, "synonym pair disagreed before patch");
        }

        document.apply(orientation)?;
        document.store(output)?;

        tracing::info!(output = %output.display(), "updated compass: {orientation}");
        Ok(PatchReport {
            previous,
            applied: *orientation,
            output: output.clone(),
        })
    }
}

/// Patch the compass of the snapshot at `input` and write it to `output`.
pub fn patch(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    azimuth: f64,
    elevation: f64,
    bank: f64,
) -> Result<PatchReport> {
    let orientation = Orientation::new(azimuth, elevation, bank)?;
    let options = PatchOptions::new(input.as_ref(), output.as_ref(), orientation);
    CompassPatcher::new(options).patch()
}
