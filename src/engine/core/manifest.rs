//! Concat demuxer manifest.
//!
//! One block per still image, no separators:
//!
//! ```text
//! file '/abs/path/a.png'
//! duration 0.04
//! ```
//!
//! Single quotes inside paths are written as-is.

use super::error::SequenceError;
use super::runner::Filesystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Render manifest text for already-resolved paths
pub fn render_manifest(resolved_paths: &[PathBuf], frame_duration: f64) -> String {
    let mut manifest = String::new();
    for path in resolved_paths {
        manifest.push_str(&format!(
            "file '{}'\nduration {}\n",
            path.display(),
            frame_duration
        ));
    }
    manifest
}

/// Resolve every source path and overwrite `manifest_path` with the result.
/// Returns the number of entries written.
pub fn write_manifest(
    fs: &dyn Filesystem,
    manifest_path: &Path,
    source_paths: &[PathBuf],
    frame_duration: f64,
) -> Result<usize, SequenceError> {
    let resolved = source_paths
        .iter()
        .map(|path| {
            fs.resolve(path)
                .map_err(|e| SequenceError::io("resolve source path", path, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (original, absolute) in source_paths.iter().zip(&resolved) {
        debug!(source = %original.display(), resolved = %absolute.display(), "manifest entry");
    }

    let manifest = render_manifest(&resolved, frame_duration);
    fs.write(manifest_path, manifest.as_bytes())
        .map_err(|e| SequenceError::io("write manifest", manifest_path, e))?;

    info!(
        path = %manifest_path.display(),
        entries = resolved.len(),
        frame_duration,
        "wrote concat manifest"
    );

    Ok(resolved.len())
}
