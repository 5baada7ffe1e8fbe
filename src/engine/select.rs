//! Collects the final, ordered source list that gets handed to the sequencer.

use super::core::{Filesystem, LocalFs};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Source images picked by the user, already resolved to absolute paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSelection {
    paths: Vec<PathBuf>,
}

impl SourceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add individual files. Replaces the current list unless `append` is set.
    pub fn add_files<I, P>(&mut self, files: I, append: bool) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let resolved = files
            .into_iter()
            .map(|file| {
                let file = file.as_ref();
                LocalFs
                    .resolve(file)
                    .with_context(|| format!("Failed to resolve path: {}", file.display()))
            })
            .collect::<Result<Vec<_>>>()?;

        self.merge(resolved, append);
        Ok(())
    }

    /// Add every regular file directly inside `dir`, sorted by name.
    /// Subdirectories are not descended into.
    pub fn add_folder(&mut self, dir: &Path, append: bool) -> Result<()> {
        if !dir.is_dir() {
            anyhow::bail!("Not a directory: {}", dir.display());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry =
                entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        self.add_files(files, append)
    }

    /// Empty the list. An "append" preference never survives a clear.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn count_label(&self) -> String {
        match self.len() {
            0 => "No File Selected".to_string(),
            1 => "1 File Selected".to_string(),
            n => format!("{} Files Selected", n),
        }
    }

    /// Playback length in seconds when each image lasts `1 / source_fps`
    pub fn video_length_secs(&self, source_fps: f64) -> f64 {
        if source_fps > 0.0 {
            self.len() as f64 / source_fps
        } else {
            0.0
        }
    }

    pub fn length_label(&self, source_fps: f64) -> String {
        let secs = (self.video_length_secs(source_fps) * 100.0).round() / 100.0;
        format!("Video Length: {}(s)", secs)
    }

    fn merge(&mut self, resolved: Vec<PathBuf>, append: bool) {
        if append {
            self.paths.extend(resolved);
        } else {
            self.paths = resolved;
        }
    }
}
