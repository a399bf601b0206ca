//! Image asset discovery.
//! Recursively scans the project tree for image files, one concurrent scan
//! per extension pattern.

use crate::error::{Error, Result};
use globset::Glob;
use log::debug;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension patterns scanned for image assets.
pub const IMAGE_PATTERNS: [&str; 5] = ["*.png", "*.jpg", "*.gif", "*.tiff", "*.bmp"];

/// Recursively discovers files under `root_dir` matching any of `patterns`.
///
/// Each pattern is scanned as an independent unit of work; the per-pattern
/// results are merged on the calling thread only after all scans complete,
/// so the merged collection has no defined relative ordering. A file
/// matching more than one pattern is counted once per match, without
/// deduplication.
pub fn discover_images(root_dir: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let scans: Vec<Result<Vec<PathBuf>>> = patterns
        .par_iter()
        .map(|pattern| scan_pattern(root_dir, pattern))
        .collect();

    let mut images = Vec::new();
    for scan in scans {
        images.extend(scan?);
    }
    debug!("Discovered {} image files in {}", images.len(), root_dir.display());
    Ok(images)
}

fn scan_pattern(root_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)
        .map_err(|e| Error::ConfigError(format!("Invalid image pattern '{}': {}", pattern, e)))?
        .compile_matcher();

    let mut matches = Vec::new();
    for entry in WalkDir::new(root_dir) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.is_match(Path::new(entry.file_name())) {
            matches.push(entry.into_path());
        }
    }
    Ok(matches)
}
