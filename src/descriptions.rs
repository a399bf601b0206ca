//! Localized description collection.
//! Scans for `*pagedefault*.md` files next to the input file and registers
//! their text under a locale code or the `"default"` sentinel.

use crate::error::{Error, Result};
use crate::locale::{self, DescriptionKey, DEFAULT_KEY};
use crate::project::Project;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename substring identifying description files.
pub const DESCRIPTION_MARKER: &str = "pagedefault";

/// Collects description files directly inside `root_dir` into the project.
///
/// Files are processed in filesystem enumeration order, which is
/// platform-dependent; because registration is first-wins per key, the
/// retained content can differ across systems when multiple files classify
/// to the same key.
pub fn collect_descriptions(root_dir: &Path, project: &mut Project) -> Result<()> {
    let files = find_description_files(root_dir)?;
    register_description_files(&files, project)
}

/// Registers description files in the given order.
///
/// The filename's first `.`-separated segment decides the key: a known
/// locale code registers localized text and records the language, a segment
/// containing "default" registers the sentinel entry, anything else is
/// skipped. A file whose key is already present is skipped without being
/// read.
pub fn register_description_files(files: &[PathBuf], project: &mut Project) -> Result<()> {
    for path in files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let segment = name.split('.').next().unwrap_or("");

        match locale::classify(segment) {
            Some(DescriptionKey::Locale(code)) => {
                if !project.description.contains_key(&code) {
                    let text = fs::read_to_string(path).map_err(Error::IoError)?;
                    project.description.insert(code.clone(), text);
                    project.add_documentation_language(&code);
                }
            }
            Some(DescriptionKey::Default) => {
                if !project.description.contains_key(DEFAULT_KEY) {
                    let text = fs::read_to_string(path).map_err(Error::IoError)?;
                    project.description.insert(DEFAULT_KEY.to_string(), text);
                }
            }
            None => {
                debug!("Skipping description file {}", path.display());
            }
        }
    }
    Ok(())
}

fn find_description_files(root_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(root_dir).map_err(Error::IoError)? {
        let entry = entry.map_err(Error::IoError)?;
        let path = entry.path();
        if path.is_file() && is_description_file(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn is_description_file(path: &Path) -> bool {
    let has_marker = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_lowercase().contains(DESCRIPTION_MARKER));
    let is_markdown = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    has_marker && is_markdown
}
