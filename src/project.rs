//! The central project aggregate populated by the build stage.
//! One instance per build, created by the caller and mutated in place;
//! later rendering stages consume it as-is.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A registered documentation source unit attached to the project.
///
/// Created empty in single-repository fallback mode; in navigation mode the
/// external navigation parser merges entries into it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Navigation entries contributed by parsed navigation files
    pub navigation: Vec<String>,
}

/// The in-memory project model.
///
/// Field semantics the rest of the crate relies on:
/// - `tokens`: last `key=value` occurrence per key wins.
/// - `description`: first registered text per locale key wins.
/// - `images`: unordered, not deduplicated across scan patterns.
/// - `repositories`: non-empty after the stage completes.
#[derive(Debug, Default, Clone)]
pub struct Project {
    pub doc_language: String,
    pub logo_path: String,
    pub author: String,
    pub project_name: String,
    pub version_number: String,
    pub project_url: String,
    pub author_url: String,

    /// Discovered image asset paths, in no defined order
    pub images: Vec<PathBuf>,

    /// Substitution tokens expanded later during rendering
    pub tokens: IndexMap<String, String>,

    /// Raw description text keyed by locale code or `"default"`
    pub description: IndexMap<String, String>,

    /// Locale codes for which a localized description was registered;
    /// the `"default"` sentinel is never added here
    pub documentation_languages: BTreeSet<String>,

    /// Documentation source units keyed by their source path
    pub repositories: IndexMap<PathBuf, Repository>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_documentation_language(&mut self, locale: &str) {
        self.documentation_languages.insert(locale.to_string());
    }
}
