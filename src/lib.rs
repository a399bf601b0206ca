//! docforge builds an in-memory documentation project model from a project
//! directory: scalar metadata from configuration, discovered image assets,
//! substitution tokens, localized descriptions, and the repository and
//! navigation structure consumed by later rendering stages.

/// Project model building orchestration
/// Runs the population phases in order and exposes the stage entry point
pub mod builder;

/// Command-line interface module for the docforge binary
pub mod cli;

/// Project configuration loading
/// Supports JSON and YAML configuration files
pub mod config;

/// Localized description collection
/// Registers `*pagedefault*.md` files under locale or default keys
pub mod descriptions;

/// Error types and handling for the docforge crate
pub mod error;

/// Image asset discovery
/// Concurrent per-pattern scanning of the project tree
pub mod images;

/// Locale detection for description filenames
pub mod locale;

/// Navigation resolution and the external navigation parser seam
pub mod navigation;

/// Status and progress observer types
pub mod progress;

/// The central project aggregate and repository handle
pub mod project;

/// Token substitution file parsing
pub mod tokens;
