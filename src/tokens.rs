//! Token substitution file parsing.
//! A token file is a line-based `key=value` list consumed later during
//! rendering; this stage only collects the entries.

use crate::error::{Error, Result};
use crate::project::Project;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of token substitution files.
pub const TOKEN_EXTENSION: &str = "sdt";

/// Parses token file content into `tokens`.
///
/// Each line is split on `=`. A line with at least two parts contributes the
/// trimmed first part as key and the trimmed second part as value; any
/// further `=`-delimited parts are discarded (`A=B=C` yields `A -> B`).
/// Lines without `=` are ignored. Later lines overwrite earlier entries for
/// the same key.
pub fn parse_token_content(content: &str, tokens: &mut IndexMap<String, String>) {
    for line in content.lines() {
        let parts: Vec<&str> = line.split('=').collect();
        if parts.len() > 1 {
            tokens.insert(parts[0].trim().to_string(), parts[1].trim().to_string());
        }
    }
}

/// Parses the project's token file, if any, into the project model.
///
/// Only files directly inside `root_dir` are considered, and only the first
/// `.sdt` file in filesystem enumeration order is read. That order is
/// platform-dependent; with more than one candidate the selection is not
/// guaranteed stable across systems. No token file is a valid empty
/// contribution.
pub fn parse_tokens(root_dir: &Path, project: &mut Project) -> Result<()> {
    let Some(token_file) = find_token_file(root_dir)? else {
        debug!("No token file found in {}", root_dir.display());
        return Ok(());
    };

    debug!("Parsing token file {}", token_file.display());
    let content = fs::read_to_string(&token_file).map_err(Error::IoError)?;
    parse_token_content(&content, &mut project.tokens);
    Ok(())
}

fn find_token_file(root_dir: &Path) -> Result<Option<PathBuf>> {
    for entry in fs::read_dir(root_dir).map_err(Error::IoError)? {
        let entry = entry.map_err(Error::IoError)?;
        let path = entry.path();
        let is_token_file = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(TOKEN_EXTENSION));
        if is_token_file {
            return Ok(Some(path));
        }
    }
    Ok(None)
}
