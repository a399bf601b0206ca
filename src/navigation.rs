//! Navigation resolution.
//! Finalizes the project's repository structure, branching on the input
//! file's extension: recursive navigation-file parsing through an external
//! grammar parser, or single-repository fallback.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::progress::ProgressObserver;
use crate::project::{Project, Repository};
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// File extension of navigation definition files.
pub const NAV_EXTENSION: &str = "sdnav";

/// External collaborator that parses one navigation file and merges its
/// structure into the project. The grammar itself lives outside this stage.
pub trait NavFileParser {
    fn parse_nav_file(&self, nav_file: &Path, project: &mut Project) -> Result<()>;
}

/// Terminal stage step populating the project's repositories.
pub struct NavigationResolver<'a> {
    parser: &'a dyn NavFileParser,
}

impl<'a> NavigationResolver<'a> {
    pub fn new(parser: &'a dyn NavFileParser) -> Self {
        Self { parser }
    }

    /// Resolves the repository structure for `project`.
    ///
    /// With a `.sdnav` input file, every navigation file under the project
    /// root is parsed sequentially in filesystem enumeration order (not
    /// guaranteed stable across platforms); each parse builds on the result
    /// of the previous one. A parse failure aborts immediately, keeping
    /// whatever earlier files already merged. With any other input
    /// extension, the input path itself is registered as the single default
    /// repository.
    pub fn resolve(
        &self,
        config: &ProjectConfig,
        project: &mut Project,
        observer: &dyn ProgressObserver,
    ) -> Result<()> {
        let is_nav_input = config
            .input_file
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(NAV_EXTENSION));

        if is_nav_input {
            self.parse_navigation_files(config, project, observer)
        } else {
            debug!("Registering {} as default repository", config.input_file.display());
            project
                .repositories
                .insert(config.input_file.clone(), Repository::default());
            Ok(())
        }
    }

    fn parse_navigation_files(
        &self,
        config: &ProjectConfig,
        project: &mut Project,
        observer: &dyn ProgressObserver,
    ) -> Result<()> {
        observer.on_message("Parsing navigation");
        observer.on_progress(50);

        for entry in WalkDir::new(config.root_dir()?) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_nav_file = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(NAV_EXTENSION));
            if is_nav_file {
                debug!("Parsing navigation file {}", entry.path().display());
                self.parser.parse_nav_file(entry.path(), project)?;
            }
        }
        Ok(())
    }
}
