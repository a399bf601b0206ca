//! Project model building orchestration.
//! Runs the four population phases in strict order against the shared
//! project aggregate, then hands off to the navigation resolver.

use crate::config::ProjectConfig;
use crate::descriptions;
use crate::error::Result;
use crate::images;
use crate::navigation::{NavFileParser, NavigationResolver};
use crate::progress::ProgressObserver;
use crate::project::Project;
use crate::tokens;
use log::debug;

/// Populates every field of the project model except the navigation and
/// repository structure.
///
/// Phases run strictly in order: metadata, images, tokens, descriptions.
/// A failure in phase N leaves the contributions of phases 1..N-1 on the
/// aggregate; nothing is rolled back.
pub struct ProjectModelBuilder<'a> {
    config: &'a ProjectConfig,
    observer: &'a dyn ProgressObserver,
}

impl<'a> ProjectModelBuilder<'a> {
    pub fn new(config: &'a ProjectConfig, observer: &'a dyn ProgressObserver) -> Self {
        Self { config, observer }
    }

    /// Runs all population phases against `project`.
    pub fn run(&self, project: &mut Project) -> Result<()> {
        let phases: [fn(&Self, &mut Project) -> Result<()>; 4] = [
            Self::set_project_infos,
            Self::discover_images,
            Self::parse_tokens,
            Self::parse_descriptions,
        ];
        for phase in &phases {
            phase(self, project)?;
        }
        Ok(())
    }

    /// Copies the scalar metadata fields from configuration, unvalidated.
    fn set_project_infos(&self, project: &mut Project) -> Result<()> {
        self.observer.on_message("Parsing project");
        self.observer.on_progress(25);

        project.doc_language = self.config.doc_language.clone();
        project.logo_path = self.config.logo_path.clone();
        project.author = self.config.author.clone();
        project.project_name = self.config.project_name.clone();
        project.version_number = self.config.version_number.clone();
        project.project_url = self.config.project_url.clone();
        project.author_url = self.config.author_url.clone();
        Ok(())
    }

    fn discover_images(&self, project: &mut Project) -> Result<()> {
        let found = images::discover_images(self.config.root_dir()?, &images::IMAGE_PATTERNS)?;
        project.images.extend(found);
        Ok(())
    }

    fn parse_tokens(&self, project: &mut Project) -> Result<()> {
        self.observer.on_message("Parsing tokens");
        self.observer.on_progress(40);

        tokens::parse_tokens(self.config.root_dir()?, project)
    }

    fn parse_descriptions(&self, project: &mut Project) -> Result<()> {
        self.observer.on_message("Parsing descriptions");
        self.observer.on_progress(50);

        descriptions::collect_descriptions(self.config.root_dir()?, project)
    }
}

/// Runs the whole build stage: model population followed by navigation
/// resolution, mutating `project` in place.
pub fn run_stage(
    config: &ProjectConfig,
    nav_parser: &dyn NavFileParser,
    observer: &dyn ProgressObserver,
    project: &mut Project,
) -> Result<()> {
    debug!("Building project model for {}", config.input_file.display());
    ProjectModelBuilder::new(config, observer).run(project)?;
    NavigationResolver::new(nav_parser).resolve(config, project, observer)
}
