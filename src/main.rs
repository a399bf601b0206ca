//! docforge's main application entry point.
//! Loads the project configuration, runs the model build stage, and prints
//! a summary of the populated model.

use std::path::Path;

use docforge::{
    builder::run_stage,
    cli::{get_args, Args},
    config::ProjectConfig,
    error::{default_error_handler, Result},
    navigation::NavFileParser,
    progress::LogObserver,
    project::Project,
};

/// Navigation parser used by the CLI harness: registers each navigation
/// file as a repository entry without interpreting its grammar. Library
/// consumers plug in a real grammar parser through the trait instead.
struct ListingNavParser;

impl NavFileParser for ListingNavParser {
    fn parse_nav_file(&self, nav_file: &Path, project: &mut Project) -> Result<()> {
        project.repositories.entry(nav_file.to_path_buf()).or_default();
        Ok(())
    }
}

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let config = ProjectConfig::load(&args.config)?;
    let mut project = Project::new();

    run_stage(&config, &ListingNavParser, &LogObserver, &mut project)?;

    println!(
        "Project model for '{}' built: {} images, {} tokens, {} descriptions, {} repositories.",
        project.project_name,
        project.images.len(),
        project.tokens.len(),
        project.description.len(),
        project.repositories.len()
    );
    Ok(())
}
