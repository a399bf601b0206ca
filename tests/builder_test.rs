use docforge::builder::{run_stage, ProjectModelBuilder};
use docforge::config::ProjectConfig;
use docforge::error::{Error, Result};
use docforge::navigation::NavFileParser;
use docforge::progress::{NullObserver, ProgressObserver};
use docforge::project::Project;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Observer double recording every notification in arrival order.
#[derive(Default)]
struct RecordingObserver {
    events: RefCell<Vec<String>>,
}

impl ProgressObserver for RecordingObserver {
    fn on_message(&self, message: &str) {
        self.events.borrow_mut().push(message.to_string());
    }

    fn on_progress(&self, percent: u8) {
        self.events.borrow_mut().push(format!("{}%", percent));
    }
}

struct NoopParser;

impl NavFileParser for NoopParser {
    fn parse_nav_file(&self, _nav_file: &Path, _project: &mut Project) -> Result<()> {
        Ok(())
    }
}

struct FailingParser;

impl NavFileParser for FailingParser {
    fn parse_nav_file(&self, _nav_file: &Path, _project: &mut Project) -> Result<()> {
        Err(Error::NavigationError("malformed navigation file".to_string()))
    }
}

fn sample_config(input_file: PathBuf) -> ProjectConfig {
    ProjectConfig {
        input_file,
        doc_language: "en".to_string(),
        logo_path: "logo.png".to_string(),
        author: "Jo Doe".to_string(),
        project_name: "Sample".to_string(),
        version_number: "2.1.0".to_string(),
        project_url: "https://example.org".to_string(),
        author_url: "https://example.org/jo".to_string(),
    }
}

#[test]
fn test_metadata_is_copied_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let config = sample_config(temp_dir.path().join("project.json"));

    let mut project = Project::new();
    ProjectModelBuilder::new(&config, &NullObserver).run(&mut project).unwrap();

    assert_eq!(project.doc_language, "en");
    assert_eq!(project.logo_path, "logo.png");
    assert_eq!(project.author, "Jo Doe");
    assert_eq!(project.project_name, "Sample");
    assert_eq!(project.version_number, "2.1.0");
    assert_eq!(project.project_url, "https://example.org");
    assert_eq!(project.author_url, "https://example.org/jo");
}

#[test]
fn test_checkpoints_are_emitted_in_phase_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = sample_config(temp_dir.path().join("project.json"));

    let observer = RecordingObserver::default();
    let mut project = Project::new();
    ProjectModelBuilder::new(&config, &observer).run(&mut project).unwrap();

    assert_eq!(
        *observer.events.borrow(),
        vec![
            "Parsing project",
            "25%",
            "Parsing tokens",
            "40%",
            "Parsing descriptions",
            "50%",
        ]
    );
}

#[test]
fn test_full_stage_populates_the_model() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("project.json");
    fs::write(&input, "{}").unwrap();
    fs::write(temp_dir.path().join("tokens.sdt"), "company=ACME\nyear=2026").unwrap();
    fs::write(temp_dir.path().join("en.pagedefault.md"), "english text").unwrap();
    fs::write(temp_dir.path().join("logo.png"), b"").unwrap();
    fs::write(temp_dir.path().join("shot.jpg"), b"").unwrap();

    let config = sample_config(input.clone());
    let mut project = Project::new();
    run_stage(&config, &NoopParser, &NullObserver, &mut project).unwrap();

    assert_eq!(project.project_name, "Sample");
    assert_eq!(project.images.len(), 2);
    assert_eq!(project.tokens["company"], "ACME");
    assert_eq!(project.description["en"], "english text");
    assert!(project.documentation_languages.contains("en"));
    // Non-navigation input registers itself as the single repository
    assert_eq!(project.repositories.len(), 1);
    assert!(project.repositories.contains_key(&input));
}

#[test]
fn test_navigation_failure_keeps_builder_contributions() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("main.sdnav");
    fs::write(&input, "").unwrap();
    fs::write(temp_dir.path().join("tokens.sdt"), "company=ACME").unwrap();

    let config = sample_config(input);
    let mut project = Project::new();
    let result = run_stage(&config, &FailingParser, &NullObserver, &mut project);

    assert!(result.is_err());
    assert_eq!(project.tokens["company"], "ACME");
    assert_eq!(project.project_name, "Sample");
}
