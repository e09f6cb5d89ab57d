//! End-to-end scaffold runs against real and in-memory adapters.

use std::{
    fs,
    path::Path,
    sync::{Arc, Mutex},
};

use genback_adapters::{
    EmbeddedStore, InMemoryStore, LocalFilesystem, MemoryFilesystem, ScriptedCommandRunner,
    ScriptedPrompter, template_store::EXPRESS_MONGO,
};
use genback_core::{
    application::{ApplicationError, ScaffoldOutcome, ScaffoldReport, ScaffoldService},
    domain::{Blueprint, CommandOutcome, InvocationContext, ProjectManifest, Step},
    error::GenbackError,
    prelude::{ProgressReporter, TemplateStore},
};
use tempfile::TempDir;

// ── helpers ───────────────────────────────────────────────────────────────

struct Harness {
    temp: TempDir,
    runner: ScriptedCommandRunner,
    prompter: ScriptedPrompter,
}

impl Harness {
    fn new(responses: &[&str]) -> Self {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedCommandRunner::new().writing_manifest_to(LocalFilesystem::new());
        Self {
            temp,
            runner,
            prompter: ScriptedPrompter::new(responses.iter().copied()),
        }
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn service(&self, blueprint: Blueprint, store: impl TemplateStore + 'static) -> ScaffoldService {
        ScaffoldService::new(
            blueprint,
            Box::new(self.runner.clone()),
            Box::new(self.prompter.clone()),
            Box::new(store),
            Box::new(LocalFilesystem::new()),
        )
    }

    fn confirmed(&self) -> InvocationContext {
        InvocationContext::from_args(self.root(), vec!["--yes".into()]).unwrap()
    }

    fn manifest(&self) -> ProjectManifest {
        let text = fs::read_to_string(self.root().join("package.json")).unwrap();
        ProjectManifest::parse(&text).unwrap()
    }
}

fn completed(outcome: ScaffoldOutcome) -> ScaffoldReport {
    match outcome {
        ScaffoldOutcome::Completed(report) => report,
        other => panic!("expected a completed scaffold, got {other:?}"),
    }
}

#[derive(Clone, Default)]
struct RecordingReporter {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for RecordingReporter {
    fn step_started(&self, step: Step) {
        self.push(format!("start {step}"));
    }

    fn step_succeeded(&self, step: Step) {
        self.push(format!("ok {step}"));
    }

    fn step_skipped(&self, step: Step) {
        self.push(format!("skip {step}"));
    }

    fn step_failed(&self, step: Step, _error: &GenbackError) {
        self.push(format!("fail {step}"));
    }
}

// ── complete runs ─────────────────────────────────────────────────────────

#[test]
fn full_run_produces_the_whole_project() {
    let h = Harness::new(&[]);
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());

    let report = completed(svc.run(&h.confirmed()).unwrap());

    for dir in Blueprint::express_mongo().directories.directories() {
        assert!(h.root().join(dir).is_dir(), "missing {}", dir.display());
    }
    assert_eq!(report.directories.len(), 9);
    assert_eq!(report.files.len(), 8);
    assert_eq!(report.start_command, "npm run dev");

    assert_eq!(
        h.runner.commands(),
        vec![
            "npm init --yes",
            "npm install cors dotenv express mongoose cookie-parser morgan",
            "npm install --save-dev nodemon",
        ]
    );
    assert!(
        h.runner
            .calls()
            .iter()
            .all(|call| call.working_dir == h.root())
    );
}

#[test]
fn templates_are_copied_byte_for_byte() {
    let h = Harness::new(&[]);
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());
    svc.run(&h.confirmed()).unwrap();

    for entry in Blueprint::express_mongo().templates.entries() {
        let (_, expected) = EXPRESS_MONGO
            .iter()
            .find(|(name, _)| *name == entry.source)
            .unwrap();
        let written = fs::read(h.root().join(&entry.destination)).unwrap();
        assert_eq!(&written[..], *expected, "{} differs", entry.source);
    }
}

#[test]
fn manifest_is_finalized_and_keeps_init_scripts() {
    let h = Harness::new(&[]);
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());
    svc.run(&h.confirmed()).unwrap();

    let manifest = h.manifest();
    assert_eq!(manifest.module_type(), Some("module"));
    assert_eq!(manifest.entry_point(), Some("src/server.js"));
    assert_eq!(manifest.script("dev"), Some("nodemon src/server.js"));
    assert_eq!(manifest.script("start"), Some("node src/server.js"));
    assert!(manifest.script("test").is_some());
    assert_eq!(manifest.engine("node"), Some(">=18"));
}

#[test]
fn default_answers_are_written_to_env() {
    let h = Harness::new(&[]);
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());

    let report = completed(svc.run(&h.confirmed()).unwrap());

    let env = fs::read_to_string(h.root().join(".env")).unwrap();
    assert_eq!(
        env,
        "SERVER_PORT=8000\nMONGODB_URL=mongodb://0.0.0.0:27017\nDATABASE_NAME=My_DB\n"
    );
    assert_eq!(report.env_file, h.root().join(".env"));
    assert_eq!(h.prompter.asked().len(), 3);
}

#[test]
fn custom_answers_override_defaults() {
    let h = Harness::new(&["9090", "ShopDB", "mongodb://db:27017"]);
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());
    svc.run(&h.confirmed()).unwrap();

    let env = fs::read_to_string(h.root().join(".env")).unwrap();
    assert_eq!(
        env,
        "SERVER_PORT=9090\nMONGODB_URL=mongodb://db:27017\nDATABASE_NAME=ShopDB\n"
    );
}

#[test]
fn in_memory_run_matches_disk_layout() {
    let root = std::env::temp_dir().join("genback-memory-run");
    let fs = MemoryFilesystem::rooted(&root).unwrap();
    let runner = ScriptedCommandRunner::new().writing_manifest_to(fs.clone());
    let svc = ScaffoldService::new(
        Blueprint::express_mongo(),
        Box::new(runner),
        Box::new(ScriptedPrompter::accepting_defaults()),
        Box::new(EmbeddedStore::express_mongo()),
        Box::new(fs.clone()),
    );

    let ctx = InvocationContext::from_args(&root, vec!["-y".into()]).unwrap();
    completed(svc.run(&ctx).unwrap());

    assert!(fs.read_file(&root.join("src/error/asyncHandler.js")).is_some());
    assert!(fs.read_file(&root.join(".env")).is_some());
    // package.json, .env, and eight templates
    assert_eq!(fs.list_files().len(), 10);
}

// ── refusal paths ─────────────────────────────────────────────────────────

#[test]
fn missing_confirmation_touches_nothing() {
    let h = Harness::new(&[]);
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());
    let ctx = InvocationContext::from_args(h.root(), vec![]).unwrap();

    assert_eq!(svc.run(&ctx).unwrap(), ScaffoldOutcome::ConfirmationRequired);
    assert!(h.runner.calls().is_empty());
    assert_eq!(fs::read_dir(h.root()).unwrap().count(), 0);
}

#[test]
fn missing_confirmation_wins_over_existing_project() {
    let h = Harness::new(&[]);
    fs::create_dir(h.root().join("src")).unwrap();
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());
    let ctx = InvocationContext::from_args(h.root(), vec![]).unwrap();

    assert_eq!(svc.run(&ctx).unwrap(), ScaffoldOutcome::ConfirmationRequired);
}

#[test]
fn existing_src_is_refused_without_side_effects() {
    let h = Harness::new(&[]);
    fs::create_dir(h.root().join("src")).unwrap();
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());

    let err = svc.run(&h.confirmed()).unwrap_err();

    assert!(matches!(
        err,
        GenbackError::Application(ApplicationError::AlreadyInitialized { .. })
    ));
    assert!(h.runner.calls().is_empty());
    assert!(!h.root().join("package.json").exists());
}

// ── failures part-way ─────────────────────────────────────────────────────

#[test]
fn missing_template_keeps_earlier_copies() {
    let h = Harness::new(&[]);
    let store = InMemoryStore::copy_of(&EmbeddedStore::express_mongo()).unwrap();
    store.remove("db.js").unwrap();
    let svc = h.service(Blueprint::express_mongo(), store);

    let err = svc.run(&h.confirmed()).unwrap_err();

    match &err {
        GenbackError::Application(ApplicationError::MissingTemplate { name, location }) => {
            assert_eq!(name, "db.js");
            assert_eq!(location, "memory:db.js");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Entries before db.js were copied, the rest were not.
    for copied in ["src/routes/api.js", "src/app.js", "src/error/asyncHandler.js"] {
        assert!(h.root().join(copied).is_file(), "{copied} should exist");
    }
    for skipped in ["src/config/db.js", "src/routes/index.js", "src/server.js"] {
        assert!(!h.root().join(skipped).exists(), "{skipped} should not exist");
    }

    // Later steps never ran.
    assert_eq!(h.manifest().entry_point(), Some("index.js"));
    assert!(!h.root().join(".env").exists());
    assert!(h.prompter.asked().is_empty());
}

#[test]
fn dev_dependency_failure_stops_before_layout() {
    let mut h = Harness::new(&[]);
    h.runner = ScriptedCommandRunner::new()
        .writing_manifest_to(LocalFilesystem::new())
        .fail_step(
            Step::DevDependencies.label(),
            CommandOutcome::failure(1, "npm ERR! ERESOLVE"),
        );
    let svc = h.service(Blueprint::express_mongo(), EmbeddedStore::express_mongo());

    let err = svc.run(&h.confirmed()).unwrap_err();

    assert_eq!(err.details(), Some("npm ERR! ERESOLVE"));
    assert!(err.to_string().starts_with("Dev dependencies failed"));
    assert_eq!(h.manifest().module_type(), Some("module"));
    assert!(!h.root().join("src").exists());
}

#[test]
fn empty_dev_dependencies_are_skipped() {
    let h = Harness::new(&[]);
    let reporter = RecordingReporter::default();
    let svc = h
        .service(
            Blueprint::express_mongo().with_dev_dependencies(vec![]),
            EmbeddedStore::express_mongo(),
        )
        .with_reporter(Box::new(reporter.clone()));

    completed(svc.run(&h.confirmed()).unwrap());

    assert_eq!(h.runner.commands().len(), 2);
    let events = reporter.events();
    assert!(events.contains(&"skip Dev dependencies".to_string()));
    assert_eq!(events.first().map(String::as_str), Some("start Project initialization"));
    assert_eq!(events.last().map(String::as_str), Some("ok Environment file"));
}

#[test]
fn reporter_sees_the_failing_step() {
    let mut h = Harness::new(&[]);
    h.runner = ScriptedCommandRunner::new().unavailable("No such file or directory");
    let reporter = RecordingReporter::default();
    let svc = h
        .service(Blueprint::express_mongo(), EmbeddedStore::express_mongo())
        .with_reporter(Box::new(reporter.clone()));

    assert!(svc.run(&h.confirmed()).is_err());
    assert_eq!(
        reporter.events(),
        vec!["start Project initialization", "fail Project initialization"]
    );
}
