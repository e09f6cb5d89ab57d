//! Genback Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! `gen-backend` scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          genback-cli (CLI)              │
//! │  (argv, prompts, progress, exit codes)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │       Orchestrates the 9-step run       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Prompter,   │
//! │  TemplateStore, ProgressReporter)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    genback-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemCommandRunner,  │
//! │  EmbeddedStore, DirectoryStore, ...)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Blueprint, ProjectManifest, Answers)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use genback_core::{
//!     application::ScaffoldService,
//!     domain::{Blueprint, InvocationContext},
//! };
//!
//! let context = InvocationContext::new("/tmp/my-api", vec!["--yes".into()], true).unwrap();
//!
//! // Adapters come from `genback-adapters` (or test doubles).
//! let service = ScaffoldService::new(
//!     Blueprint::express_mongo(),
//!     runner, prompter, store, filesystem,
//! );
//! service.run(&context).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOutcome, ScaffoldReport, ScaffoldService,
        ports::{CommandRunner, Filesystem, ProgressReporter, Prompter, TemplateStore},
    };
    pub use crate::domain::{
        Blueprint, CommandOutcome, CommandSpec, ConfigurationAnswers, ConfigurationDefaults,
        DirectoryPlan, InvocationContext, ManifestPatch, ProjectManifest, Step, TemplateEntry,
        TemplateManifest,
    };
    pub use crate::error::{GenbackError, GenbackResult};
}

