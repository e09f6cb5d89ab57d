//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case "scaffold a backend project".

pub mod scaffold_service;

pub use scaffold_service::{
    DATABASE_NAME_PROMPT, MONGODB_URL_PROMPT, PORT_PROMPT, ScaffoldOutcome, ScaffoldReport,
    ScaffoldService,
};
