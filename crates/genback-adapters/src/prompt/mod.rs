//! Prompter adapters.
//!
//! The terminal prompter lives in the CLI crate next to the rest of the
//! terminal I/O; this module holds the scripted double.

mod scripted;

pub use scripted::ScriptedPrompter;
