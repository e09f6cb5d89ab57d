//! Command runner adapters.

mod scripted;
mod system;

pub use scripted::{RecordedCommand, ScriptedCommandRunner};
pub use system::SystemCommandRunner;
