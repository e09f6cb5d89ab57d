pub mod answers;
pub mod common;
pub mod context;
pub mod layout;
pub mod package;

use super::error::DomainError;
