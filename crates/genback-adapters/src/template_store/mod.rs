//! Template payload stores.
//!
//! - [`EmbeddedStore`]: payloads compiled into the binary (default)
//! - [`DirectoryStore`]: payloads read from a directory on disk
//! - [`InMemoryStore`]: mutable store for tests

mod directory;
mod embedded;
mod memory;

pub use directory::DirectoryStore;
pub use embedded::{EXPRESS_MONGO, EmbeddedStore};
pub use memory::InMemoryStore;
