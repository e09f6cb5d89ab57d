//! Payloads compiled into the binary.
//!
//! Bundling the files with `include_bytes!` means an installed binary can
//! never lose its templates; the missing-template path is only reachable
//! through the other stores.

use genback_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::GenbackResult,
};

/// The Express + MongoDB payload set, sorted by name.
pub const EXPRESS_MONGO: &[(&str, &[u8])] = &[
    (
        "api.js",
        include_bytes!("../../templates/express-mongo/api.js"),
    ),
    (
        "apiError.js",
        include_bytes!("../../templates/express-mongo/apiError.js"),
    ),
    (
        "apiResponse.js",
        include_bytes!("../../templates/express-mongo/apiResponse.js"),
    ),
    (
        "app.js",
        include_bytes!("../../templates/express-mongo/app.js"),
    ),
    (
        "asyncHandler.js",
        include_bytes!("../../templates/express-mongo/asyncHandler.js"),
    ),
    ("db.js", include_bytes!("../../templates/express-mongo/db.js")),
    (
        "index.js",
        include_bytes!("../../templates/express-mongo/index.js"),
    ),
    (
        "server.js",
        include_bytes!("../../templates/express-mongo/server.js"),
    ),
];

/// Read-only store over a static payload table.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedStore {
    set: &'static str,
    entries: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedStore {
    /// Store serving the Express + MongoDB payloads.
    pub fn express_mongo() -> Self {
        Self {
            set: "express-mongo",
            entries: EXPRESS_MONGO,
        }
    }

    fn find(&self, name: &str) -> Option<&'static [u8]> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, bytes)| *bytes)
    }
}

impl Default for EmbeddedStore {
    fn default() -> Self {
        Self::express_mongo()
    }
}

impl TemplateStore for EmbeddedStore {
    fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn read(&self, name: &str) -> GenbackResult<Vec<u8>> {
        self.find(name).map(<[u8]>::to_vec).ok_or_else(|| {
            ApplicationError::MissingTemplate {
                name: name.to_string(),
                location: self.location(name),
            }
            .into()
        })
    }

    fn location(&self, name: &str) -> String {
        format!("embedded:{}/{}", self.set, name)
    }

    fn names(&self) -> GenbackResult<Vec<String>> {
        let mut names: Vec<String> = self.entries.iter().map(|(n, _)| n.to_string()).collect();
        names.sort();
        Ok(names)
    }

    fn describe(&self) -> String {
        format!("built-in ({})", self.set)
    }
}
