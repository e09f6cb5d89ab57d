//! The generated project's `package.json`.
//!
//! Only the fields the scaffold touches get typed accessors; everything else
//! the package manager wrote is carried through untouched and in order.

use serde_json::{Map, Value};

use crate::domain::{blueprint::ManifestPatch, error::DomainError};

const TYPE_KEY: &str = "type";
const MAIN_KEY: &str = "main";
const SCRIPTS_KEY: &str = "scripts";
const ENGINES_KEY: &str = "engines";

/// Mutable view over a `package.json` document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectManifest {
    root: Map<String, Value>,
}

impl ProjectManifest {
    /// Parse a manifest. The document root must be a JSON object.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DomainError::InvalidManifest {
                reason: e.to_string(),
            })?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DomainError::InvalidManifest {
                reason: format!("expected a JSON object, found {}", kind_of(&other)),
            }),
        }
    }

    /// Render with 2-space indentation and a trailing newline, the way npm
    /// writes it.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut text =
            serde_json::to_string_pretty(&self.root).map_err(|e| DomainError::InvalidManifest {
                reason: e.to_string(),
            })?;
        text.push('\n');
        Ok(text)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn module_type(&self) -> Option<&str> {
        self.root.get(TYPE_KEY).and_then(Value::as_str)
    }

    pub fn set_module_type(&mut self, module_type: &str) {
        self.root
            .insert(TYPE_KEY.into(), Value::String(module_type.into()));
    }

    pub fn entry_point(&self) -> Option<&str> {
        self.root.get(MAIN_KEY).and_then(Value::as_str)
    }

    pub fn set_entry_point(&mut self, entry_point: &str) {
        self.root
            .insert(MAIN_KEY.into(), Value::String(entry_point.into()));
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.root
            .get(SCRIPTS_KEY)
            .and_then(Value::as_object)
            .and_then(|s| s.get(name))
            .and_then(Value::as_str)
    }

    /// Number of script aliases currently defined.
    pub fn script_count(&self) -> usize {
        self.root
            .get(SCRIPTS_KEY)
            .and_then(Value::as_object)
            .map_or(0, Map::len)
    }

    /// Add or overwrite the given aliases; every other alias is kept.
    pub fn merge_scripts<'a>(
        &mut self,
        scripts: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<(), DomainError> {
        let table = self.object_entry(SCRIPTS_KEY)?;
        for (name, command) in scripts {
            table.insert(name.into(), Value::String(command.into()));
        }
        Ok(())
    }

    pub fn engine(&self, runtime: &str) -> Option<&str> {
        self.root
            .get(ENGINES_KEY)
            .and_then(Value::as_object)
            .and_then(|e| e.get(runtime))
            .and_then(Value::as_str)
    }

    /// Set `engines.<runtime>` unless a constraint is already there.
    ///
    /// Returns `true` when the constraint was written.
    pub fn ensure_engine(&mut self, runtime: &str, constraint: &str) -> Result<bool, DomainError> {
        let engines = self.object_entry(ENGINES_KEY)?;
        if engines.contains_key(runtime) {
            return Ok(false);
        }
        engines.insert(runtime.into(), Value::String(constraint.into()));
        Ok(true)
    }

    /// Apply the post-install finalization: entry point, scripts, engine.
    pub fn finalize(&mut self, patch: &ManifestPatch) -> Result<(), DomainError> {
        self.set_entry_point(&patch.entry_point);
        self.merge_scripts(
            patch
                .scripts
                .iter()
                .map(|(name, command)| (name.as_str(), command.as_str())),
        )?;
        if let Some(constraint) = &patch.node_engine {
            self.ensure_engine("node", constraint)?;
        }
        Ok(())
    }

    /// Nested object at `key`, created when absent.
    fn object_entry(&mut self, key: &str) -> Result<&mut Map<String, Value>, DomainError> {
        let slot = self
            .root
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
        if slot.is_null() {
            *slot = Value::Object(Map::new());
        }
        let found = kind_of(slot);
        slot.as_object_mut()
            .ok_or_else(|| DomainError::InvalidManifest {
                reason: format!("'{key}' must be an object, found {found}"),
            })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
