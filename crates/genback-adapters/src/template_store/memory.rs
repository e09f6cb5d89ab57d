//! In-memory template store.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use genback_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::GenbackResult,
};

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a copy of every payload in `source`.
    pub fn copy_of(source: &dyn TemplateStore) -> GenbackResult<Self> {
        let store = Self::new();
        for name in source.names()? {
            let content = source.read(&name)?;
            store.insert(&name, content)?;
        }
        Ok(store)
    }

    pub fn with_template(self, name: &str, content: impl Into<Vec<u8>>) -> GenbackResult<Self> {
        self.insert(name, content)?;
        Ok(self)
    }

    pub fn insert(&self, name: &str, content: impl Into<Vec<u8>>) -> GenbackResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.insert(name.to_string(), content.into());
        Ok(())
    }

    /// Remove a payload, returning whether it was present.
    pub fn remove(&self, name: &str) -> GenbackResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner.remove(name).is_some())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(name))
            .unwrap_or(false)
    }

    fn read(&self, name: &str) -> GenbackResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::MissingTemplate {
                name: name.to_string(),
                location: self.location(name),
            }
            .into()
        })
    }

    fn location(&self, name: &str) -> String {
        format!("memory:{name}")
    }

    fn names(&self) -> GenbackResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner.keys().cloned().collect())
    }

    fn describe(&self) -> String {
        "in-memory".into()
    }
}
