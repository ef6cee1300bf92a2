//! Loading, saving and resetting the persisted arrangement.
//!
//! Loading never fails: a missing key, an unreadable store or a value that
//! does not parse all yield the default arrangement.

use super::{LayoutError, Layouts};
use crate::storage::KeyValueStore;

/// Storage key holding the arrangement.
pub const LAYOUT_KEY: &str = "layouts";

#[derive(Debug)]
pub struct LayoutStore<S: KeyValueStore> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> LayoutStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, LAYOUT_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The saved arrangement, or the default if there is none usable.
    pub fn load(&self) -> Layouts {
        match self.storage.get(&self.key) {
            Ok(Some(text)) => match Layouts::parse(&text) {
                Ok(layouts) => layouts,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "discarding saved layout");
                    Layouts::default_layouts()
                }
            },
            Ok(None) => Layouts::default_layouts(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "layout storage unreadable");
                Layouts::default_layouts()
            }
        }
    }

    /// Replace the saved arrangement with `layouts`.
    pub fn save(&mut self, layouts: &Layouts) -> Result<(), LayoutError> {
        let json = layouts.to_json()?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, bytes = json.len(), "layout saved");
        Ok(())
    }

    /// Overwrite the saved arrangement with the default and return it.
    pub fn reset(&mut self) -> Result<Layouts, LayoutError> {
        let defaults = Layouts::default_layouts();
        self.save(&defaults)?;
        Ok(defaults)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
