//! Per-host attribute state.
//!
//! The raw values a host currently carries, keyed by attribute name. The
//! state is an explicit value owned by the caller and handed to the
//! resolver and projection builders; nothing in the core keeps one of its
//! own.

use std::collections::HashMap;

use crate::breakpoint::{self, Resolution};
use crate::registry::Registry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeState {
    values: HashMap<String, String>,
}

impl AttributeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw value, overwriting any previous one.
    ///
    /// Names the registry does not recognize are ignored and `false` is
    /// returned.
    pub fn set(&mut self, registry: &Registry, name: &str, raw: impl Into<String>) -> bool {
        if !registry.is_recognized(name) {
            tracing::debug!(name, registry = %registry.kind(), "ignoring unrecognized attribute");
            return false;
        }
        self.values.insert(name.to_string(), raw.into());
        true
    }

    /// Drop an attribute entirely. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.values.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolve the current value of `name`, if it is set and recognized.
    pub fn resolve(&self, registry: &Registry, name: &str) -> Option<Resolution> {
        let validator = registry.validator_for(name)?;
        let raw = self.get(name)?;
        Some(breakpoint::resolve(raw, validator))
    }
}
