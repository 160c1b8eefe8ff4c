//! # Projections
//!
//! Resolved attributes are re-exposed to the presentation layer in three
//! shapes:
//!
//! | Projection | Value key | Boolean key |
//! |------------|-----------|-------------|
//! | Class names | `col-small-12` | `row` |
//! | Host attributes | `data-col-small` / `r-c1` | `data-row` / `r-row` |
//! | CSS custom properties | `--display-small` | never |
//!
//! ## Clean Slate
//!
//! Host attributes and CSS properties are emitted for **every** slot of
//! every requested key, absent unless a valid token occupies it. The caller
//! applies absent entries as removals, so a value cleared since the last
//! pass is always taken off the host. Because each pass is complete, passes
//! can be applied in any order and the last one wins.
//!
//! Class names have no absent form: the caller replaces the whole list.

use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, BreakpointValues, Resolution};
use crate::registry::Registry;
use crate::state::AttributeState;

/// Grammar for generated host attribute names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostNaming {
    /// `data-<key>-<breakpoint>`, flags as `data-<key>`
    #[default]
    Verbose,
    /// `r-<alias><ordinal>` with 1-based ordinals, flags as `r-<key>`
    Compact,
}

impl HostNaming {
    fn slot(&self, key: &str, alias: &str, breakpoint: Breakpoint) -> String {
        match self {
            HostNaming::Verbose => format!("data-{}-{}", key, breakpoint.name()),
            HostNaming::Compact => format!("r-{}{}", alias, breakpoint.ordinal()),
        }
    }

    fn flag(&self, key: &str) -> String {
        match self {
            HostNaming::Verbose => format!("data-{}", key),
            HostNaming::Compact => format!("r-{}", key),
        }
    }
}

/// A generated name and its value; `None` means "remove if set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionEntry {
    pub name: String,
    pub value: Option<String>,
}

impl ProjectionEntry {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

/// The three projections of one attribute state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projections {
    pub classes: Vec<String>,
    pub host_attributes: Vec<ProjectionEntry>,
    pub host_css: Vec<ProjectionEntry>,
}

/// Project every key of `registry`, with CSS limited to its css keys.
pub fn project(registry: &Registry, state: &AttributeState, naming: HostNaming) -> Projections {
    let keys = registry.keys();
    let projections = Projections {
        classes: build_class_names(&keys, state, registry),
        host_attributes: build_host_attributes(&keys, state, registry, naming),
        host_css: build_host_css(&registry.css_keys(), state, registry),
    };
    tracing::trace!(
        registry = %registry.kind(),
        classes = projections.classes.len(),
        host_attributes = projections.host_attributes.len(),
        host_css = projections.host_css.len(),
        "projected attribute state"
    );
    projections
}

/// Utility class names for every set key, in key order then breakpoint order.
pub fn build_class_names(keys: &[&str], state: &AttributeState, registry: &Registry) -> Vec<String> {
    let mut classes = Vec::new();
    for key in keys {
        match state.resolve(registry, key) {
            Some(Resolution::Flag) => classes.push(key.to_string()),
            Some(Resolution::Breakpoints(values)) => {
                classes.extend(
                    values
                        .present()
                        .map(|(breakpoint, value)| format!("{}-{}-{}", key, breakpoint, value)),
                );
            }
            None => {}
        }
    }
    classes
}

/// Host attributes for every slot of every key, absent unless set.
pub fn build_host_attributes(
    keys: &[&str],
    state: &AttributeState,
    registry: &Registry,
    naming: HostNaming,
) -> Vec<ProjectionEntry> {
    let mut entries = Vec::new();
    for key in keys {
        let Some(spec) = registry.get_spec(key) else {
            continue;
        };
        if spec.validator().is_boolean() {
            let value = state.contains(key).then(|| key.to_string());
            entries.push(ProjectionEntry::new(naming.flag(key), value));
            continue;
        }
        let values = slot_values(state, registry, key);
        entries.extend(values.iter().map(|(breakpoint, value)| {
            ProjectionEntry::new(
                naming.slot(key, spec.alias, breakpoint),
                value.map(str::to_string),
            )
        }));
    }
    entries
}

/// CSS custom properties for every slot of the requested value keys.
///
/// Boolean keys are skipped even when requested.
pub fn build_host_css(
    keys: &[&str],
    state: &AttributeState,
    registry: &Registry,
) -> Vec<ProjectionEntry> {
    let mut entries = Vec::new();
    for key in keys {
        match registry.validator_for(key) {
            Some(validator) if !validator.is_boolean() => {}
            _ => continue,
        }
        let values = slot_values(state, registry, key);
        entries.extend(values.iter().map(|(breakpoint, value)| {
            ProjectionEntry::new(
                format!("--{}-{}", key, breakpoint),
                value.map(str::to_string),
            )
        }));
    }
    entries
}

/// Resolved slots of a value key; all absent when the key is unset.
fn slot_values(state: &AttributeState, registry: &Registry, key: &str) -> BreakpointValues {
    match state.resolve(registry, key) {
        Some(Resolution::Breakpoints(values)) => values,
        _ => BreakpointValues::default(),
    }
}
