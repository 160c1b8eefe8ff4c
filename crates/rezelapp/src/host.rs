//! # Host Facade
//!
//! [`ResponsiveHost`] is the entry point for presentation layers. It owns
//! the attribute state of one host element and mirrors the element
//! lifecycle as plain method calls:
//!
//! | Host event | Method |
//! |------------|--------|
//! | attribute set / changed / removed | [`ResponsiveHost::attribute_changed`] |
//! | attached to the tree | [`ResponsiveHost::connected`] |
//! | slotted children changed | [`ResponsiveHost::children_changed`] |
//! | moved under a new parent | [`ResponsiveHost::moved`] |
//!
//! Each method returns a complete [`Render`] (or `None` when nothing
//! changed). The caller applies it: absent entries as removals, values as
//! assignments, and `container_class` as the class list of its shadow
//! container. The facade never touches a tree itself.

use serde::Serialize;

use crate::config::RezelConfig;
use crate::error::{RezelError, Result};
use crate::projection::{self, HostNaming, Projections};
use crate::registry::{Registry, RegistryKind};
use crate::relationship::{Relationship, RelationshipDetector, StructuralSnapshot, Transition};
use crate::state::AttributeState;

/// Class carried by the grid host's shadow container.
pub const CONTAINER_CLASS: &str = "grid-element";

/// Everything a host needs to apply after one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Render {
    #[serde(flatten)]
    pub projections: Projections,
    /// Class attribute of the shadow container; grid hosts only
    pub container_class: Option<String>,
}

impl Render {
    /// Pretty-printed JSON, projections flattened next to `container_class`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone)]
pub struct ResponsiveHost {
    registry: &'static Registry,
    state: AttributeState,
    detector: RelationshipDetector,
    naming: HostNaming,
}

impl ResponsiveHost {
    pub fn new(kind: RegistryKind) -> Self {
        Self {
            registry: kind.registry(),
            state: AttributeState::new(),
            detector: RelationshipDetector::default(),
            naming: HostNaming::default(),
        }
    }

    pub fn from_config(kind: RegistryKind, config: &RezelConfig) -> Self {
        Self::new(kind)
            .with_naming(config.host_naming())
            .with_detector(RelationshipDetector::new(config.container_kind.clone()))
    }

    pub fn with_naming(mut self, naming: HostNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_detector(mut self, detector: RelationshipDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn kind(&self) -> RegistryKind {
        self.registry.kind()
    }

    pub fn state(&self) -> &AttributeState {
        &self.state
    }

    /// Record a new raw value (`Some`) or the removal of an attribute
    /// (`None`), then re-render.
    ///
    /// Returns `None` for names outside the host's registry.
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> Option<Render> {
        if !self.registry.is_recognized(name) {
            tracing::debug!(name, kind = %self.kind(), "attribute not observed");
            return None;
        }
        match value {
            Some(raw) => {
                self.state.set(self.registry, name, raw);
            }
            None => {
                self.state.remove(name);
            }
        }
        Some(self.render())
    }

    /// Initial attachment: check every relationship, then render.
    pub fn connected(&mut self, snapshot: &StructuralSnapshot) -> Render {
        tracing::debug!(
            kind = %self.kind(),
            container = self.detector.container_kind(),
            "host connected"
        );
        self.detector.sync(snapshot, self.registry, &mut self.state);
        self.render()
    }

    /// Any structural notification. Renders only if a marker flipped.
    pub fn structure_changed(&mut self, snapshot: &StructuralSnapshot) -> Option<Render> {
        let changes = self.detector.sync(snapshot, self.registry, &mut self.state);
        changes.changed().then(|| self.render())
    }

    /// The host's assigned children changed; only membership can flip.
    pub fn children_changed(&mut self, snapshot: &StructuralSnapshot) -> Option<Render> {
        self.redetect(Relationship::Member, snapshot)
    }

    /// The host moved; only the child relationship can flip.
    pub fn moved(&mut self, snapshot: &StructuralSnapshot) -> Option<Render> {
        self.redetect(Relationship::Child, snapshot)
    }

    fn redetect(
        &mut self,
        relationship: Relationship,
        snapshot: &StructuralSnapshot,
    ) -> Option<Render> {
        let transition = self
            .detector
            .detect(relationship, snapshot, self.registry, &mut self.state);
        (transition != Transition::Unchanged).then(|| self.render())
    }

    /// Project the current state.
    pub fn render(&self) -> Render {
        let projections = projection::project(self.registry, &self.state, self.naming);
        let container_class = match self.kind() {
            RegistryKind::Grid => Some(
                std::iter::once(CONTAINER_CLASS)
                    .chain(projections.classes.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            RegistryKind::Element => None,
        };
        Render {
            projections,
            container_class,
        }
    }
}

/// Split a `name=value` pair as written on the command line or in markup.
///
/// Surrounding quotes on the value are dropped. A bare `name` (no `=`) is
/// accepted with an empty value, which is how boolean keys are written.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    let (name, value) = input.split_once('=').unwrap_or((input, ""));
    let name = name.trim();
    if name.is_empty() {
        return Err(RezelError::InvalidAssignment(input.to_string()));
    }
    let value = value.trim();
    let value = ['"', '\'']
        .iter()
        .find_map(|q| {
            value
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(value);
    Ok((name.to_lowercase(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEntry;

    fn entry<'a>(entries: &'a [ProjectionEntry], name: &str) -> &'a ProjectionEntry {
        entries
            .iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("missing entry {name}"))
    }

    #[test]
    fn test_attribute_changed_renders() {
        let mut host = ResponsiveHost::new(RegistryKind::Grid);
        let render = host.attribute_changed("col", Some("12 6 4")).unwrap();
        assert_eq!(
            render.projections.classes,
            vec!["col-small-12", "col-medium-6", "col-large-4"]
        );
        assert_eq!(
            render.container_class.as_deref(),
            Some("grid-element col-small-12 col-medium-6 col-large-4")
        );
    }

    #[test]
    fn test_unobserved_attribute_returns_none() {
        let mut host = ResponsiveHost::new(RegistryKind::Element);
        assert!(host.attribute_changed("col", Some("12")).is_none());
        assert!(host.state().is_empty());
    }

    #[test]
    fn test_attribute_removed_clears_slots() {
        let mut host = ResponsiveHost::new(RegistryKind::Element);
        host.attribute_changed("display", Some("flex"));
        let render = host.attribute_changed("display", None).unwrap();
        assert!(entry(&render.projections.host_css, "--display-small").is_absent());
        assert!(entry(&render.projections.host_attributes, "data-display-small").is_absent());
        assert!(render.container_class.is_none());
    }

    #[test]
    fn test_connected_detects_relationships() {
        let mut host = ResponsiveHost::new(RegistryKind::Grid);
        let snapshot = StructuralSnapshot::detached()
            .with_parent("r-grid")
            .with_child("r-grid");
        let render = host.connected(&snapshot);
        assert_eq!(render.projections.classes, vec!["row", "cell"]);
        assert_eq!(
            entry(&render.projections.host_attributes, "data-row").value.as_deref(),
            Some("row")
        );
    }

    #[test]
    fn test_structure_changed_only_renders_on_flip() {
        let mut host = ResponsiveHost::new(RegistryKind::Grid);
        let detached = StructuralSnapshot::detached();
        host.connected(&detached);
        assert!(host.structure_changed(&detached).is_none());

        let row = StructuralSnapshot::detached().with_child("r-grid");
        assert!(host.structure_changed(&row).is_some());
        assert!(host.structure_changed(&row).is_none());
    }

    #[test]
    fn test_children_changed_ignores_parent() {
        let mut host = ResponsiveHost::new(RegistryKind::Grid);
        let nested = StructuralSnapshot::detached().with_parent("r-grid");
        assert!(host.children_changed(&nested).is_none());
        assert!(!host.state().contains("cell"));

        let render = host.moved(&nested).unwrap();
        assert_eq!(render.projections.classes, vec!["cell"]);
    }

    #[test]
    fn test_compact_naming_from_config() {
        let config = RezelConfig {
            host_naming: Some(HostNaming::Compact),
            ..Default::default()
        };
        let mut host = ResponsiveHost::from_config(RegistryKind::Element, &config);
        let render = host.attribute_changed("margin-top", Some("small")).unwrap();
        assert_eq!(
            entry(&render.projections.host_attributes, "r-mt1").value.as_deref(),
            Some("small")
        );
    }

    #[test]
    fn test_render_serializes_flat() {
        let mut host = ResponsiveHost::new(RegistryKind::Grid);
        let render = host.attribute_changed("col", Some("6")).unwrap();
        let text = render.to_json().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["classes"][0], "col-small-6");
        assert_eq!(json["host_attributes"][2]["name"], "data-col-small");
        assert!(json["container_class"].is_string());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("col=12 6 4").unwrap(),
            ("col".to_string(), "12 6 4".to_string())
        );
        assert_eq!(
            parse_assignment("font=\"large small\"").unwrap(),
            ("font".to_string(), "large small".to_string())
        );
        assert_eq!(
            parse_assignment("Display='flex'").unwrap(),
            ("display".to_string(), "flex".to_string())
        );
        assert_eq!(
            parse_assignment("row").unwrap(),
            ("row".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_assignment_rejects_missing_name() {
        assert!(matches!(
            parse_assignment("=12"),
            Err(RezelError::InvalidAssignment(_))
        ));
        assert!(parse_assignment("").is_err());
    }
}
