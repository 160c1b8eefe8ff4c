//! # Structural Relationships
//!
//! Grid hosts change shape depending on where they sit in the tree:
//!
//! - **Member**: a host with at least one assigned child of the container
//!   kind behaves as a row and carries the `row` marker.
//! - **Child**: a host whose immediate parent is of the container kind is a
//!   cell and carries the `cell` marker.
//!
//! Detection is split in two. [`is_member`] and [`is_child`] are pure
//! predicates over a [`StructuralSnapshot`] the host builds from its own
//! tree, and [`RelationshipDetector`] turns predicate flips into marker
//! writes on the [`AttributeState`]. The markers then flow through the
//! ordinary resolve and project pipeline.
//!
//! ## Transitions
//!
//! | Marker present | Predicate | Result |
//! |----------------|-----------|--------|
//! | no | false | `Unchanged` |
//! | no | true | `Entered`, marker set |
//! | yes | true | `Unchanged` |
//! | yes | false | `Left`, marker removed |
//!
//! Each relationship is evaluated once per notification, so it can flip at
//! most once, and a notification without structural change writes nothing.

use crate::registry::Registry;
use crate::state::AttributeState;

/// Default container signature, the grid host tag.
pub const DEFAULT_CONTAINER_KIND: &str = "r-grid";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    Member,
    Child,
}

impl Relationship {
    pub const ALL: [Relationship; 2] = [Relationship::Member, Relationship::Child];

    /// The boolean key toggled for this relationship.
    pub fn marker(&self) -> &'static str {
        match self {
            Relationship::Member => "row",
            Relationship::Child => "cell",
        }
    }
}

/// What a host knows about its surroundings at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralSnapshot {
    /// Kind (tag) of the immediate parent, if attached under an element
    pub parent_kind: Option<String>,
    /// Kinds of the elements assigned to the host's slot
    pub child_kinds: Vec<String>,
}

impl StructuralSnapshot {
    /// A host with no parent element and no children.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_parent(mut self, kind: impl Into<String>) -> Self {
        self.parent_kind = Some(kind.into());
        self
    }

    pub fn with_child(mut self, kind: impl Into<String>) -> Self {
        self.child_kinds.push(kind.into());
        self
    }
}

/// Whether any assigned child matches the container kind.
pub fn is_member(snapshot: &StructuralSnapshot, container_kind: &str) -> bool {
    snapshot
        .child_kinds
        .iter()
        .any(|kind| kind.eq_ignore_ascii_case(container_kind))
}

/// Whether the immediate parent matches the container kind.
pub fn is_child(snapshot: &StructuralSnapshot, container_kind: &str) -> bool {
    snapshot
        .parent_kind
        .as_deref()
        .is_some_and(|kind| kind.eq_ignore_ascii_case(container_kind))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Entered,
    Left,
}

/// Outcome of one structural notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    pub transitions: Vec<(Relationship, Transition)>,
}

impl Changes {
    /// True when at least one marker was written or removed.
    pub fn changed(&self) -> bool {
        self.transitions
            .iter()
            .any(|(_, transition)| *transition != Transition::Unchanged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDetector {
    container_kind: String,
}

impl Default for RelationshipDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_KIND)
    }
}

impl RelationshipDetector {
    pub fn new(container_kind: impl Into<String>) -> Self {
        Self {
            container_kind: container_kind.into(),
        }
    }

    pub fn container_kind(&self) -> &str {
        &self.container_kind
    }

    pub fn holds(&self, relationship: Relationship, snapshot: &StructuralSnapshot) -> bool {
        match relationship {
            Relationship::Member => is_member(snapshot, &self.container_kind),
            Relationship::Child => is_child(snapshot, &self.container_kind),
        }
    }

    /// Re-evaluate one relationship and toggle its marker on a flip.
    ///
    /// Registries without the marker key never transition.
    pub fn detect(
        &self,
        relationship: Relationship,
        snapshot: &StructuralSnapshot,
        registry: &Registry,
        state: &mut AttributeState,
    ) -> Transition {
        let marker = relationship.marker();
        if !registry.is_recognized(marker) {
            return Transition::Unchanged;
        }

        let was = state.contains(marker);
        let now = self.holds(relationship, snapshot);
        let transition = match (was, now) {
            (false, true) => {
                state.set(registry, marker, marker);
                Transition::Entered
            }
            (true, false) => {
                state.remove(marker);
                Transition::Left
            }
            _ => Transition::Unchanged,
        };
        if transition != Transition::Unchanged {
            tracing::debug!(?relationship, ?transition, "relationship changed");
        }
        transition
    }

    /// Re-evaluate every relationship once.
    pub fn sync(
        &self,
        snapshot: &StructuralSnapshot,
        registry: &Registry,
        state: &mut AttributeState,
    ) -> Changes {
        Changes {
            transitions: Relationship::ALL
                .into_iter()
                .map(|rel| (rel, self.detect(rel, snapshot, registry, state)))
                .collect(),
        }
    }
}
