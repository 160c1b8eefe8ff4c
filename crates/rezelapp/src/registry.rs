//! Attribute specifications and registries.
//!
//! Each host kind observes a closed set of attribute keys. A registry is the
//! single source of truth for that set: which keys exist, how their values
//! are validated, the short alias used for compact host attributes, and
//! which keys are re-exposed as CSS custom properties.
//!
//! Adding a key means adding an entry to the relevant table below.

use std::fmt;
use std::str::FromStr;

use crate::domains::Domain;
use crate::error::RezelError;
use crate::validators::{self, Validator};

/// Specification for a single observed attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    /// The attribute name as written on the host (e.g. "col", "margin-top")
    pub name: &'static str,

    /// Short form used by compact host attributes (`r-<alias><ordinal>`)
    pub alias: &'static str,

    /// The value domain, which also selects the validator
    pub domain: Domain,

    /// Whether the key is re-exposed as `--<key>-<breakpoint>` properties
    pub css: bool,
}

impl AttributeSpec {
    const fn new(name: &'static str, alias: &'static str, domain: Domain) -> Self {
        Self {
            name,
            alias,
            domain,
            css: false,
        }
    }

    /// Presence-only marker; the alias is the name itself.
    const fn flag(name: &'static str) -> Self {
        Self::new(name, name, Domain::Flag)
    }

    /// Set the css flag.
    const fn css(mut self) -> Self {
        self.css = true;
        self
    }

    /// The validator for this key's tokens.
    pub fn validator(&self) -> Validator {
        match self.domain {
            Domain::Flag => Validator::Boolean,
            Domain::Integer => Validator::Parser(validators::integer),
            Domain::Dimension => Validator::Parser(validators::dimension),
            Domain::Font => Validator::Parser(validators::font),
            Domain::Display => Validator::Parser(validators::display),
            Domain::TextAlign => Validator::Parser(validators::text_align),
        }
    }
}

/// Keys observed by grid hosts (`r-grid`).
///
/// `row` and `cell` are never authored directly; the relationship detector
/// toggles them.
pub const GRID_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::flag("row"),
    AttributeSpec::flag("cell"),
    AttributeSpec::new("col", "c", Domain::Integer),
    AttributeSpec::new("display", "d", Domain::Display).css(),
    AttributeSpec::new("order", "o", Domain::Integer),
    AttributeSpec::new("offset", "off", Domain::Integer),
    AttributeSpec::new("skip-before", "sb", Domain::Integer),
    AttributeSpec::new("skip-after", "sa", Domain::Integer),
    AttributeSpec::new("gap", "g", Domain::Dimension),
    AttributeSpec::new("padding", "p", Domain::Dimension),
    AttributeSpec::new("font", "f", Domain::Font),
    AttributeSpec::new("text-align", "ta", Domain::TextAlign),
];

/// Keys observed by general purpose hosts (`r-elm`).
pub const ELEMENT_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("display", "d", Domain::Display).css(),
    AttributeSpec::new("font", "f", Domain::Font),
    AttributeSpec::new("text-align", "ta", Domain::TextAlign).css(),
    AttributeSpec::new("padding", "p", Domain::Dimension),
    AttributeSpec::new("padding-top", "pt", Domain::Dimension),
    AttributeSpec::new("padding-right", "pr", Domain::Dimension),
    AttributeSpec::new("padding-bottom", "pb", Domain::Dimension),
    AttributeSpec::new("padding-left", "pl", Domain::Dimension),
    AttributeSpec::new("margin", "m", Domain::Dimension),
    AttributeSpec::new("margin-top", "mt", Domain::Dimension),
    AttributeSpec::new("margin-right", "mr", Domain::Dimension),
    AttributeSpec::new("margin-bottom", "mb", Domain::Dimension),
    AttributeSpec::new("margin-left", "ml", Domain::Dimension),
];

/// Which host kind a registry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    Grid,
    Element,
}

impl RegistryKind {
    /// The custom element tag the host kind is registered under.
    pub fn tag(&self) -> &'static str {
        match self {
            RegistryKind::Grid => "r-grid",
            RegistryKind::Element => "r-elm",
        }
    }

    pub fn registry(&self) -> &'static Registry {
        match self {
            RegistryKind::Grid => &GRID,
            RegistryKind::Element => &ELEMENT,
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryKind::Grid => write!(f, "grid"),
            RegistryKind::Element => write!(f, "element"),
        }
    }
}

impl FromStr for RegistryKind {
    type Err = RezelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" | "r-grid" => Ok(RegistryKind::Grid),
            "element" | "elm" | "r-elm" => Ok(RegistryKind::Element),
            _ => Err(RezelError::UnknownRegistry(s.to_string())),
        }
    }
}

/// An immutable table of attribute specs for one host kind.
#[derive(Debug)]
pub struct Registry {
    kind: RegistryKind,
    specs: &'static [AttributeSpec],
}

pub static GRID: Registry = Registry {
    kind: RegistryKind::Grid,
    specs: GRID_ATTRIBUTES,
};

pub static ELEMENT: Registry = Registry {
    kind: RegistryKind::Element,
    specs: ELEMENT_ATTRIBUTES,
};

impl Registry {
    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn specs(&self) -> &'static [AttributeSpec] {
        self.specs
    }

    /// Look up a key's spec. Matching is exact: attribute names arrive
    /// lower-cased from the host.
    pub fn get_spec(&self, name: &str) -> Option<&'static AttributeSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn is_recognized(&self, name: &str) -> bool {
        self.get_spec(name).is_some()
    }

    pub fn validator_for(&self, name: &str) -> Option<Validator> {
        self.get_spec(name).map(AttributeSpec::validator)
    }

    pub fn alias_for(&self, name: &str) -> Option<&'static str> {
        self.get_spec(name).map(|spec| spec.alias)
    }

    /// All keys, in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.name).collect()
    }

    /// Keys re-exposed as CSS custom properties.
    pub fn css_keys(&self) -> Vec<&'static str> {
        self.specs
            .iter()
            .filter(|spec| spec.css)
            .map(|spec| spec.name)
            .collect()
    }
}
