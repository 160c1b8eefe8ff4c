//! Enumerated value domains.
//!
//! These tables are the closed vocabularies the validators check tokens
//! against. They are trusted as given: nothing here checks them for
//! overlap or ordering.

/// Spacing sizes used by `gap`, `padding` and `margin` keys.
///
/// The trailing-dash variants are the negative counterparts.
pub const DIMENSION_SIZES: &[&str] = &[
    "none", "small", "medium", "large", "xlarge", "xxlarge", "small-", "medium-", "large-",
    "xlarge-", "xxlarge-",
];

/// Font sizes used by the `font` key.
pub const FONT_SIZES: &[&str] = &["xsmall", "small", "medium", "large", "xlarge", "xxlarge"];

/// CSS `display` keywords plus the global keywords.
pub const DISPLAY_VALUES: &[&str] = &[
    "block",
    "inline",
    "inline-block",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "flow-root",
    "none",
    "contents",
    "table",
    "table-row",
    "list-item",
    "inherit",
    "initial",
    "revert",
    "revert-layer",
    "unset",
];

/// CSS `text-align` keywords plus the global keywords.
pub const TEXT_ALIGN_VALUES: &[&str] = &[
    "start",
    "end",
    "left",
    "right",
    "center",
    "justify",
    "match-parent",
    "inherit",
    "initial",
    "revert",
    "revert-layer",
    "unset",
];

/// A named value domain, used when describing keys to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Presence-only marker, no values.
    Flag,
    /// Non-zero integers.
    Integer,
    Dimension,
    Font,
    Display,
    TextAlign,
}

impl Domain {
    /// The enumerated members, or `None` for open domains.
    pub fn values(&self) -> Option<&'static [&'static str]> {
        match self {
            Domain::Dimension => Some(DIMENSION_SIZES),
            Domain::Font => Some(FONT_SIZES),
            Domain::Display => Some(DISPLAY_VALUES),
            Domain::TextAlign => Some(TEXT_ALIGN_VALUES),
            Domain::Flag | Domain::Integer => None,
        }
    }

    /// Human-readable summary of the domain.
    pub fn describe(&self) -> String {
        match self {
            Domain::Flag => "flag (presence only)".to_string(),
            Domain::Integer => "integer (non-zero)".to_string(),
            _ => self.values().unwrap_or_default().join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerated_domains_expose_values() {
        assert_eq!(Domain::Font.values(), Some(FONT_SIZES));
        assert_eq!(Domain::Dimension.values(), Some(DIMENSION_SIZES));
        assert!(Domain::Integer.values().is_none());
        assert!(Domain::Flag.values().is_none());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Domain::Font.describe(),
            "xsmall small medium large xlarge xxlarge"
        );
        assert_eq!(Domain::Flag.describe(), "flag (presence only)");
        assert_eq!(Domain::Integer.describe(), "integer (non-zero)");
    }
}
