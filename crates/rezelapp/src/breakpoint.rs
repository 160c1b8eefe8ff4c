//! # Breakpoint Resolution
//!
//! A responsive attribute packs one value per breakpoint into a single
//! string: `col="12 6 4"` means 12 columns on small screens, 6 on medium and
//! 4 on large. Tokens are assigned by position, never by name.
//!
//! ## Rules
//!
//! - Tokens are whitespace separated; empty tokens are skipped
//! - Token `i` belongs to breakpoint `i`; tokens past the fourth are ignored
//! - Each token is validated on its own: a bad token leaves only its slot
//!   absent (`font="large bogus small"` keeps positions 1 and 3)
//! - Boolean keys have no breakpoint dimension, their presence is the value

use std::fmt;

use crate::validators::Validator;

pub const BREAKPOINT_COUNT: usize = 4;

/// One of the four fixed responsive tiers, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Small,
    Medium,
    Large,
    XLarge,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; BREAKPOINT_COUNT] = [
        Breakpoint::Small,
        Breakpoint::Medium,
        Breakpoint::Large,
        Breakpoint::XLarge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Small => "small",
            Breakpoint::Medium => "medium",
            Breakpoint::Large => "large",
            Breakpoint::XLarge => "xlarge",
        }
    }

    /// Zero-based position in the raw value.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// One-based position, used by compact host attribute names.
    pub fn ordinal(&self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated values for each breakpoint slot; `None` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointValues([Option<String>; BREAKPOINT_COUNT]);

impl BreakpointValues {
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&str> {
        self.0[breakpoint.index()].as_deref()
    }

    /// Every slot in breakpoint order, including absent ones.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, Option<&str>)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .map(move |breakpoint| (breakpoint, self.get(breakpoint)))
    }

    /// Only the slots holding a value.
    pub fn present(&self) -> impl Iterator<Item = (Breakpoint, &str)> + '_ {
        self.iter()
            .filter_map(|(breakpoint, value)| value.map(|v| (breakpoint, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

/// Outcome of resolving one raw attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A boolean key that is present.
    Flag,
    /// Per-breakpoint values of a value key.
    Breakpoints(BreakpointValues),
}

/// Resolve a raw attribute value against its validator.
pub fn resolve(raw: &str, validator: Validator) -> Resolution {
    let parse = match validator {
        Validator::Boolean => return Resolution::Flag,
        Validator::Parser(parse) => parse,
    };

    let mut values = BreakpointValues::default();
    for (breakpoint, token) in Breakpoint::ALL.into_iter().zip(raw.split_whitespace()) {
        match parse(token) {
            Some(value) => values.0[breakpoint.index()] = Some(value),
            None => tracing::trace!(%breakpoint, token, "dropping invalid token"),
        }
    }
    Resolution::Breakpoints(values)
}
