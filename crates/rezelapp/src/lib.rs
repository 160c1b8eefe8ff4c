//! # Rezel Architecture
//!
//! Rezel resolves **compact responsive attributes** such as `col="12 6 4"`
//! into the three outputs a presentation layer applies to a host element:
//! utility class names, re-exposed host attributes and CSS custom
//! properties. It is a UI-agnostic library: it never touches a document
//! tree, a stylesheet or a terminal.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Facade (host.rs)                                      │
//! │  - Mirrors the element lifecycle as method calls            │
//! │  - Owns one AttributeState per host                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs) + Validators (validators.rs)        │
//! │  - Which keys a host observes, and how tokens validate      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Breakpoint Resolution (breakpoint.rs)                      │
//! │  - Positional tokens → four validated breakpoint slots      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Projections (projection.rs)                                │
//! │  - Class names, host attributes, CSS custom properties      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Alongside the pipeline, [`relationship`] watches structural snapshots
//! and toggles the `row` / `cell` markers, which then resolve like any
//! other attribute.
//!
//! ## Fail-Open Resolution
//!
//! Nothing on the resolution path returns an error. Unrecognized names are
//! ignored, invalid tokens leave their breakpoint slot absent, excess
//! tokens are dropped. A typo in one breakpoint never blanks the rest of
//! the attribute. [`error::RezelError`] only covers configuration and
//! caller input at the edges.
//!
//! ## Example
//!
//! ```
//! use rezelapp::host::ResponsiveHost;
//! use rezelapp::registry::RegistryKind;
//!
//! let mut host = ResponsiveHost::new(RegistryKind::Grid);
//! let render = host.attribute_changed("col", Some("12 6 4")).unwrap();
//! assert_eq!(
//!     render.projections.classes,
//!     vec!["col-small-12", "col-medium-6", "col-large-4"]
//! );
//! ```
//!
//! ## Module Overview
//!
//! - [`host`]: Lifecycle facade for presentation layers
//! - [`registry`]: Attribute specs for grid and element hosts
//! - [`validators`]: Token validators
//! - [`domains`]: Enumerated value tables
//! - [`breakpoint`]: Breakpoints and positional resolution
//! - [`state`]: Per-host raw attribute state
//! - [`projection`]: The three projection builders
//! - [`relationship`]: Row / cell relationship detection
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod breakpoint;
pub mod config;
pub mod domains;
pub mod error;
pub mod host;
pub mod projection;
pub mod registry;
pub mod relationship;
pub mod state;
pub mod validators;
