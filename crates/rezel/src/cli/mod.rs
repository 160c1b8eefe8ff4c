//! # CLI Layer
//!
//! The only place that knows about terminal I/O, exit codes and output
//! formatting. Everything it prints comes from a `Render` produced by the
//! library's host facade.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Config loading, logging setup, dispatch
//! - `render`: Text and JSON output

mod commands;
mod render;
mod setup;

pub use commands::run;
