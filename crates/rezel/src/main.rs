//! # Rezel CLI
//!
//! A thin command-line client over the `rezelapp` library, useful for
//! checking what a given set of responsive attributes resolves to without
//! a browser in the loop:
//!
//! ```text
//! rezel resolve col="12 6 4" display="flex"
//! rezel resolve --kind element --format json margin-top="small large"
//! rezel resolve --parent r-grid --child r-grid
//! rezel keys --kind element
//! ```
//!
//! This file only invokes `cli::run()` and handles process termination.
//! Argument parsing lives in `cli/setup.rs`, dispatch in `cli/commands.rs`
//! and output formatting in `cli/render.rs`. Everything that actually
//! resolves attributes lives in the library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
