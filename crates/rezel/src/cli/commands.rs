//! # Dispatch
//!
//! Responsibilities, in order:
//!
//! 1. **Argument Parsing**: shell arguments → typed commands via clap
//! 2. **Logging**: a stderr `tracing` subscriber, `WARN` by default
//! 3. **Context Setup**: configuration via `RezelConfig::load`
//! 4. **Dispatch**: drive a `ResponsiveHost` the way a browser would
//! 5. **Output**: hand the result to `render` and print it

use anyhow::{Context, Result};
use clap::Parser;
use rezelapp::config::RezelConfig;
use rezelapp::host::{parse_assignment, ResponsiveHost};
use rezelapp::registry::RegistryKind;
use rezelapp::relationship::StructuralSnapshot;
use tracing::Level;

use super::render::{render_json, render_keys, render_text};
use super::setup::{Cli, Commands, NamingArg, OutputFormat};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RezelConfig::load(cli.config.as_deref()).context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Resolve {
            kind,
            parent,
            children,
            naming,
            format,
            all,
            assignments,
        } => {
            let request = ResolveRequest {
                kind,
                parent,
                children,
                naming,
                assignments,
            };
            let host = resolve(&config, request)?;
            let output = match format {
                OutputFormat::Text => render_text(&host.render(), all),
                OutputFormat::Json => render_json(&host.render())?,
            };
            print!("{}", output);
        }
        Commands::Keys { kind } => {
            print!("{}", render_keys(kind.registry()));
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct ResolveRequest {
    kind: RegistryKind,
    parent: Option<String>,
    children: Vec<String>,
    naming: Option<NamingArg>,
    assignments: Vec<String>,
}

/// Attach a host under the requested structure, then apply every
/// assignment in order, as a browser would on first render.
fn resolve(config: &RezelConfig, request: ResolveRequest) -> Result<ResponsiveHost> {
    let mut host = ResponsiveHost::from_config(request.kind, config);
    if let Some(naming) = request.naming {
        host = host.with_naming(naming.into());
    }

    let mut snapshot = StructuralSnapshot::detached();
    if let Some(parent) = request.parent {
        snapshot = snapshot.with_parent(parent);
    }
    for child in request.children {
        snapshot = snapshot.with_child(child);
    }
    host.connected(&snapshot);

    for assignment in &request.assignments {
        let (name, value) = parse_assignment(assignment)?;
        if host.attribute_changed(&name, Some(&value)).is_none() {
            tracing::warn!(
                attribute = %name,
                kind = %request.kind,
                "ignoring attribute not observed by this host kind"
            );
        }
    }
    Ok(host)
}
