use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rezelapp::projection::HostNaming;
use rezelapp::registry::RegistryKind;

#[derive(Parser, Debug)]
#[command(
    name = "rezel",
    bin_name = "rezel",
    version,
    disable_help_subcommand = true,
    after_help = "Values are space-separated, one per breakpoint: small medium large xlarge\n  rezel resolve col=\"12 6 4\" gap=\"small medium\""
)]
#[command(about = "Resolve responsive breakpoint attributes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a rezel.toml config file
    #[arg(short, long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve attributes and print the generated projections
    Resolve {
        /// Host kind whose registry is used (grid, element or a tag)
        #[arg(short, long, default_value = "grid")]
        kind: RegistryKind,

        /// Tag of the host's parent element
        #[arg(long)]
        parent: Option<String>,

        /// Tag of an element assigned to the host (repeatable)
        #[arg(long = "child")]
        children: Vec<String>,

        /// Host attribute naming (overrides config)
        #[arg(long, value_enum)]
        naming: Option<NamingArg>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also list absent entries in text output
        #[arg(short, long)]
        all: bool,

        /// Attributes as NAME=VALUE (e.g. col="12 6 4")
        assignments: Vec<String>,
    },

    /// List the attributes a host kind observes
    Keys {
        #[arg(short, long, default_value = "grid")]
        kind: RegistryKind,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NamingArg {
    Verbose,
    Compact,
}

impl From<NamingArg> for HostNaming {
    fn from(naming: NamingArg) -> Self {
        match naming {
            NamingArg::Verbose => HostNaming::Verbose,
            NamingArg::Compact => HostNaming::Compact,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_defaults() {
        let cli = Cli::try_parse_from(["rezel", "resolve", "col=12 6 4"]).unwrap();
        match cli.command {
            Commands::Resolve {
                kind,
                format,
                assignments,
                children,
                parent,
                naming,
                all,
            } => {
                assert_eq!(kind, RegistryKind::Grid);
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(assignments, vec!["col=12 6 4"]);
                assert!(children.is_empty());
                assert!(parent.is_none());
                assert!(naming.is_none());
                assert!(!all);
            }
            _ => panic!("Expected Resolve"),
        }
    }

    #[test]
    fn test_parse_resolve_with_structure() {
        let cli = Cli::try_parse_from([
            "rezel", "resolve", "--kind", "grid", "--parent", "r-grid", "--child", "r-grid",
            "--child", "div", "--format", "json", "--naming", "compact",
        ])
        .unwrap();
        let Commands::Resolve {
            children,
            parent,
            format,
            naming,
            ..
        } = cli.command
        else {
            panic!("Expected Resolve");
        };
        assert_eq!(children, vec!["r-grid", "div"]);
        assert_eq!(parent.as_deref(), Some("r-grid"));
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(naming.map(HostNaming::from), Some(HostNaming::Compact));
    }

    #[test]
    fn test_parse_global_options() {
        let cli =
            Cli::try_parse_from(["rezel", "keys", "-k", "element", "-v", "-c", "rezel.toml"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("rezel.toml")));
        assert!(matches!(
            cli.command,
            Commands::Keys {
                kind: RegistryKind::Element
            }
        ));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Cli::try_parse_from(["rezel", "keys", "--kind", "table"]).unwrap_err();
        assert!(err.to_string().contains("Unknown registry: table"));
    }

    #[test]
    fn test_kind_accepts_tags() {
        let cli = Cli::try_parse_from(["rezel", "resolve", "--kind", "r-elm"]).unwrap();
        let Commands::Resolve { kind, .. } = cli.command else {
            panic!("Expected Resolve");
        };
        assert_eq!(kind, RegistryKind::Element);
    }
}
