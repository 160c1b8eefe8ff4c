//! # Configuration
//!
//! Rezel configuration is loaded with [`confique`] from an optional TOML
//! file, with environment variables layered on top.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `REZEL_CONTAINER_KIND`.
//! 2. **Config file**: the TOML file passed to [`RezelConfig::load`].
//! 3. **Compiled defaults**: via `#[config(default = ...)]` or the accessors.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `host_naming` | `verbose` | `verbose` (`data-col-small`) or `compact` (`r-c1`) host attributes |
//! | `container_kind` | `r-grid` | Tag matched by the relationship detector |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{RezelError, Result};
use crate::projection::HostNaming;
use crate::relationship::DEFAULT_CONTAINER_KIND;

/// Configuration for rezel, usually stored in `rezel.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RezelConfig {
    /// Host attribute grammar ("verbose" or "compact").
    /// When absent, defaults to verbose.
    pub host_naming: Option<HostNaming>,

    /// Tag the relationship detector treats as a container.
    #[config(default = "r-grid", env = "REZEL_CONTAINER_KIND")]
    pub container_kind: String,
}

impl Default for RezelConfig {
    fn default() -> Self {
        Self {
            host_naming: None,
            container_kind: DEFAULT_CONTAINER_KIND.to_string(),
        }
    }
}

impl RezelConfig {
    /// Load from the environment and, when given, a TOML file.
    ///
    /// An explicit path that does not exist is an error rather than a
    /// silent fallback to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            if !path.exists() {
                return Err(RezelError::ConfigNotFound(path.to_path_buf()));
            }
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Get the host naming, using the default if not configured.
    pub fn host_naming(&self) -> HostNaming {
        self.host_naming.unwrap_or_default()
    }
}
