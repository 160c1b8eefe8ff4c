use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the edges of the library.
///
/// Attribute resolution itself never fails: invalid input degrades to an
/// absent slot. These variants cover configuration and caller input that
/// has to be rejected outright.
#[derive(Error, Debug)]
pub enum RezelError {
    #[error("Unknown registry: {0} (expected \"grid\" or \"element\")")]
    UnknownRegistry(String),

    #[error("Invalid assignment: {0} (expected NAME=VALUE)")]
    InvalidAssignment(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RezelError>;
