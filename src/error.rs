// src/error.rs
//! Public error types for the entire crate

use std::path::PathBuf;

use thiserror::Error;

/// Failure to create a [`ConfigHandle`](crate::ConfigHandle).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no config path given and HOME is not set")]
    NoHomeDirectory,

    #[error("failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },
}

/// Failure to resolve one key from a [`KeyValueStore`](crate::KeyValueStore).
///
/// Handles never return these; a failed lookup falls back to the
/// caller's default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("group [{group}] not found")]
    GroupNotFound { group: String },

    #[error("key {key} not found in group [{group}]")]
    KeyNotFound { group: String, key: String },

    #[error("value {value:?} of {key} in group [{group}] is not an integer")]
    InvalidInteger {
        group: String,
        key: String,
        value: String,
    },
}
