// src/config/defaults.rs
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::consts::{DEFAULT_FILE_NAME, HOME_ENV_VAR};
use crate::error::ConfigError;

/// `$HOME/.plsdk.ini`
///
/// Fails with [`ConfigError::NoHomeDirectory`] when `HOME` is unset or empty.
/// An empty `HOME` would otherwise resolve to `/.plsdk.ini`.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    default_path_from(std::env::var_os(HOME_ENV_VAR).as_deref())
}

/// Same as [`default_path`], resolved against an explicit home directory.
/// `None` and an empty value are both rejected.
pub fn default_path_from(home: Option<&OsStr>) -> Result<PathBuf, ConfigError> {
    match home {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(DEFAULT_FILE_NAME)),
        _ => Err(ConfigError::NoHomeDirectory),
    }
}
