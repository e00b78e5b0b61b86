// src/consts.rs
//! Shared constants — file locations and log identity

/// File name looked up in the home directory when no path is given
pub const DEFAULT_FILE_NAME: &str = ".plsdk.ini";

/// Environment variable holding the home directory
pub const HOME_ENV_VAR: &str = "HOME";

/// `tracing` target for every event emitted by this crate
pub const LOG_TARGET: &str = "plconfig";
