// src/lib.rs
//! plconfig — cached access to PLSDK configuration files
//!
//! Features:
//! - INI files parsed with `rust-ini`, one `[group]` per handle
//! - String, decimal integer and hexadecimal accessors with defaults
//! - Each key resolved from the file at most once per handle
//! - `tracing` events scoped to a per-handle span

pub mod cache;
pub mod config;
pub mod consts;
pub mod error;
pub mod store;
pub mod util;

// Re-export everything users need at the crate root
pub use cache::CachedValue;
pub use config::{default_path, default_path_from, ConfigHandle};
pub use error::{ConfigError, LookupError};
pub use store::{IniStore, KeyValueStore};
pub use util::parse_hex;

pub type Result<T> = std::result::Result<T, ConfigError>;
