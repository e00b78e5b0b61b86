// src/store/mod.rs
//! Key-value stores a [`ConfigHandle`](crate::ConfigHandle) reads from
//!
//! The handle only ever asks for one key in one group at a time, either as
//! text or as a decimal integer. Everything else (file syntax, comments,
//! quoting) belongs to the store.

mod ini_store;

pub use ini_store::IniStore;

use crate::error::LookupError;

/// Section + key lookups over a loaded configuration source.
pub trait KeyValueStore {
    /// Raw text of `key` in `group`.
    fn get_string(&self, group: &str, key: &str) -> Result<String, LookupError>;

    /// Value of `key` in `group` read as a decimal integer.
    fn get_integer(&self, group: &str, key: &str) -> Result<i64, LookupError>;
}
