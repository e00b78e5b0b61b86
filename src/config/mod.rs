// src/config/mod.rs
//! Group-scoped, cached access to a configuration file
//!
//! A [`ConfigHandle`] is opened on one file and one `[group]`, and reads
//! string, integer and hexadecimal values from that group on demand.

pub use defaults::{default_path, default_path_from};
pub use handle::ConfigHandle;

mod defaults;
mod handle;
