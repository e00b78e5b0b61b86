// src/store/ini_store.rs
//! [`KeyValueStore`] backed by `rust-ini`

use std::path::Path;

use ini::{Ini, ParseError};

use super::KeyValueStore;
use crate::error::{ConfigError, LookupError};

/// A fully parsed INI document.
#[derive(Debug, Clone)]
pub struct IniStore {
    ini: Ini,
}

impl IniStore {
    /// Read and parse the file at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { ini })
    }

    /// Parse an in-memory document
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        Ok(Self {
            ini: Ini::load_from_str(text)?,
        })
    }

    /// Names of all `[group]` sections, in order of first appearance
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for name in self.ini.sections().flatten() {
            if !groups.contains(&name) {
                groups.push(name);
            }
        }
        groups
    }
}

impl KeyValueStore for IniStore {
    fn get_string(&self, group: &str, key: &str) -> Result<String, LookupError> {
        // repeated [group] blocks merge, and the last occurrence of a key wins
        let sections: Vec<_> = self.ini.section_all(Some(group)).collect();
        if sections.is_empty() {
            return Err(LookupError::GroupNotFound {
                group: group.to_owned(),
            });
        }

        sections
            .iter()
            .rev()
            .find_map(|section| section.get_all(key).last())
            .map(str::to_owned)
            .ok_or_else(|| LookupError::KeyNotFound {
                group: group.to_owned(),
                key: key.to_owned(),
            })
    }

    fn get_integer(&self, group: &str, key: &str) -> Result<i64, LookupError> {
        let value = self.get_string(group, key)?;
        value
            .trim()
            .parse()
            .map_err(|_| LookupError::InvalidInteger {
                group: group.to_owned(),
                key: key.to_owned(),
                value,
            })
    }
}
