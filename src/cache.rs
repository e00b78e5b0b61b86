// src/cache.rs
//! Per-handle memo of resolved keys
//!
//! Entries are appended in resolution order and never replaced, so the
//! first successful read of a key fixes its value for the handle's
//! lifetime. Handles hold tens of keys at most; a linear scan is enough.

use std::borrow::Cow;

use crate::util::parse_hex;

/// A resolved value, tagged with the accessor that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    Text(String),
    Integer(i64),
    Hex { raw: String, value: u64 },
}

impl CachedValue {
    /// The value as text. Integers are rendered in decimal.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CachedValue::Text(s) => Cow::Borrowed(s),
            CachedValue::Integer(i) => Cow::Owned(i.to_string()),
            CachedValue::Hex { raw, .. } => Cow::Borrowed(raw),
        }
    }

    /// The value as a decimal integer, if it reads as one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CachedValue::Integer(i) => Some(*i),
            other => other.as_text().trim().parse().ok(),
        }
    }

    /// The value as a hexadecimal number, if it reads as one.
    pub fn as_hex(&self) -> Option<u64> {
        match self {
            CachedValue::Hex { value, .. } => Some(*value),
            other => parse_hex(&other.as_text()),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    pub(crate) key: String,
    pub(crate) value: CachedValue,
}

#[derive(Debug, Default)]
pub(crate) struct Cache {
    entries: Vec<CacheEntry>,
}

impl Cache {
    pub(crate) fn get(&self, key: &str) -> Option<&CachedValue> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Record `value` for `key`. A key that is already cached keeps its
    /// first value.
    pub(crate) fn insert(&mut self, key: &str, value: CachedValue) -> &CachedValue {
        let index = match self.entries.iter().position(|entry| entry.key == key) {
            Some(index) => index,
            None => {
                self.entries.push(CacheEntry {
                    key: key.to_owned(),
                    value,
                });
                self.entries.len() - 1
            }
        };
        &self.entries[index].value
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }
}
