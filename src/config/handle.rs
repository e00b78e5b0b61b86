// src/config/handle.rs
use std::path::{Path, PathBuf};

use tracing::{debug, debug_span, trace, warn, Span};

use super::defaults::default_path;
use crate::cache::{Cache, CachedValue};
use crate::consts::LOG_TARGET;
use crate::store::{IniStore, KeyValueStore};
use crate::util::parse_hex;
use crate::Result;

/// Read access to one group of a configuration file.
///
/// Every successfully resolved key is cached for the handle's lifetime, so
/// the store is asked about each key at most once. Lookups that fail
/// (missing key, unreadable value) return the caller's default and are
/// retried on the next call.
#[derive(Debug)]
pub struct ConfigHandle<S = IniStore> {
    file_path: PathBuf,
    group: String,
    store: S,
    cache: Cache,
    span: Span,
}

impl ConfigHandle<IniStore> {
    /// Load `file_path`, or `$HOME/.plsdk.ini` when `None`, scoped to `group`.
    pub fn open(file_path: Option<&Path>, group: &str) -> Result<Self> {
        let file_path = match file_path {
            Some(path) => path.to_path_buf(),
            None => default_path()?,
        };

        let store = IniStore::load(&file_path)?;
        let handle = Self::from_store(store, file_path, group);
        debug!(target: LOG_TARGET, parent: &handle.span, "loaded config");

        Ok(handle)
    }
}

impl<S: KeyValueStore> ConfigHandle<S> {
    /// Wrap an already loaded store. The cache starts empty.
    pub fn from_store(store: S, file_path: impl Into<PathBuf>, group: &str) -> Self {
        let file_path = file_path.into();
        let span = debug_span!(
            target: LOG_TARGET,
            "plconfig",
            group,
            path = %file_path.display()
        );

        Self {
            file_path,
            group: group.to_owned(),
            store,
            cache: Cache::default(),
            span,
        }
    }

    /// Log under `span` instead of the handle's own span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_cached(&self, key: &str) -> bool {
        self.cache.get(key).is_some()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Cached keys in the order they were first resolved
    pub fn cached_keys(&self) -> impl Iterator<Item = &str> {
        self.cache.keys()
    }

    /// Text value of `key`, or `default` if the group has no such key
    pub fn get_string(&mut self, key: &str, default: &str) -> String {
        let span = self.span.clone();
        let _enter = span.enter();

        if let Some(cached) = self.cache.get(key) {
            trace!(target: LOG_TARGET, key, "cache hit");
            return cached.as_text().into_owned();
        }

        match self.store.get_string(&self.group, key) {
            Ok(value) => self.remember(key, CachedValue::Text(value)).as_text().into_owned(),
            Err(err) => {
                trace!(target: LOG_TARGET, key, %err, "using default");
                default.to_owned()
            }
        }
    }

    /// Decimal integer value of `key`, or `default`
    pub fn get_int(&mut self, key: &str, default: i64) -> i64 {
        let span = self.span.clone();
        let _enter = span.enter();

        if let Some(cached) = self.cache.get(key) {
            trace!(target: LOG_TARGET, key, "cache hit");
            return cached.as_integer().unwrap_or_else(|| {
                debug!(target: LOG_TARGET, key, ?cached, "cached value is not an integer");
                default
            });
        }

        match self.store.get_integer(&self.group, key) {
            Ok(value) => {
                self.remember(key, CachedValue::Integer(value));
                value
            }
            Err(err) => {
                trace!(target: LOG_TARGET, key, %err, "using default");
                default
            }
        }
    }

    /// Hexadecimal value of `key`, or `default`.
    ///
    /// The text may carry a `0x` prefix or an `h` suffix. Text that is not a
    /// hex number logs a warning and is not cached.
    pub fn get_hex(&mut self, key: &str, default: u64) -> u64 {
        let span = self.span.clone();
        let _enter = span.enter();

        if let Some(cached) = self.cache.get(key) {
            trace!(target: LOG_TARGET, key, "cache hit");
            return cached.as_hex().unwrap_or_else(|| {
                let raw = cached.as_text();
                warn!(target: LOG_TARGET, "failed to parse hex number for {key}: {raw:?}");
                default
            });
        }

        let raw = match self.store.get_string(&self.group, key) {
            Ok(raw) => raw,
            Err(err) => {
                trace!(target: LOG_TARGET, key, %err, "using default");
                return default;
            }
        };

        match parse_hex(&raw) {
            Some(value) => {
                self.remember(key, CachedValue::Hex { raw, value });
                value
            }
            None => {
                warn!(target: LOG_TARGET, "failed to parse hex number for {key}: {raw:?}");
                default
            }
        }
    }

    /// Release the handle, its store and every cached value
    pub fn close(self) {
        debug!(
            target: LOG_TARGET,
            parent: &self.span,
            cached = self.cache.len(),
            "closing config"
        );
    }

    fn remember(&mut self, key: &str, value: CachedValue) -> &CachedValue {
        debug!(target: LOG_TARGET, key, ?value, "caching");
        self.cache.insert(key, value)
    }
}
