// tests/common.rs
//! Shared test utilities — logging setup, log capture, instrumented store

use std::cell::Cell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use plconfig::{KeyValueStore, LookupError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

/// In-memory sink for formatted log lines
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with every event at TRACE and above captured as text
#[allow(dead_code)]
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.contents())
}

/// Store over fixed groups that counts every query it answers
#[derive(Default)]
#[allow(dead_code)]
pub struct CountingStore {
    groups: HashMap<String, HashMap<String, String>>,
    string_calls: Cell<usize>,
    integer_calls: Cell<usize>,
}

#[allow(dead_code)]
impl CountingStore {
    pub fn new(group: &str, pairs: &[(&str, &str)]) -> Self {
        let mut store = Self::default();
        store.groups.insert(
            group.to_owned(),
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        store
    }

    pub fn string_calls(&self) -> usize {
        self.string_calls.get()
    }

    pub fn integer_calls(&self) -> usize {
        self.integer_calls.get()
    }

    pub fn total_calls(&self) -> usize {
        self.string_calls() + self.integer_calls()
    }

    fn lookup(&self, group: &str, key: &str) -> Result<String, LookupError> {
        let pairs = self
            .groups
            .get(group)
            .ok_or_else(|| LookupError::GroupNotFound {
                group: group.to_owned(),
            })?;
        pairs
            .get(key)
            .cloned()
            .ok_or_else(|| LookupError::KeyNotFound {
                group: group.to_owned(),
                key: key.to_owned(),
            })
    }
}

impl KeyValueStore for CountingStore {
    fn get_string(&self, group: &str, key: &str) -> Result<String, LookupError> {
        self.string_calls.set(self.string_calls.get() + 1);
        self.lookup(group, key)
    }

    fn get_integer(&self, group: &str, key: &str) -> Result<i64, LookupError> {
        self.integer_calls.set(self.integer_calls.get() + 1);
        let value = self.lookup(group, key)?;
        value.trim().parse().map_err(|_| LookupError::InvalidInteger {
            group: group.to_owned(),
            key: key.to_owned(),
            value,
        })
    }
}
