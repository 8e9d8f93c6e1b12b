//! Test doubles shared by the integration tests

#![allow(dead_code)]

use logf::{Flags, LineOutput, LoggerError, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory destination that counts `write` calls.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
        self.writes.store(0, Ordering::SeqCst);
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination whose every write fails.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A record of one `LineOutput::output` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub message: String,
    pub file: String,
    pub line: u32,
}

/// Thread-safe collaborator stub that records instead of writing.
#[derive(Default)]
pub struct CollectingOutput {
    records: Mutex<Vec<Recorded>>,
    flags: Mutex<Flags>,
    prefix: Mutex<String>,
    fail: bool,
}

impl CollectingOutput {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn records(&self) -> Vec<Recorded> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.records.lock().len()
    }
}

impl LineOutput for CollectingOutput {
    fn set_output(&self, _writer: Box<dyn Write + Send>) {}

    fn set_flags(&self, flags: Flags) {
        *self.flags.lock() = flags;
    }

    fn flags(&self) -> Flags {
        *self.flags.lock()
    }

    fn set_prefix(&self, prefix: &str) {
        *self.prefix.lock() = prefix.to_string();
    }

    fn prefix(&self) -> String {
        self.prefix.lock().clone()
    }

    fn output(&self, caller: &Location<'_>, message: &str) -> Result<()> {
        if self.fail {
            return Err(LoggerError::writer("collector closed"));
        }
        self.records.lock().push(Recorded {
            message: message.to_string(),
            file: caller.file().to_string(),
            line: caller.line(),
        });
        Ok(())
    }
}
