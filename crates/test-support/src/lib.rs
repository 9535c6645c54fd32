#![deny(unsafe_code)]

//! Shared test utilities for the msglevel workspace.
//!
//! [`CaptureBuffer`] is a cloneable in-memory writer. Tests hand one clone to
//! the code under test (usually as an injected stdout or stderr) and keep the
//! other to inspect what was written, which also works once the writer has
//! been moved behind a mutex or into another thread. [`FailingWriter`] rejects
//! every write so error paths can be exercised.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Captured {
    bytes: Vec<u8>,
    flushes: usize,
}

/// In-memory writer whose clones share one buffer.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Captured>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Captured> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every byte written so far.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.lock().bytes.clone()
    }

    /// Returns the captured bytes decoded as UTF-8.
    ///
    /// # Panics
    ///
    /// Panics when the captured bytes are not valid UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes()).expect("captured output is UTF-8")
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().bytes.is_empty()
    }

    /// Number of times [`Write::flush`] was called on any clone.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.lock().flushes
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flushes += 1;
        Ok(())
    }
}

/// Writer that fails every operation with [`io::ErrorKind::BrokenPipe`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "capture closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "capture closed"))
    }
}
