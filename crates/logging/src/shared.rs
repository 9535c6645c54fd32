//! crates/logging/src/shared.rs
//! Mutex-guarded router handle for hosts that log from several threads.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use crate::error::ProgressError;
use crate::levels::{MessageLevel, Severity};
use crate::progress::ProgressOptions;
use crate::router::MessageRouter;

/// Cloneable handle to one [`MessageRouter`] shared across threads.
///
/// Each operation takes the lock for its whole duration, so formatting,
/// the stream write, and the history append of one message are never
/// interleaved with another thread's. A poisoned lock is recovered rather
/// than propagated; the router holds no invariant a panicking writer could
/// break.
///
/// ```
/// use std::thread;
/// use logging::{MessageLevel, MessageRouter, RouterConfig, SharedRouter};
///
/// let router = MessageRouter::with_streams(RouterConfig::default(), Vec::new(), Vec::new());
/// let shared = SharedRouter::new(router);
///
/// let worker = shared.clone();
/// thread::spawn(move || worker.verbose("from worker").unwrap())
///     .join()
///     .unwrap();
/// shared.info("from main").unwrap();
///
/// assert_eq!(shared.history().len(), 2);
/// ```
pub struct SharedRouter<O = io::Stdout, E = io::Stderr> {
    inner: Arc<Mutex<MessageRouter<O, E>>>,
}

impl<O, E> Clone for SharedRouter<O, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<O, E> std::fmt::Debug for SharedRouter<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("SharedRouter");
        match self.inner.try_lock() {
            Ok(router) => {
                debug.field("threshold", &router.threshold());
            }
            Err(TryLockError::Poisoned(poisoned)) => {
                debug.field("threshold", &poisoned.into_inner().threshold());
            }
            // Held elsewhere, possibly by the formatting thread itself.
            Err(TryLockError::WouldBlock) => {}
        }
        debug.finish_non_exhaustive()
    }
}

impl<O, E> From<MessageRouter<O, E>> for SharedRouter<O, E> {
    fn from(router: MessageRouter<O, E>) -> Self {
        Self::new(router)
    }
}

impl<O, E> SharedRouter<O, E> {
    /// Wraps `router` for shared use.
    #[must_use]
    pub fn new(router: MessageRouter<O, E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(router)),
        }
    }

    /// Locks the router for a sequence of operations that must not interleave.
    pub fn lock(&self) -> MutexGuard<'_, MessageRouter<O, E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`MessageRouter::threshold`].
    #[must_use]
    pub fn threshold(&self) -> MessageLevel {
        self.lock().threshold()
    }

    /// See [`MessageRouter::is_enabled`].
    #[must_use]
    pub fn is_enabled(&self, level: MessageLevel) -> bool {
        self.lock().is_enabled(level)
    }

    /// See [`MessageRouter::is_quiet`].
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.lock().is_quiet()
    }

    /// Snapshot of the history.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.lock().history().to_vec()
    }

    /// See [`MessageRouter::history_joined`].
    #[must_use]
    pub fn history_joined(&self) -> String {
        self.lock().history_joined()
    }

    /// Returns the router when this is the last handle.
    ///
    /// Otherwise the handle is given back unchanged.
    pub fn try_unwrap(self) -> Result<MessageRouter<O, E>, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(|inner| Self { inner })
    }
}

impl<O, E> SharedRouter<O, E>
where
    O: Write,
    E: Write,
{
    /// See [`MessageRouter::emit`].
    pub fn emit(
        &self,
        level: MessageLevel,
        message: &str,
        prefix: Option<&str>,
    ) -> io::Result<()> {
        self.lock().emit(level, message, prefix)
    }

    /// See [`MessageRouter::emit_level`].
    pub fn emit_level(&self, level: MessageLevel, message: &str) -> io::Result<()> {
        self.lock().emit_level(level, message)
    }

    /// See [`MessageRouter::emit_severity`].
    pub fn emit_severity(&self, severity: Severity, message: &str) -> io::Result<()> {
        self.lock().emit_severity(severity, message)
    }

    /// `ABRT` message.
    pub fn abort(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Abort, message)
    }

    /// `ERROR` message.
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Error, message)
    }

    /// `WARNING` message.
    pub fn warning(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Warning, message)
    }

    /// `LOG` message.
    pub fn log(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Log, message)
    }

    /// Unprefixed `INFO` message.
    pub fn info(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Info, message)
    }

    /// `VERBOSE` message.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Verbose, message)
    }

    /// `VERBOSE1` message.
    pub fn verbose1(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Verbose1, message)
    }

    /// `VERBOSE2` message.
    pub fn verbose2(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Verbose2, message)
    }

    /// `VERBOSE3` message.
    pub fn verbose3(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Verbose3, message)
    }

    /// `DEBUG` message.
    pub fn debug(&self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Debug, message)
    }

    /// See [`MessageRouter::show_progress`].
    pub fn show_progress(
        &self,
        iteration: u64,
        total: u64,
        options: ProgressOptions,
    ) -> Result<(), ProgressError> {
        self.lock().show_progress(iteration, total, options)
    }
}
