//! crates/logging/src/router.rs
//! Level gating, formatting, stream routing, and history retention.

use std::io::{self, Write};

use logging_sink::{LineMode, MessageSink};

use crate::config::RouterConfig;
use crate::destination::Destination;
use crate::error::{ConfigError, ProgressError};
use crate::levels::{MessageLevel, Severity};
use crate::progress::{ProgressBar, ProgressOptions};

/// Builds the stored form of a message: optional `"<prefix> "`, the body, and
/// exactly one trailing newline.
///
/// ```
/// use logging::format_message;
///
/// assert_eq!(format_message(Some("ERROR"), "disk full"), "ERROR disk full\n");
/// assert_eq!(format_message(None, "ready\n"), "ready\n");
/// ```
#[must_use]
pub fn format_message(prefix: Option<&str>, message: &str) -> String {
    let prefix_len = prefix.map_or(0, |prefix| prefix.len() + 1);
    let mut formatted = String::with_capacity(prefix_len + message.len() + 1);
    if let Some(prefix) = prefix {
        formatted.push_str(prefix);
        formatted.push(' ');
    }
    formatted.push_str(message);
    if !formatted.ends_with('\n') {
        formatted.push('\n');
    }
    formatted
}

/// Routes leveled messages to stdout/stderr and keeps a transcript of all of them.
///
/// The threshold is fixed at construction. A message at level `L` is written
/// when `L <= threshold`, to the stream chosen by [`Destination::for_level`].
/// A threshold of [`MessageLevel::QUIET`] silences both streams. Every
/// message is appended to the history whether or not it was written.
///
/// Both streams are injectable; [`MessageRouter::new`] binds the process's
/// stdout and stderr.
///
/// ```
/// use logging::{MessageLevel, MessageRouter, RouterConfig};
///
/// let config = RouterConfig::with_threshold(MessageLevel::VERBOSE);
/// let mut router = MessageRouter::with_streams(config, Vec::new(), Vec::new());
///
/// router.info("a")?;
/// router.debug("b")?;
/// router.verbose("c")?;
///
/// assert_eq!(router.stdout(), b"a\n");
/// assert_eq!(router.stderr(), b"VERBOSE c\n");
/// assert_eq!(router.history(), ["a\n", "DEBUG b\n", "VERBOSE c\n"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct MessageRouter<O = io::Stdout, E = io::Stderr> {
    config: RouterConfig,
    stdout: MessageSink<O>,
    stderr: MessageSink<E>,
    history: Vec<String>,
}

impl MessageRouter {
    /// Router bound to the process streams with an explicit threshold.
    #[must_use]
    pub fn new(threshold: MessageLevel) -> Self {
        Self::with_config(RouterConfig::with_threshold(threshold))
    }

    /// Router bound to the process streams.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self::with_streams(config, io::stdout(), io::stderr())
    }

    /// Router bound to the process streams, threshold read from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        RouterConfig::from_env().map(Self::with_config)
    }

    /// Uses `threshold` when given, otherwise reads it from the environment.
    pub fn resolve(threshold: Option<MessageLevel>) -> Result<Self, ConfigError> {
        RouterConfig::resolve(threshold).map(Self::with_config)
    }
}

impl<O, E> MessageRouter<O, E> {
    /// Router writing to the supplied stdout and stderr replacements.
    #[must_use]
    pub fn with_streams(config: RouterConfig, stdout: O, stderr: E) -> Self {
        Self {
            config,
            stdout: MessageSink::new(stdout),
            stderr: MessageSink::new(stderr),
            history: Vec::new(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> RouterConfig {
        self.config
    }

    /// Configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> MessageLevel {
        self.config.threshold()
    }

    /// `true` when `level <= threshold`.
    #[must_use]
    pub fn is_enabled(&self, level: MessageLevel) -> bool {
        level <= self.threshold()
    }

    /// Stream an enabled message at `level` is written to.
    #[must_use]
    pub const fn destination(&self, level: MessageLevel) -> Destination {
        Destination::for_level(level)
    }

    /// `true` when the threshold is at least [`MessageLevel::INFO`].
    ///
    /// Despite the name this is `false` for a [`MessageLevel::QUIET`]
    /// threshold; existing callers depend on that reading.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.threshold() >= MessageLevel::INFO
    }

    /// Every formatted message in emission order.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// History entries joined with `"\n"`.
    ///
    /// Entries already end in a newline, so consecutive entries are separated
    /// by a blank line.
    #[must_use]
    pub fn history_joined(&self) -> String {
        self.history.join("\n")
    }

    /// Borrows the stdout writer.
    #[must_use]
    pub const fn stdout(&self) -> &O {
        self.stdout.writer()
    }

    /// Borrows the stderr writer.
    #[must_use]
    pub const fn stderr(&self) -> &E {
        self.stderr.writer()
    }

    /// Consumes the router, returning stdout, stderr, and the history.
    #[must_use]
    pub fn into_parts(self) -> (O, E, Vec<String>) {
        (
            self.stdout.into_inner(),
            self.stderr.into_inner(),
            self.history,
        )
    }
}

impl<O, E> MessageRouter<O, E>
where
    O: Write,
    E: Write,
{
    /// Formats `message`, writes it if enabled, and records it in the history.
    ///
    /// The history entry is recorded even when the write fails; the write
    /// error is returned afterwards.
    pub fn emit(
        &mut self,
        level: MessageLevel,
        message: &str,
        prefix: Option<&str>,
    ) -> io::Result<()> {
        let formatted = format_message(prefix, message);
        let written = self.write_routed(level, &formatted);
        self.history.push(formatted);
        written
    }

    fn write_routed(&mut self, level: MessageLevel, formatted: &str) -> io::Result<()> {
        if self.threshold() == MessageLevel::QUIET || !self.is_enabled(level) {
            return Ok(());
        }

        match self.destination(level) {
            Destination::Stderr => self.stderr.write(formatted),
            Destination::Stdout => self.stdout.write(formatted),
            Destination::Suppressed => Ok(()),
        }
    }

    /// Emits at a raw level with that level's canonical prefix.
    ///
    /// `INFO`, `QUIET` and unnamed integers get no prefix.
    pub fn emit_level(&mut self, level: MessageLevel, message: &str) -> io::Result<()> {
        let prefix = Severity::from_level(level).and_then(Severity::prefix);
        self.emit(level, message, prefix)
    }

    /// Emits with the level and prefix bound to `severity`.
    pub fn emit_severity(&mut self, severity: Severity, message: &str) -> io::Result<()> {
        self.emit(severity.level(), message, severity.prefix())
    }

    /// `ABRT` message.
    pub fn abort(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Abort, message)
    }

    /// `ERROR` message.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Error, message)
    }

    /// `WARNING` message.
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Warning, message)
    }

    /// `LOG` message.
    pub fn log(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Log, message)
    }

    /// Unprefixed `INFO` message on stdout.
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Info, message)
    }

    /// `VERBOSE` message.
    pub fn verbose(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Verbose, message)
    }

    /// `VERBOSE1` message, same level as [`verbose`](Self::verbose).
    pub fn verbose1(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Verbose1, message)
    }

    /// `VERBOSE2` message.
    pub fn verbose2(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Verbose2, message)
    }

    /// `VERBOSE3` message.
    pub fn verbose3(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Verbose3, message)
    }

    /// `DEBUG` message.
    pub fn debug(&mut self, message: &str) -> io::Result<()> {
        self.emit_severity(Severity::Debug, message)
    }

    /// Draws one progress update on stdout.
    ///
    /// Nothing is written unless the threshold is strictly above
    /// `options.min_level`. The line starts with `'\r'`, has no newline, and is
    /// flushed immediately. On the final iteration (`iteration == total`) a
    /// newline follows when `options.carriage_return` is set. The history is
    /// never touched. A zero `total` fails with [`ProgressError::ZeroTotal`]
    /// before anything is written.
    pub fn show_progress(
        &mut self,
        iteration: u64,
        total: u64,
        options: ProgressOptions,
    ) -> Result<(), ProgressError> {
        let bar = ProgressBar::render(iteration, total, options.length)?;
        if self.threshold() <= options.min_level {
            return Ok(());
        }

        let mut stdout = self.stdout.scoped_line_mode(LineMode::WithoutNewline);
        stdout.write(bar.to_string())?;
        if iteration == total && options.carriage_return {
            stdout.write("\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}
