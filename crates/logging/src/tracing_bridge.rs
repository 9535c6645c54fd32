//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the message router.
//!
//! [`RouterLayer`] is a tracing-subscriber layer that forwards every event's
//! `message` field into a [`SharedRouter`]. Tracing levels map onto severities:
//!
//! | tracing | severity  |
//! |---------|-----------|
//! | ERROR   | `ERROR`   |
//! | WARN    | `WARNING` |
//! | INFO    | `INFO`    |
//! | DEBUG   | `VERBOSE` |
//! | TRACE   | `DEBUG`   |
//!
//! The router's own threshold decides what is shown; forwarded events always
//! land in its history.

use std::io::Write;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::levels::Severity;
use crate::shared::SharedRouter;

/// A tracing layer that emits events through a [`SharedRouter`].
pub struct RouterLayer<O, E> {
    router: SharedRouter<O, E>,
}

impl<O, E> RouterLayer<O, E> {
    /// Creates a layer writing into `router`.
    #[must_use]
    pub const fn new(router: SharedRouter<O, E>) -> Self {
        Self { router }
    }

    /// Router the layer writes into.
    #[must_use]
    pub const fn router(&self) -> &SharedRouter<O, E> {
        &self.router
    }

    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Verbose,
            Level::TRACE => Severity::Debug,
        }
    }
}

impl<S, O, E> Layer<S> for RouterLayer<O, E>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let severity = Self::severity_for(event.metadata().level());
        // A subscriber has nowhere to report its own write failures.
        let _ = self.router.emit_severity(severity, &message);
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber that forwards tracing events into `router`.
///
/// Fails when a global subscriber is already set.
///
/// ```rust,ignore
/// use logging::{MessageRouter, SharedRouter, init_tracing};
///
/// let router = SharedRouter::new(MessageRouter::from_env()?);
/// init_tracing(router.clone())?;
///
/// tracing::warn!("disk almost full");
/// assert_eq!(router.history(), ["WARNING disk almost full\n"]);
/// ```
pub fn init_tracing<O, E>(router: SharedRouter<O, E>) -> Result<(), TryInitError>
where
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(RouterLayer::new(router))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouterConfig;
    use crate::levels::MessageLevel;
    use crate::router::MessageRouter;
    use test_support::CaptureBuffer;
    use tracing_subscriber::layer::SubscriberExt;

    type CapturedRouter = SharedRouter<CaptureBuffer, CaptureBuffer>;

    fn router_at(level: MessageLevel) -> (CapturedRouter, CaptureBuffer, CaptureBuffer) {
        let stdout = CaptureBuffer::new();
        let stderr = CaptureBuffer::new();
        let router = MessageRouter::with_streams(
            RouterConfig::with_threshold(level),
            stdout.clone(),
            stderr.clone(),
        );
        (SharedRouter::new(router), stdout, stderr)
    }

    fn with_layer(router: &CapturedRouter, body: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(RouterLayer::new(router.clone()));
        tracing::subscriber::with_default(subscriber, body);
    }

    #[test]
    fn level_mapping() {
        type Bridge = RouterLayer<CaptureBuffer, CaptureBuffer>;
        assert_eq!(Bridge::severity_for(&Level::ERROR), Severity::Error);
        assert_eq!(Bridge::severity_for(&Level::WARN), Severity::Warning);
        assert_eq!(Bridge::severity_for(&Level::INFO), Severity::Info);
        assert_eq!(Bridge::severity_for(&Level::DEBUG), Severity::Verbose);
        assert_eq!(Bridge::severity_for(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn events_are_routed_with_prefixes() {
        let (router, stdout, stderr) = router_at(MessageLevel::DEBUG);
        with_layer(&router, || {
            tracing::info!("starting");
            tracing::warn!(count = 2, "skipped {} entries", 2);
            tracing::trace!("inner loop");
        });

        assert_eq!(stdout.contents(), "starting\n");
        assert_eq!(stderr.contents(), "WARNING skipped 2 entries\nDEBUG inner loop\n");
    }

    #[test]
    fn router_threshold_still_gates_output() {
        let (router, stdout, stderr) = router_at(MessageLevel::INFO);
        with_layer(&router, || {
            tracing::debug!("hidden");
            tracing::error!("shown");
        });

        assert!(stdout.is_empty());
        assert_eq!(stderr.contents(), "ERROR shown\n");
        assert_eq!(router.history(), ["VERBOSE hidden\n", "ERROR shown\n"]);
    }

    #[test]
    fn events_without_message_are_ignored() {
        let (router, _, _) = router_at(MessageLevel::DEBUG);
        with_layer(&router, || {
            tracing::info!(bytes = 10);
        });
        assert!(router.history().is_empty());
    }
}
