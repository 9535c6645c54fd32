//! crates/logging/src/macros.rs
//! Formatting shorthand for routed messages.

/// Formats the arguments and emits them at `level` with its canonical prefix.
///
/// Works with anything exposing `emit_level(MessageLevel, &str)`, which
/// includes [`MessageRouter`](crate::MessageRouter) and
/// [`SharedRouter`](crate::SharedRouter). Evaluates to the `io::Result<()>`
/// of the emission.
///
/// ```
/// use logging::{MessageLevel, MessageRouter, RouterConfig, message};
///
/// let mut router = MessageRouter::with_streams(RouterConfig::default(), Vec::new(), Vec::new());
/// message!(router, MessageLevel::WARNING, "{} files skipped", 3)?;
/// assert_eq!(router.history(), ["WARNING 3 files skipped\n"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! message {
    ($router:expr, $level:expr, $($arg:tt)+) => {
        $router.emit_level($level, &::std::format!($($arg)+))
    };
}
