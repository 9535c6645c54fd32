//! crates/logging/src/destination.rs
//! Stream selection for enabled messages.

use crate::levels::MessageLevel;

/// Where an enabled message is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Destination {
    /// Standard error.
    Stderr,
    /// Standard output.
    Stdout,
    /// Not written to any stream.
    Suppressed,
}

impl Destination {
    /// Routes a level to its stream.
    ///
    /// Every named level other than `INFO` and `QUIET` goes to stderr, `INFO`
    /// goes to stdout and `QUIET` is never written. Integers outside the named
    /// set fall through to stdout.
    ///
    /// ```
    /// use logging::{Destination, MessageLevel};
    ///
    /// assert_eq!(Destination::for_level(MessageLevel::INFO), Destination::Stdout);
    /// assert_eq!(Destination::for_level(MessageLevel::DEBUG), Destination::Stderr);
    /// assert_eq!(Destination::for_level(MessageLevel::QUIET), Destination::Suppressed);
    /// ```
    #[must_use]
    pub const fn for_level(level: MessageLevel) -> Self {
        match level.get() {
            0 => Self::Suppressed,
            -4..=-1 | 2..=5 => Self::Stderr,
            _ => Self::Stdout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_class_levels_route_to_stderr() {
        for level in [
            MessageLevel::ABRT,
            MessageLevel::ERROR,
            MessageLevel::WARNING,
            MessageLevel::LOG,
        ] {
            assert_eq!(Destination::for_level(level), Destination::Stderr);
        }
    }

    #[test]
    fn verbosity_levels_route_to_stderr() {
        for level in [
            MessageLevel::VERBOSE,
            MessageLevel::VERBOSE1,
            MessageLevel::VERBOSE2,
            MessageLevel::VERBOSE3,
            MessageLevel::DEBUG,
        ] {
            assert_eq!(Destination::for_level(level), Destination::Stderr);
        }
    }

    #[test]
    fn info_is_the_only_named_stdout_level() {
        let stdout: Vec<_> = (-4..=5)
            .map(MessageLevel::new)
            .filter(|level| Destination::for_level(*level) == Destination::Stdout)
            .collect();
        assert_eq!(stdout, vec![MessageLevel::INFO]);
    }

    #[test]
    fn quiet_is_suppressed() {
        assert_eq!(
            Destination::for_level(MessageLevel::QUIET),
            Destination::Suppressed
        );
    }

    #[test]
    fn unnamed_levels_fall_through_to_stdout() {
        assert_eq!(Destination::for_level(MessageLevel::new(6)), Destination::Stdout);
        assert_eq!(Destination::for_level(MessageLevel::new(-5)), Destination::Stdout);
    }
}
