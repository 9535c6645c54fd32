//! crates/logging/src/levels.rs
//! Numeric message levels and the named severities bound to them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Integer severity/verbosity tag attached to a message.
///
/// Negative values are error-like, positive values are progressively more
/// verbose, and `0` is the quiet threshold. Any `i32` is a valid level; the
/// associated constants name the well-known ones.
///
/// ```
/// use logging::MessageLevel;
///
/// assert_eq!(MessageLevel::VERBOSE, MessageLevel::VERBOSE1);
/// assert!(MessageLevel::ERROR < MessageLevel::INFO);
/// assert_eq!(MessageLevel::DEBUG.get(), 5);
/// assert_eq!(MessageLevel::new(3).name(), Some("VERBOSE2"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MessageLevel(i32);

impl MessageLevel {
    /// Fatal condition; the host is about to abort.
    pub const ABRT: Self = Self(-4);
    /// Error.
    pub const ERROR: Self = Self(-3);
    /// Warning.
    pub const WARNING: Self = Self(-2);
    /// Log entry.
    pub const LOG: Self = Self(-1);
    /// Threshold value that suppresses all stream output.
    pub const QUIET: Self = Self(0);
    /// Regular informational output, the only level routed to stdout.
    pub const INFO: Self = Self(1);
    /// First verbosity tier.
    pub const VERBOSE: Self = Self(2);
    /// Alias of [`MessageLevel::VERBOSE`].
    pub const VERBOSE1: Self = Self::VERBOSE;
    /// Second verbosity tier.
    pub const VERBOSE2: Self = Self(3);
    /// Third verbosity tier.
    pub const VERBOSE3: Self = Self(4);
    /// Debug output.
    pub const DEBUG: Self = Self(5);

    /// Highest named level; the threshold used when nothing is configured.
    pub const MAX: Self = Self::DEBUG;

    /// Wraps a raw integer level.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Canonical upper-case name, or `None` for integers outside the named set.
    ///
    /// Level `2` reports `VERBOSE`; `VERBOSE1` is only an alias.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            -4 => Some("ABRT"),
            -3 => Some("ERROR"),
            -2 => Some("WARNING"),
            -1 => Some("LOG"),
            0 => Some("QUIET"),
            1 => Some("INFO"),
            2 => Some("VERBOSE"),
            3 => Some("VERBOSE2"),
            4 => Some("VERBOSE3"),
            5 => Some("DEBUG"),
            _ => None,
        }
    }

    /// Reports whether the level is one of the named values.
    #[must_use]
    pub const fn is_named(self) -> bool {
        self.name().is_some()
    }
}

impl From<i32> for MessageLevel {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<MessageLevel> for i32 {
    fn from(level: MessageLevel) -> Self {
        level.0
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Named severity operations and the level/prefix pair each one is bound to.
///
/// `Verbose` and `Verbose1` share [`MessageLevel::VERBOSE`] but keep distinct
/// prefixes (`VERBOSE` vs `VERBOSE1`). `Info` carries no prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// `ABRT`, level -4.
    Abort,
    /// `ERROR`, level -3.
    Error,
    /// `WARNING`, level -2.
    Warning,
    /// `LOG`, level -1.
    Log,
    /// No prefix, level 1.
    Info,
    /// `VERBOSE`, level 2.
    Verbose,
    /// `VERBOSE1`, level 2.
    Verbose1,
    /// `VERBOSE2`, level 3.
    Verbose2,
    /// `VERBOSE3`, level 4.
    Verbose3,
    /// `DEBUG`, level 5.
    Debug,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Self; 10] = [
        Self::Abort,
        Self::Error,
        Self::Warning,
        Self::Log,
        Self::Info,
        Self::Verbose,
        Self::Verbose1,
        Self::Verbose2,
        Self::Verbose3,
        Self::Debug,
    ];

    /// Numeric level the severity emits at.
    #[must_use]
    pub const fn level(self) -> MessageLevel {
        match self {
            Self::Abort => MessageLevel::ABRT,
            Self::Error => MessageLevel::ERROR,
            Self::Warning => MessageLevel::WARNING,
            Self::Log => MessageLevel::LOG,
            Self::Info => MessageLevel::INFO,
            Self::Verbose | Self::Verbose1 => MessageLevel::VERBOSE,
            Self::Verbose2 => MessageLevel::VERBOSE2,
            Self::Verbose3 => MessageLevel::VERBOSE3,
            Self::Debug => MessageLevel::DEBUG,
        }
    }

    /// Literal prefix placed before the message body.
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Abort => Some("ABRT"),
            Self::Error => Some("ERROR"),
            Self::Warning => Some("WARNING"),
            Self::Log => Some("LOG"),
            Self::Info => None,
            Self::Verbose => Some("VERBOSE"),
            Self::Verbose1 => Some("VERBOSE1"),
            Self::Verbose2 => Some("VERBOSE2"),
            Self::Verbose3 => Some("VERBOSE3"),
            Self::Debug => Some("DEBUG"),
        }
    }

    /// Lower-case operation name (`"abort"`, `"verbose1"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Log => "log",
            Self::Info => "info",
            Self::Verbose => "verbose",
            Self::Verbose1 => "verbose1",
            Self::Verbose2 => "verbose2",
            Self::Verbose3 => "verbose3",
            Self::Debug => "debug",
        }
    }

    /// Canonical severity for a raw level; `None` for `QUIET` and unnamed integers.
    #[must_use]
    pub const fn from_level(level: MessageLevel) -> Option<Self> {
        match level.get() {
            -4 => Some(Self::Abort),
            -3 => Some(Self::Error),
            -2 => Some(Self::Warning),
            -1 => Some(Self::Log),
            1 => Some(Self::Info),
            2 => Some(Self::Verbose),
            3 => Some(Self::Verbose2),
            4 => Some(Self::Verbose3),
            5 => Some(Self::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error(
    "unknown severity {0:?}; expected abort, error, warning, log, info, verbose, verbose1, verbose2, verbose3, or debug"
)]
pub struct SeverityParseError(String);

impl FromStr for Severity {
    type Err = SeverityParseError;

    /// Accepts operation names and prefixes in any ASCII case, plus the
    /// `abrt` and `warn` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|severity| {
                trimmed.eq_ignore_ascii_case(severity.name())
                    || severity
                        .prefix()
                        .is_some_and(|prefix| trimmed.eq_ignore_ascii_case(prefix))
            })
            .or_else(|| trimmed.eq_ignore_ascii_case("warn").then_some(Self::Warning))
            .ok_or_else(|| SeverityParseError(s.to_owned()))
    }
}
