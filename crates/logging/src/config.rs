//! crates/logging/src/config.rs
//! Threshold configuration resolved from the process environment.

use std::env;
use std::ffi::OsString;

use crate::error::ConfigError;
use crate::levels::MessageLevel;

/// Environment variable holding the integer message-level threshold.
pub const MESSAGE_LEVEL_ENV: &str = "SINGULARITY_MESSAGELEVEL";

/// Router configuration: the threshold up to which messages are shown.
///
/// Resolution priority is explicit value > [`MESSAGE_LEVEL_ENV`] > the
/// default of [`MessageLevel::MAX`]. An unset or blank variable selects the
/// default; a value that is not an integer fails with [`ConfigError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouterConfig {
    threshold: MessageLevel,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::with_threshold(MessageLevel::MAX)
    }
}

impl RouterConfig {
    /// Configuration with an explicit threshold.
    #[must_use]
    pub const fn with_threshold(threshold: MessageLevel) -> Self {
        Self { threshold }
    }

    /// Configured threshold.
    #[must_use]
    pub const fn threshold(self) -> MessageLevel {
        self.threshold
    }

    /// Uses `explicit` when present, otherwise reads [`MESSAGE_LEVEL_ENV`].
    pub fn resolve(explicit: Option<MessageLevel>) -> Result<Self, ConfigError> {
        match explicit {
            Some(threshold) => Ok(Self::with_threshold(threshold)),
            None => Self::from_env(),
        }
    }

    /// Reads the threshold from [`MESSAGE_LEVEL_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(MESSAGE_LEVEL_ENV)
    }

    /// Reads the threshold from an alternative environment variable.
    pub fn from_env_var(variable: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(variable, |name| env::var_os(name))
    }

    /// Resolves the threshold through `lookup` instead of the live environment.
    ///
    /// ```
    /// use std::ffi::OsString;
    /// use logging::{MessageLevel, RouterConfig};
    ///
    /// let config = RouterConfig::from_lookup("SINGULARITY_MESSAGELEVEL", |_| Some(OsString::from(" 2 ")))?;
    /// assert_eq!(config.threshold(), MessageLevel::VERBOSE);
    ///
    /// let unset = RouterConfig::from_lookup("SINGULARITY_MESSAGELEVEL", |_| None)?;
    /// assert_eq!(unset.threshold(), MessageLevel::MAX);
    ///
    /// assert!(RouterConfig::from_lookup("SINGULARITY_MESSAGELEVEL", |_| Some("loud".into())).is_err());
    /// # Ok::<(), logging::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(variable: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        let Some(raw) = lookup(variable) else {
            return Ok(Self::default());
        };

        let value = raw.into_string().map_err(|_| ConfigError::NotUnicode {
            variable: variable.to_owned(),
        })?;

        let config = parse_threshold(variable, &value)?
            .map_or_else(Self::default, Self::with_threshold);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "msglevel::config",
            variable = variable,
            threshold = config.threshold.get(),
            "resolved message level"
        );

        Ok(config)
    }
}

fn parse_threshold(variable: &str, value: &str) -> Result<Option<MessageLevel>, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i32>()
        .map(|raw| Some(MessageLevel::new(raw)))
        .map_err(|source| ConfigError::InvalidLevel {
            variable: variable.to_owned(),
            value: value.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_value(value: &'static str) -> impl FnOnce(&str) -> Option<OsString> {
        move |_| Some(OsString::from(value))
    }

    #[test]
    fn default_threshold_is_debug() {
        assert_eq!(RouterConfig::default().threshold(), MessageLevel::DEBUG);
    }

    #[test]
    fn unset_variable_uses_default() {
        let config = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, |_| None).unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn lookup_receives_variable_name() {
        let mut seen = None;
        let _ = RouterConfig::from_lookup("CUSTOM_LEVEL", |name| {
            seen = Some(name.to_owned());
            None
        });
        assert_eq!(seen.as_deref(), Some("CUSTOM_LEVEL"));
    }

    #[test]
    fn parses_positive_and_negative_levels() {
        let verbose = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup_value("3")).unwrap();
        assert_eq!(verbose.threshold(), MessageLevel::VERBOSE2);

        let errors_only =
            RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup_value("-3")).unwrap();
        assert_eq!(errors_only.threshold(), MessageLevel::ERROR);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let config = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup_value("\t0\n")).unwrap();
        assert_eq!(config.threshold(), MessageLevel::QUIET);
    }

    #[test]
    fn blank_value_uses_default() {
        let config = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup_value("  ")).unwrap();
        assert_eq!(config.threshold(), MessageLevel::MAX);
    }

    #[test]
    fn out_of_table_values_are_kept() {
        let config = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup_value("9")).unwrap();
        assert_eq!(config.threshold().get(), 9);
    }

    #[test]
    fn non_integer_value_fails_fast() {
        let err = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup_value("debug")).unwrap_err();
        match &err {
            ConfigError::InvalidLevel {
                variable, value, ..
            } => {
                assert_eq!(variable, MESSAGE_LEVEL_ENV);
                assert_eq!(value, "debug");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("SINGULARITY_MESSAGELEVEL"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn fractional_value_is_rejected() {
        assert!(RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup_value("2.5")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_value_is_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let err = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, |_| {
            Some(OsString::from_vec(vec![0xff, 0xfe]))
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotUnicode {
                variable: MESSAGE_LEVEL_ENV.to_owned()
            }
        );
    }

    #[test]
    fn explicit_threshold_wins() {
        let config = RouterConfig::resolve(Some(MessageLevel::LOG)).unwrap();
        assert_eq!(config.threshold(), MessageLevel::LOG);
    }

    #[test]
    fn missing_custom_variable_uses_default() {
        let config =
            RouterConfig::from_env_var("MSGLEVEL_TEST_VARIABLE_THAT_IS_NEVER_SET").unwrap();
        assert_eq!(config.threshold(), MessageLevel::MAX);
    }
}
