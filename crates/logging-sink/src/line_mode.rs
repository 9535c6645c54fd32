use std::borrow::Cow;

/// Controls whether a [`MessageSink`](crate::MessageSink) terminates written lines with a newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Terminate each line with exactly one newline.
    #[default]
    WithNewline,
    /// Write the text exactly as supplied.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode terminates written lines with a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Applies the mode to `text`, borrowing when no terminator has to be added.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        if self.append_newline() {
            terminate_line(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Returns `text` terminated by exactly one newline.
///
/// Text that already ends with `'\n'` is borrowed unchanged; anything else is
/// copied with a single `'\n'` appended. Only the final character is
/// inspected, so embedded newlines are left alone.
///
/// # Examples
///
/// ```
/// use logging_sink::terminate_line;
///
/// assert_eq!(terminate_line("ready"), "ready\n");
/// assert_eq!(terminate_line("ready\n"), "ready\n");
/// assert_eq!(terminate_line(""), "\n");
/// ```
#[must_use]
pub fn terminate_line(text: &str) -> Cow<'_, str> {
    if text.ends_with('\n') {
        Cow::Borrowed(text)
    } else {
        let mut owned = String::with_capacity(text.len() + 1);
        owned.push_str(text);
        owned.push('\n');
        Cow::Owned(owned)
    }
}
