use super::MessageSink;
use crate::line_mode::LineMode;
use crate::sink::LineModeGuard;

impl<W> MessageSink<W> {
    /// Creates a new sink that terminates each line with a newline.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Temporarily switches the sink to `line_mode`.
    ///
    /// The previous mode is reinstated when the returned guard is dropped.
    ///
    /// ```
    /// use logging_sink::{LineMode, MessageSink};
    ///
    /// let mut sink = MessageSink::new(Vec::new());
    /// {
    ///     let mut scoped = sink.scoped_line_mode(LineMode::WithoutNewline);
    ///     scoped.write("\r50%").unwrap();
    /// }
    /// assert_eq!(sink.line_mode(), LineMode::WithNewline);
    /// sink.write("done").unwrap();
    /// assert_eq!(sink.into_inner(), b"\r50%done\n".to_vec());
    /// ```
    pub fn scoped_line_mode(&mut self, line_mode: LineMode) -> LineModeGuard<'_, W> {
        let previous = self.line_mode;
        self.line_mode = line_mode;
        LineModeGuard::new(self, previous)
    }
}
