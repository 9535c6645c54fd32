use super::MessageSink;
use crate::line_mode::LineMode;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a single line using the sink's current [`LineMode`].
    pub fn write<S>(&mut self, text: S) -> io::Result<()>
    where
        S: AsRef<str>,
    {
        self.write_with_mode(text, self.line_mode)
    }

    /// Writes `text` using an explicit [`LineMode`] without mutating the sink.
    ///
    /// Useful when most output follows the sink's configured mode yet a
    /// specific line must be emitted without a terminator, for example a
    /// progress indicator that is overwritten in place.
    pub fn write_with_mode<S>(&mut self, text: S, line_mode: LineMode) -> io::Result<()>
    where
        S: AsRef<str>,
    {
        let rendered = line_mode.apply(text.as_ref());
        self.writer.write_all(rendered.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
