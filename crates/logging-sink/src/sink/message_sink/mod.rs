use std::fmt;

use crate::line_mode::LineMode;

mod constructors;
mod writing;

/// Line-oriented sink that writes formatted text into an [`std::io::Write`] target.
///
/// The sink owns the underlying writer and a [`LineMode`]. Each call to
/// [`write`](Self::write) honours the configured mode; under
/// [`LineMode::WithNewline`] a line is terminated by exactly one newline even
/// when the caller already supplied one.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`]:
///
/// ```
/// use logging_sink::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write("VERBOSE mounting image")?;
/// sink.write("DEBUG bind /proc\n")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "VERBOSE mounting image\nDEBUG bind /proc\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> MessageSink<W> {
    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
