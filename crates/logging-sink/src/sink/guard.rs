use super::MessageSink;
use crate::line_mode::LineMode;

/// RAII guard that temporarily overrides a [`MessageSink`]'s [`LineMode`].
///
/// Instances are created by [`MessageSink::scoped_line_mode`]. While the guard
/// is alive, writes issued through it use the scoped line mode. Dropping the
/// guard restores the previous mode. The guard implements
/// [`Deref`](std::ops::Deref) and [`DerefMut`](std::ops::DerefMut) so sink
/// methods can be called on it directly.
#[must_use = "dropping the guard immediately restores the previous line mode"]
pub struct LineModeGuard<'a, W> {
    sink: &'a mut MessageSink<W>,
    previous: LineMode,
}

impl<'a, W> LineModeGuard<'a, W> {
    pub(crate) const fn new(sink: &'a mut MessageSink<W>, previous: LineMode) -> Self {
        Self { sink, previous }
    }
}

impl<W> Drop for LineModeGuard<'_, W> {
    fn drop(&mut self) {
        self.sink.set_line_mode(self.previous);
    }
}

impl<W> std::ops::Deref for LineModeGuard<'_, W> {
    type Target = MessageSink<W>;

    fn deref(&self) -> &Self::Target {
        self.sink
    }
}

impl<W> std::ops::DerefMut for LineModeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.sink
    }
}
