//! crates/logging/src/progress.rs
//! Terminal progress bar layout.

use std::fmt;

use crate::error::ProgressError;
use crate::levels::MessageLevel;

/// Glyph used for completed segments.
pub const FILLED_GLYPH: char = '\u{2588}';
/// Glyph used for remaining segments.
pub const EMPTY_GLYPH: char = '-';

/// Knobs for [`MessageRouter::show_progress`](crate::MessageRouter::show_progress).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressOptions {
    /// Number of glyphs in the bar.
    pub length: usize,
    /// The bar is drawn only when the threshold is strictly above this level.
    pub min_level: MessageLevel,
    /// Terminate the line after the final iteration.
    pub carriage_return: bool,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            length: 100,
            min_level: MessageLevel::INFO,
            carriage_return: true,
        }
    }
}

impl ProgressOptions {
    /// Sets the bar length.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the level the threshold has to exceed.
    #[must_use]
    pub const fn with_min_level(mut self, min_level: MessageLevel) -> Self {
        self.min_level = min_level;
        self
    }

    /// Controls the newline written after the final iteration.
    ///
    /// Callers that pass `false` own emitting that newline themselves.
    #[must_use]
    pub const fn with_carriage_return(mut self, carriage_return: bool) -> Self {
        self.carriage_return = carriage_return;
        self
    }
}

/// Layout of one progress update, computed without any I/O.
///
/// `percent` is `100 * iteration / total`; `filled` is
/// `floor(length * iteration / total)`. Once the fraction reaches 100% both are
/// clamped so the bar is full and the label reads `100.0`.
///
/// ```
/// use logging::ProgressBar;
///
/// let half = ProgressBar::render(50, 100, 10)?;
/// assert_eq!(half.filled(), 5);
/// assert_eq!(half.empty(), 5);
/// assert_eq!(half.percent_label(), "50.0");
/// assert_eq!(half.to_string(), "\rProgress |\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}-----| 50.0%");
/// # Ok::<(), logging::ProgressError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProgressBar {
    filled: usize,
    length: usize,
    percent: f64,
}

impl ProgressBar {
    /// Computes the layout for `iteration` out of `total` on a bar of `length` glyphs.
    ///
    /// Returns [`ProgressError::ZeroTotal`] when `total` is zero.
    pub fn render(iteration: u64, total: u64, length: usize) -> Result<Self, ProgressError> {
        if total == 0 {
            return Err(ProgressError::ZeroTotal);
        }

        let percent = 100.0 * (iteration as f64 / total as f64);
        if percent >= 100.0 {
            return Ok(Self {
                filled: length,
                length,
                percent: 100.0,
            });
        }

        // Integer floor of length * iteration / total; u128 keeps the product exact.
        let filled = (length as u128 * u128::from(iteration) / u128::from(total)) as usize;
        Ok(Self {
            filled: filled.min(length),
            length,
            percent,
        })
    }

    /// Completed segments.
    #[must_use]
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Remaining segments.
    #[must_use]
    pub const fn empty(&self) -> usize {
        self.length - self.filled
    }

    /// Percentage complete, clamped to 100.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Percentage with one decimal place.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.percent)
    }

    /// The bar body without decorations.
    #[must_use]
    pub fn bar(&self) -> String {
        let mut bar = String::with_capacity(self.filled * FILLED_GLYPH.len_utf8() + self.empty());
        bar.extend(std::iter::repeat_n(FILLED_GLYPH, self.filled));
        bar.extend(std::iter::repeat_n(EMPTY_GLYPH, self.empty()));
        bar
    }
}

impl fmt::Display for ProgressBar {
    /// Renders `\rProgress |<bar>| <percent>%` without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\rProgress |{}| {:.1}%", self.bar(), self.percent)
    }
}
