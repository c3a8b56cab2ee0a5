//! Text measurement for line breaking.
//!
//! This module provides a backend-agnostic trait the breaker uses to ask how much
//! of a string fits in a width budget. The core never depends on a text engine;
//! backends like `flowaround-text` implement this trait.

/// Backend-agnostic text measurement oracle.
pub trait TextMeasurer {
    /// Number of leading characters (not bytes) of `text` whose rendered width
    /// does not exceed `max_width`.
    ///
    /// Must return 0 when `max_width <= 0.0` and the full character count when
    /// the whole string fits.
    fn max_prefix_fitting(&mut self, text: &str, max_width: f32) -> usize;

    /// Rendered width of `text` on a single line.
    fn measure_width(&mut self, text: &str) -> f32;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn max_prefix_fitting(&mut self, text: &str, max_width: f32) -> usize {
        (**self).max_prefix_fitting(text, max_width)
    }

    fn measure_width(&mut self, text: &str) -> f32 {
        (**self).measure_width(text)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn max_prefix_fitting(&mut self, text: &str, max_width: f32) -> usize {
        (**self).max_prefix_fitting(text, max_width)
    }

    fn measure_width(&mut self, text: &str) -> f32 {
        (**self).measure_width(text)
    }
}

/// Measurer where every character advances by the same width.
///
/// Useful for terminal-like output and for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance: f32,
}

impl FixedAdvanceMeasurer {
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn max_prefix_fitting(&mut self, text: &str, max_width: f32) -> usize {
        let len = text.chars().count();
        if max_width <= 0.0 || max_width.is_nan() {
            return 0;
        }
        if self.advance <= 0.0 {
            return len;
        }

        let fitting = (max_width / self.advance).floor();
        if fitting >= len as f32 {
            len
        } else {
            fitting as usize
        }
    }

    fn measure_width(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance.max(0.0)
    }
}

/// Ask the measurer for a prefix length, clamped to `[0, text char count]`.
pub(crate) fn fitting_chars(measurer: &mut impl TextMeasurer, text: &str, max_width: f32) -> usize {
    let len = text.chars().count();
    if max_width <= 0.0 {
        return 0;
    }

    let count = measurer.max_prefix_fitting(text, max_width);
    if count > len {
        log::warn!(
            "measurer reported {} fitting characters for a {}-character string, clamping",
            count,
            len
        );
        len
    } else {
        count
    }
}
