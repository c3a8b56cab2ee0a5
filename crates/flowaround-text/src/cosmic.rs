//! `TextMeasurer` backed by cosmic-text shaping.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight, Wrap};
use flowaround::TextMeasurer;

/// Font settings used for measurement
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels (default: 14.0)
    pub font_size: f32,
    /// Line height in logical pixels; falls back to `font_size` when unset or smaller
    pub line_height: Option<f32>,
    /// Font family name; `None` uses the system sans-serif family
    pub family: Option<String>,
    /// Font weight, 100..=900 (default: 400)
    pub weight: u16,
    pub italic: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            line_height: None,
            family: None,
            weight: 400,
            italic: false,
        }
    }
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the line height
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Set the font family by name
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Set the font weight
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight.clamp(100, 900);
        self
    }

    /// Convenience method to set italic style
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn metrics(&self) -> Metrics {
        let line_height = match self.line_height {
            Some(line_height) if line_height >= self.font_size => line_height,
            _ => self.font_size,
        };
        Metrics::new(self.font_size, line_height)
    }
}

fn attrs(style: &TextStyle) -> Attrs<'_> {
    let family = style
        .family
        .as_deref()
        .map_or(Family::SansSerif, Family::Name);
    let font_style = if style.italic {
        Style::Italic
    } else {
        Style::Normal
    };

    Attrs::new()
        .family(family)
        .weight(Weight(style.weight))
        .style(font_style)
}

/// Measures text by shaping it on a single unwrapped line
pub struct CosmicMeasurer {
    font_system: FontSystem,
    style: TextStyle,
}

impl CosmicMeasurer {
    /// Create a measurer with the system fonts loaded
    pub fn new(style: TextStyle) -> Self {
        Self::with_font_system(FontSystem::new(), style)
    }

    /// Create a measurer over an existing font system (e.g. shared with a renderer)
    pub fn with_font_system(font_system: FontSystem, style: TextStyle) -> Self {
        Self { font_system, style }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Replace the style. Through `LayoutDriver::measurer_mut` this also drops cached layouts.
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }

    pub fn into_font_system(self) -> FontSystem {
        self.font_system
    }

    fn shape(&mut self, text: &str) -> Buffer {
        let mut buffer = Buffer::new(&mut self.font_system, self.style.metrics());
        buffer.set_wrap(&mut self.font_system, Wrap::None);
        buffer.set_size(&mut self.font_system, None, None);

        let attrs = attrs(&self.style);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn max_prefix_fitting(&mut self, text: &str, max_width: f32) -> usize {
        if text.is_empty() || max_width <= 0.0 || max_width.is_nan() {
            return 0;
        }

        let buffer = self.shape(text);

        // Byte end of the last glyph cluster that still fits
        let mut fit_end = 0;
        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                if glyph.x + glyph.w > max_width {
                    let count = text[..fit_end].chars().count();
                    log::trace!("{} of {:?} fit in {}px", count, text, max_width);
                    return count;
                }
                fit_end = fit_end.max(glyph.end);
            }
        }

        text.chars().count()
    }

    fn measure_width(&mut self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        self.shape(text)
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only font independent properties: the host may have no fonts installed.

    #[test]
    fn test_contract_edges() {
        let mut measurer = CosmicMeasurer::new(TextStyle::new().with_font_size(16.0));

        assert_eq!(measurer.max_prefix_fitting("hello world", 0.0), 0);
        assert_eq!(measurer.max_prefix_fitting("hello world", -10.0), 0);
        assert_eq!(measurer.max_prefix_fitting("", 100.0), 0);
        assert_eq!(measurer.max_prefix_fitting("hello world", 1.0e6), 11);
        assert_eq!(measurer.max_prefix_fitting("héllo wörld", 1.0e6), 11);
        assert_eq!(measurer.measure_width(""), 0.0);
    }

    #[test]
    fn test_prefix_grows_with_width() {
        let mut measurer = CosmicMeasurer::new(TextStyle::new());
        let text = "the quick brown fox jumps over the lazy dog";

        let mut previous = 0;
        for width in [5.0, 20.0, 60.0, 150.0, 400.0, 1.0e6] {
            let fitted = measurer.max_prefix_fitting(text, width);
            assert!(fitted >= previous);
            assert!(fitted <= text.len());
            previous = fitted;
        }
        assert_eq!(previous, text.len());
    }

    #[test]
    fn test_style_builders() {
        let style = TextStyle::new()
            .with_font_size(16.0)
            .with_line_height(10.0)
            .with_family("Inter")
            .with_weight(1200)
            .italic();

        assert_eq!(style.weight, 900);
        assert_eq!(style.family.as_deref(), Some("Inter"));
        assert!(style.italic);
        // Line height smaller than the font falls back to the font size
        assert_eq!(style.metrics().line_height, 16.0);
    }
}
