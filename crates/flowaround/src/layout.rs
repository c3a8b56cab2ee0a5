use crate::error::{LayoutError, Result};

/// Which side of the text block the obstacle occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ObstacleEdge {
    /// Obstacle hugs the left edge, text is pushed right while it is active
    #[default]
    Left,
    /// Obstacle hugs the right edge, text is cut short while it is active
    Right,
}

/// Horizontal alignment of each line within its width budget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// How the final visible line is rendered when text remains after it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    /// Cut the line at the last character that fits.
    #[default]
    Clip,
    /// Cut the line and end it with [`ELLIPSIS`].
    Ellipsis,
}

/// Marker appended to a truncated last line in [`Overflow::Ellipsis`] mode
pub const ELLIPSIS: &str = "...";

/// Layout configuration for one text block
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Side occupied by the obstacle
    pub edge: ObstacleEdge,
    /// Alignment of each line's glyphs inside its budget
    pub text_align: TextAlign,
    /// Font size in logical pixels (default: 14.0)
    pub font_size: f32,
    /// Vertical advance per line. Falls back to `font_size` when unset or smaller.
    pub line_height: Option<f32>,
    /// Extra indent on the first line of each paragraph, left-aligned text only
    pub paragraph_indent: f32,
    /// Hard cap on the number of emitted lines
    pub max_lines: usize,
    /// Rendering of the truncated final line
    pub overflow: Overflow,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            edge: ObstacleEdge::Left,
            text_align: TextAlign::Left,
            font_size: 14.0,
            line_height: None,
            paragraph_indent: 0.0,
            max_lines: usize::MAX,
            overflow: Overflow::Clip,
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the obstacle edge
    pub fn with_edge(mut self, edge: ObstacleEdge) -> Self {
        self.edge = edge;
        self
    }

    /// Set the text alignment
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
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

    /// Set the first-line paragraph indent
    pub fn with_paragraph_indent(mut self, indent: f32) -> Self {
        self.paragraph_indent = indent;
        self
    }

    /// Set the maximum number of lines
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the overflow mode
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Convenience method to truncate with an ellipsis
    pub fn ellipsis(mut self) -> Self {
        self.overflow = Overflow::Ellipsis;
        self
    }

    /// Vertical advance per line after applying the font size fallback
    pub fn effective_line_height(&self) -> f32 {
        match self.line_height {
            Some(line_height) if line_height >= self.font_size => line_height,
            _ => self.font_size,
        }
    }

    /// Validate the configuration and return the effective line height
    pub fn validate(&self) -> Result<f32> {
        let line_height = self.effective_line_height();
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(LayoutError::InvalidLineHeight(line_height));
        }
        if self.max_lines == 0 {
            return Err(LayoutError::InvalidMaxLines);
        }
        Ok(line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_height_fallback() {
        let config = LayoutConfig::new().with_font_size(16.0);
        assert_eq!(config.effective_line_height(), 16.0);

        let config = config.with_line_height(30.0);
        assert_eq!(config.effective_line_height(), 30.0);

        // Smaller than the font size falls back
        let config = LayoutConfig::new()
            .with_font_size(16.0)
            .with_line_height(10.0);
        assert_eq!(config.effective_line_height(), 16.0);
    }

    #[test]
    fn test_validate() {
        assert_eq!(LayoutConfig::new().validate(), Ok(14.0));

        let config = LayoutConfig::new().with_font_size(0.0);
        assert_eq!(config.validate(), Err(LayoutError::InvalidLineHeight(0.0)));

        let config = LayoutConfig::new().with_font_size(-4.0).with_line_height(-2.0);
        assert_eq!(config.validate(), Err(LayoutError::InvalidLineHeight(-2.0)));

        let config = LayoutConfig::new().with_max_lines(0);
        assert_eq!(config.validate(), Err(LayoutError::InvalidMaxLines));
    }

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.edge, ObstacleEdge::Left);
        assert_eq!(config.text_align, TextAlign::Left);
        assert_eq!(config.overflow, Overflow::Clip);
        assert_eq!(config.line_height, None);
        assert_eq!(config.max_lines, usize::MAX);
    }

    #[test]
    fn test_builders() {
        let config = LayoutConfig::new()
            .with_edge(ObstacleEdge::Right)
            .with_text_align(TextAlign::Center)
            .with_paragraph_indent(20.0)
            .with_max_lines(22)
            .ellipsis();

        assert_eq!(config.edge, ObstacleEdge::Right);
        assert_eq!(config.text_align, TextAlign::Center);
        assert_eq!(config.paragraph_indent, 20.0);
        assert_eq!(config.max_lines, 22);
        assert_eq!(config.overflow, Overflow::Ellipsis);
    }
}
