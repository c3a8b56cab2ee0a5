use glam::Vec2;

use crate::layout::TextAlign;

/// One computed line, ready to be drawn
#[derive(Clone, Debug, PartialEq)]
pub struct LineSpec {
    /// The text fragment, including an absorbed trailing space if any
    pub text: String,
    /// Alignment anchor: left edge for `Left`, right edge for `Right`, centre for `Center`
    pub start_x: f32,
    /// Width budget for this line
    pub width: f32,
    /// 0-based line number; the line spans `[index * lh, (index + 1) * lh)`
    pub line_index: usize,
    /// Alignment the anchor refers to
    pub align: TextAlign,
}

impl LineSpec {
    pub fn top(&self, line_height: f32) -> f32 {
        self.line_index as f32 * line_height
    }

    /// Baseline at the bottom of the line's band
    pub fn baseline(&self, line_height: f32) -> f32 {
        (self.line_index + 1) as f32 * line_height
    }

    /// Drawing origin: anchor x and baseline y
    pub fn origin(&self, line_height: f32) -> Vec2 {
        Vec2::new(self.start_x, self.baseline(line_height))
    }

    /// Left edge of the glyphs once the fragment's rendered width is known
    pub fn left_edge(&self, text_width: f32) -> f32 {
        match self.align {
            TextAlign::Left => self.start_x,
            TextAlign::Right => self.start_x - text_width,
            TextAlign::Center => self.start_x - text_width / 2.0,
        }
    }
}

/// Output of one line breaking run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    pub lines: Vec<LineSpec>,
    /// Height the container should take to fit the wrapped content
    pub total_height: f32,
    /// Effective line height the run used
    pub line_height: f32,
    /// The run stopped because the known height ran out
    pub height_limited: bool,
    /// Some text was not emitted (clipped, ellipsized, or dropped)
    pub truncated: bool,
}

impl LayoutResult {
    pub fn empty(line_height: f32) -> Self {
        Self {
            line_height,
            ..Self::default()
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over `(origin, text)` pairs for a renderer
    pub fn draw_commands(&self) -> impl Iterator<Item = (Vec2, &str)> + '_ {
        self.lines
            .iter()
            .map(move |line| (line.origin(self.line_height), line.text.as_str()))
    }
}
