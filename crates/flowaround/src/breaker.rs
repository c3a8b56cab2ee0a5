//! Greedy line breaking around an obstacle.
//!
//! Lines are produced top to bottom. Each line asks the obstacle footprint at its
//! own top edge how much width is taken, so the budget widens once the text has
//! passed the obstacle. Paragraphs (text between `'\n'`) always start a new line.

use crate::chunk::{byte_offset, chunk_size, last_chunk};
use crate::error::{LayoutError, Result};
use crate::layout::{LayoutConfig, ObstacleEdge, TextAlign};
use crate::measure::TextMeasurer;
use crate::output::{LayoutResult, LineSpec};

/// Vertical bound for a breaking run
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum HeightBound {
    /// Height not known yet; only `max_lines` can stop the run early
    #[default]
    Unbounded,
    /// Container height is fixed; the last line that fits is truncated
    Known(f32),
}

impl HeightBound {
    fn limit(self) -> Result<f32> {
        match self {
            HeightBound::Unbounded => Ok(f32::INFINITY),
            HeightBound::Known(height) if height >= 0.0 => Ok(height),
            HeightBound::Known(height) => Err(LayoutError::InvalidHeight(height)),
        }
    }
}

/// Alignment anchor of a line.
///
/// | edge \ align | Left | Right | Center          |
/// |--------------|------|-------|-----------------|
/// | Right        | 0    | W - c | (W - c) / 2     |
/// | Left         | c    | W     | c + (W - c) / 2 |
pub fn start_offset(
    edge: ObstacleEdge,
    align: TextAlign,
    available_width: f32,
    content_width: f32,
) -> f32 {
    let remaining = available_width - content_width;
    match (edge, align) {
        (ObstacleEdge::Right, TextAlign::Left) => 0.0,
        (ObstacleEdge::Right, TextAlign::Right) => remaining,
        (ObstacleEdge::Right, TextAlign::Center) => remaining / 2.0,
        (ObstacleEdge::Left, TextAlign::Left) => content_width,
        (ObstacleEdge::Left, TextAlign::Right) => available_width,
        (ObstacleEdge::Left, TextAlign::Center) => content_width + remaining / 2.0,
    }
}

/// Splits text into lines using a [`TextMeasurer`]
pub struct LineBreaker<M> {
    measurer: M,
}

impl<M: TextMeasurer> LineBreaker<M> {
    pub fn new(measurer: M) -> Self {
        Self { measurer }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    pub fn into_measurer(self) -> M {
        self.measurer
    }

    /// Break `text` into lines.
    ///
    /// `obstacle_width_at(y)` is the width the obstacles take at vertical offset `y`.
    /// `available_width` is the full render width; obstacle width is subtracted per line.
    pub fn break_lines(
        &mut self,
        text: &str,
        available_width: f32,
        obstacle_width_at: impl Fn(f32) -> f32,
        config: &LayoutConfig,
        bound: HeightBound,
    ) -> Result<LayoutResult> {
        let line_height = config.validate()?;
        if available_width.is_nan() || available_width < 0.0 {
            return Err(LayoutError::InvalidWidth(available_width));
        }
        let max_height = bound.limit()?;
        if text.is_empty() {
            return Ok(LayoutResult::empty(line_height));
        }

        let mut lines = Vec::new();
        let mut line_index = 0usize;
        let mut last_line = false;
        let mut height_limited = false;
        let mut truncated = false;

        for paragraph in text.split('\n') {
            let mut remaining = paragraph.strip_suffix('\r').unwrap_or(paragraph);

            if last_line || height_limited {
                truncated |= !remaining.is_empty();
                continue;
            }

            let mut first_line = true;
            while !remaining.is_empty() && !last_line && !height_limited {
                // The following line would not fit, or this is the capped line
                if (line_index + 2) as f32 * line_height > max_height
                    || line_index + 1 == config.max_lines
                {
                    last_line = true;
                }

                let top = line_index as f32 * line_height;
                let content_width = obstacle_width_at(top).max(0.0);
                let mut max_width = available_width - content_width;
                let mut start_x =
                    start_offset(config.edge, config.text_align, available_width, content_width);

                if first_line && config.text_align == TextAlign::Left {
                    start_x += config.paragraph_indent;
                    max_width -= config.paragraph_indent;
                }

                let mut fragment = None;
                if !last_line {
                    let size = chunk_size(&mut self.measurer, remaining, max_width);
                    if size == 0 {
                        log::warn!(
                            "line {} has no room ({}px), truncating remaining text",
                            line_index,
                            max_width
                        );
                        last_line = true;
                    } else {
                        let (head, tail) = remaining.split_at(byte_offset(remaining, size));
                        fragment = Some(head.to_string());
                        remaining = tail;
                    }
                }

                let line_text = match fragment {
                    Some(line_text) => line_text,
                    None => {
                        let (line_text, cut) =
                            last_chunk(&mut self.measurer, remaining, max_width, config.overflow);
                        truncated |= cut;
                        remaining = "";
                        line_text
                    }
                };

                log::trace!(
                    "line {}: x={} width={} obstacle={} {:?}",
                    line_index,
                    start_x,
                    max_width,
                    content_width,
                    line_text
                );

                lines.push(LineSpec {
                    text: line_text,
                    start_x,
                    width: max_width,
                    line_index,
                    align: config.text_align,
                });

                line_index += 1;
                if (line_index + 1) as f32 * line_height > max_height {
                    height_limited = true;
                }
                first_line = false;
            }
        }

        let total_height = if height_limited {
            max_height
        } else {
            line_index as f32 * line_height
        };

        log::debug!(
            "broke {} lines, total height {} (bound {:?}, height limited: {}, truncated: {})",
            lines.len(),
            total_height,
            bound,
            height_limited,
            truncated
        );

        Ok(LayoutResult {
            lines,
            total_height,
            line_height,
            height_limited,
            truncated,
        })
    }
}
