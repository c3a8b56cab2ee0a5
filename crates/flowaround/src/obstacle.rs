//! Obstacle footprint along the vertical axis.
//!
//! All obstacles are anchored at the top of the text block on the same edge,
//! stacked in insertion order. A line must clear the widest obstacle that is
//! still below its top.

use glam::Vec2;

use crate::error::{LayoutError, Result};
use crate::layout::ObstacleEdge;
use crate::primitives::{Rect, Size};

/// Measured obstacles placed at one edge of the text block
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleLayout {
    sizes: Vec<Size>,
}

impl ObstacleLayout {
    /// Build from measured obstacle sizes, rejecting negative or non-finite ones
    pub fn new(sizes: impl IntoIterator<Item = Size>) -> Result<Self> {
        let sizes: Vec<Size> = sizes.into_iter().collect();
        if let Some((index, size)) = sizes.iter().enumerate().find(|(_, s)| !s.is_valid()) {
            return Err(LayoutError::InvalidObstacle {
                index,
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { sizes })
    }

    /// Layout with no obstacles; every line gets the full width
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Horizontal width consumed at vertical offset `y`.
    ///
    /// This is the widest obstacle whose height strictly exceeds `y`, or 0 if
    /// every obstacle ends at or above `y`.
    pub fn width_at(&self, y: f32) -> f32 {
        self.sizes
            .iter()
            .filter(|size| size.height > y)
            .map(|size| size.width)
            .fold(0.0, f32::max)
    }

    /// Bottom of the deepest obstacle
    pub fn max_height(&self) -> f32 {
        self.sizes.iter().map(|size| size.height).fold(0.0, f32::max)
    }

    /// Where the host should place each obstacle inside a container of the given width
    pub fn placements(&self, edge: ObstacleEdge, container_width: f32) -> Vec<Rect> {
        self.sizes
            .iter()
            .map(|size| {
                let x = match edge {
                    ObstacleEdge::Left => 0.0,
                    ObstacleEdge::Right => container_width - size.width,
                };
                Rect::from_min_size(Vec2::new(x, 0.0), *size)
            })
            .collect()
    }
}
