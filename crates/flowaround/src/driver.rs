//! Two-phase layout: estimate the height, then finalize against a known height.
//!
//! The caller decides whether the second pass is needed. Intrinsically sized
//! containers take the estimate as final; fixed-height containers call
//! [`LayoutDriver::finalize`] (or [`LayoutDriver::layout`] with a height) so the
//! last fitting line is truncated.

use crate::breaker::{HeightBound, LineBreaker};
use crate::cache::{LayoutCache, LayoutRequest};
use crate::error::{LayoutError, Result};
use crate::measure::TextMeasurer;
use crate::output::LayoutResult;

/// Runs the line breaker and reconciles the container height
pub struct LayoutDriver<M> {
    breaker: LineBreaker<M>,
    cache: LayoutCache,
}

impl<M: TextMeasurer> LayoutDriver<M> {
    pub fn new(measurer: M) -> Self {
        Self {
            breaker: LineBreaker::new(measurer),
            cache: LayoutCache::new(),
        }
    }

    /// Mutable access to the measurer. Cached results are dropped, since any
    /// change to the measurer can change every line.
    pub fn measurer_mut(&mut self) -> &mut M {
        self.cache.invalidate();
        self.breaker.measurer_mut()
    }

    pub fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    /// Drop cached results
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// First pass with an unbounded height.
    ///
    /// `total_height` of the result is the intrinsic height of the wrapped text.
    pub fn estimate(&mut self, request: &LayoutRequest) -> Result<LayoutResult> {
        self.run(request, HeightBound::Unbounded)
    }

    /// Second pass with a definite container height
    pub fn finalize(&mut self, request: &LayoutRequest, height: f32) -> Result<LayoutResult> {
        if height.is_nan() || height < 0.0 {
            return Err(LayoutError::InvalidHeight(height));
        }
        self.run(request, HeightBound::Known(height))
    }

    /// Estimate, then finalize only when a fixed height is given and the estimate overflows it
    pub fn layout(
        &mut self,
        request: &LayoutRequest,
        fixed_height: Option<f32>,
    ) -> Result<LayoutResult> {
        let estimate = self.estimate(request)?;

        match fixed_height {
            Some(height) if height.is_nan() || height < 0.0 => {
                Err(LayoutError::InvalidHeight(height))
            }
            Some(height) if estimate.total_height > height => {
                log::debug!(
                    "estimated height {} exceeds fixed height {}, finalizing",
                    estimate.total_height,
                    height
                );
                self.finalize(request, height)
            }
            _ => Ok(estimate),
        }
    }

    fn run(&mut self, request: &LayoutRequest, bound: HeightBound) -> Result<LayoutResult> {
        let breaker = &mut self.breaker;
        self.cache.get_or_try_insert_with(request, bound, || {
            breaker.break_lines(
                &request.text,
                request.available_width,
                |y| request.obstacles.width_at(y),
                &request.config,
                bound,
            )
        })
    }
}
