//! Memoised layout results.
//!
//! A result is valid only for the exact request that produced it. Any change to
//! the text, width, obstacle sizes, or configuration invalidates every entry.

use crate::breaker::HeightBound;
use crate::error::Result;
use crate::layout::LayoutConfig;
use crate::obstacle::ObstacleLayout;
use crate::output::LayoutResult;

/// Everything a layout depends on
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRequest {
    pub text: String,
    /// Full render width of the text block
    pub available_width: f32,
    pub obstacles: ObstacleLayout,
    pub config: LayoutConfig,
}

impl LayoutRequest {
    /// Create a request with no obstacles and default configuration
    pub fn new(text: impl Into<String>, available_width: f32) -> Self {
        Self {
            text: text.into(),
            available_width,
            obstacles: ObstacleLayout::empty(),
            config: LayoutConfig::default(),
        }
    }

    /// Set the obstacles
    pub fn with_obstacles(mut self, obstacles: ObstacleLayout) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Set the configuration
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }
}

/// Results for the most recent request, one per height bound
#[derive(Debug, Default)]
pub struct LayoutCache {
    request: Option<LayoutRequest>,
    results: Vec<(HeightBound, LayoutResult)>,
    hits: usize,
    misses: usize,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a result, counting the hit or miss
    pub fn get(&mut self, request: &LayoutRequest, bound: HeightBound) -> Option<&LayoutResult> {
        let found = self
            .request
            .as_ref()
            .filter(|cached| *cached == request)
            .and_then(|_| self.results.iter().find(|(b, _)| *b == bound))
            .map(|(_, result)| result);

        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Store a result; a different request drops everything cached before
    pub fn insert(&mut self, request: &LayoutRequest, bound: HeightBound, result: LayoutResult) {
        if self.request.as_ref() != Some(request) {
            self.request = Some(request.clone());
            self.results.clear();
        }
        self.results.retain(|(b, _)| *b != bound);
        self.results.push((bound, result));
    }

    /// Return the cached result or compute, store, and return a new one
    pub fn get_or_try_insert_with(
        &mut self,
        request: &LayoutRequest,
        bound: HeightBound,
        compute: impl FnOnce() -> Result<LayoutResult>,
    ) -> Result<LayoutResult> {
        if let Some(result) = self.get(request, bound) {
            log::debug!("layout cache hit ({:?})", bound);
            return Ok(result.clone());
        }

        log::debug!("layout cache miss ({:?})", bound);
        let result = compute()?;
        self.insert(request, bound, result.clone());
        Ok(result)
    }

    /// Drop every cached result
    pub fn invalidate(&mut self) {
        self.request = None;
        self.results.clear();
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
