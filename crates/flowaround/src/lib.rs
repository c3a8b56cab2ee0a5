//! # flowaround
//!
//! Backend agnostic line breaking for a paragraph that flows around an inset
//! obstacle (an image, a caption block) sitting at the left or right edge of the
//! text block.
//!
//! This crate plans lines only. Measuring glyphs is delegated to a
//! [`TextMeasurer`], and drawing the text or placing the obstacle widget is left
//! to the host. Backends like `flowaround-text` provide real measurers.
//!
//! ## Core Types
//!
//! - [`LineBreaker`] - Greedy, word-safe line breaking around the obstacle
//! - [`LayoutDriver`] - Two-phase estimate/finalize height reconciliation
//! - [`ObstacleLayout`] - Width taken by the obstacles at each vertical offset
//! - [`LayoutConfig`] - Alignment, edge, line height, indent, and truncation settings
//!
//! ## Output
//!
//! - [`LayoutResult`] - Ordered [`LineSpec`]s plus the container height
//! - [`LayoutCache`] - Results memoised by [`LayoutRequest`]
//!
//! ## Example
//!
//! ```
//! use flowaround::{
//!     FixedAdvanceMeasurer, LayoutConfig, LayoutDriver, LayoutRequest, ObstacleLayout, Size,
//! };
//!
//! let request = LayoutRequest::new("abcde fghij", 60.0)
//!     .with_config(LayoutConfig::new().with_line_height(20.0));
//!
//! let mut driver = LayoutDriver::new(FixedAdvanceMeasurer::new(10.0));
//! let result = driver.layout(&request, None).unwrap();
//!
//! assert_eq!(result.lines[0].text, "abcde ");
//! assert_eq!(result.lines[1].text, "fghij");
//! assert_eq!(result.total_height, 40.0);
//!
//! let obstacles = ObstacleLayout::new([Size::square(150.0)]).unwrap();
//! assert_eq!(obstacles.width_at(120.0), 150.0);
//! assert_eq!(obstacles.width_at(150.0), 0.0);
//! ```

mod breaker;
mod cache;
mod chunk;
mod driver;
mod error;
mod layout;
mod measure;
mod obstacle;
mod output;
mod primitives;

pub use breaker::*;
pub use cache::*;
pub use chunk::{chunk_size, last_chunk, word_safe_break};
pub use driver::*;
pub use error::*;
pub use layout::*;
pub use measure::*;
pub use obstacle::*;
pub use output::*;
pub use primitives::*;
