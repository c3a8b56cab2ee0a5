//! # flowaround-text
//!
//! Text measurement backends for `flowaround`.
//!
//! The core line breaker only knows the [`flowaround::TextMeasurer`] trait. This
//! crate shapes text with cosmic-text so line budgets are checked against real
//! glyph advances. Drawing glyphs stays with the host renderer.

#[cfg(feature = "cosmic")]
mod cosmic;

#[cfg(feature = "cosmic")]
pub use cosmic::*;

// Re-exported so hosts can share one font system with their renderer.
#[cfg(feature = "cosmic")]
pub use cosmic_text;
