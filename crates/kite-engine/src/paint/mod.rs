//! Paint model shared between nodes and render surfaces.
//!
//! Scope:
//! - packed RGBA color
//! - text paint requests and bitmap handles
//!
//! Geometry types remain in `coords`.

mod color;
mod paint;

pub use color::Color;
pub use paint::{BitmapHandle, FontPaint};
