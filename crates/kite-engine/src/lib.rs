//! Kite engine crate.
//!
//! A 2D retained-mode scene graph with a depth-sorted render pipeline and a tweening
//! engine. Drawing goes through the [`render::RenderSurface`] trait; hosts bring their own
//! backend and window.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod tween;

mod stage;

pub use stage::{Stage, StageConfig};
