//! Coordinate and geometry types shared across the scene graph and the render pipeline.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin decided per scene (see [`Origin`])
//! - +X right; +Y down for `UpperLeft`, up for `LowerLeft`
//!
//! Matrices are `kurbo::Affine`; `Vec2` converts into `kurbo::Vec2` for translations
//! where a matrix has to be applied.

mod origin;
mod rect;
mod size;
mod vec2;

pub use kurbo::Affine;
pub use origin::Origin;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
