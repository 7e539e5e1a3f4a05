use kurbo::Affine;

use crate::coords::{Origin, Rect, Size, Vec2};
use crate::paint::{BitmapHandle, Color, FontPaint};

/// Drawable canvas the render pipeline draws into.
///
/// The engine never touches a raw drawing context. Geometry arguments are in the local
/// space of the node being drawn; the surface applies the matrix from the most recent
/// [`set_matrix`](Self::set_matrix) call, which replaces (never composes with) the
/// previous one.
pub trait RenderSurface {
    fn set_matrix(&mut self, matrix: Affine);

    fn draw_rectangle(&mut self, origin: Vec2, size: Size, color: Color);

    fn draw_ellipse(&mut self, origin: Vec2, size: Size, color: Color);

    fn draw_text(&mut self, origin: Vec2, text: &str, paint: &FontPaint);

    /// Draws the `source` region of `bitmap` stretched to `size` at `origin`.
    fn draw_bitmap(&mut self, origin: Vec2, size: Size, source: Rect, bitmap: BitmapHandle);

    fn clear(&mut self, color: Color);

    /// Drawable size in logical pixels.
    fn size(&self) -> Size;

    /// Coordinate convention the surface was set up for.
    fn origin(&self) -> Origin;
}
