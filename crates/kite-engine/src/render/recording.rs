use kurbo::Affine;

use crate::coords::{Origin, Rect, Size, Vec2};
use crate::paint::{BitmapHandle, Color, FontPaint};

use super::RenderSurface;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    SetMatrix(Affine),
    Rectangle { origin: Vec2, size: Size, color: Color },
    Ellipse { origin: Vec2, size: Size, color: Color },
    Text { origin: Vec2, text: String, paint: FontPaint },
    Bitmap { origin: Vec2, size: Size, source: Rect, bitmap: BitmapHandle },
    Clear(Color),
}

impl SurfaceCmd {
    /// `true` for commands that put pixels down (everything except matrix changes).
    #[inline]
    pub fn is_draw(&self) -> bool {
        !matches!(self, SurfaceCmd::SetMatrix(_))
    }
}

/// Headless surface that records every call instead of rasterizing.
///
/// Used by tests and by tools that want to inspect a frame's draw stream.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    origin: Origin,
    matrix: Affine,
    commands: Vec<SurfaceCmd>,
}

impl RecordingSurface {
    pub fn new(size: Size, origin: Origin) -> Self {
        Self { size, origin, matrix: Affine::IDENTITY, commands: Vec::new() }
    }

    #[inline]
    pub fn commands(&self) -> &[SurfaceCmd] {
        &self.commands
    }

    /// Draw commands only, without the matrix changes between them.
    pub fn draws(&self) -> impl Iterator<Item = &SurfaceCmd> {
        self.commands.iter().filter(|c| c.is_draw())
    }

    /// Matrix currently in effect.
    #[inline]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Drops recorded commands, e.g. between frames.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.matrix = Affine::IDENTITY;
    }
}

impl RenderSurface for RecordingSurface {
    fn set_matrix(&mut self, matrix: Affine) {
        self.matrix = matrix;
        self.commands.push(SurfaceCmd::SetMatrix(matrix));
    }

    fn draw_rectangle(&mut self, origin: Vec2, size: Size, color: Color) {
        self.commands.push(SurfaceCmd::Rectangle { origin, size, color });
    }

    fn draw_ellipse(&mut self, origin: Vec2, size: Size, color: Color) {
        self.commands.push(SurfaceCmd::Ellipse { origin, size, color });
    }

    fn draw_text(&mut self, origin: Vec2, text: &str, paint: &FontPaint) {
        self.commands.push(SurfaceCmd::Text { origin, text: text.to_string(), paint: paint.clone() });
    }

    fn draw_bitmap(&mut self, origin: Vec2, size: Size, source: Rect, bitmap: BitmapHandle) {
        self.commands.push(SurfaceCmd::Bitmap { origin, size, source, bitmap });
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(SurfaceCmd::Clear(color));
    }

    fn size(&self) -> Size {
        self.size
    }

    fn origin(&self) -> Origin {
        self.origin
    }
}
