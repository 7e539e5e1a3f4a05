use crate::paint::Color;

/// Text styling handed to [`RenderSurface::draw_text`](crate::render::RenderSurface::draw_text).
///
/// Font lookup and shaping belong to the surface; the engine only carries the request.
#[derive(Debug, Clone, PartialEq)]
pub struct FontPaint {
    pub family: String,
    /// Font size in logical pixels.
    pub size: f64,
    pub color: Color,
}

impl FontPaint {
    #[inline]
    pub fn new(family: impl Into<String>, size: f64, color: Color) -> Self {
        Self { family: family.into(), size, color }
    }

    /// Same font with a different color (text nodes take their color from the transform).
    #[inline]
    pub fn with_color(&self, color: Color) -> Self {
        Self { family: self.family.clone(), size: self.size, color }
    }
}

impl Default for FontPaint {
    fn default() -> Self {
        Self::new("sans-serif", 16.0, Color::black())
    }
}

/// Opaque handle to a bitmap owned by the render surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitmapHandle(pub u32);
