/// Straight-alpha RGBA color, one byte per channel.
///
/// This is the packed representation nodes carry and surfaces receive. Tweens blend the
/// channels in `f64` and round back (see [`Value::Color`](crate::tween::Value)).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}
