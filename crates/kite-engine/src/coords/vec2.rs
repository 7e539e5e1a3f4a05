/// 2D vector in logical pixels (also used for normalized anchors and scale factors).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
}

impl From<Vec2> for kurbo::Vec2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        kurbo::Vec2::new(v.x, v.y)
    }
}
