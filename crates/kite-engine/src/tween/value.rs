use core::fmt;

use crate::coords::{Size, Vec2};
use crate::paint::Color;

/// Shape of a [`Value`], used to check that a tween's endpoints and its bound attribute agree.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Shape {
    Scalar,
    Vector2,
    Color,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Scalar => "scalar",
            Shape::Vector2 => "vector2",
            Shape::Color => "color",
        })
    }
}

/// A tweenable value.
///
/// Blending is component-wise. Color channels are blended in `f64` and rounded back to
/// bytes, so a fully eased blend lands exactly on the end color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector2(f64, f64),
    Color(u8, u8, u8, u8),
}

impl Value {
    #[inline]
    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(_) => Shape::Scalar,
            Value::Vector2(..) => Shape::Vector2,
            Value::Color(..) => Shape::Color,
        }
    }

    /// Blends `self` towards `to` by `f`. Returns `None` when the shapes differ.
    ///
    /// `f` is not clamped, so overshooting easing curves extrapolate (colors saturate).
    pub fn blend(self, to: Value, f: f64) -> Option<Value> {
        match (self, to) {
            (Value::Scalar(a), Value::Scalar(b)) => Some(Value::Scalar(mix(a, b, f))),
            (Value::Vector2(ax, ay), Value::Vector2(bx, by)) => {
                Some(Value::Vector2(mix(ax, bx, f), mix(ay, by, f)))
            }
            (Value::Color(ar, ag, ab, aa), Value::Color(br, bg, bb, ba)) => Some(Value::Color(
                mix_u8(ar, br, f),
                mix_u8(ag, bg, f),
                mix_u8(ab, bb, f),
                mix_u8(aa, ba, f),
            )),
            _ => None,
        }
    }

    /// Adds `delta` component-wise (relative tweens). Color channels saturate.
    pub fn offset(self, delta: Value) -> Option<Value> {
        match (self, delta) {
            (Value::Scalar(a), Value::Scalar(d)) => Some(Value::Scalar(a + d)),
            (Value::Vector2(ax, ay), Value::Vector2(dx, dy)) => Some(Value::Vector2(ax + dx, ay + dy)),
            (Value::Color(r, g, b, a), Value::Color(dr, dg, db, da)) => Some(Value::Color(
                r.saturating_add(dr),
                g.saturating_add(dg),
                b.saturating_add(db),
                a.saturating_add(da),
            )),
            _ => None,
        }
    }

    #[inline]
    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec2(self) -> Option<Vec2> {
        match self {
            Value::Vector2(x, y) => Some(Vec2::new(x, y)),
            _ => None,
        }
    }

    #[inline]
    pub fn as_size(self) -> Option<Size> {
        self.as_vec2().map(|v| Size::new(v.x, v.y))
    }

    #[inline]
    pub fn as_color(self) -> Option<Color> {
        match self {
            Value::Color(r, g, b, a) => Some(Color::rgba(r, g, b, a)),
            _ => None,
        }
    }
}

#[inline]
fn mix(a: f64, b: f64, f: f64) -> f64 {
    a + (b - a) * f
}

#[inline]
fn mix_u8(a: u8, b: u8, f: f64) -> u8 {
    mix(a as f64, b as f64, f).round().clamp(0.0, 255.0) as u8
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec2> for Value {
    #[inline]
    fn from(v: Vec2) -> Self {
        Value::Vector2(v.x, v.y)
    }
}

impl From<Size> for Value {
    #[inline]
    fn from(s: Size) -> Self {
        Value::Vector2(s.width, s.height)
    }
}

impl From<Color> for Value {
    #[inline]
    fn from(c: Color) -> Self {
        Value::Color(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── blend ─────────────────────────────────────────────────────────────

    #[test]
    fn blend_scalar_midpoint() {
        assert_eq!(Value::Scalar(10.0).blend(Value::Scalar(20.0), 0.5), Some(Value::Scalar(15.0)));
    }

    #[test]
    fn blend_vector_components_independently() {
        let v = Value::Vector2(0.0, 100.0).blend(Value::Vector2(100.0, 0.0), 0.25);
        assert_eq!(v, Some(Value::Vector2(25.0, 75.0)));
    }

    #[test]
    fn blend_color_rounds_channels() {
        let c = Value::Color(0, 0, 0, 255).blend(Value::Color(255, 10, 1, 255), 0.5);
        assert_eq!(c, Some(Value::Color(128, 5, 1, 255)));
    }

    #[test]
    fn blend_rejects_mixed_shapes() {
        assert_eq!(Value::Scalar(1.0).blend(Value::Vector2(1.0, 1.0), 0.5), None);
        assert_eq!(Value::Color(0, 0, 0, 0).blend(Value::Scalar(1.0), 0.5), None);
    }

    // ── offset ────────────────────────────────────────────────────────────

    #[test]
    fn offset_adds_delta() {
        assert_eq!(Value::Vector2(1.0, 2.0).offset(Value::Vector2(10.0, -2.0)), Some(Value::Vector2(11.0, 0.0)));
    }

    #[test]
    fn offset_color_saturates() {
        let c = Value::Color(250, 10, 0, 200).offset(Value::Color(10, 10, 0, 100));
        assert_eq!(c, Some(Value::Color(255, 20, 0, 255)));
    }
}
