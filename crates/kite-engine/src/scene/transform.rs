use kurbo::Affine;

use crate::coords::{Origin, Size, Vec2};
use crate::paint::Color;
use crate::tween::{Animatable, Slot, Value, ValueRef};

/// Placement and appearance of one node.
///
/// Defaults: anchor at the geometric center `(0.5, 0.5)`, unit scale, no rotation,
/// visible, opaque white, zero position and size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub size: Size,
    /// Normalized pivot in `[0, 1] x [0, 1]`. `y` is measured from the bottom edge.
    pub anchor: Vec2,
    pub scale: Vec2,
    /// Degrees.
    pub rotation: f64,
    pub color: Color,
    pub visible: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            size: Size::zero(),
            anchor: Vec2::splat(0.5),
            scale: Vec2::splat(1.0),
            rotation: 0.0,
            color: Color::white(),
            visible: true,
        }
    }
}

impl Transform {
    /// Builds a transform from positional optional values.
    ///
    /// Slot order: position, size, scale (vector2), rotation (scalar), anchor (vector2),
    /// color. Missing trailing values keep their defaults, a value of the wrong shape
    /// leaves its slot at the default, and extra values are ignored. This never fails.
    pub fn from_values(values: &[Value]) -> Self {
        let mut t = Self::default();
        for (slot, value) in values.iter().enumerate() {
            let applied = match slot {
                0 => value.as_vec2().map(|v| t.position = v),
                1 => value.as_size().map(|s| t.size = s),
                2 => value.as_vec2().map(|v| t.scale = v),
                3 => value.as_scalar().map(|r| t.rotation = r),
                4 => value.as_vec2().map(|v| t.anchor = v),
                5 => value.as_color().map(|c| t.color = c),
                _ => {
                    log::debug!("transform: ignoring {} extra value(s)", values.len() - slot);
                    break;
                }
            };
            if applied.is_none() {
                log::debug!("transform: slot {slot} got a {} value, keeping default", value.shape());
            }
        }
        t
    }

    /// Local matrix: `Translate(position') · Rotate(rotation) · Scale(scale)`.
    ///
    /// `position'` is `position` with `y` negated under [`Origin::LowerLeft`].
    pub fn matrix(&self, origin: Origin) -> Affine {
        let translate = Vec2::new(self.position.x, self.position.y * origin.y_sign());
        Affine::translate(kurbo::Vec2::from(translate))
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }

    /// Upper-left corner of the node's box in its local space, after the anchor is applied.
    #[inline]
    pub fn draw_origin(&self) -> Vec2 {
        Vec2::new(
            -self.size.width * self.anchor.x,
            -self.size.height * (1.0 - self.anchor.y),
        )
    }
}

impl Animatable for Transform {
    fn type_name(&self) -> &'static str {
        "Transform"
    }

    fn slot(&mut self, name: &str) -> Option<Slot<'_>> {
        let cell = match name {
            "Position" => ValueRef::Vector2(&mut self.position),
            "Size" => ValueRef::Size(&mut self.size),
            "Anchor" => ValueRef::Vector2(&mut self.anchor),
            "Scale" => ValueRef::Vector2(&mut self.scale),
            "Rotation" => ValueRef::Scalar(&mut self.rotation),
            "Color" => ValueRef::Color(&mut self.color),
            "Opacity" => ValueRef::Byte(&mut self.color.a),
            _ => return None,
        };
        Some(Slot::Value(cell))
    }
}
