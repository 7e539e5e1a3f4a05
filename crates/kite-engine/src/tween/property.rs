use crate::coords::{Size, Vec2};
use crate::paint::Color;

use super::{Shape, TweenError, Value};

/// Capability implemented by anything a tween can target.
///
/// Attributes are looked up by name. A name resolves either to a nested object (so dotted
/// paths such as `"Transformation.Position"` can walk into it) or to a typed value cell.
/// Implementations are plain `match` tables over attribute names; there is no runtime
/// type introspection.
pub trait Animatable {
    /// Name used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Resolves one attribute by name.
    fn slot(&mut self, name: &str) -> Option<Slot<'_>>;
}

/// Result of resolving one attribute name.
pub enum Slot<'a> {
    Object(&'a mut dyn Animatable),
    Value(ValueRef<'a>),
}

/// Mutable view of a value cell, tagged with its storage type.
///
/// Several storage types map onto one [`Shape`]: `Size` and `Vec2` are both `Vector2`;
/// `f64`, `i32` and `u8` cells are all `Scalar` (integers round and clamp on write).
pub enum ValueRef<'a> {
    Scalar(&'a mut f64),
    Integer(&'a mut i32),
    Byte(&'a mut u8),
    Vector2(&'a mut Vec2),
    Size(&'a mut Size),
    Color(&'a mut Color),
}

impl ValueRef<'_> {
    pub fn shape(&self) -> Shape {
        match self {
            ValueRef::Scalar(_) | ValueRef::Integer(_) | ValueRef::Byte(_) => Shape::Scalar,
            ValueRef::Vector2(_) | ValueRef::Size(_) => Shape::Vector2,
            ValueRef::Color(_) => Shape::Color,
        }
    }

    pub fn get(&self) -> Value {
        match self {
            ValueRef::Scalar(v) => Value::Scalar(**v),
            ValueRef::Integer(v) => Value::Scalar(**v as f64),
            ValueRef::Byte(v) => Value::Scalar(**v as f64),
            ValueRef::Vector2(v) => Value::from(**v),
            ValueRef::Size(s) => Value::from(**s),
            ValueRef::Color(c) => Value::from(**c),
        }
    }

    /// Writes `value` if its shape matches. Returns whether the cell changed hands.
    pub fn set(&mut self, value: Value) -> bool {
        match (self, value) {
            (ValueRef::Scalar(cell), Value::Scalar(v)) => **cell = v,
            (ValueRef::Integer(cell), Value::Scalar(v)) => {
                **cell = v.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32
            }
            (ValueRef::Byte(cell), Value::Scalar(v)) => **cell = v.round().clamp(0.0, 255.0) as u8,
            (ValueRef::Vector2(cell), Value::Vector2(x, y)) => **cell = Vec2::new(x, y),
            (ValueRef::Size(cell), Value::Vector2(w, h)) => **cell = Size::new(w, h),
            (ValueRef::Color(cell), Value::Color(r, g, b, a)) => **cell = Color::rgba(r, g, b, a),
            _ => return false,
        }
        true
    }
}

/// A dotted attribute path resolved against a concrete target.
///
/// Resolution walks one segment at a time and stops at the path end or at the first
/// segment that names a value; any segments after that value are ignored. The resolved
/// segments are kept so the same cell can be reached again on later ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPath {
    objects: Vec<String>,
    attribute: String,
    shape: Shape,
}

impl PropertyPath {
    pub fn resolve(target: &mut dyn Animatable, path: &str) -> Result<Self, TweenError> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(TweenError::EmptyPath { path: path.to_string() });
        }

        let mut objects = Vec::new();
        let mut cur = target;
        for (i, name) in segments.iter().enumerate() {
            let owner = cur.type_name();
            match cur.slot(name) {
                None => {
                    return Err(TweenError::UnknownAttribute { owner, name: name.to_string() });
                }
                Some(Slot::Value(cell)) => {
                    if i + 1 < segments.len() {
                        log::debug!(
                            "property path {path:?}: {owner}.{name} is a value, ignoring {:?}",
                            &segments[i + 1..]
                        );
                    }
                    return Ok(Self { objects, attribute: name.to_string(), shape: cell.shape() });
                }
                Some(Slot::Object(next)) => {
                    if i + 1 == segments.len() {
                        return Err(TweenError::NotAValue { owner, name: name.to_string() });
                    }
                    objects.push(name.to_string());
                    cur = next;
                }
            }
        }

        // `split` always yields at least one segment.
        Err(TweenError::EmptyPath { path: path.to_string() })
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Reaches the resolved cell on `target`.
    pub fn cell<'a>(&self, target: &'a mut dyn Animatable) -> Option<ValueRef<'a>> {
        let mut cur = target;
        for name in &self.objects {
            match cur.slot(name)? {
                Slot::Object(next) => cur = next,
                Slot::Value(_) => return None,
            }
        }
        match cur.slot(&self.attribute)? {
            Slot::Value(cell) => Some(cell),
            Slot::Object(_) => None,
        }
    }

    pub fn read(&self, target: &mut dyn Animatable) -> Option<Value> {
        self.cell(target).map(|cell| cell.get())
    }

    pub fn write(&self, target: &mut dyn Animatable, value: Value) -> bool {
        self.cell(target).is_some_and(|mut cell| cell.set(value))
    }
}

impl std::fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for name in &self.objects {
            write!(f, "{name}.")?;
        }
        f.write_str(&self.attribute)
    }
}
