use std::fmt;

use super::Shape;

/// Why a tween could not be bound or started.
///
/// These never escape the frame API: an action that hits one becomes a permanent no-op
/// and logs the error at `debug` level. [`PropertyAction::error`](super::PropertyAction::error)
/// keeps it around for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum TweenError {
    /// The property path was empty or contained an empty segment.
    EmptyPath { path: String },
    /// A path segment named an attribute the object does not expose.
    UnknownAttribute { owner: &'static str, name: String },
    /// The path ended on an object instead of a value.
    NotAValue { owner: &'static str, name: String },
    /// Start/end values (or the attribute and the end value) have different shapes.
    ShapeMismatch { expected: Shape, found: Shape },
}

impl fmt::Display for TweenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TweenError::EmptyPath { path } => write!(f, "invalid property path {path:?}"),
            TweenError::UnknownAttribute { owner, name } => {
                write!(f, "{owner} has no attribute {name:?}")
            }
            TweenError::NotAValue { owner, name } => {
                write!(f, "{owner}.{name} is an object, not an animatable value")
            }
            TweenError::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for TweenError {}
