//! Tweening.
//!
//! Layers, bottom-up:
//! - [`Value`] / [`Lerp`]: shape-checked interpolation between two values over time
//! - [`Animatable`]: how objects expose named attributes to dotted property paths
//! - [`Action`] implementations ([`PropertyAction`], [`Delay`], [`Sequence`])
//! - [`ActionManager`]: per-frame ticking of actions keyed by scene node

mod action;
mod ease;
mod error;
mod lerp;
mod manager;
mod property;
mod value;

pub use action::{Action, Delay, PropertyAction, Sequence, TweenMode};
pub use ease::Ease;
pub use error::TweenError;
pub use lerp::{Lerp, TweenState};
pub use manager::{ActionId, ActionManager};
pub use property::{Animatable, PropertyPath, Slot, ValueRef};
pub use value::{Shape, Value};
