//! Frame timing for hosts that drive a [`Stage`](crate::Stage) from a real-time loop.
//!
//! One `FrameClock` per loop; call `tick()` once per frame and feed `dt` to the stage.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
