use super::{Ease, TweenError, Value};

/// Lifecycle of a tween. Transitions only move forward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum TweenState {
    #[default]
    NotStarted,
    Running,
    Completed,
}

/// Time-based interpolation between two values of the same [`Shape`](super::Shape).
///
/// The core is target-agnostic: [`update`](Self::update) returns the value to write and the
/// caller decides where it goes.
///
/// Before [`start`](Self::start) the interpolation is idle and reports
/// [`completed`](Self::completed) as `true`; there is nothing left for it to do.
#[derive(Debug, Clone)]
pub struct Lerp {
    from: Value,
    to: Value,
    duration: f64,
    elapsed: f64,
    overflow: f64,
    ease: Ease,
    state: TweenState,
}

impl Lerp {
    /// Creates an idle interpolation. Durations `<= 0` (or NaN) complete on the first update.
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            from: Value::Scalar(0.0),
            to: Value::Scalar(0.0),
            duration,
            elapsed: 0.0,
            overflow: 0.0,
            ease,
            state: TweenState::NotStarted,
        }
    }

    /// Arms the interpolation.
    ///
    /// With `relative`, `to` is a delta and the effective end becomes `from + to`.
    /// Restarting resets elapsed time, so identical inputs replay identically.
    pub fn start(&mut self, from: Value, to: Value, relative: bool) -> Result<(), TweenError> {
        let end = if relative { from.offset(to) } else { Some(to) };
        let end = end
            .filter(|end| end.shape() == from.shape())
            .ok_or(TweenError::ShapeMismatch { expected: from.shape(), found: to.shape() })?;

        self.from = from;
        self.to = end;
        self.elapsed = 0.0;
        self.overflow = 0.0;
        self.state = TweenState::Running;
        Ok(())
    }

    /// Advances by `interval` seconds and returns the value for the new time.
    ///
    /// Returns `None` while idle or once completed. The tick that reaches the end returns
    /// exactly the end value.
    pub fn update(&mut self, interval: f64) -> Option<Value> {
        if self.state != TweenState::Running {
            return None;
        }

        let interval = interval.max(0.0);
        if !(self.duration > 0.0) {
            self.overflow = interval;
            self.state = TweenState::Completed;
            return Some(self.to);
        }

        self.elapsed += interval;
        if self.elapsed >= self.duration {
            self.overflow = self.elapsed - self.duration;
            self.elapsed = self.duration;
            self.state = TweenState::Completed;
            return Some(self.to);
        }

        Some(self.sample(self.elapsed))
    }

    /// Value at an arbitrary elapsed time, without advancing.
    pub fn sample(&self, elapsed: f64) -> Value {
        if !(self.duration > 0.0) || elapsed >= self.duration {
            return self.to;
        }
        let f = self.ease.apply((elapsed / self.duration).min(1.0));
        // Shapes were checked in `start`.
        self.from.blend(self.to, f).unwrap_or(self.to)
    }

    #[inline]
    pub fn completed(&self) -> bool {
        self.state != TweenState::Running
    }

    #[inline]
    pub fn state(&self) -> TweenState {
        self.state
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time left over from the update that completed the interpolation.
    #[inline]
    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    #[inline]
    pub fn from(&self) -> Value {
        self.from
    }

    /// Effective end value (already offset for relative tweens).
    #[inline]
    pub fn to(&self) -> Value {
        self.to
    }
}
