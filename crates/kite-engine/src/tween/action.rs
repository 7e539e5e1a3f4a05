use super::{Animatable, Ease, Lerp, PropertyPath, TweenError, TweenState, Value};

/// Whether a tween's end value is a destination or an offset from the start value.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TweenMode {
    #[default]
    Absolute,
    Relative,
}

/// A time-bounded mutation of a target.
///
/// Actions never own their target; the caller hands it in on every call. The
/// [`ActionManager`](super::ActionManager) starts an action on its first tick and drops it
/// after the tick in which it reports [`completed`](Self::completed).
///
/// `Send` so a host can move the whole stage behind a lock.
pub trait Action: Send {
    /// Snapshots whatever the action needs from `target` and starts running.
    fn start(&mut self, target: &mut dyn Animatable);

    /// Advances by `interval` seconds, writing to `target`.
    fn update(&mut self, target: &mut dyn Animatable, interval: f64);

    fn state(&self) -> TweenState;

    /// `true` unless the action is running. Idle actions have nothing left to do.
    fn completed(&self) -> bool {
        self.state() != TweenState::Running
    }

    /// Time from the completing update that the action did not consume.
    fn overflow(&self) -> f64 {
        0.0
    }
}

/// Tweens one attribute, reached by a dotted path, towards an end value.
///
/// Binding problems (unknown path, wrong shape) make the action a permanent no-op that
/// reports completion immediately and never touches the target.
#[derive(Debug, Clone)]
pub struct PropertyAction {
    path: Option<PropertyPath>,
    end: Value,
    mode: TweenMode,
    lerp: Lerp,
    error: Option<TweenError>,
}

impl PropertyAction {
    /// Resolves `path` on `target` and prepares a tween to `end`.
    pub fn bind(
        target: &mut dyn Animatable,
        path: &str,
        end: Value,
        mode: TweenMode,
        duration: f64,
        ease: Ease,
    ) -> Self {
        let resolved = PropertyPath::resolve(target, path).and_then(|p| {
            if p.shape() == end.shape() {
                Ok(p)
            } else {
                Err(TweenError::ShapeMismatch { expected: p.shape(), found: end.shape() })
            }
        });

        let mut action = Self { path: None, end, mode, lerp: Lerp::new(duration, ease), error: None };
        match resolved {
            Ok(p) => action.path = Some(p),
            Err(err) => action.fail(path, err),
        }
        action
    }

    /// Absolute tween with linear easing.
    pub fn to(target: &mut dyn Animatable, path: &str, end: impl Into<Value>, duration: f64) -> Self {
        Self::bind(target, path, end.into(), TweenMode::Absolute, duration, Ease::Linear)
    }

    /// Relative tween with linear easing.
    pub fn by(target: &mut dyn Animatable, path: &str, delta: impl Into<Value>, duration: f64) -> Self {
        Self::bind(target, path, delta.into(), TweenMode::Relative, duration, Ease::Linear)
    }

    /// The error swallowed while binding or starting, if any.
    #[inline]
    pub fn error(&self) -> Option<&TweenError> {
        self.error.as_ref()
    }

    #[inline]
    pub fn path(&self) -> Option<&PropertyPath> {
        self.path.as_ref()
    }

    #[inline]
    pub fn lerp(&self) -> &Lerp {
        &self.lerp
    }

    fn fail(&mut self, path: &str, err: TweenError) {
        log::debug!("tween on {path:?} disabled: {err}");
        self.path = None;
        self.error = Some(err);
    }
}

impl Action for PropertyAction {
    fn start(&mut self, target: &mut dyn Animatable) {
        let Some(path) = &self.path else { return };
        let Some(from) = path.read(target) else {
            let err = TweenError::UnknownAttribute { owner: target.type_name(), name: path.to_string() };
            let name = path.to_string();
            self.fail(&name, err);
            return;
        };
        if let Err(err) = self.lerp.start(from, self.end, self.mode == TweenMode::Relative) {
            let name = path.to_string();
            self.fail(&name, err);
        }
    }

    fn update(&mut self, target: &mut dyn Animatable, interval: f64) {
        let Some(path) = &self.path else { return };
        if let Some(value) = self.lerp.update(interval) {
            path.write(target, value);
        }
    }

    fn state(&self) -> TweenState {
        if self.path.is_none() {
            TweenState::Completed
        } else {
            self.lerp.state()
        }
    }

    fn overflow(&self) -> f64 {
        self.lerp.overflow()
    }
}

/// Waits for a fixed time without touching the target. Mostly useful inside a [`Sequence`].
#[derive(Debug, Clone)]
pub struct Delay {
    duration: f64,
    elapsed: f64,
    state: TweenState,
}

impl Delay {
    pub fn new(duration: f64) -> Self {
        Self { duration, elapsed: 0.0, state: TweenState::NotStarted }
    }
}

impl Action for Delay {
    fn start(&mut self, _target: &mut dyn Animatable) {
        self.elapsed = 0.0;
        self.state = TweenState::Running;
    }

    fn update(&mut self, _target: &mut dyn Animatable, interval: f64) {
        if self.state != TweenState::Running {
            return;
        }
        self.elapsed += interval.max(0.0);
        // A NaN duration completes on the first update.
        if !(self.elapsed < self.duration) {
            self.state = TweenState::Completed;
        }
    }

    fn state(&self) -> TweenState {
        self.state
    }

    fn overflow(&self) -> f64 {
        if self.state == TweenState::Completed {
            (self.elapsed - self.duration.max(0.0)).max(0.0)
        } else {
            0.0
        }
    }
}

/// Runs actions one after another against the same target.
///
/// Each step is started when the previous one completes, so its start value is
/// snapshotted after the previous step's final write. Time left over from a completing
/// step flows into the next one within the same tick.
pub struct Sequence {
    steps: Vec<Box<dyn Action>>,
    current: usize,
    state: TweenState,
    overflow: f64,
}

impl Sequence {
    pub fn new() -> Self {
        Self { steps: Vec::new(), current: 0, state: TweenState::NotStarted, overflow: 0.0 }
    }

    pub fn then(mut self, action: impl Action + 'static) -> Self {
        self.steps.push(Box::new(action));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Starts steps from `current` onwards until one is actually running.
    fn start_current(&mut self, target: &mut dyn Animatable) {
        while let Some(step) = self.steps.get_mut(self.current) {
            step.start(target);
            if step.state() == TweenState::Running {
                return;
            }
            self.current += 1;
        }
        self.state = TweenState::Completed;
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for Sequence {
    fn start(&mut self, target: &mut dyn Animatable) {
        self.current = 0;
        self.overflow = 0.0;
        self.state = TweenState::Running;
        self.start_current(target);
    }

    fn update(&mut self, target: &mut dyn Animatable, interval: f64) {
        let mut budget = interval;
        while self.state == TweenState::Running {
            let Some(step) = self.steps.get_mut(self.current) else {
                self.state = TweenState::Completed;
                break;
            };
            step.update(target, budget);
            if !step.completed() {
                return;
            }
            budget = step.overflow();
            self.current += 1;
            self.start_current(target);
        }
        self.overflow = budget;
    }

    fn state(&self) -> TweenState {
        self.state
    }

    fn overflow(&self) -> f64 {
        self.overflow
    }
}
