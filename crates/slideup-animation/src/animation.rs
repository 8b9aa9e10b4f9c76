//! Tween animation driven by host frame callbacks.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves applied to the linear time fraction of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Starts fast and decelerates: `1 - (1 - t)^(2 * factor)`.
    /// A factor of 1.0 matches the platform's default decelerate interpolator.
    Decelerate { factor: f32 },
}

impl Easing {
    pub const DECELERATE: Easing = Easing::Decelerate { factor: 1.0 };

    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Decelerate { factor } => decelerate(*factor, fraction),
        }
    }
}

fn decelerate(factor: f32, fraction: f32) -> f32 {
    let fraction = fraction.clamp(0.0, 1.0);
    let remaining = 1.0 - fraction;
    if factor == 1.0 {
        1.0 - remaining * remaining
    } else {
        1.0 - remaining.powf(2.0 * factor)
    }
}

/// Duration and easing of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween that decelerates towards its target.
    pub fn decelerate(duration_millis: u64) -> Self {
        Self {
            duration_millis,
            easing: Easing::DECELERATE,
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::decelerate(300)
    }
}

/// Value produced by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame<T> {
    pub value: T,
    /// True on the frame that lands exactly on the target.
    pub finished: bool,
}

/// Single-value tween animator.
///
/// The animator does not own a clock. The host calls [`ValueAnimator::on_frame`]
/// with monotonic frame timestamps while [`ValueAnimator::is_running`] holds;
/// the first frame after a start fixes the start time.
#[derive(Debug, Clone)]
pub struct ValueAnimator<T: Lerp + Clone> {
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    running: bool,
}

impl<T: Lerp + Clone> ValueAnimator<T> {
    /// Create an idle animator resting at `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            running: false,
        }
    }

    /// Start animating from `from` to `target`, replacing any running tween.
    pub fn start(&mut self, from: T, target: T, spec: AnimationSpec) {
        if self.running {
            log::trace!("restarting running animation");
        }
        self.current = from.clone();
        self.start = from;
        self.target = target;
        self.spec = spec;
        self.start_time_nanos = None;
        self.running = true;
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&mut self, target: T) {
        self.current = target.clone();
        self.start = target.clone();
        self.target = target;
        self.start_time_nanos = None;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.target.clone()
    }

    /// Return the animation spec currently driving this animator.
    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Advance to `frame_time_nanos`. Returns `None` while idle.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Option<AnimationFrame<T>> {
        if !self.running {
            return None;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = (self.spec.duration_millis * 1_000_000).max(1);
        let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 {
            self.current = self.target.clone();
            self.start = self.target.clone();
            self.start_time_nanos = None;
            self.running = false;
            return Some(AnimationFrame {
                value: self.current.clone(),
                finished: true,
            });
        }

        let progress = self.spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, progress);
        Some(AnimationFrame {
            value: self.current.clone(),
            finished: false,
        })
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
