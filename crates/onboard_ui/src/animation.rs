//! Eased value animations and the blur-slide section transition.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Critically damped spring: fast start, soft landing, no overshoot.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

impl Easing {
    /// Spring stiffness for [`Easing::Smooth`], in "settles within t=1" units.
    const SMOOTH_OMEGA: f32 = 8.0;

    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Smooth => {
                if t >= 1.0 {
                    1.0
                } else {
                    // x(t) = 1 - (1 + wt) e^(-wt)
                    let wt = Self::SMOOTH_OMEGA * t;
                    1.0 - (1.0 + wt) * (-wt).exp()
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
    /// Start value (for interpolation).
    start: f32,
}

impl Animation {
    /// Default animation duration.
    pub const DEFAULT_DURATION: f32 = 0.5;

    /// Creates a new animation at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
            start: value,
        }
    }

    /// Creates an animation with custom duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets a new target value, starting animation from current value.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Updates the animation.
    ///
    /// `dt` is delta time in seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 && self.easing != Easing::Instant {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }

        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

/// Fade + unblur + slide-up transition applied to one section.
///
/// Hidden: transparent, blurred by [`BlurSlide::HIDDEN_BLUR`] and pushed
/// down by [`BlurSlide::HIDDEN_OFFSET`]. Shown: opaque, sharp, in place.
#[derive(Debug, Clone)]
pub struct BlurSlide {
    opacity: Animation,
    blur: Animation,
    offset_y: Animation,
    shown: bool,
}

impl BlurSlide {
    /// Blur radius while hidden.
    pub const HIDDEN_BLUR: f32 = 10.0;
    /// Vertical offset while hidden.
    pub const HIDDEN_OFFSET: f32 = 100.0;

    /// Creates a hidden transition with the given duration (seconds).
    #[must_use]
    pub fn hidden(easing: Easing, duration: f32) -> Self {
        Self {
            opacity: Animation::new(0.0, easing).with_duration(duration),
            blur: Animation::new(Self::HIDDEN_BLUR, easing).with_duration(duration),
            offset_y: Animation::new(Self::HIDDEN_OFFSET, easing).with_duration(duration),
            shown: false,
        }
    }

    /// Sets whether the section should be shown; animates on change.
    pub fn set_shown(&mut self, shown: bool) {
        if shown == self.shown {
            return;
        }
        self.shown = shown;
        if shown {
            self.opacity.set_target(1.0);
            self.blur.set_target(0.0);
            self.offset_y.set_target(0.0);
        } else {
            self.opacity.set_target(0.0);
            self.blur.set_target(Self::HIDDEN_BLUR);
            self.offset_y.set_target(Self::HIDDEN_OFFSET);
        }
    }

    /// Current opacity (0-1).
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Current blur radius.
    #[must_use]
    pub fn blur(&self) -> f32 {
        self.blur.value()
    }

    /// Current vertical offset.
    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y.value()
    }

    /// Returns true once every channel has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.opacity.is_complete() && self.blur.is_complete() && self.offset_y.is_complete()
    }

    /// Advances all channels by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.opacity.update(dt);
        self.blur.update(dt);
        self.offset_y.update(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_has_no_overshoot() {
        let easing = Easing::Smooth;
        let mut previous = 0.0;
        for step in 0..=100 {
            let value = easing.apply(step as f32 / 100.0);
            assert!(value >= previous, "smooth must be monotonic");
            assert!(value <= 1.0);
            previous = value;
        }
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, Easing::Smooth);
        anim.set_target(100.0);

        for _ in 0..40 {
            anim.update(0.016);
        }

        assert!((anim.value() - 100.0).abs() < 0.01);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_instant_lands_on_first_update() {
        let mut anim = Animation::new(0.0, Easing::Instant);
        anim.set_target(10.0);
        assert!(!anim.is_complete());

        anim.update(0.001);
        assert!(anim.is_complete());
        assert_eq!(anim.value(), 10.0);
    }

    #[test]
    fn test_blur_slide_starts_hidden() {
        let slide = BlurSlide::hidden(Easing::Smooth, 0.5);

        assert_eq!(slide.opacity(), 0.0);
        assert_eq!(slide.blur(), BlurSlide::HIDDEN_BLUR);
        assert_eq!(slide.offset_y(), BlurSlide::HIDDEN_OFFSET);
    }

    #[test]
    fn test_blur_slide_settles_shown() {
        let mut slide = BlurSlide::hidden(Easing::Smooth, 0.5);
        slide.set_shown(true);
        slide.update(0.1);
        assert!(!slide.is_settled());
        assert!(slide.opacity() > 0.0);

        slide.update(0.5);
        assert!(slide.is_settled());
        assert_eq!(slide.opacity(), 1.0);
        assert_eq!(slide.blur(), 0.0);
        assert_eq!(slide.offset_y(), 0.0);
    }
}
