use std::f64::consts::{FRAC_PI_2, PI};

/// Shapes linear time progress in [0, 1] into eased progress in [0, 1].
#[derive(Debug, Clone, Copy)]
pub enum Easing {
    Linear,
    /// Smooth begin: a sine ramp blended into linear motion, slow start and
    /// accelerating toward 1.
    InCurve,
    Custom(fn(f64) -> f64),
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::InCurve => ease_in_curve(t),
            Easing::Custom(f) => f(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::InCurve
    }
}

fn ease_in_curve(t: f64) -> f64 {
    let sin_progress = (t * PI - FRAC_PI_2).sin() / 2.0 + 0.5;
    // Pure sine up to 0.15, pure linear from 0.65 on.
    let mix = (1.0 - t * 2.0 + 0.3).clamp(0.0, 1.0);
    sin_progress * mix + t * (1.0 - mix)
}

pub fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Tracks how far a single animation has progressed.
///
/// Time is fed in as frame deltas in milliseconds. `elapsed` never exceeds
/// `duration`, so once `done()` the reported value stays at the end of the
/// curve no matter how many more updates arrive.
#[derive(Debug, Clone)]
pub struct Timeline {
    duration: f64,
    elapsed: f64,
    easing: Easing,
}

impl Timeline {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
        self.elapsed = self.elapsed.min(duration.max(0.0));
    }

    pub fn set_easing_curve(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn update(&mut self, delta: f64) {
        if self.done() {
            return;
        }
        self.elapsed = (self.elapsed + delta.max(0.0)).min(self.duration.max(0.0));
    }

    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    pub fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(0.0, Easing::default())
    }
}
