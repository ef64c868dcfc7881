//! Scalar tweens with named easing curves.
//!
//! Curve names follow the GSAP convention, where `power2` is cubic and
//! `power3` is quartic.

use folio_config::schema::EaseCurve;

/// Easing curve mapping linear progress `t` in `[0,1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Power2Out,
    Power3Out,
    Power2InOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

impl From<EaseCurve> for Ease {
    fn from(curve: EaseCurve) -> Self {
        match curve {
            EaseCurve::Linear => Ease::Linear,
            EaseCurve::Power2Out => Ease::Power2Out,
            EaseCurve::Power3Out => Ease::Power3Out,
            EaseCurve::Power2InOut => Ease::Power2InOut,
        }
    }
}

/// Interpolates one value toward a target over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
    value: f32,
    /// Playhead runs from `to` back toward `from`.
    reversed: bool,
}

impl Tween {
    /// A finished tween resting at `value`.
    pub fn at(value: f32, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            duration: 0.0,
            elapsed: 0.0,
            ease,
            value,
            reversed: false,
        }
    }

    /// A fixed `from -> to` tween parked at its start until [`Tween::play`].
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
            value: from,
            reversed: true,
        }
    }

    /// Run the playhead forward from where it is.
    pub fn play(&mut self) {
        self.reversed = false;
    }

    /// Run the playhead backward from where it is, retracing the same curve.
    pub fn reverse(&mut self) {
        self.reversed = true;
    }

    /// Start moving from the current value toward `target`.
    ///
    /// A non-positive duration snaps to the target immediately.
    pub fn retarget(&mut self, target: f32, duration: f32) {
        self.from = self.value;
        self.to = target;
        self.elapsed = 0.0;
        self.reversed = false;
        if duration > 0.0 {
            self.duration = duration;
        } else {
            self.duration = 0.0;
            self.value = target;
        }
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let dt = dt.max(0.0);
        if self.duration <= 0.0 {
            self.value = if self.reversed { self.from } else { self.to };
            return self.value;
        }
        self.elapsed = if self.reversed {
            (self.elapsed - dt).max(0.0)
        } else {
            (self.elapsed + dt).min(self.duration)
        };
        self.value = if self.elapsed >= self.duration {
            self.to
        } else if self.elapsed <= 0.0 {
            self.from
        } else {
            self.from + (self.to - self.from) * self.ease.apply(self.progress())
        };
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Linear time progress in `[0,1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    pub fn is_finished(&self) -> bool {
        if self.duration <= 0.0 {
            return true;
        }
        if self.reversed {
            self.elapsed <= 0.0
        } else {
            self.elapsed >= self.duration
        }
    }
}
