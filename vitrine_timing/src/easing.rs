// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Easing curve applied to linear progress in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// `1 - (1 - t)^3`: fast start, long gentle settle.
    #[default]
    CubicOut,
}

impl Easing {
    /// Applies the curve. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// A value animated from `from` to `to` over `duration` milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: f64,
    started_at: f64,
    easing: Easing,
}

/// One sample of a [`Tween`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TweenSample {
    /// Interpolated value.
    pub value: f64,
    /// Linear progress in `[0, 1]`.
    pub progress: f64,
}

impl TweenSample {
    /// Returns `true` when the tween has reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Tween {
    /// Creates a tween starting at timestamp `started_at`.
    ///
    /// Non-positive durations finish on the first sample.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64, started_at: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
            easing,
        }
    }

    /// Start value.
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.from
    }

    /// End value.
    #[must_use]
    pub fn end_value(&self) -> f64 {
        self.to
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Moves the end value, keeping start time and progress.
    pub fn retarget(&mut self, to: f64) {
        self.to = to;
    }

    /// Samples the tween at timestamp `now`.
    #[must_use]
    pub fn sample(&self, now: f64) -> TweenSample {
        let progress = if self.duration > 0.0 {
            ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = self.easing.apply(progress);
        TweenSample {
            value: self.from + (self.to - self.from) * eased,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_out_endpoints_and_shape() {
        assert_eq!(Easing::CubicOut.apply(0.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(1.0), 1.0);
        assert_eq!(Easing::CubicOut.apply(0.5), 0.875);
        assert_eq!(Easing::CubicOut.apply(-1.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(3.0), 1.0);
    }

    #[test]
    fn tween_clamps_progress() {
        let tween = Tween::new(10.0, 110.0, 100.0, 1000.0, Easing::Linear);
        assert_eq!(tween.sample(900.0).value, 10.0);
        assert_eq!(tween.sample(1050.0).value, 60.0);
        let end = tween.sample(5000.0);
        assert_eq!(end.value, 110.0);
        assert!(end.is_finished());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let tween = Tween::new(0.0, 5.0, 0.0, 0.0, Easing::CubicOut);
        let s = tween.sample(0.0);
        assert!(s.is_finished());
        assert_eq!(s.value, 5.0);
    }

    #[test]
    fn retarget_keeps_progress() {
        let mut tween = Tween::new(0.0, 100.0, 100.0, 0.0, Easing::Linear);
        assert_eq!(tween.sample(50.0).value, 50.0);
        tween.retarget(200.0);
        assert_eq!(tween.sample(50.0).value, 100.0);
        assert_eq!(tween.end_value(), 200.0);
    }
}
