//! Easing functions for animations
//!
//! Curves are split into a family ([`EaseKind`]) and a phase ([`EaseMode`]).
//! Each family is a closed-form function of normalized progress; Out and
//! InOut are derived from the In form by reflection, so every pair stays
//! endpoint-exact.

use std::f32::consts::FRAC_PI_2;

/// Named curve family
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EaseKind {
    #[default]
    Linear,
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Back,
    Elastic,
    Bounce,
}

/// Acceleration phase of a curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EaseMode {
    #[default]
    In,
    Out,
    InOut,
}

impl EaseKind {
    /// Apply the easing curve to a progress value (0.0 to 1.0).
    ///
    /// Input `t` is clamped to `[0.0, 1.0]`. Every (kind, mode) pair maps
    /// 0.0 to 0.0 and 1.0 to 1.0 exactly; Back and Elastic overshoot that
    /// range in between.
    pub fn apply(self, mode: EaseMode, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        // Expo and Elastic only approach the endpoints in closed form
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match mode {
            EaseMode::In => self.ease_in(t),
            EaseMode::Out => 1.0 - self.ease_in(1.0 - t),
            EaseMode::InOut => {
                if t < 0.5 {
                    self.ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - self.ease_in(2.0 - 2.0 * t) / 2.0
                }
            }
        }
    }

    /// In form of the curve family
    fn ease_in(self, t: f32) -> f32 {
        match self {
            EaseKind::Linear => t,
            EaseKind::Sine => 1.0 - (t * FRAC_PI_2).cos(),
            EaseKind::Quad => t * t,
            EaseKind::Cubic => t * t * t,
            EaseKind::Quart => t * t * t * t,
            EaseKind::Quint => t * t * t * t * t,
            EaseKind::Expo => 2.0_f32.powf(10.0 * t - 10.0),
            EaseKind::Circ => 1.0 - (1.0 - t * t).sqrt(),
            EaseKind::Back => {
                let c = 1.70158;
                (c + 1.0) * t * t * t - c * t * t
            }
            EaseKind::Elastic => {
                let period = 2.0 * std::f32::consts::PI / 3.0;
                -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * period).sin()
            }
            EaseKind::Bounce => 1.0 - bounce_out(1.0 - t),
        }
    }
}

/// Piecewise-parabola bounce, defined in its Out form
fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}
