//! Easing curves
//!
//! One function per curve family and direction. Every function maps a
//! normalized time `t` (0.0 to 1.0) to a progress value. Inputs outside that
//! range are not clamped; the closed-form formula is simply extrapolated.
//!
//! Elastic and back curves take shape parameters. The plain function uses the
//! conventional defaults, the `_with` variant takes them explicitly.

use std::f64::consts::PI;

/// Default elastic amplitude
pub const DEFAULT_AMPLITUDE: f64 = 1.0;

/// Default elastic period for the in and out curves
pub const DEFAULT_PERIOD: f64 = 0.3;

/// Default elastic period for the in-out curve
pub const DEFAULT_IN_OUT_PERIOD: f64 = 0.45;

/// Default back overshoot (about 10% past the target)
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Identity curve
#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

// ============================================================================
// Polynomial curves
// ============================================================================

/// Quadratic ease-in, accelerating from zero velocity
#[inline]
pub fn in_quad(t: f64) -> f64 {
    t * t
}

/// Quadratic ease-out, decelerating to zero velocity
#[inline]
pub fn out_quad(t: f64) -> f64 {
    -t * (t - 2.0)
}

/// Quadratic ease-in-out
#[inline]
pub fn in_out_quad(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return 0.5 * t * t;
    }
    let t = t - 1.0;
    -0.5 * (t * (t - 2.0) - 1.0)
}

/// Cubic ease-in
#[inline]
pub fn in_cubic(t: f64) -> f64 {
    t * t * t
}

/// Cubic ease-out
#[inline]
pub fn out_cubic(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t + 1.0
}

/// Cubic ease-in-out
#[inline]
pub fn in_out_cubic(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return 0.5 * t * t * t;
    }
    let t = t - 2.0;
    0.5 * (t * t * t + 2.0)
}

/// Quartic ease-in
#[inline]
pub fn in_quart(t: f64) -> f64 {
    t * t * t * t
}

/// Quartic ease-out
#[inline]
pub fn out_quart(t: f64) -> f64 {
    let t = t - 1.0;
    -(t * t * t * t - 1.0)
}

/// Quartic ease-in-out
#[inline]
pub fn in_out_quart(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return 0.5 * t * t * t * t;
    }
    let t = t - 2.0;
    -0.5 * (t * t * t * t - 2.0)
}

/// Quintic ease-in
#[inline]
pub fn in_quint(t: f64) -> f64 {
    t * t * t * t * t
}

/// Quintic ease-out
#[inline]
pub fn out_quint(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t * t * t + 1.0
}

/// Quintic ease-in-out
#[inline]
pub fn in_out_quint(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return 0.5 * t * t * t * t * t;
    }
    let t = t - 2.0;
    0.5 * (t * t * t * t * t + 2.0)
}

// ============================================================================
// Sine, exponential, circular
// ============================================================================

/// Sine ease-in
#[inline]
pub fn in_sine(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

/// Sine ease-out
#[inline]
pub fn out_sine(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

/// Sine ease-in-out
#[inline]
pub fn in_out_sine(t: f64) -> f64 {
    -0.5 * ((PI * t).cos() - 1.0)
}

/// Exponential ease-in. Returns exactly 0.0 at `t <= 0.0`, where the general
/// formula would yield 2^-10.
#[inline]
pub fn in_expo(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    2.0f64.powf(10.0 * (t - 1.0))
}

/// Exponential ease-out. Returns exactly 1.0 at `t >= 1.0`.
#[inline]
pub fn out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    1.0 - 2.0f64.powf(-10.0 * t)
}

/// Exponential ease-in-out with exact endpoints.
#[inline]
pub fn in_out_expo(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let t = t * 2.0;
    if t < 1.0 {
        return 0.5 * 2.0f64.powf(10.0 * (t - 1.0));
    }
    0.5 * (2.0 - 2.0f64.powf(-10.0 * (t - 1.0)))
}

/// Circular ease-in. `t` must stay within [-1, 1] for a real result.
#[inline]
pub fn in_circ(t: f64) -> f64 {
    -((1.0 - t * t).sqrt() - 1.0)
}

/// Circular ease-out
#[inline]
pub fn out_circ(t: f64) -> f64 {
    let t = t - 1.0;
    (1.0 - t * t).sqrt()
}

/// Circular ease-in-out
#[inline]
pub fn in_out_circ(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return -0.5 * ((1.0 - t * t).sqrt() - 1.0);
    }
    let t = t - 2.0;
    0.5 * ((1.0 - t * t).sqrt() + 1.0)
}

// ============================================================================
// Elastic
// ============================================================================

/// Amplitude and phase shift of an elastic oscillation.
///
/// Amplitudes below 1.0 are raised to 1.0 with a quarter-period phase shift;
/// otherwise the phase is chosen so the wave starts at the requested amplitude.
#[derive(Clone, Copy, Debug)]
struct ElasticWave {
    amplitude: f64,
    phase: f64,
    period: f64,
}

impl ElasticWave {
    #[inline]
    fn new(amplitude: f64, period: f64) -> Self {
        if amplitude < 1.0 {
            Self {
                amplitude: 1.0,
                phase: period / 4.0,
                period,
            }
        } else {
            Self {
                amplitude,
                phase: period / (2.0 * PI) * (1.0 / amplitude).asin(),
                period,
            }
        }
    }

    /// a * 2^(10u) * sin((u - s) * 2pi / p)
    #[inline]
    fn growing(&self, u: f64) -> f64 {
        self.amplitude * 2.0f64.powf(10.0 * u) * self.oscillation(u)
    }

    /// a * 2^(-10u) * sin((u - s) * 2pi / p)
    #[inline]
    fn decaying(&self, u: f64) -> f64 {
        self.amplitude * 2.0f64.powf(-10.0 * u) * self.oscillation(u)
    }

    #[inline]
    fn oscillation(&self, u: f64) -> f64 {
        ((u - self.phase) * (2.0 * PI) / self.period).sin()
    }
}

/// Elastic ease-in with default amplitude and period.
#[inline]
pub fn in_elastic(t: f64) -> f64 {
    in_elastic_with(t, DEFAULT_AMPLITUDE, DEFAULT_PERIOD)
}

/// Elastic ease-in: an exponentially growing sine wave.
///
/// `t == 0.0` and `t == 1.0` return exactly 0.0 and 1.0.
#[inline]
pub fn in_elastic_with(t: f64, amplitude: f64, period: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let wave = ElasticWave::new(amplitude, period);
    -wave.growing(t - 1.0)
}

/// Elastic ease-out with default amplitude and period.
#[inline]
pub fn out_elastic(t: f64) -> f64 {
    out_elastic_with(t, DEFAULT_AMPLITUDE, DEFAULT_PERIOD)
}

/// Elastic ease-out: an exponentially decaying sine wave settling on 1.0.
///
/// `t == 0.0` and `t == 1.0` return exactly 0.0 and 1.0.
#[inline]
pub fn out_elastic_with(t: f64, amplitude: f64, period: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let wave = ElasticWave::new(amplitude, period);
    wave.decaying(t) + 1.0
}

/// Elastic ease-in-out with default amplitude and the longer in-out period.
#[inline]
pub fn in_out_elastic(t: f64) -> f64 {
    in_out_elastic_with(t, DEFAULT_AMPLITUDE, DEFAULT_IN_OUT_PERIOD)
}

/// Elastic ease-in-out: growing wave for the first half, decaying for the
/// second.
#[inline]
pub fn in_out_elastic_with(t: f64, amplitude: f64, period: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let wave = ElasticWave::new(amplitude, period);
    let t = t * 2.0;
    if t < 1.0 {
        return -0.5 * wave.growing(t - 1.0);
    }
    wave.decaying(t - 1.0) * 0.5 + 1.0
}

// ============================================================================
// Back
// ============================================================================

/// Back ease-in with the default overshoot.
#[inline]
pub fn in_back(t: f64) -> f64 {
    in_back_with(t, DEFAULT_OVERSHOOT)
}

/// Back ease-in: pulls below 0.0 before accelerating toward 1.0.
#[inline]
pub fn in_back_with(t: f64, overshoot: f64) -> f64 {
    let s = overshoot;
    t * t * ((s + 1.0) * t - s)
}

/// Back ease-out with the default overshoot.
#[inline]
pub fn out_back(t: f64) -> f64 {
    out_back_with(t, DEFAULT_OVERSHOOT)
}

/// Back ease-out: passes 1.0 before settling back onto it.
#[inline]
pub fn out_back_with(t: f64, overshoot: f64) -> f64 {
    let s = overshoot;
    let t = t - 1.0;
    t * t * ((s + 1.0) * t + s) + 1.0
}

/// Back ease-in-out with the default overshoot.
#[inline]
pub fn in_out_back(t: f64) -> f64 {
    in_out_back_with(t, DEFAULT_OVERSHOOT)
}

/// Back ease-in-out. The overshoot is scaled by 1.525 so each half overshoots
/// by about the same proportion as the single-direction curves.
#[inline]
pub fn in_out_back_with(t: f64, overshoot: f64) -> f64 {
    let s = overshoot * 1.525;
    let t = t * 2.0;
    if t < 1.0 {
        return 0.5 * (t * t * ((s + 1.0) * t - s));
    }
    let t = t - 2.0;
    0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
}

// ============================================================================
// Bounce
// ============================================================================

/// Bounce ease-out: four parabolic arcs of decreasing height.
#[inline]
pub fn out_bounce(t: f64) -> f64 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}

/// Bounce ease-in, the time-reversed mirror of [`out_bounce`].
#[inline]
pub fn in_bounce(t: f64) -> f64 {
    1.0 - out_bounce(1.0 - t)
}

/// Bounce ease-in-out, bouncing in for the first half and out for the second.
#[inline]
pub fn in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        return in_bounce(t * 2.0) * 0.5;
    }
    out_bounce(t * 2.0 - 1.0) * 0.5 + 0.5
}
