//! Easing curves as values
//!
//! [`Easing`] names a curve (and its shape parameters) so it can be stored,
//! compared, parsed from a string id or loaded from configuration, then
//! evaluated later with [`Easing::apply`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::curves::{
    self, DEFAULT_AMPLITUDE, DEFAULT_IN_OUT_PERIOD, DEFAULT_OVERSHOOT, DEFAULT_PERIOD,
};
use crate::error::ParseEasingError;

/// Easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "curve", rename_all = "camelCase")
)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic {
        #[cfg_attr(feature = "serde", serde(default = "default_amplitude"))]
        amplitude: f64,
        #[cfg_attr(feature = "serde", serde(default = "default_period"))]
        period: f64,
    },
    OutElastic {
        #[cfg_attr(feature = "serde", serde(default = "default_amplitude"))]
        amplitude: f64,
        #[cfg_attr(feature = "serde", serde(default = "default_period"))]
        period: f64,
    },
    InOutElastic {
        #[cfg_attr(feature = "serde", serde(default = "default_amplitude"))]
        amplitude: f64,
        #[cfg_attr(feature = "serde", serde(default = "default_in_out_period"))]
        period: f64,
    },
    InBack {
        #[cfg_attr(feature = "serde", serde(default = "default_overshoot"))]
        overshoot: f64,
    },
    OutBack {
        #[cfg_attr(feature = "serde", serde(default = "default_overshoot"))]
        overshoot: f64,
    },
    InOutBack {
        #[cfg_attr(feature = "serde", serde(default = "default_overshoot"))]
        overshoot: f64,
    },
    InBounce,
    OutBounce,
    InOutBounce,
}

#[cfg(feature = "serde")]
fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

#[cfg(feature = "serde")]
fn default_period() -> f64 {
    DEFAULT_PERIOD
}

#[cfg(feature = "serde")]
fn default_in_out_period() -> f64 {
    DEFAULT_IN_OUT_PERIOD
}

#[cfg(feature = "serde")]
fn default_overshoot() -> f64 {
    DEFAULT_OVERSHOOT
}

impl Easing {
    // ========================================================================
    // Parameterized constructors
    // ========================================================================

    /// Elastic ease-in with default amplitude and period
    pub const fn in_elastic() -> Self {
        Easing::InElastic {
            amplitude: DEFAULT_AMPLITUDE,
            period: DEFAULT_PERIOD,
        }
    }

    /// Elastic ease-out with default amplitude and period
    pub const fn out_elastic() -> Self {
        Easing::OutElastic {
            amplitude: DEFAULT_AMPLITUDE,
            period: DEFAULT_PERIOD,
        }
    }

    /// Elastic ease-in-out with default amplitude and the in-out period
    pub const fn in_out_elastic() -> Self {
        Easing::InOutElastic {
            amplitude: DEFAULT_AMPLITUDE,
            period: DEFAULT_IN_OUT_PERIOD,
        }
    }

    /// Back ease-in with the default overshoot
    pub const fn in_back() -> Self {
        Easing::InBack {
            overshoot: DEFAULT_OVERSHOOT,
        }
    }

    /// Back ease-out with the default overshoot
    pub const fn out_back() -> Self {
        Easing::OutBack {
            overshoot: DEFAULT_OVERSHOOT,
        }
    }

    /// Back ease-in-out with the default overshoot
    pub const fn in_out_back() -> Self {
        Easing::InOutBack {
            overshoot: DEFAULT_OVERSHOOT,
        }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match *self {
            Easing::Linear => curves::linear(t),
            Easing::InQuad => curves::in_quad(t),
            Easing::OutQuad => curves::out_quad(t),
            Easing::InOutQuad => curves::in_out_quad(t),
            Easing::InCubic => curves::in_cubic(t),
            Easing::OutCubic => curves::out_cubic(t),
            Easing::InOutCubic => curves::in_out_cubic(t),
            Easing::InQuart => curves::in_quart(t),
            Easing::OutQuart => curves::out_quart(t),
            Easing::InOutQuart => curves::in_out_quart(t),
            Easing::InQuint => curves::in_quint(t),
            Easing::OutQuint => curves::out_quint(t),
            Easing::InOutQuint => curves::in_out_quint(t),
            Easing::InSine => curves::in_sine(t),
            Easing::OutSine => curves::out_sine(t),
            Easing::InOutSine => curves::in_out_sine(t),
            Easing::InExpo => curves::in_expo(t),
            Easing::OutExpo => curves::out_expo(t),
            Easing::InOutExpo => curves::in_out_expo(t),
            Easing::InCirc => curves::in_circ(t),
            Easing::OutCirc => curves::out_circ(t),
            Easing::InOutCirc => curves::in_out_circ(t),
            Easing::InElastic { amplitude, period } => {
                curves::in_elastic_with(t, amplitude, period)
            }
            Easing::OutElastic { amplitude, period } => {
                curves::out_elastic_with(t, amplitude, period)
            }
            Easing::InOutElastic { amplitude, period } => {
                curves::in_out_elastic_with(t, amplitude, period)
            }
            Easing::InBack { overshoot } => curves::in_back_with(t, overshoot),
            Easing::OutBack { overshoot } => curves::out_back_with(t, overshoot),
            Easing::InOutBack { overshoot } => curves::in_out_back_with(t, overshoot),
            Easing::InBounce => curves::in_bounce(t),
            Easing::OutBounce => curves::out_bounce(t),
            Easing::InOutBounce => curves::in_out_bounce(t),
        }
    }

    /// Stable curve id for config/serialization.
    pub fn id(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::InQuad => "inQuad",
            Easing::OutQuad => "outQuad",
            Easing::InOutQuad => "inOutQuad",
            Easing::InCubic => "inCubic",
            Easing::OutCubic => "outCubic",
            Easing::InOutCubic => "inOutCubic",
            Easing::InQuart => "inQuart",
            Easing::OutQuart => "outQuart",
            Easing::InOutQuart => "inOutQuart",
            Easing::InQuint => "inQuint",
            Easing::OutQuint => "outQuint",
            Easing::InOutQuint => "inOutQuint",
            Easing::InSine => "inSine",
            Easing::OutSine => "outSine",
            Easing::InOutSine => "inOutSine",
            Easing::InExpo => "inExpo",
            Easing::OutExpo => "outExpo",
            Easing::InOutExpo => "inOutExpo",
            Easing::InCirc => "inCirc",
            Easing::OutCirc => "outCirc",
            Easing::InOutCirc => "inOutCirc",
            Easing::InElastic { .. } => "inElastic",
            Easing::OutElastic { .. } => "outElastic",
            Easing::InOutElastic { .. } => "inOutElastic",
            Easing::InBack { .. } => "inBack",
            Easing::OutBack { .. } => "outBack",
            Easing::InOutBack { .. } => "inOutBack",
            Easing::InBounce => "inBounce",
            Easing::OutBounce => "outBounce",
            Easing::InOutBounce => "inOutBounce",
        }
    }

    /// Full curve list, parameterized curves with their defaults.
    pub fn all() -> &'static [Easing] {
        const CURVES: [Easing; 31] = [
            Easing::Linear,
            Easing::InQuad,
            Easing::OutQuad,
            Easing::InOutQuad,
            Easing::InCubic,
            Easing::OutCubic,
            Easing::InOutCubic,
            Easing::InQuart,
            Easing::OutQuart,
            Easing::InOutQuart,
            Easing::InQuint,
            Easing::OutQuint,
            Easing::InOutQuint,
            Easing::InSine,
            Easing::OutSine,
            Easing::InOutSine,
            Easing::InExpo,
            Easing::OutExpo,
            Easing::InOutExpo,
            Easing::InCirc,
            Easing::OutCirc,
            Easing::InOutCirc,
            Easing::in_elastic(),
            Easing::out_elastic(),
            Easing::in_out_elastic(),
            Easing::in_back(),
            Easing::out_back(),
            Easing::in_out_back(),
            Easing::InBounce,
            Easing::OutBounce,
            Easing::InOutBounce,
        ];
        &CURVES
    }

    /// Whether the curve may leave the [0, 1] range between its endpoints.
    pub fn is_overshooting(&self) -> bool {
        matches!(
            self,
            Easing::InElastic { .. }
                | Easing::OutElastic { .. }
                | Easing::InOutElastic { .. }
                | Easing::InBack { .. }
                | Easing::OutBack { .. }
                | Easing::InOutBack { .. }
        )
    }
}

impl Display for Easing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseEasingError::Empty);
        }

        Easing::all()
            .iter()
            .find(|easing| easing.id() == name)
            .copied()
            .ok_or_else(|| {
                tracing::debug!(name, "unknown easing curve");
                ParseEasingError::UnknownCurve(name.to_string())
            })
    }
}
