//! Penner Easing Curves
//!
//! Pure, stateless easing functions mapping normalized time (0.0 to 1.0) to
//! animation progress.
//!
//! # Features
//!
//! - **Polynomial**: quadratic, cubic, quartic and quintic curves
//! - **Transcendental**: sine, exponential and circular curves
//! - **Overshoot**: back curves with a configurable overshoot
//! - **Oscillation**: elastic curves with configurable amplitude and period
//! - **Bounce**: piecewise parabolic bounce decay
//! - **Easing values**: name, parse and serialize a curve choice with [`Easing`]
//!
//! Every curve comes in `in`, `out` and `in_out` directions. Inputs are not
//! clamped; callers that need strict [0, 1] behavior clamp before calling.
//!
//! ```
//! use penner_easing::{out_bounce, Easing};
//!
//! assert_eq!(out_bounce(1.0), 1.0);
//! assert_eq!("inQuad".parse::<Easing>().unwrap().apply(0.5), 0.25);
//! ```

pub mod curves;
pub mod easing;
pub mod error;

pub use curves::*;
pub use easing::Easing;
pub use error::ParseEasingError;
