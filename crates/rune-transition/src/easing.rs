//! Easing functions for transition timing.
//!
//! Two families live here:
//! - CSS timing functions (`ease`, `ease-in`, `cubic-bezier(...)`, `steps(...)`)
//! - Closed-form polynomial and trigonometric curves (quad, cubic, quart,
//!   quint, sine, expo, circ, plus back/elastic/bounce outs) used as the
//!   defaults of the built-in transitions.
//!
//! # Usage
//!
//! ```
//! use rune_transition::easing::EasingFunction;
//!
//! let ease = EasingFunction::CubicOut;
//! let progress = ease.evaluate(0.5);
//! assert!(progress > 0.5);
//!
//! let parsed: EasingFunction = "cubic-in-out".parse().unwrap();
//! assert_eq!(parsed, EasingFunction::CubicInOut);
//! ```

use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

/// Position for stepped easing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPosition {
    /// Jump at the start of each interval (CSS `jump-start` / `start`).
    Start,
    /// Jump at the end of each interval (CSS `jump-end` / `end`).
    End,
    /// Jump at both start and end (CSS `jump-both`).
    Both,
    /// No jump at start or end (CSS `jump-none`).
    None,
}

impl Default for StepPosition {
    fn default() -> Self {
        Self::End
    }
}

/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
///
/// Every curve satisfies `evaluate(0) == 0` and `evaluate(1) == 1`. The
/// back, elastic and bounce curves overshoot in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    /// No easing.
    Linear,

    /// CSS `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,
    /// CSS `ease-in`, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// CSS `ease-out`, `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// CSS `ease-in-out`, `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackOut,
    ElasticOut,
    BounceOut,

    /// Custom cubic bezier curve with control points `(x1, y1)` and `(x2, y2)`.
    /// x values must be in [0, 1], y values can be any float.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },

    /// Stepped easing with discrete jumps. `count` must be >= 1.
    Steps { count: u32, position: StepPosition },
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::Ease
    }
}

impl EasingFunction {
    /// Evaluate the curve at linear progress `t` (clamped to `[0, 1]`).
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),

            Self::QuadIn => t * t,
            Self::QuadOut => -t * (t - 2.0),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -2.0 * t * t + 4.0 * t - 1.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let f = t - 1.0;
                f * f * f + 1.0
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    0.5 * (2.0 * t - 2.0).powi(3) + 1.0
                }
            }
            Self::QuartIn => t.powi(4),
            Self::QuartOut => (t - 1.0).powi(3) * (1.0 - t) + 1.0,
            Self::QuartInOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    -8.0 * (t - 1.0).powi(4) + 1.0
                }
            }
            Self::QuintIn => t.powi(5),
            Self::QuintOut => (t - 1.0).powi(5) + 1.0,
            Self::QuintInOut => {
                let s = t * 2.0;
                if s < 1.0 {
                    0.5 * s.powi(5)
                } else {
                    0.5 * ((s - 2.0).powi(5) + 2.0)
                }
            }
            Self::SineIn => {
                let v = (t * PI / 2.0).cos();
                if v.abs() < 1e-14 { 1.0 } else { 1.0 - v }
            }
            Self::SineOut => (t * PI / 2.0).sin(),
            Self::SineInOut => -0.5 * ((PI * t).cos() - 1.0),
            Self::ExpoIn => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (t - 1.0))
                }
            }
            Self::ExpoOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::ExpoInOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    0.5 * 2f64.powf(20.0 * t - 10.0)
                } else {
                    -0.5 * 2f64.powf(10.0 - 20.0 * t) + 1.0
                }
            }
            Self::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            Self::CircOut => {
                let f = t - 1.0;
                (1.0 - f * f).sqrt()
            }
            Self::CircInOut => {
                let s = t * 2.0;
                if s < 1.0 {
                    -0.5 * ((1.0 - s * s).sqrt() - 1.0)
                } else {
                    let f = s - 2.0;
                    0.5 * ((1.0 - f * f).sqrt() + 1.0)
                }
            }
            Self::BackOut => {
                let s = 1.70158;
                let f = t - 1.0;
                f * f * ((s + 1.0) * f + s) + 1.0
            }
            Self::ElasticOut => {
                if t == 1.0 {
                    1.0
                } else {
                    (-13.0 * (t + 1.0) * PI / 2.0).sin() * 2f64.powf(-10.0 * t) + 1.0
                }
            }
            Self::BounceOut => bounce_out(t),

            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
            Self::Steps { count, position } => stepped(*count, *position, t),
        }
    }

    /// Create a custom cubic bezier easing function.
    ///
    /// # Errors
    /// Returns [`TransitionError::InvalidEasing`] if `x1` or `x2` is outside `[0, 1]`.
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, TransitionError> {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(TransitionError::InvalidEasing(
                "bezier x values must be in [0, 1]".to_string(),
            ));
        }
        Ok(Self::CubicBezier { x1, y1, x2, y2 })
    }

    /// Create a stepped easing function.
    ///
    /// # Errors
    /// Returns [`TransitionError::InvalidEasing`] if `steps` is 0.
    pub fn steps(steps: u32, position: StepPosition) -> Result<Self, TransitionError> {
        if steps == 0 {
            return Err(TransitionError::InvalidEasing(
                "steps must be at least 1".to_string(),
            ));
        }
        Ok(Self::Steps {
            count: steps,
            position,
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        let easing = match name {
            "linear" => Self::Linear,
            "ease" => Self::Ease,
            "ease_in" => Self::EaseIn,
            "ease_out" => Self::EaseOut,
            "ease_in_out" => Self::EaseInOut,
            "quad_in" => Self::QuadIn,
            "quad_out" => Self::QuadOut,
            "quad_in_out" => Self::QuadInOut,
            "cubic_in" => Self::CubicIn,
            "cubic_out" => Self::CubicOut,
            "cubic_in_out" => Self::CubicInOut,
            "quart_in" => Self::QuartIn,
            "quart_out" => Self::QuartOut,
            "quart_in_out" => Self::QuartInOut,
            "quint_in" => Self::QuintIn,
            "quint_out" => Self::QuintOut,
            "quint_in_out" => Self::QuintInOut,
            "sine_in" => Self::SineIn,
            "sine_out" => Self::SineOut,
            "sine_in_out" => Self::SineInOut,
            "expo_in" => Self::ExpoIn,
            "expo_out" => Self::ExpoOut,
            "expo_in_out" => Self::ExpoInOut,
            "circ_in" => Self::CircIn,
            "circ_out" => Self::CircOut,
            "circ_in_out" => Self::CircInOut,
            "back_out" => Self::BackOut,
            "elastic_out" => Self::ElasticOut,
            "bounce_out" => Self::BounceOut,
            _ => return None,
        };
        Some(easing)
    }
}

impl FromStr for EasingFunction {
    type Err = TransitionError;

    /// Parse a case-insensitive easing name in kebab or snake form
    /// (`cubic-out`, `cubic_out`) or a CSS function (`cubic-bezier(...)`, `steps(...)`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");

        if let Some(args) = function_args(&normalized, "cubic_bezier") {
            let values = args
                .split(',')
                .map(|v| v.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| TransitionError::InvalidEasing(trimmed.to_string()))?;
            let &[x1, y1, x2, y2] = values.as_slice() else {
                return Err(TransitionError::InvalidEasing(trimmed.to_string()));
            };
            return Self::cubic_bezier(x1, y1, x2, y2);
        }

        if let Some(args) = function_args(&normalized, "steps") {
            let mut parts = args.split(',').map(str::trim);
            let count = parts
                .next()
                .and_then(|c| c.parse::<u32>().ok())
                .ok_or_else(|| TransitionError::InvalidEasing(trimmed.to_string()))?;
            let position = match parts.next() {
                None | Some("end") | Some("jump_end") => StepPosition::End,
                Some("start") | Some("jump_start") => StepPosition::Start,
                Some("jump_both") => StepPosition::Both,
                Some("jump_none") => StepPosition::None,
                Some(_) => return Err(TransitionError::InvalidEasing(trimmed.to_string())),
            };
            return Self::steps(count, position);
        }

        Self::from_name(&normalized)
            .ok_or_else(|| TransitionError::UnknownEasing(trimmed.to_string()))
    }
}

fn function_args<'a>(normalized: &'a str, name: &str) -> Option<&'a str> {
    normalized
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn bounce_out(t: f64) -> f64 {
    const A: f64 = 4.0 / 11.0;
    const B: f64 = 8.0 / 11.0;
    const C: f64 = 9.0 / 10.0;
    const CA: f64 = 4356.0 / 361.0;
    const CB: f64 = 35442.0 / 1805.0;
    const CC: f64 = 16061.0 / 1805.0;

    let t2 = t * t;
    if t < A {
        7.5625 * t2
    } else if t < B {
        9.075 * t2 - 9.9 * t + 3.4
    } else if t < C {
        CA * t2 - CB * t + CC
    } else {
        10.8 * t * t - 20.52 * t + 10.72
    }
}

/// Evaluate a cubic bezier curve at time t.
///
/// Newton-Raphson finds the curve parameter for the input progress, then the
/// y coordinate is evaluated at that parameter.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, progress: f64) -> f64 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_bezier_x(x1, x2, progress);
    bezier_y(y1, y2, t)
}

fn solve_bezier_x(x1: f64, x2: f64, target_x: f64) -> f64 {
    let mut t = target_x;

    for _ in 0..8 {
        let x = bezier_x(x1, x2, t) - target_x;
        if x.abs() < 1e-7 {
            break;
        }

        let dx = bezier_x_derivative(x1, x2, t);
        if dx.abs() < 1e-7 {
            break;
        }

        t -= x / dx;
        t = t.clamp(0.0, 1.0);
    }

    t
}

/// x(t) = 3(1-t)²t·x1 + 3(1-t)t²·x2 + t³
#[inline]
fn bezier_x(x1: f64, x2: f64, t: f64) -> f64 {
    let t2 = t * t;
    let mt = 1.0 - t;
    3.0 * mt * mt * t * x1 + 3.0 * mt * t2 * x2 + t2 * t
}

#[inline]
fn bezier_y(y1: f64, y2: f64, t: f64) -> f64 {
    let t2 = t * t;
    let mt = 1.0 - t;
    3.0 * mt * mt * t * y1 + 3.0 * mt * t2 * y2 + t2 * t
}

/// dx/dt = 3(1-t)²·x1 + 6(1-t)t·(x2-x1) + 3t²·(1-x2)
#[inline]
fn bezier_x_derivative(x1: f64, x2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

fn stepped(steps: u32, position: StepPosition, t: f64) -> f64 {
    if steps == 0 {
        return t;
    }

    let steps_f = f64::from(steps);

    match position {
        StepPosition::Start => (t * steps_f).ceil() / steps_f,
        StepPosition::End => (t * steps_f).floor() / steps_f,
        StepPosition::Both => ((t * (steps_f + 1.0)).floor() / steps_f).min(1.0),
        StepPosition::None => {
            if steps == 1 {
                0.5
            } else {
                ((t * steps_f).floor() / (steps_f - 1.0)).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL_NAMED: &[EasingFunction] = &[
        EasingFunction::Linear,
        EasingFunction::Ease,
        EasingFunction::EaseIn,
        EasingFunction::EaseOut,
        EasingFunction::EaseInOut,
        EasingFunction::QuadIn,
        EasingFunction::QuadOut,
        EasingFunction::QuadInOut,
        EasingFunction::CubicIn,
        EasingFunction::CubicOut,
        EasingFunction::CubicInOut,
        EasingFunction::QuartIn,
        EasingFunction::QuartOut,
        EasingFunction::QuartInOut,
        EasingFunction::QuintIn,
        EasingFunction::QuintOut,
        EasingFunction::QuintInOut,
        EasingFunction::SineIn,
        EasingFunction::SineOut,
        EasingFunction::SineInOut,
        EasingFunction::ExpoIn,
        EasingFunction::ExpoOut,
        EasingFunction::ExpoInOut,
        EasingFunction::CircIn,
        EasingFunction::CircOut,
        EasingFunction::CircInOut,
        EasingFunction::BackOut,
        EasingFunction::ElasticOut,
        EasingFunction::BounceOut,
    ];

    #[test]
    fn test_endpoints_for_every_named_curve() {
        for easing in ALL_NAMED {
            assert!(
                approx_eq(easing.evaluate(0.0), 0.0),
                "{:?} should start at 0, got {}",
                easing,
                easing.evaluate(0.0)
            );
            assert!(
                approx_eq(easing.evaluate(1.0), 1.0),
                "{:?} should end at 1, got {}",
                easing,
                easing.evaluate(1.0)
            );
        }
    }

    #[test]
    fn test_cubic_family() {
        assert!(approx_eq(EasingFunction::CubicIn.evaluate(0.5), 0.125));
        assert!(approx_eq(EasingFunction::CubicOut.evaluate(0.5), 0.875));
        assert!(approx_eq(EasingFunction::CubicInOut.evaluate(0.5), 0.5));

        let early = EasingFunction::CubicInOut.evaluate(0.25);
        let late = EasingFunction::CubicInOut.evaluate(0.75);
        assert!(approx_eq(early + late, 1.0));
    }

    #[test]
    fn test_in_out_symmetry() {
        for easing in [
            EasingFunction::QuadInOut,
            EasingFunction::QuartInOut,
            EasingFunction::QuintInOut,
            EasingFunction::SineInOut,
            EasingFunction::CircInOut,
            EasingFunction::ExpoInOut,
        ] {
            let early = easing.evaluate(0.2);
            let late = easing.evaluate(0.8);
            assert!(approx_eq(early + late, 1.0), "{:?} is not symmetric", easing);
        }
    }

    #[test]
    fn test_css_ease_shape() {
        let ease = EasingFunction::Ease;
        let mid = ease.evaluate(0.5);
        assert!(mid > 0.7 && mid < 0.9, "CSS ease mid-point should be ~0.8, got {}", mid);
        assert!(ease.evaluate(0.25) < mid);
        assert!(mid < ease.evaluate(0.75));
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| EasingFunction::BackOut.evaluate(f64::from(i) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_steps_end() {
        let ease = EasingFunction::steps(4, StepPosition::End).unwrap();

        assert!(approx_eq(ease.evaluate(0.24), 0.0));
        assert!(approx_eq(ease.evaluate(0.25), 0.25));
        assert!(approx_eq(ease.evaluate(0.74), 0.5));
        assert!(approx_eq(ease.evaluate(0.99), 0.75));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));
    }

    #[test]
    fn test_clamping() {
        let ease = EasingFunction::CubicOut;
        assert!(approx_eq(ease.evaluate(-0.5), 0.0));
        assert!(approx_eq(ease.evaluate(1.5), 1.0));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("cubic-out".parse::<EasingFunction>(), Ok(EasingFunction::CubicOut));
        assert_eq!("cubic_in_out".parse::<EasingFunction>(), Ok(EasingFunction::CubicInOut));
        assert_eq!(" Linear ".parse::<EasingFunction>(), Ok(EasingFunction::Linear));
        assert_eq!("ease-in-out".parse::<EasingFunction>(), Ok(EasingFunction::EaseInOut));
        assert_eq!(
            "wobble".parse::<EasingFunction>(),
            Err(TransitionError::UnknownEasing("wobble".to_string()))
        );
    }

    #[test]
    fn test_parse_css_functions() {
        assert_eq!(
            "cubic-bezier(0.4, 0, 0.2, 1)".parse::<EasingFunction>(),
            Ok(EasingFunction::CubicBezier {
                x1: 0.4,
                y1: 0.0,
                x2: 0.2,
                y2: 1.0
            })
        );
        assert_eq!(
            "steps(3, start)".parse::<EasingFunction>(),
            Ok(EasingFunction::Steps {
                count: 3,
                position: StepPosition::Start
            })
        );
        assert!(matches!(
            "cubic-bezier(1.5, 0, 0.2, 1)".parse::<EasingFunction>(),
            Err(TransitionError::InvalidEasing(_))
        ));
        assert!(matches!(
            "cubic-bezier(0.1, 0)".parse::<EasingFunction>(),
            Err(TransitionError::InvalidEasing(_))
        ));
        assert!(matches!(
            "steps(0)".parse::<EasingFunction>(),
            Err(TransitionError::InvalidEasing(_))
        ));
    }

    #[test]
    fn test_default() {
        assert_eq!(EasingFunction::default(), EasingFunction::Ease);
        assert_eq!(StepPosition::default(), StepPosition::End);
    }
}
