//! Parameter structures for every transition kind.
//!
//! Each transition takes one params struct whose fields all carry defaults.
//! The common timing fields live in [`Timing`]; the shape-specific fields sit
//! next to it. Params are validated once, when a transition is built.
//!
//! # Example
//!
//! ```
//! use rune_transition::easing::EasingFunction;
//! use rune_transition::params::{FlyParams, TransitionDuration};
//!
//! let params = FlyParams {
//!     y: "-20px".parse().unwrap(),
//!     ..Default::default()
//! };
//! assert_eq!(params.timing.duration, 400.0);
//! assert_eq!(params.timing.easing, EasingFunction::CubicOut);
//!
//! assert_eq!(TransitionDuration::default().resolve(900.0), 900.0);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rune_config::{
    BlurConfig, CrossfadeConfig, DrawConfig, FlyConfig, MotionConfig, ScaleConfig, SlideConfig,
    TimingConfig,
};

use crate::easing::EasingFunction;
use crate::error::{Result, TransitionError};
use crate::style::CssLength;

/// Default duration of every fixed-duration transition, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 400.0;

/// Default factor of the crossfade's `sqrt(distance) * factor` duration.
pub const DEFAULT_DISTANCE_FACTOR: f64 = 30.0;

/// Duration of `draw` when neither a duration nor a speed is given.
pub const DEFAULT_DRAW_DURATION_MS: f64 = 800.0;

/// Function from a measured distance (pixels, or path length for `draw`) to
/// a duration in milliseconds.
#[derive(Clone)]
pub struct DistanceCurve(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl DistanceCurve {
    /// `sqrt(distance) * factor`.
    pub fn sqrt_scaled(factor: f64) -> Self {
        Self::from_fn(move |distance| distance.sqrt() * factor)
    }

    pub fn from_fn(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn evaluate(&self, distance: f64) -> f64 {
        (self.0)(distance)
    }
}

impl Default for DistanceCurve {
    fn default() -> Self {
        Self::sqrt_scaled(DEFAULT_DISTANCE_FACTOR)
    }
}

impl fmt::Debug for DistanceCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DistanceCurve(..)")
    }
}

/// Duration that is either fixed or derived from a distance at invocation.
#[derive(Debug, Clone)]
pub enum TransitionDuration {
    Fixed(f64),
    DistanceDerived(DistanceCurve),
}

impl TransitionDuration {
    /// Resolve to milliseconds for the given distance. Negative or NaN
    /// results from a custom curve collapse to zero.
    pub fn resolve(&self, distance: f64) -> f64 {
        let ms = match self {
            Self::Fixed(ms) => *ms,
            Self::DistanceDerived(curve) => curve.evaluate(distance),
        };
        ms.max(0.0)
    }

    /// Derive the duration from distance with a custom function.
    pub fn from_fn(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::DistanceDerived(DistanceCurve::from_fn(f))
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self::DistanceDerived(DistanceCurve::default())
    }
}

impl From<f64> for TransitionDuration {
    fn from(ms: f64) -> Self {
        Self::Fixed(ms)
    }
}

/// Duration representations accepted by [`Timing`].
pub trait DurationSpec {
    fn validate(&self) -> Result<()>;
}

impl DurationSpec for f64 {
    fn validate(&self) -> Result<()> {
        check_timing("duration_ms", *self)
    }
}

impl DurationSpec for TransitionDuration {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Fixed(ms) => check_timing("duration_ms", *ms),
            Self::DistanceDerived(_) => Ok(()),
        }
    }
}

impl DurationSpec for Option<TransitionDuration> {
    fn validate(&self) -> Result<()> {
        self.as_ref().map_or(Ok(()), |duration| duration.validate())
    }
}

/// Timing fields shared by every transition.
///
/// `D` is the duration representation: milliseconds for fixed-length
/// transitions, [`TransitionDuration`] for the crossfade, and an optional one
/// for `draw`, which can fall back to its speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing<D = f64> {
    pub delay_ms: f64,
    pub duration: D,
    pub easing: EasingFunction,
}

impl Timing {
    pub fn new(easing: EasingFunction) -> Self {
        Self {
            delay_ms: 0.0,
            duration: DEFAULT_DURATION_MS,
            easing,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration
    }
}

impl<D: DurationSpec> Timing<D> {
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_duration(mut self, duration: impl Into<D>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_timing("delay_ms", self.delay_ms)?;
        self.duration.validate()
    }

    /// Overlay the delay and easing of a config section. The duration is
    /// applied by the caller, which knows how `D` is built.
    fn apply_common(&mut self, config: &TimingConfig) -> Result<()> {
        if let Some(delay) = config.delay_ms {
            self.delay_ms = delay;
        }
        if let Some(easing) = &config.easing {
            self.easing = easing.parse()?;
        }
        Ok(())
    }
}

impl Timing {
    fn apply_config(&mut self, config: &TimingConfig) -> Result<()> {
        self.apply_common(config)?;
        if let Some(duration) = config.duration_ms {
            self.duration = duration;
        }
        Ok(())
    }
}

fn check_timing(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TransitionError::NegativeTiming { field, value })
    }
}

fn check_opacity(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TransitionError::OpacityOutOfRange { field, value })
    }
}

fn parse_length(value: &Option<String>) -> Result<Option<CssLength>> {
    value.as_deref().map(str::parse).transpose()
}

/// Parameters for `fade`.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeParams {
    pub timing: Timing,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            timing: Timing::new(EasingFunction::Linear),
        }
    }
}

impl FadeParams {
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()
    }

    pub fn from_config(config: &MotionConfig) -> Result<Self> {
        let mut params = Self::default();
        params.timing.apply_config(&config.fade)?;
        params.validate()?;
        Ok(params)
    }
}

/// Parameters for `blur`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurParams {
    pub timing: Timing,
    /// Blur radius at the hidden end.
    pub amount: CssLength,
    /// Opacity at the hidden end.
    pub opacity: f64,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            timing: Timing::new(EasingFunction::CubicInOut),
            amount: CssLength::px(5.0),
            opacity: 0.0,
        }
    }
}

impl BlurParams {
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()?;
        check_opacity("opacity", self.opacity)
    }

    pub fn from_config(config: &MotionConfig) -> Result<Self> {
        let BlurConfig {
            timing,
            amount,
            opacity,
        } = &config.blur;
        let mut params = Self::default();
        params.timing.apply_config(timing)?;
        if let Some(amount) = parse_length(amount)? {
            params.amount = amount;
        }
        if let Some(opacity) = opacity {
            params.opacity = *opacity;
        }
        params.validate()?;
        Ok(params)
    }
}

/// Parameters for `fly`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyParams {
    pub timing: Timing,
    /// Horizontal offset at the hidden end.
    pub x: CssLength,
    /// Vertical offset at the hidden end.
    pub y: CssLength,
    /// Opacity at the hidden end.
    pub opacity: f64,
}

impl Default for FlyParams {
    fn default() -> Self {
        Self {
            timing: Timing::new(EasingFunction::CubicOut),
            x: CssLength::default(),
            y: CssLength::default(),
            opacity: 0.0,
        }
    }
}

impl FlyParams {
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()?;
        check_opacity("opacity", self.opacity)
    }

    pub fn from_config(config: &MotionConfig) -> Result<Self> {
        let FlyConfig {
            timing,
            x,
            y,
            opacity,
        } = &config.fly;
        let mut params = Self::default();
        params.timing.apply_config(timing)?;
        if let Some(x) = parse_length(x)? {
            params.x = x;
        }
        if let Some(y) = parse_length(y)? {
            params.y = y;
        }
        if let Some(opacity) = opacity {
            params.opacity = *opacity;
        }
        params.validate()?;
        Ok(params)
    }
}

/// Axis along which `slide` collapses an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
}

impl FromStr for Axis {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            other => Err(TransitionError::InvalidAxis(other.to_string())),
        }
    }
}

/// Parameters for `slide`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideParams {
    pub timing: Timing,
    pub axis: Axis,
}

impl Default for SlideParams {
    fn default() -> Self {
        Self {
            timing: Timing::new(EasingFunction::CubicOut),
            axis: Axis::Y,
        }
    }
}

impl SlideParams {
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()
    }

    pub fn from_config(config: &MotionConfig) -> Result<Self> {
        let SlideConfig { timing, axis } = &config.slide;
        let mut params = Self::default();
        params.timing.apply_config(timing)?;
        if let Some(axis) = axis {
            params.axis = axis.parse()?;
        }
        params.validate()?;
        Ok(params)
    }
}

/// Parameters for `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleParams {
    pub timing: Timing,
    /// Scale factor at the hidden end.
    pub start: f64,
    /// Opacity at the hidden end.
    pub opacity: f64,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            timing: Timing::new(EasingFunction::CubicOut),
            start: 0.0,
            opacity: 0.0,
        }
    }
}

impl ScaleParams {
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()?;
        check_opacity("opacity", self.opacity)
    }

    pub fn from_config(config: &MotionConfig) -> Result<Self> {
        let ScaleConfig {
            timing,
            start,
            opacity,
        } = &config.scale;
        let mut params = Self::default();
        params.timing.apply_config(timing)?;
        if let Some(start) = start {
            params.start = *start;
        }
        if let Some(opacity) = opacity {
            params.opacity = *opacity;
        }
        params.validate()?;
        Ok(params)
    }
}

/// Parameters for `draw`.
///
/// Duration resolution order: an explicit duration (fixed, or a function of
/// the path length), then `path length / speed`, then 800 ms.
#[derive(Debug, Clone)]
pub struct DrawParams {
    pub timing: Timing<Option<TransitionDuration>>,
    /// Path length drawn per millisecond.
    pub speed: Option<f64>,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            timing: Timing {
                delay_ms: 0.0,
                duration: None,
                easing: EasingFunction::CubicInOut,
            },
            speed: None,
        }
    }
}

impl DrawParams {
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()?;
        match self.speed {
            Some(speed) if !(speed > 0.0 && speed.is_finite()) => {
                Err(TransitionError::NonPositiveSpeed(speed))
            }
            _ => Ok(()),
        }
    }

    /// Duration in milliseconds for a path of length `length`.
    pub fn resolve_duration(&self, length: f64) -> f64 {
        match (&self.timing.duration, self.speed) {
            (Some(duration), _) => duration.resolve(length),
            (None, Some(speed)) => length / speed,
            (None, None) => DEFAULT_DRAW_DURATION_MS,
        }
    }

    pub fn from_config(config: &MotionConfig) -> Result<Self> {
        let DrawConfig { timing, speed } = &config.draw;
        let mut params = Self::default();
        params.timing.apply_common(timing)?;
        if let Some(duration) = timing.duration_ms {
            params.timing.duration = Some(TransitionDuration::Fixed(duration));
        }
        if speed.is_some() {
            params.speed = *speed;
        }
        params.validate()?;
        Ok(params)
    }
}

/// Parameters for a crossfade pair.
///
/// The duration defaults to `sqrt(distance) * 30`, where distance is how far
/// the element travels to its counterpart.
#[derive(Debug, Clone)]
pub struct CrossfadeParams {
    pub timing: Timing<TransitionDuration>,
}

impl Default for CrossfadeParams {
    fn default() -> Self {
        Self {
            timing: Timing {
                delay_ms: 0.0,
                duration: TransitionDuration::default(),
                easing: EasingFunction::CubicOut,
            },
        }
    }
}

impl CrossfadeParams {
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.timing.delay_ms = delay_ms;
        self
    }

    pub fn with_duration(mut self, duration: impl Into<TransitionDuration>) -> Self {
        self.timing.duration = duration.into();
        self
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.timing.easing = easing;
        self
    }

    pub fn from_config(config: &MotionConfig) -> Result<Self> {
        let CrossfadeConfig {
            timing,
            distance_factor,
        } = &config.crossfade;
        let mut params = Self::default();
        params.timing.apply_common(timing)?;
        params.timing.duration = match (timing.duration_ms, distance_factor) {
            (Some(ms), _) => TransitionDuration::Fixed(ms),
            (None, Some(factor)) => {
                check_timing("distance_factor", *factor)?;
                TransitionDuration::DistanceDerived(DistanceCurve::sqrt_scaled(*factor))
            }
            (None, None) => TransitionDuration::default(),
        };
        params.validate()?;
        Ok(params)
    }
}
