//! The transition descriptor handed to the animation host.
//!
//! A descriptor bundles timing (delay, duration, easing) with an immutable
//! style snapshot captured when the transition was built. The host owns the
//! clock: each frame it computes eased progress `t` and asks the descriptor
//! for the style at `(t, 1 - t)`.
//!
//! # Example
//!
//! ```
//! use rune_transition::{fade, Direction, FadeParams, MeasuredElement, Rect};
//!
//! let element = MeasuredElement::new(Rect::new(0.0, 0.0, 10.0, 10.0)).with_opacity(0.5);
//! let descriptor = fade(&element, &FadeParams::default()).unwrap();
//!
//! assert_eq!(descriptor.style_at(0.5, 0.5).to_css(), "opacity: 0.25;");
//! // Half-way through a 400ms intro with linear easing.
//! assert_eq!(descriptor.progress_at(200.0, Direction::Intro), 0.5);
//! ```

use crate::crossfade::CrossfadeSnapshot;
use crate::easing::EasingFunction;
use crate::style::StyleDeclaration;
use crate::transitions::{
    BlurSnapshot, DrawSnapshot, FadeSnapshot, FlySnapshot, ScaleSnapshot, SlideSnapshot,
};
use crate::types::Direction;

/// Stateless rendering of a captured snapshot at eased progress `t` with
/// complement `u = 1 - t`.
///
/// Implementations must be pure: the same `(t, u)` always yields the same
/// declaration.
pub trait StyleRenderer {
    fn render(&self, t: f64, u: f64) -> StyleDeclaration;
}

/// Snapshot of measured style, one variant per transition kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionStyle {
    Fade(FadeSnapshot),
    Blur(BlurSnapshot),
    Fly(FlySnapshot),
    Slide(SlideSnapshot),
    Scale(ScaleSnapshot),
    Draw(DrawSnapshot),
    Crossfade(CrossfadeSnapshot),
}

impl StyleRenderer for TransitionStyle {
    fn render(&self, t: f64, u: f64) -> StyleDeclaration {
        match self {
            Self::Fade(snapshot) => snapshot.render(t, u),
            Self::Blur(snapshot) => snapshot.render(t, u),
            Self::Fly(snapshot) => snapshot.render(t, u),
            Self::Slide(snapshot) => snapshot.render(t, u),
            Self::Scale(snapshot) => snapshot.render(t, u),
            Self::Draw(snapshot) => snapshot.render(t, u),
            Self::Crossfade(snapshot) => snapshot.render(t, u),
        }
    }
}

/// Delay, duration, easing and style snapshot of one element's transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDescriptor {
    /// Delay before the transition starts in milliseconds.
    pub delay_ms: f64,
    /// Duration of the transition in milliseconds.
    pub duration_ms: f64,
    /// Easing applied to linear progress.
    pub easing: EasingFunction,
    /// Measured style the renderer works from.
    pub style: TransitionStyle,
}

impl TransitionDescriptor {
    /// Style at eased progress `t` and its complement `u`.
    pub fn style_at(&self, t: f64, u: f64) -> StyleDeclaration {
        self.style.render(t, u)
    }

    /// Style at eased progress `t` as a CSS declaration string.
    pub fn css_at(&self, t: f64) -> String {
        self.style_at(t, 1.0 - t).to_css()
    }

    /// Delay plus duration.
    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Eased progress `t` after `elapsed_ms` of host time.
    ///
    /// During the delay the start value holds. Intros run 0 → 1, outros 1 → 0.
    pub fn progress_at(&self, elapsed_ms: f64, direction: Direction) -> f64 {
        let active_elapsed = (elapsed_ms - self.delay_ms).max(0.0);
        let linear = if self.duration_ms > 0.0 {
            (active_elapsed / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = self.easing.evaluate(linear);
        match direction {
            Direction::Intro => eased,
            Direction::Outro => 1.0 - eased,
        }
    }

    /// Style after `elapsed_ms` of host time.
    pub fn sample(&self, elapsed_ms: f64, direction: Direction) -> StyleDeclaration {
        let t = self.progress_at(elapsed_ms, direction);
        self.style_at(t, 1.0 - t)
    }

    /// Whether the transition has run to completion after `elapsed_ms`.
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.total_ms()
    }
}
