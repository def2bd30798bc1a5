//! Enter/leave transitions for rendered element trees.
//!
//! This crate provides:
//! - **Single-element transitions**: `fade`, `blur`, `fly`, `slide`, `scale`
//!   and `draw`, each turning one measured element into a descriptor
//! - **Crossfade**: keyed pairing of a leaving element with its entering
//!   counterpart, animated as one blended move between the two
//! - **Easing functions**: the CSS timing functions plus the usual
//!   polynomial, trigonometric and spring-like curves
//!
//! # Architecture
//!
//! ```text
//! host runtime (owns the clock, applies styles)
//!   │ request / resolve
//!   ▼
//! Crossfade session ──► registries (outgoing, incoming)
//!   │ counterpart found          │ no counterpart
//!   ▼                            ▼
//! correlate + blend          Fallback (e.g. fade)
//!   │                            │
//!   └──────► TransitionDescriptor ◄┘
//!              └── style_at(t, u) -> StyleDeclaration
//! ```
//!
//! Nothing here owns a clock or touches layout. Elements are read through
//! the [`Measure`] trait once, when a descriptor is built, and the
//! descriptor renders styles as a pure function of eased progress.

pub mod crossfade;
pub mod descriptor;
pub mod easing;
pub mod error;
pub mod interpolate;
pub mod measure;
pub mod params;
pub mod style;
pub mod transform;
pub mod transitions;
pub mod types;

pub use crossfade::{
    Blend, Crossfade, CrossfadeHandle, CrossfadeSnapshot, Fallback, GeometricDelta,
    PendingTransition, blend,
};
pub use descriptor::{StyleRenderer, TransitionDescriptor, TransitionStyle};
pub use easing::{EasingFunction, StepPosition};
pub use error::{Result, TransitionError};
pub use interpolate::Interpolate;
pub use measure::{Measure, MeasuredElement};
pub use params::{
    Axis, BlurParams, CrossfadeParams, DrawParams, FadeParams, FlyParams, ScaleParams,
    SlideParams, Timing, TransitionDuration,
};
pub use style::{CssLength, StyleDeclaration};
pub use transform::Transform2D;
pub use transitions::{blur, draw, fade, fly, scale, slide};
pub use types::{ComputedStyle, Direction, EdgeInsets, LineCap, Rect};
