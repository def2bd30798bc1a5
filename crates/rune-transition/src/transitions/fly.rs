//! Translate in from an offset while fading.

use super::faded_opacity;
use crate::descriptor::{StyleRenderer, TransitionDescriptor, TransitionStyle};
use crate::error::Result;
use crate::measure::Measure;
use crate::params::FlyParams;
use crate::style::{CssLength, StyleDeclaration, compose};

/// Style captured at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FlySnapshot {
    pub opacity: f64,
    pub hidden_opacity: f64,
    /// The element's own transform, empty for `transform: none`.
    pub transform: String,
    pub x: CssLength,
    pub y: CssLength,
}

impl StyleRenderer for FlySnapshot {
    fn render(&self, t: f64, u: f64) -> StyleDeclaration {
        let offset = 1.0 - t;
        let translate = format!(
            "translate({}, {})",
            self.x.scaled_css(offset),
            self.y.scaled_css(offset)
        );

        StyleDeclaration::new()
            .with("transform", compose(&self.transform, &translate))
            .with(
                "opacity",
                faded_opacity(self.opacity, self.hidden_opacity, u).to_string(),
            )
    }
}

/// Move an element from `(params.x, params.y)` to its resting position.
pub fn fly<E: Measure>(element: &E, params: &FlyParams) -> Result<TransitionDescriptor> {
    params.validate()?;
    let style = element.computed_style();

    Ok(TransitionDescriptor {
        delay_ms: params.timing.delay_ms,
        duration_ms: params.timing.duration_ms(),
        easing: params.timing.easing,
        style: TransitionStyle::Fly(FlySnapshot {
            opacity: style.opacity,
            hidden_opacity: params.opacity,
            transform: style.transform_css(),
            x: params.x.clone(),
            y: params.y.clone(),
        }),
    })
}
