//! Blur with an opacity fade.

use super::faded_opacity;
use crate::descriptor::{StyleRenderer, TransitionDescriptor, TransitionStyle};
use crate::error::Result;
use crate::measure::Measure;
use crate::params::BlurParams;
use crate::style::{CssLength, StyleDeclaration, compose};

/// Style captured at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurSnapshot {
    /// Natural opacity.
    pub opacity: f64,
    /// Fraction of the natural opacity kept at the hidden end.
    pub hidden_opacity: f64,
    /// The element's own filter, empty for `filter: none`.
    pub filter: String,
    pub amount: CssLength,
}

impl StyleRenderer for BlurSnapshot {
    fn render(&self, _t: f64, u: f64) -> StyleDeclaration {
        let opacity = faded_opacity(self.opacity, self.hidden_opacity, u);
        let blur = format!("blur({})", self.amount.scaled_css(u));

        StyleDeclaration::new()
            .with("opacity", opacity.to_string())
            .with("filter", compose(&self.filter, &blur))
    }
}

/// Blur an element in or out while fading it toward `params.opacity`.
pub fn blur<E: Measure>(element: &E, params: &BlurParams) -> Result<TransitionDescriptor> {
    params.validate()?;
    let style = element.computed_style();

    Ok(TransitionDescriptor {
        delay_ms: params.timing.delay_ms,
        duration_ms: params.timing.duration_ms(),
        easing: params.timing.easing,
        style: TransitionStyle::Blur(BlurSnapshot {
            opacity: style.opacity,
            hidden_opacity: params.opacity,
            filter: style.filter_css().to_string(),
            amount: params.amount.clone(),
        }),
    })
}
