//! Uniform scale with an opacity fade.

use super::faded_opacity;
use crate::descriptor::{StyleRenderer, TransitionDescriptor, TransitionStyle};
use crate::error::Result;
use crate::interpolate::lerp;
use crate::measure::Measure;
use crate::params::ScaleParams;
use crate::style::{StyleDeclaration, compose};

/// Style captured at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSnapshot {
    pub opacity: f64,
    pub hidden_opacity: f64,
    pub transform: String,
    /// Scale factor at the hidden end.
    pub start: f64,
}

impl StyleRenderer for ScaleSnapshot {
    fn render(&self, _t: f64, u: f64) -> StyleDeclaration {
        let scale = format!("scale({})", lerp(1.0, self.start, u));

        StyleDeclaration::new()
            .with("transform", compose(&self.transform, &scale))
            .with(
                "opacity",
                faded_opacity(self.opacity, self.hidden_opacity, u).to_string(),
            )
    }
}

/// Grow an element from `params.start` to its natural size.
pub fn scale<E: Measure>(element: &E, params: &ScaleParams) -> Result<TransitionDescriptor> {
    params.validate()?;
    let style = element.computed_style();

    Ok(TransitionDescriptor {
        delay_ms: params.timing.delay_ms,
        duration_ms: params.timing.duration_ms(),
        easing: params.timing.easing,
        style: TransitionStyle::Scale(ScaleSnapshot {
            opacity: style.opacity,
            hidden_opacity: params.opacity,
            transform: style.transform_css(),
            start: params.start,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasuredElement;
    use crate::types::Rect;

    #[test]
    fn test_scale_from_start() {
        let params = ScaleParams {
            start: 0.5,
            ..Default::default()
        };
        let descriptor = scale(&MeasuredElement::new(Rect::default()), &params).unwrap();

        assert_eq!(descriptor.style_at(0.0, 1.0).get("transform"), Some("scale(0.5)"));
        assert_eq!(descriptor.style_at(0.5, 0.5).get("transform"), Some("scale(0.75)"));
        assert_eq!(descriptor.style_at(1.0, 0.0).get("transform"), Some("scale(1)"));
        assert_eq!(descriptor.style_at(1.0, 0.0).get("opacity"), Some("1"));
    }
}
