//! Opacity fade.

use crate::descriptor::{StyleRenderer, TransitionDescriptor, TransitionStyle};
use crate::error::Result;
use crate::measure::Measure;
use crate::params::FadeParams;
use crate::style::StyleDeclaration;

/// Natural opacity captured at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSnapshot {
    pub opacity: f64,
}

impl StyleRenderer for FadeSnapshot {
    fn render(&self, t: f64, _u: f64) -> StyleDeclaration {
        StyleDeclaration::new().with("opacity", (t * self.opacity).to_string())
    }
}

/// Fade an element between transparent and its natural opacity.
pub fn fade<E: Measure>(element: &E, params: &FadeParams) -> Result<TransitionDescriptor> {
    params.validate()?;
    let style = element.computed_style();

    Ok(TransitionDescriptor {
        delay_ms: params.timing.delay_ms,
        duration_ms: params.timing.duration_ms(),
        easing: params.timing.easing,
        style: TransitionStyle::Fade(FadeSnapshot {
            opacity: style.opacity,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingFunction;
    use crate::error::TransitionError;
    use crate::measure::MeasuredElement;
    use crate::params::Timing;
    use crate::types::Rect;

    #[test]
    fn test_fade_scales_natural_opacity() {
        let element = MeasuredElement::new(Rect::default()).with_opacity(0.5);
        let descriptor = fade(&element, &FadeParams::default()).unwrap();

        assert_eq!(descriptor.style_at(0.5, 0.5).get("opacity"), Some("0.25"));
        assert_eq!(descriptor.style_at(1.0, 0.0).get("opacity"), Some("0.5"));
        assert_eq!(descriptor.style_at(0.0, 1.0).get("opacity"), Some("0"));
    }

    #[test]
    fn test_fade_timing_comes_from_params() {
        let params = FadeParams {
            timing: Timing::new(EasingFunction::QuadIn)
                .with_delay(20.0)
                .with_duration(120.0),
        };
        let descriptor = fade(&MeasuredElement::default(), &params).unwrap();

        assert_eq!(descriptor.delay_ms, 20.0);
        assert_eq!(descriptor.duration_ms, 120.0);
        assert_eq!(descriptor.easing, EasingFunction::QuadIn);
    }

    #[test]
    fn test_fade_rejects_negative_duration() {
        let params = FadeParams {
            timing: Timing::new(EasingFunction::Linear).with_duration(-1.0),
        };
        assert_eq!(
            fade(&MeasuredElement::default(), &params),
            Err(TransitionError::NegativeTiming {
                field: "duration_ms",
                value: -1.0
            })
        );
    }
}
