//! SVG stroke drawing.

use crate::descriptor::{StyleRenderer, TransitionDescriptor, TransitionStyle};
use crate::error::{Result, TransitionError};
use crate::measure::Measure;
use crate::params::DrawParams;
use crate::style::StyleDeclaration;
use crate::types::LineCap;

/// Visible stroke length captured at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSnapshot {
    pub length: f64,
}

impl StyleRenderer for DrawSnapshot {
    fn render(&self, _t: f64, u: f64) -> StyleDeclaration {
        StyleDeclaration::new()
            .with("stroke-dasharray", self.length.to_string())
            .with("stroke-dashoffset", (u * self.length).to_string())
    }
}

/// Draw an SVG shape's stroke from start to end.
///
/// Round and square caps extend past the path ends by half the stroke width
/// each, so the stroke width is added to the path length for them.
pub fn draw<E: Measure>(element: &E, params: &DrawParams) -> Result<TransitionDescriptor> {
    params.validate()?;
    let path_length = element
        .path_length()
        .ok_or(TransitionError::MissingPathLength)?;
    let style = element.computed_style();

    let length = match style.stroke_linecap {
        LineCap::Butt => path_length,
        LineCap::Round | LineCap::Square => path_length + style.stroke_width,
    };

    Ok(TransitionDescriptor {
        delay_ms: params.timing.delay_ms,
        duration_ms: params.resolve_duration(length),
        easing: params.timing.easing,
        style: TransitionStyle::Draw(DrawSnapshot { length }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasuredElement;
    use crate::types::{ComputedStyle, Rect};

    #[test]
    fn test_draw_dash_offset() {
        let element = MeasuredElement::new(Rect::default()).with_path_length(120.0);
        let descriptor = draw(&element, &DrawParams::default()).unwrap();

        assert_eq!(descriptor.duration_ms, 800.0);
        assert_eq!(
            descriptor.css_at(0.25),
            "stroke-dasharray: 120; stroke-dashoffset: 90;"
        );
        assert_eq!(descriptor.style_at(1.0, 0.0).get("stroke-dashoffset"), Some("0"));
    }

    #[test]
    fn test_round_caps_extend_length() {
        let element = MeasuredElement::new(Rect::default())
            .with_path_length(100.0)
            .with_style(ComputedStyle {
                stroke_width: 4.0,
                stroke_linecap: LineCap::Round,
                ..Default::default()
            });
        let params = DrawParams {
            speed: Some(2.0),
            ..Default::default()
        };
        let descriptor = draw(&element, &params).unwrap();

        assert_eq!(descriptor.style_at(0.0, 1.0).get("stroke-dasharray"), Some("104"));
        assert_eq!(descriptor.duration_ms, 52.0);
    }

    #[test]
    fn test_draw_requires_path() {
        let element = MeasuredElement::new(Rect::default());
        assert_eq!(
            draw(&element, &DrawParams::default()),
            Err(TransitionError::MissingPathLength)
        );
    }
}
