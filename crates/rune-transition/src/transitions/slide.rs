//! Collapse an element along one axis.
//!
//! The element's size along the axis, together with the padding, margin and
//! border widths on both sides of it, shrinks to zero. Content is clipped
//! with `overflow: hidden` and opacity ramps up over the first 5% of the
//! transition so the collapsed element never shows.

use crate::descriptor::{StyleRenderer, TransitionDescriptor, TransitionStyle};
use crate::error::Result;
use crate::interpolate::Interpolate;
use crate::measure::Measure;
use crate::params::{Axis, SlideParams};
use crate::style::StyleDeclaration;
use crate::types::EdgeInsets;

/// CSS property names for the two sides of an axis.
struct AxisProperties {
    size: &'static str,
    padding: [&'static str; 2],
    margin: [&'static str; 2],
    border: [&'static str; 2],
}

const VERTICAL: AxisProperties = AxisProperties {
    size: "height",
    padding: ["padding-top", "padding-bottom"],
    margin: ["margin-top", "margin-bottom"],
    border: ["border-top-width", "border-bottom-width"],
};

const HORIZONTAL: AxisProperties = AxisProperties {
    size: "width",
    padding: ["padding-left", "padding-right"],
    margin: ["margin-left", "margin-right"],
    border: ["border-left-width", "border-right-width"],
};

/// Style captured at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSnapshot {
    pub axis: Axis,
    pub opacity: f64,
    /// Natural width or height, depending on the axis.
    pub size: f64,
    pub padding: EdgeInsets,
    pub margin: EdgeInsets,
    pub border_width: EdgeInsets,
}

fn sides(axis: Axis, insets: EdgeInsets) -> [f64; 2] {
    match axis {
        Axis::X => [insets.left, insets.right],
        Axis::Y => [insets.top, insets.bottom],
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

impl StyleRenderer for SlideSnapshot {
    fn render(&self, t: f64, _u: f64) -> StyleDeclaration {
        let names = match self.axis {
            Axis::X => &HORIZONTAL,
            Axis::Y => &VERTICAL,
        };
        let collapsed = EdgeInsets::default();

        let mut style = StyleDeclaration::new()
            .with("overflow", "hidden")
            .with("opacity", ((t * 20.0).min(1.0) * self.opacity).to_string())
            .with(names.size, px(t * self.size));

        for (properties, natural) in [
            (names.padding, self.padding),
            (names.margin, self.margin),
            (names.border, self.border_width),
        ] {
            let values = sides(self.axis, collapsed.interpolate(&natural, t));
            for (property, value) in properties.into_iter().zip(values) {
                style.push(property, px(value));
            }
        }
        style
    }
}

/// Collapse an element to nothing along `params.axis`.
pub fn slide<E: Measure>(element: &E, params: &SlideParams) -> Result<TransitionDescriptor> {
    params.validate()?;
    let style = element.computed_style();
    let size = match params.axis {
        Axis::X => style.width,
        Axis::Y => style.height,
    };

    Ok(TransitionDescriptor {
        delay_ms: params.timing.delay_ms,
        duration_ms: params.timing.duration_ms(),
        easing: params.timing.easing,
        style: TransitionStyle::Slide(SlideSnapshot {
            axis: params.axis,
            opacity: style.opacity,
            size,
            padding: style.padding,
            margin: style.margin,
            border_width: style.border_width,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasuredElement;
    use crate::types::{ComputedStyle, Rect};

    fn boxed_element() -> MeasuredElement {
        MeasuredElement::new(Rect::new(0.0, 0.0, 200.0, 100.0)).with_style(ComputedStyle {
            width: 200.0,
            height: 100.0,
            padding: EdgeInsets {
                top: 10.0,
                right: 4.0,
                bottom: 20.0,
                left: 8.0,
            },
            margin: EdgeInsets::uniform(6.0),
            border_width: EdgeInsets::uniform(2.0),
            ..Default::default()
        })
    }

    #[test]
    fn test_vertical_slide_halfway() {
        let descriptor = slide(&boxed_element(), &SlideParams::default()).unwrap();
        let style = descriptor.style_at(0.5, 0.5);

        assert_eq!(
            style.to_css(),
            "overflow: hidden; opacity: 1; height: 50px; padding-top: 5px; \
             padding-bottom: 10px; margin-top: 3px; margin-bottom: 3px; \
             border-top-width: 1px; border-bottom-width: 1px;"
        );
    }

    #[test]
    fn test_horizontal_slide_uses_width() {
        let params = SlideParams {
            axis: Axis::X,
            ..Default::default()
        };
        let descriptor = slide(&boxed_element(), &params).unwrap();
        let style = descriptor.style_at(0.25, 0.75);

        assert_eq!(style.get("width"), Some("50px"));
        assert_eq!(style.get("padding-left"), Some("2px"));
        assert_eq!(style.get("padding-right"), Some("1px"));
        assert_eq!(style.get("height"), None);
    }

    #[test]
    fn test_opacity_ramps_early() {
        let element = boxed_element().with_opacity(0.5);
        let descriptor = slide(&element, &SlideParams::default()).unwrap();

        assert_eq!(descriptor.style_at(0.0, 1.0).get("opacity"), Some("0"));
        assert_eq!(descriptor.style_at(0.03125, 0.96875).get("opacity"), Some("0.3125"));
        assert_eq!(descriptor.style_at(0.5, 0.5).get("opacity"), Some("0.5"));
        assert_eq!(descriptor.style_at(0.0, 1.0).get("height"), Some("0px"));
    }
}
