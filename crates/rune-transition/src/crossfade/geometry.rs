//! Geometric correlation of a crossfade pair.

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::types::Rect;

/// Offset and size ratio from one element's box to another's.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometricDelta {
    pub dx: f64,
    pub dy: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Euclidean length of `(dx, dy)`.
    pub distance: f64,
}

impl GeometricDelta {
    /// Delta that moves and scales `to` onto `from`.
    ///
    /// Zero-sized `to` boxes yield infinite or NaN ratios, which pass through
    /// unchanged.
    pub fn between(from: Rect, to: Rect) -> Self {
        let dx = from.left - to.left;
        let dy = from.top - to.top;
        Self {
            dx,
            dy,
            scale_x: from.width / to.width,
            scale_y: from.height / to.height,
            distance: (dx * dx + dy * dy).sqrt(),
        }
    }
}

/// Everything a paired descriptor needs, measured in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    pub delta: GeometricDelta,
    /// The animated element's own transform, empty when absent.
    pub transform: String,
    pub opacity: f64,
    pub counterpart_opacity: f64,
}

/// Measure `element` and its `counterpart` together.
///
/// Must run when the pair is claimed, not when either side registered: the
/// side that registered first may already be out of layout flow by then.
pub fn correlate<E: Measure>(counterpart: &E, element: &E) -> Correlation {
    let from = counterpart.bounding_rect();
    let to = element.bounding_rect();
    let style = element.computed_style();

    Correlation {
        delta: GeometricDelta::between(from, to),
        transform: style.transform_css(),
        opacity: style.opacity,
        counterpart_opacity: counterpart.computed_style().opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasuredElement;
    use crate::transform::Transform2D;
    use crate::types::ComputedStyle;

    #[test]
    fn test_delta_between_boxes() {
        let from = Rect::new(0.0, 0.0, 100.0, 100.0);
        let to = Rect::new(50.0, 20.0, 50.0, 200.0);
        let delta = GeometricDelta::between(from, to);

        assert_eq!(delta.dx, -50.0);
        assert_eq!(delta.dy, -20.0);
        assert_eq!(delta.scale_x, 2.0);
        assert_eq!(delta.scale_y, 0.5);
        assert_eq!(delta.distance, (50.0_f64.powi(2) + 20.0_f64.powi(2)).sqrt());
    }

    #[test]
    fn test_identical_boxes() {
        let rect = Rect::new(10.0, 10.0, 40.0, 40.0);
        let delta = GeometricDelta::between(rect, rect);
        assert_eq!(delta.distance, 0.0);
        assert_eq!((delta.scale_x, delta.scale_y), (1.0, 1.0));
    }

    #[test]
    fn test_zero_sized_target_is_not_an_error() {
        let delta = GeometricDelta::between(
            Rect::new(0.0, 0.0, 10.0, 0.0),
            Rect::new(0.0, 0.0, 0.0, 0.0),
        );
        assert!(delta.scale_x.is_infinite());
        assert!(delta.scale_y.is_nan());
    }

    #[test]
    fn test_correlate_reads_both_sides() {
        let counterpart = MeasuredElement::new(Rect::new(0.0, 0.0, 20.0, 20.0)).with_opacity(0.4);
        let element = MeasuredElement::new(Rect::new(30.0, 40.0, 10.0, 10.0)).with_style(
            ComputedStyle {
                opacity: 0.9,
                transform: Some(Transform2D::rotate(0.0)),
                ..Default::default()
            },
        );

        let correlation = correlate(&counterpart, &element);
        assert_eq!(correlation.delta.distance, 50.0);
        assert_eq!(correlation.delta.scale_x, 2.0);
        assert_eq!(correlation.opacity, 0.9);
        assert_eq!(correlation.counterpart_opacity, 0.4);
        // A zero rotation is the identity and renders as no prefix.
        assert_eq!(correlation.transform, "");
    }
}
