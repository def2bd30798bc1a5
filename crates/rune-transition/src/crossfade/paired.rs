//! Style of one side of a claimed crossfade pair.

use super::blend::blend;
use super::geometry::Correlation;
use crate::descriptor::{StyleRenderer, TransitionDescriptor, TransitionStyle};
use crate::params::CrossfadeParams;
use crate::style::{StyleDeclaration, compose, unsigned_zero};
use crate::types::Direction;

/// Correlated measurements of a pair, seen from one of its elements.
///
/// The incoming element is the top layer and the outgoing element the bottom
/// layer. Both evaluate the same blend at global progress `p`: the incoming
/// side receives `t = p` and the outgoing side, running backwards, `u = p`.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossfadeSnapshot {
    /// Direction the animated element plays in.
    pub direction: Direction,
    pub correlation: Correlation,
}

impl StyleRenderer for CrossfadeSnapshot {
    fn render(&self, t: f64, u: f64) -> StyleDeclaration {
        let Correlation {
            delta,
            transform,
            opacity,
            counterpart_opacity,
        } = &self.correlation;

        let layer_opacity = match self.direction {
            Direction::Intro => blend(*opacity, *counterpart_opacity, t).to,
            Direction::Outro => blend(*counterpart_opacity, *opacity, u).from,
        };
        let animated = format!(
            "translate({}px, {}px) scale({}, {})",
            unsigned_zero(u * delta.dx),
            unsigned_zero(u * delta.dy),
            t + (1.0 - t) * delta.scale_x,
            t + (1.0 - t) * delta.scale_y
        );

        StyleDeclaration::new()
            .with("opacity", layer_opacity.to_string())
            .with("transform-origin", "top left")
            .with("transform", compose(transform, &animated))
    }
}

/// Descriptor for one side of a claimed pair. The duration is resolved here,
/// against the distance between the two boxes.
pub(crate) fn paired_descriptor(
    correlation: Correlation,
    params: &CrossfadeParams,
    direction: Direction,
) -> TransitionDescriptor {
    TransitionDescriptor {
        delay_ms: params.timing.delay_ms,
        duration_ms: params.timing.duration.resolve(correlation.delta.distance),
        easing: params.timing.easing,
        style: TransitionStyle::Crossfade(CrossfadeSnapshot {
            direction,
            correlation,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossfade::geometry::GeometricDelta;
    use crate::types::Rect;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn opacity_of(style: &StyleDeclaration) -> f64 {
        style
            .get("opacity")
            .and_then(|value| value.parse().ok())
            .unwrap_or(f64::NAN)
    }

    fn snapshot(direction: Direction, opacity: f64, counterpart_opacity: f64) -> CrossfadeSnapshot {
        CrossfadeSnapshot {
            direction,
            correlation: Correlation {
                delta: GeometricDelta::between(
                    Rect::new(0.0, 0.0, 100.0, 100.0),
                    Rect::new(50.0, 20.0, 50.0, 200.0),
                ),
                transform: String::new(),
                opacity,
                counterpart_opacity,
            },
        }
    }

    #[test]
    fn test_incoming_starts_on_counterpart() {
        let incoming = snapshot(Direction::Intro, 1.0, 1.0);

        assert_eq!(
            incoming.render(0.0, 1.0).to_css(),
            "opacity: 0; transform-origin: top left; \
             transform: translate(-50px, -20px) scale(2, 0.5);"
        );
        assert_eq!(
            incoming.render(1.0, 0.0).get("transform"),
            Some("translate(0px, 0px) scale(1, 1)")
        );
    }

    #[test]
    fn test_layers_composite_linearly() {
        let incoming = snapshot(Direction::Intro, 0.8, 0.4);
        let outgoing = snapshot(Direction::Outro, 0.4, 0.8);

        for step in 0..=10 {
            let p = step as f64 / 10.0;
            let top = opacity_of(&incoming.render(p, 1.0 - p));
            let bottom = opacity_of(&outgoing.render(1.0 - p, p));
            let apparent = top + bottom * (1.0 - top);
            assert!(approx_eq(apparent, 0.4 + 0.4 * p), "p = {p}: {apparent}");
        }
    }

    #[test]
    fn test_outgoing_rests_at_natural_opacity() {
        let outgoing = snapshot(Direction::Outro, 0.6, 1.0);
        let at_rest = outgoing.render(1.0, 0.0);
        assert!(approx_eq(opacity_of(&at_rest), 0.6));
        assert_eq!(at_rest.get("transform"), Some("translate(0px, 0px) scale(1, 1)"));
    }

    #[test]
    fn test_own_transform_prefixes_animation() {
        let mut rotated = snapshot(Direction::Intro, 1.0, 1.0);
        rotated.correlation.transform = "matrix(0, 1, -1, 0, 0, 0)".to_string();

        assert_eq!(
            rotated.render(1.0, 0.0).get("transform"),
            Some("matrix(0, 1, -1, 0, 0, 0) translate(0px, 0px) scale(1, 1)")
        );
    }

    #[test]
    fn test_zero_sized_element_renders_non_finite_scale() {
        let degenerate = CrossfadeSnapshot {
            direction: Direction::Intro,
            correlation: Correlation {
                delta: GeometricDelta::between(
                    Rect::new(0.0, 0.0, 10.0, 0.0),
                    Rect::new(0.0, 0.0, 0.0, 0.0),
                ),
                transform: String::new(),
                opacity: 1.0,
                counterpart_opacity: 1.0,
            },
        };

        let style = degenerate.render(0.0, 1.0);
        assert_eq!(
            style.get("transform"),
            Some("translate(0px, 0px) scale(inf, NaN)")
        );
        assert_eq!(style.get("opacity"), Some("0"));
    }

    #[test]
    fn test_duration_from_distance() {
        let mut correlation = snapshot(Direction::Intro, 1.0, 1.0).correlation;
        correlation.delta.distance = 900.0;

        let descriptor =
            paired_descriptor(correlation.clone(), &CrossfadeParams::default(), Direction::Intro);
        assert_eq!(descriptor.duration_ms, 900.0);

        let fixed = CrossfadeParams::default().with_duration(120.0);
        assert_eq!(paired_descriptor(correlation, &fixed, Direction::Outro).duration_ms, 120.0);
    }
}
