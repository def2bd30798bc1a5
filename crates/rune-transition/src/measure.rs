//! Element measurement interface.
//!
//! Transitions never lay out or query a tree themselves. The host exposes
//! each element through [`Measure`], and every transition reads it exactly
//! once, synchronously, at the moment its descriptor is built.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::types::{ComputedStyle, Rect};

/// Geometry and style queries a host provides for an element handle.
pub trait Measure {
    /// Current bounding box in viewport coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Current resolved style.
    fn computed_style(&self) -> ComputedStyle;

    /// Total length of the element's outline path, for SVG shapes.
    fn path_length(&self) -> Option<f64> {
        None
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn computed_style(&self) -> ComputedStyle {
        (**self).computed_style()
    }

    fn path_length(&self) -> Option<f64> {
        (**self).path_length()
    }
}

impl<T: Measure + ?Sized> Measure for Rc<T> {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn computed_style(&self) -> ComputedStyle {
        (**self).computed_style()
    }

    fn path_length(&self) -> Option<f64> {
        (**self).path_length()
    }
}

/// An element whose geometry was captured ahead of time.
///
/// Useful for hosts that batch layout queries, and for driving transitions
/// outside a live tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasuredElement {
    pub rect: Rect,
    pub style: ComputedStyle,
    pub path_length: Option<f64>,
}

impl MeasuredElement {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: ComputedStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity;
        self
    }

    pub fn with_path_length(mut self, length: f64) -> Self {
        self.path_length = Some(length);
        self
    }
}

impl Measure for MeasuredElement {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn computed_style(&self) -> ComputedStyle {
        self.style.clone()
    }

    fn path_length(&self) -> Option<f64> {
        self.path_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_element_builders() {
        let element = MeasuredElement::new(Rect::new(1.0, 2.0, 3.0, 4.0))
            .with_opacity(0.5)
            .with_path_length(120.0);

        assert_eq!(element.bounding_rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(element.computed_style().opacity, 0.5);
        assert_eq!(element.path_length(), Some(120.0));
    }

    #[test]
    fn test_shared_handles_forward_queries() {
        let element = Rc::new(MeasuredElement::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let handle = Rc::clone(&element);

        assert_eq!(handle.bounding_rect().width, 10.0);
        assert_eq!((&*element).path_length(), None);
    }
}
