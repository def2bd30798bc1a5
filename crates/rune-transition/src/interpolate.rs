//! Interpolation helpers shared by the style renderers.
//!
//! Transitions express every animated quantity as a blend between a resting
//! value and an offset value, so the renderers only ever need linear
//! interpolation over scalars and edge insets.

use crate::types::EdgeInsets;

/// Types that can be interpolated between two values.
///
/// `t = 0.0` yields `self`, `t = 1.0` yields `to`. Values outside `[0, 1]`
/// extrapolate.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        lerp(*self, *to, t)
    }
}

impl Interpolate for EdgeInsets {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            top: lerp(self.top, to.top, t),
            right: lerp(self.right, to.right, t),
            bottom: lerp(self.bottom, to.bottom, t),
            left: lerp(self.left, to.left, t),
        }
    }
}
