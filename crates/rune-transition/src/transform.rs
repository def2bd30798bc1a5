//! 2D affine transforms as read from an element's computed style.
//!
//! Transitions never animate the element's own transform; they prepend it
//! unchanged to the animated `translate(...)`/`scale(...)` functions. This
//! module therefore only needs to carry a resolved matrix, parse the CSS
//! forms a host may hand over, and render it back.
//!
//! # Usage
//!
//! ```
//! use rune_transition::transform::Transform2D;
//!
//! let t = Transform2D::parse_css("translate(10px, 5px) scale(2)").unwrap();
//! assert_eq!(t.apply_point(1.0, 1.0), (12.0, 7.0));
//! assert_eq!(Transform2D::parse_css("none").unwrap(), Transform2D::identity());
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{Result, TransitionError};

/// A 2D affine transformation matrix.
///
/// Stored as a 3x2 matrix (the bottom row [0, 0, 1] is implicit):
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub fn identity() -> Self {
        Self::matrix(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Matrix in CSS `matrix(a, b, c, d, tx, ty)` argument order.
    pub fn matrix(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::matrix(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::matrix(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `angle_rad` radians.
    pub fn rotate(angle_rad: f64) -> Self {
        let cos = angle_rad.cos();
        let sin = angle_rad.sin();
        Self::matrix(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Skew by angles in radians.
    pub fn skew(skew_x: f64, skew_y: f64) -> Self {
        Self::matrix(1.0, skew_y.tan(), skew_x.tan(), 1.0, 0.0, 0.0)
    }

    /// Compose this transform with another (this * other).
    ///
    /// The resulting transform applies `other` first, then `self`, which is
    /// the left-to-right reading order of a CSS transform list.
    pub fn then(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    pub fn apply_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    /// Check if this is approximately an identity transform.
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.a - 1.0).abs() < epsilon
            && self.b.abs() < epsilon
            && self.c.abs() < epsilon
            && (self.d - 1.0).abs() < epsilon
            && self.tx.abs() < epsilon
            && self.ty.abs() < epsilon
    }

    /// Render as a CSS `matrix(...)` function, or an empty string for the
    /// identity (the same text a `transform: none` element contributes).
    pub fn to_css(&self) -> String {
        if self.is_identity(1e-12) {
            return String::new();
        }
        format!(
            "matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }

    /// Parse a computed or authored CSS transform list.
    ///
    /// Accepts `none`, `matrix()`, `translate()`, `translateX()`,
    /// `translateY()`, `scale()`, `scaleX()`, `scaleY()`, `rotate()`,
    /// `skewX()` and `skewY()`. Translations must be unitless or in `px`.
    pub fn parse_css(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() || input == "none" {
            return Ok(Self::identity());
        }

        let invalid = || TransitionError::InvalidTransform(input.to_string());
        let mut result = Self::identity();
        let mut rest = input;

        while !rest.is_empty() {
            let open = rest.find('(').ok_or_else(invalid)?;
            let close = rest.find(')').ok_or_else(invalid)?;
            if close < open {
                return Err(invalid());
            }

            let name = rest[..open].trim();
            let args = rest[open + 1..close]
                .split(',')
                .map(str::trim)
                .collect::<Vec<_>>();
            let function = parse_function(name, &args).ok_or_else(invalid)?;
            result = result.then(&function);
            rest = rest[close + 1..].trim_start();
        }

        Ok(result)
    }
}

fn parse_function(name: &str, args: &[&str]) -> Option<Transform2D> {
    let transform = match (name, args) {
        ("matrix", [a, b, c, d, tx, ty]) => Transform2D::matrix(
            number(a)?,
            number(b)?,
            number(c)?,
            number(d)?,
            pixels(tx)?,
            pixels(ty)?,
        ),
        ("translate", [x]) => Transform2D::translate(pixels(x)?, 0.0),
        ("translate", [x, y]) => Transform2D::translate(pixels(x)?, pixels(y)?),
        ("translateX", [x]) => Transform2D::translate(pixels(x)?, 0.0),
        ("translateY", [y]) => Transform2D::translate(0.0, pixels(y)?),
        ("scale", [s]) => {
            let s = number(s)?;
            Transform2D::scale(s, s)
        }
        ("scale", [sx, sy]) => Transform2D::scale(number(sx)?, number(sy)?),
        ("scaleX", [sx]) => Transform2D::scale(number(sx)?, 1.0),
        ("scaleY", [sy]) => Transform2D::scale(1.0, number(sy)?),
        ("rotate", [angle]) => Transform2D::rotate(radians(angle)?),
        ("skewX", [angle]) => Transform2D::skew(radians(angle)?, 0.0),
        ("skewY", [angle]) => Transform2D::skew(0.0, radians(angle)?),
        _ => return None,
    };
    Some(transform)
}

fn number(value: &str) -> Option<f64> {
    value.parse().ok()
}

fn pixels(value: &str) -> Option<f64> {
    number(value.strip_suffix("px").unwrap_or(value))
}

fn radians(value: &str) -> Option<f64> {
    if let Some(deg) = value.strip_suffix("deg") {
        Some(number(deg)? * PI / 180.0)
    } else if let Some(rad) = value.strip_suffix("rad") {
        number(rad)
    } else if let Some(turn) = value.strip_suffix("turn") {
        Some(number(turn)? * 2.0 * PI)
    } else if value == "0" {
        Some(0.0)
    } else {
        None
    }
}
