//! Measured geometry and style types.
//!
//! This module defines the values a host hands to the transitions:
//! - `Rect`: an element's bounding box in viewport coordinates
//! - `EdgeInsets`: per-side padding, margin, or border widths
//! - `ComputedStyle`: the resolved style properties the transitions read
//! - `Direction`: whether an element is entering (intro) or leaving (outro)

use serde::{Deserialize, Serialize};

use crate::transform::Transform2D;

/// Axis-aligned bounding box, as reported by a layout query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Per-side lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeInsets {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// SVG `stroke-linecap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Resolved style of an element at measurement time.
///
/// Only the properties read by the built-in transitions are carried. A
/// `transform` of `None` corresponds to CSS `transform: none`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedStyle {
    pub opacity: f64,
    pub transform: Option<Transform2D>,
    /// Resolved `filter` value; `None` for `filter: none`.
    pub filter: Option<String>,
    pub width: f64,
    pub height: f64,
    pub padding: EdgeInsets,
    pub margin: EdgeInsets,
    pub border_width: EdgeInsets,
    pub stroke_width: f64,
    pub stroke_linecap: LineCap,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: None,
            filter: None,
            width: 0.0,
            height: 0.0,
            padding: EdgeInsets::default(),
            margin: EdgeInsets::default(),
            border_width: EdgeInsets::default(),
            stroke_width: 1.0,
            stroke_linecap: LineCap::Butt,
        }
    }
}

impl ComputedStyle {
    /// The element's own transform as a CSS prefix, empty when it is absent
    /// or the identity.
    pub fn transform_css(&self) -> String {
        self.transform.map(|t| t.to_css()).unwrap_or_default()
    }

    /// The element's own filter as a CSS prefix, empty for `filter: none`.
    pub fn filter_css(&self) -> &str {
        self.filter.as_deref().unwrap_or("")
    }
}

/// Whether a transition plays as an element enters or leaves the tree.
///
/// Intros run eased progress `t` from 0 to 1; outros run it from 1 to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Intro,
    Outro,
}

impl Direction {
    pub fn is_intro(self) -> bool {
        self == Self::Intro
    }
}
