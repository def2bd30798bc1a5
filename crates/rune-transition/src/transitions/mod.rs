//! Single-element transitions.
//!
//! Each function measures its element once, validates its params, and
//! returns a [`TransitionDescriptor`](crate::TransitionDescriptor) holding a
//! snapshot of what it measured. None of them touch the crossfade registries.
//!
//! | Transition | Animates |
//! |------------|----------|
//! | [`fade`]   | opacity |
//! | [`blur`]   | opacity, `filter: blur()` |
//! | [`fly`]    | opacity, translation |
//! | [`slide`]  | size, padding, margin and border along one axis |
//! | [`scale`]  | opacity, uniform scale |
//! | [`draw`]   | SVG stroke dash offset |

pub mod blur;
pub mod draw;
pub mod fade;
pub mod fly;
pub mod scale;
pub mod slide;

pub use blur::{BlurSnapshot, blur};
pub use draw::{DrawSnapshot, draw};
pub use fade::{FadeSnapshot, fade};
pub use fly::{FlySnapshot, fly};
pub use scale::{ScaleSnapshot, scale};
pub use slide::{SlideSnapshot, slide};

/// Opacity at complement `u`, moving from `natural` toward
/// `natural * hidden_opacity` as `u` reaches 1.
pub(crate) fn faded_opacity(natural: f64, hidden_opacity: f64, u: f64) -> f64 {
    let delta = natural * (1.0 - hidden_opacity);
    natural - delta * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_opacity_endpoints() {
        assert_eq!(faded_opacity(0.8, 0.0, 0.0), 0.8);
        assert_eq!(faded_opacity(0.8, 0.0, 1.0), 0.0);
        // Hidden end keeps half of the natural opacity.
        assert!((faded_opacity(0.8, 0.5, 1.0) - 0.4).abs() < 1e-12);
    }
}
