//! Two-layer opacity blending.
//!
//! During a crossfade the incoming element is drawn over the outgoing one.
//! Interpolating both opacities linearly makes the pair look too transparent
//! mid-way, because stacked layers composite as `top + bottom * (1 - top)`.
//! [`blend`] instead picks layer opacities whose composite equals the linear
//! interpolation between the two natural opacities.

/// Opacities of the top (`to`) and bottom (`from`) layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    pub to: f64,
    pub from: f64,
}

impl Blend {
    /// Apparent opacity of the top layer composited over the bottom layer.
    pub fn apparent(&self) -> f64 {
        self.to + self.from * (1.0 - self.to)
    }
}

/// Layer opacities at progress `t` whose composite is
/// `(to - from) * t + from`.
///
/// At `t = 0` the bottom layer alone carries `from`; at `t = 1` the top layer
/// alone carries `to`. Inputs are not validated: values outside `[0, 1]`
/// produce whatever the arithmetic yields, NaN included.
pub fn blend(to: f64, from: f64, t: f64) -> Blend {
    let target = (to - from) * t + from;

    // The general solution divides by `1 - bottom`, which is zero here.
    if target == 1.0 {
        return Blend { to: t, from: 1.0 };
    }

    let bottom = target - t * t * target;
    let top = (target - bottom) / (1.0 - bottom);
    Blend {
        to: top,
        from: bottom,
    }
}
