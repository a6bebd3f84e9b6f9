//! Piecewise companding: linear segment near black plus offset power law.
//!
//! This is the sRGB family of curves. Only `alpha` (the power-law scale,
//! 1.055 for sRGB) and `gamma` (2.4 for sRGB) are specified; the breakpoint
//! and linear slope `phi` are derived so the two segments meet with equal
//! value and slope.
//!
//! # Formula
//!
//! ```text
//! K0  = (alpha - 1) / (gamma - 1)
//! phi = alpha^gamma * (gamma - 1)^(gamma - 1) / ((alpha - 1)^(gamma - 1) * gamma^gamma)
//!
//! decode: v <= K0       ? v / phi : ((v + alpha - 1) / alpha)^gamma
//! encode: l <= K0 / phi ? phi * l : alpha * l^(1/gamma) - (alpha - 1)
//! ```
//!
//! For sRGB this yields `K0 ~ 0.03929` and `phi ~ 12.923`, close to the
//! rounded 0.04045 / 12.92 constants of IEC 61966-2-1.

/// Derived parameters of a piecewise curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseParams {
    /// Power-law scale.
    pub alpha: f64,
    /// Power-law exponent.
    pub gamma: f64,
    /// Slope of the linear segment.
    pub phi: f64,
    /// Breakpoint on the encoded axis.
    pub encoded_break: f64,
    /// Breakpoint on the linear axis (`encoded_break / phi`).
    pub linear_break: f64,
}

impl PiecewiseParams {
    /// Derives breakpoint and slope from `alpha` and `gamma`.
    ///
    /// Requires `alpha > 1` and `gamma > 1`; with either at 1 the linear
    /// segment degenerates and a pure gamma curve should be used instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_transfer::piecewise::PiecewiseParams;
    ///
    /// let p = PiecewiseParams::new(1.055, 2.4);
    /// assert!((p.phi - 12.9232).abs() < 1e-3);
    /// assert!((p.encoded_break - 0.0392857).abs() < 1e-6);
    /// ```
    pub fn new(alpha: f64, gamma: f64) -> Self {
        let a1 = alpha - 1.0;
        let g1 = gamma - 1.0;
        let encoded_break = a1 / g1;
        let phi = alpha.powf(gamma) * g1.powf(g1) / (a1.powf(g1) * gamma.powf(gamma));
        Self {
            alpha,
            gamma,
            phi,
            encoded_break,
            linear_break: encoded_break / phi,
        }
    }

    /// Decodes an encoded value to linear light.
    #[inline]
    pub fn linearize(&self, v: f64) -> f64 {
        let a = v.abs();
        let out = if a <= self.encoded_break {
            a / self.phi
        } else {
            ((a + self.alpha - 1.0) / self.alpha).powf(self.gamma)
        };
        out.copysign(v)
    }

    /// Encodes linear light.
    #[inline]
    pub fn delinearize(&self, l: f64) -> f64 {
        let a = l.abs();
        let out = if a <= self.linear_break {
            self.phi * a
        } else {
            self.alpha * a.powf(1.0 / self.gamma) - (self.alpha - 1.0)
        };
        out.copysign(l)
    }
}
