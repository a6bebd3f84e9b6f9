//! Pure power-law companding.
//!
//! `linear = v^gamma`, `encoded = l^(1/gamma)`.
//!
//! Negative inputs are mirrored (`sign(v) * |v|^gamma`) so values pushed
//! outside the gamut by a matrix step still round-trip.
//!
//! # Range
//!
//! - Input/Output: [0, 1], mirrored for negatives

/// Decodes an encoded value to linear light: `v^gamma`.
///
/// # Example
///
/// ```rust
/// use gamut_transfer::gamma::linearize;
///
/// let linear = linearize(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn linearize(v: f64, gamma: f64) -> f64 {
    v.signum() * v.abs().powf(gamma)
}

/// Encodes linear light: `l^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use gamut_transfer::gamma::delinearize;
///
/// let encoded = delinearize(0.2176, 2.2);
/// assert!((encoded - 0.5).abs() < 1e-3);
/// ```
#[inline]
pub fn delinearize(l: f64, gamma: f64) -> f64 {
    l.signum() * l.abs().powf(1.0 / gamma)
}
