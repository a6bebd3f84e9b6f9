//! Standard illuminants and their XYZ white points.
//!
//! All white points are normalized to Y = 1 (2 degree observer). Values
//! follow the tables published by Bruce Lindbloom / ASTM E308.

use crate::{RegistryError, RegistryResult};
use gamut_math::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CIE standard illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Illuminant {
    /// Incandescent / tungsten (~2856K).
    A,
    /// Direct sunlight at noon (obsolete).
    B,
    /// Average daylight (obsolete).
    C,
    /// Horizon light (~5000K), ICC profile connection space.
    D50,
    /// Mid-morning daylight (~5500K).
    D55,
    /// Noon daylight (~6500K), sRGB reference.
    D65,
    /// North sky daylight (~7500K).
    D75,
    /// Equal energy.
    E,
    /// Cool white fluorescent.
    F2,
    /// Broad-band daylight fluorescent.
    F7,
    /// Narrow-band white fluorescent.
    F11,
}

impl Illuminant {
    /// Every registered illuminant.
    pub const ALL: [Self; 11] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::F2,
        Self::F7,
        Self::F11,
    ];

    /// XYZ tristimulus white point with Y = 1.
    pub const fn xyz(self) -> Vec3 {
        match self {
            Self::A => Vec3::new(1.09850, 1.0, 0.35585),
            Self::B => Vec3::new(0.99072, 1.0, 0.85223),
            Self::C => Vec3::new(0.98074, 1.0, 1.18232),
            Self::D50 => Vec3::new(0.96422, 1.0, 0.82521),
            Self::D55 => Vec3::new(0.95682, 1.0, 0.92149),
            Self::D65 => Vec3::new(0.95047, 1.0, 1.08883),
            Self::D75 => Vec3::new(0.94972, 1.0, 1.22638),
            Self::E => Vec3::new(1.0, 1.0, 1.0),
            Self::F2 => Vec3::new(0.99186, 1.0, 0.67393),
            Self::F7 => Vec3::new(0.95041, 1.0, 1.08747),
            Self::F11 => Vec3::new(1.00962, 1.0, 0.64350),
        }
    }

    /// White point as xy chromaticity.
    pub fn chromaticity(self) -> (f64, f64) {
        let w = self.xyz();
        let sum = w.sum();
        (w.x / sum, w.y / sum)
    }

    /// Lower-case key used in requests and cache keys.
    pub const fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D50 => "d50",
            Self::D55 => "d55",
            Self::D65 => "d65",
            Self::D75 => "d75",
            Self::E => "e",
            Self::F2 => "f2",
            Self::F7 => "f7",
            Self::F11 => "f11",
        }
    }

    /// White point XYZ, validated for use as a divisor.
    ///
    /// # Errors
    ///
    /// [`RegistryError::MissingReferenceData`] (`whitepoint`) if the table
    /// entry is not finite or has a zero Y.
    pub fn checked_xyz(self) -> RegistryResult<Vec3> {
        let w = self.xyz();
        if !w.is_finite() || w.y == 0.0 || w.sum() == 0.0 {
            return Err(RegistryError::MissingReferenceData {
                space: self.key().to_string(),
                field: "whitepoint",
            });
        }
        Ok(w)
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Illuminant {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.key() == key)
            .ok_or(RegistryError::UnknownKey {
                kind: "illuminant",
                key: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_all_normalized() {
        for ill in Illuminant::ALL {
            assert_eq!(ill.xyz().y, 1.0, "{ill}");
            assert!(ill.checked_xyz().is_ok());
        }
    }

    #[test]
    fn test_d65_chromaticity() {
        let (x, y) = Illuminant::D65.chromaticity();
        assert_abs_diff_eq!(x, 0.3127, epsilon = 1e-4);
        assert_abs_diff_eq!(y, 0.3290, epsilon = 1e-4);
    }

    #[test]
    fn test_key_roundtrip() {
        for ill in Illuminant::ALL {
            assert_eq!(ill.key().parse::<Illuminant>().unwrap(), ill);
        }
        assert_eq!(" D65 ".parse::<Illuminant>().unwrap(), Illuminant::D65);
        assert!(matches!(
            "d93".parse::<Illuminant>(),
            Err(RegistryError::UnknownKey { kind: "illuminant", .. })
        ));
    }
}
