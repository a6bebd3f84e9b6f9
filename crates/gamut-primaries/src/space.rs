//! RGB color space definitions.
//!
//! Each [`ColorSpace`] resolves to a static [`RgbSpace`] holding everything a
//! conversion needs: primaries as xy chromaticities, the native illuminant and
//! the companding curve. Matrices are never stored; they are derived from this
//! data by [`crate::derive_rgb_to_xyz_matrix`].
//!
//! # Included Color Spaces
//!
//! | Color Space | Illuminant | Companding |
//! |-------------|------------|------------|
//! | sRGB | D65 | piecewise 1.055 / 2.4 |
//! | Adobe RGB (1998) | D65 | gamma 563/256 |
//! | Adobe Wide Gamut | D50 | gamma 563/256 |
//! | Display P3 | D65 | piecewise 1.055 / 2.4 |
//! | ProPhoto RGB | D50 | gamma 1.8 |
//! | Apple RGB | D65 | gamma 1.8 |

use crate::{Illuminant, RegistryError, RegistryResult};
use gamut_transfer::Companding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adobe's 2.2 approximation, exactly 2 + 51/256.
const ADOBE_GAMMA: f64 = 563.0 / 256.0;

const SRGB_CURVE: Companding = Companding::Piecewise { alpha: 1.055, gamma: 2.4 };

/// Registry data for one RGB color space.
///
/// Callers may build their own `RgbSpace` for spaces outside the registry;
/// [`RgbSpace::validate`] checks it before any matrix is derived.
///
/// # Example
///
/// ```rust
/// use gamut_primaries::{Illuminant, RgbSpace};
/// use gamut_transfer::Companding;
///
/// let rec2020 = RgbSpace {
///     name: "Rec.2020",
///     illuminant: Illuminant::D65,
///     primaries: [(0.708, 0.292), (0.170, 0.797), (0.131, 0.046)],
///     companding: Companding::Gamma { gamma: 2.4 },
/// };
/// assert!(rec2020.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbSpace {
    /// Display name.
    pub name: &'static str,
    /// Native reference white.
    pub illuminant: Illuminant,
    /// Red, green, blue primaries as (x, y) chromaticity.
    pub primaries: [(f64, f64); 3],
    /// Transfer function.
    pub companding: Companding,
}

impl RgbSpace {
    /// Checks that every primary can be lifted from xy to XYZ and that the
    /// companding parameters describe a usable curve.
    ///
    /// # Errors
    ///
    /// [`RegistryError::MissingReferenceData`] naming `primaries` when a
    /// coordinate is not finite or a y component is zero, or `companding`
    /// when [`Companding::is_valid`] fails.
    pub fn validate(&self) -> RegistryResult<()> {
        let usable = self
            .primaries
            .iter()
            .all(|&(x, y)| x.is_finite() && y.is_finite() && y != 0.0);
        if !usable {
            return Err(RegistryError::MissingReferenceData {
                space: self.name.to_string(),
                field: "primaries",
            });
        }
        if !self.companding.is_valid() {
            return Err(RegistryError::MissingReferenceData {
                space: self.name.to_string(),
                field: "companding",
            });
        }
        Ok(())
    }
}

/// sRGB (IEC 61966-2-1).
pub const SRGB: RgbSpace = RgbSpace {
    name: "sRGB",
    illuminant: Illuminant::D65,
    primaries: [(0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600)],
    companding: SRGB_CURVE,
};

/// Adobe RGB (1998).
pub const ADOBE_RGB_1998: RgbSpace = RgbSpace {
    name: "Adobe RGB (1998)",
    illuminant: Illuminant::D65,
    primaries: [(0.6400, 0.3300), (0.2100, 0.7100), (0.1500, 0.0600)],
    companding: Companding::Gamma { gamma: ADOBE_GAMMA },
};

/// Adobe Wide Gamut RGB.
pub const ADOBE_WIDE_GAMUT: RgbSpace = RgbSpace {
    name: "Adobe Wide Gamut RGB",
    illuminant: Illuminant::D50,
    primaries: [(0.7347, 0.2653), (0.1152, 0.8264), (0.1566, 0.0177)],
    companding: Companding::Gamma { gamma: ADOBE_GAMMA },
};

/// Display P3: DCI-P3 primaries with a D65 white and the sRGB curve.
pub const DISPLAY_P3: RgbSpace = RgbSpace {
    name: "Display P3",
    illuminant: Illuminant::D65,
    primaries: [(0.6800, 0.3200), (0.2650, 0.6900), (0.1500, 0.0600)],
    companding: SRGB_CURVE,
};

/// ProPhoto RGB (ROMM RGB).
pub const PROPHOTO_RGB: RgbSpace = RgbSpace {
    name: "ProPhoto RGB",
    illuminant: Illuminant::D50,
    primaries: [(0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001)],
    companding: Companding::Gamma { gamma: 1.8 },
};

/// Apple RGB.
pub const APPLE_RGB: RgbSpace = RgbSpace {
    name: "Apple RGB",
    illuminant: Illuminant::D65,
    primaries: [(0.6250, 0.3400), (0.2800, 0.5950), (0.1550, 0.0700)],
    companding: Companding::Gamma { gamma: 1.8 },
};

/// Registered RGB color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSpace {
    /// sRGB.
    Srgb,
    /// Adobe RGB (1998).
    AdobeRgb1998,
    /// Adobe Wide Gamut RGB.
    AdobeWideGamut,
    /// Display P3.
    DisplayP3,
    /// ProPhoto RGB.
    ProPhoto,
    /// Apple RGB.
    AppleRgb,
}

impl ColorSpace {
    /// Every registered color space.
    pub const ALL: [Self; 6] = [
        Self::Srgb,
        Self::AdobeRgb1998,
        Self::AdobeWideGamut,
        Self::DisplayP3,
        Self::ProPhoto,
        Self::AppleRgb,
    ];

    /// Registry data for this space.
    pub const fn data(self) -> &'static RgbSpace {
        match self {
            Self::Srgb => &SRGB,
            Self::AdobeRgb1998 => &ADOBE_RGB_1998,
            Self::AdobeWideGamut => &ADOBE_WIDE_GAMUT,
            Self::DisplayP3 => &DISPLAY_P3,
            Self::ProPhoto => &PROPHOTO_RGB,
            Self::AppleRgb => &APPLE_RGB,
        }
    }

    /// Key used in requests and cache keys; matches the serde name.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::AdobeRgb1998 => "adobe-rgb1998",
            Self::AdobeWideGamut => "adobe-wide-gamut",
            Self::DisplayP3 => "display-p3",
            Self::ProPhoto => "pro-photo",
            Self::AppleRgb => "apple-rgb",
        }
    }

    /// Native illuminant.
    pub const fn illuminant(self) -> Illuminant {
        self.data().illuminant
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorSpace {
    type Err = RegistryError;

    /// Parses a key, ignoring case and treating `_` like `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|cs| cs.key() == key || cs.key().replace('-', "") == key.replace('-', ""))
            .ok_or(RegistryError::UnknownKey {
                kind: "color space",
                key: s.to_string(),
            })
    }
}
