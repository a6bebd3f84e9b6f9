//! Conversion round trips.

use approx::assert_abs_diff_eq;
use gamut_color::{
    AnyColor, Color, ColorModel, Rgb, TransformOptions, Xyz, adapt_xyz, registered_edges, rgb_to_xyz, transform,
    xyz_to_rgb,
};
use gamut_primaries::{ColorSpace, Illuminant, SRGB};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 1000;

fn random_rgb(rng: &mut StdRng) -> Color<Rgb> {
    Color::new(
        rng.random_range(0.0..=255.0),
        rng.random_range(0.0..=255.0),
        rng.random_range(0.0..=255.0),
    )
}

/// XYZ -> RGB undoes RGB -> XYZ for every space, illuminant and sample.
#[test]
fn test_rgb_xyz_roundtrip_all_spaces() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let samples: Vec<_> = (0..SAMPLES).map(|_| random_rgb(&mut rng)).collect();

    for cs in ColorSpace::ALL {
        for ill in Illuminant::ALL {
            for &rgb in &samples {
                let xyz = rgb_to_xyz(rgb, cs.data(), ill, TransformOptions::default()).unwrap();
                let back = xyz_to_rgb(xyz, cs.data(), ill, TransformOptions::default()).unwrap();
                let diff = back.to_vec3().max_abs_diff(rgb.to_vec3());
                assert!(diff < 1e-6, "{cs} {ill} {rgb:?} -> {back:?}");
            }
        }
    }
}

/// Every registered edge out of RGB inverts through its reverse edge.
#[test]
fn test_graph_roundtrip() {
    let mut rng = StdRng::seed_from_u64(42);
    for (from, to) in registered_edges() {
        if from != ColorModel::Rgb {
            continue;
        }
        let fwd = transform(from, to).unwrap();
        let inv = transform(to, from).unwrap();
        for cs in [ColorSpace::Srgb, ColorSpace::ProPhoto, ColorSpace::AdobeWideGamut] {
            for _ in 0..100 {
                let rgb = AnyColor::new(ColorModel::Rgb, random_rgb(&mut rng).to_array());
                let ill = Illuminant::D50;
                let mid = fwd.apply_any(rgb, cs.data(), ill, TransformOptions::default()).unwrap();
                let back = inv.apply_any(mid, cs.data(), ill, TransformOptions::default()).unwrap();
                assert_eq!(back.model, ColorModel::Rgb);
                for k in 0..3 {
                    assert_abs_diff_eq!(back.value[k], rgb.value[k], epsilon = 1e-6);
                }
            }
        }
    }
}

/// Adapting to the same illuminant changes no bits.
#[test]
fn test_identity_adaptation_bitwise() {
    let mut rng = StdRng::seed_from_u64(7);
    for ill in Illuminant::ALL {
        for _ in 0..100 {
            let xyz = Color::<Xyz>::new(rng.random(), rng.random(), rng.random());
            let out = adapt_xyz(xyz, ill, ill).unwrap();
            assert_eq!(out.to_array().map(f64::to_bits), xyz.to_array().map(f64::to_bits));
        }
    }
}

#[test]
fn test_white_to_luv() {
    let t = transform(ColorModel::Rgb, ColorModel::Luv).unwrap();
    let luv = t
        .apply([255.0, 255.0, 255.0], &SRGB, Illuminant::D65, TransformOptions::default())
        .unwrap();
    assert_abs_diff_eq!(luv[0], 100.0, epsilon = 1e-3);
    assert_abs_diff_eq!(luv[1], 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(luv[2], 0.0, epsilon = 1e-3);
}

/// Grey stays on the neutral axis in every space once it is viewed under
/// the space's own white.
#[test]
fn test_greys_are_achromatic() {
    let t = transform(ColorModel::Rgb, ColorModel::LchUv).unwrap();
    for cs in ColorSpace::ALL {
        for v in [32.0, 128.0, 200.0] {
            let lch = t
                .apply([v, v, v], cs.data(), cs.illuminant(), TransformOptions::default())
                .unwrap();
            assert!(lch[1] < 1e-6, "{cs} grey {v} has chroma {}", lch[1]);
        }
    }
}

/// Every registered transfer curve inverts across its whole domain,
/// including the linear segment of the piecewise curves.
#[test]
fn test_companding_inverts() {
    for cs in ColorSpace::ALL {
        let curve = cs.data().companding.curve();
        for i in 0..=1000 {
            let v = f64::from(i) / 1000.0;
            let back = curve.delinearize(curve.linearize(v));
            assert_abs_diff_eq!(back, v, epsilon = 1e-12);
        }
        assert_eq!(curve.linearize(0.0), 0.0);
        assert_abs_diff_eq!(curve.linearize(1.0), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_linear_companding_flag() {
    let t = transform(ColorModel::Rgb, ColorModel::Xyz).unwrap();
    let lin = t
        .apply([127.5, 127.5, 127.5], &SRGB, Illuminant::D65, TransformOptions::LINEAR)
        .unwrap();
    assert_abs_diff_eq!(lin[1], 0.5, epsilon = 1e-12);
    assert!(matches!(
        gamut_transfer::Companding::Linear.curve(),
        gamut_transfer::TransferCurve::Linear
    ));
}
