//! Lattice, facet and trim properties across divisions.

use gamut_color::ColorModel;
use gamut_geometry::{
    FACE_COUNT, GeometryError, VertexData, generate_lattice, lattice_facets, map_colors, map_facets, map_positions,
    path_len, trim_lattice,
};
use gamut_primaries::{ColorSpace, Illuminant};
use std::collections::HashSet;

fn bits(p: &[f64; 3]) -> [u64; 3] {
    p.map(f64::to_bits)
}

#[test]
fn test_lattice_shape() {
    for d in 1..=20 {
        let l = generate_lattice(d).unwrap();
        assert_eq!(l.paths.len(), FACE_COUNT);
        for path in &l.paths {
            assert_eq!(path.len(), ((d + 1) * (d + 1)) as usize);
        }
    }
    assert!(matches!(generate_lattice(0), Err(GeometryError::InvalidDivisions { .. })));
}

#[test]
fn test_d2_paths_and_first_facets() {
    let l = generate_lattice(2).unwrap();
    assert!(l.paths.iter().all(|p| p.len() == 9));
    let f = lattice_facets(2).unwrap();
    assert_eq!(&f[..2], &[[0, 4, 3], [0, 1, 4]]);
}

/// Every facet index is in range and every cell is covered exactly once.
#[test]
fn test_facet_validity() {
    for d in 1..=12u32 {
        let total = FACE_COUNT * path_len(d);
        let facets = lattice_facets(d).unwrap();
        assert!(facets.iter().flatten().all(|&i| (i as usize) < total), "d={d}");
        assert!(facets.iter().all(|t| t[0] != t[1] && t[1] != t[2] && t[0] != t[2]));

        let unique: HashSet<_> = facets.iter().map(|t| {
            let mut s = *t;
            s.sort_unstable();
            s
        }).collect();
        assert_eq!(unique.len(), facets.len(), "duplicate triangle at d={d}");
    }
}

/// Triangles never straddle two paths.
#[test]
fn test_facets_stay_in_path() {
    let d = 5;
    let len = path_len(d) as u32;
    for t in lattice_facets(d).unwrap() {
        let path = t[0] / len;
        assert!(t.iter().all(|&i| i / len == path), "{t:?}");
    }
    let stride = (d + 1) as usize;
    let starts = (0..path_len(d)).filter(|&i| map_facets(i, stride).is_some()).count();
    assert_eq!(starts, (d * d) as usize);
}

#[test]
fn test_trim_membership() {
    let source = generate_lattice(16).unwrap();
    let all: HashSet<_> = source.points().map(bits).collect();
    for target in [1, 3, 4, 5, 7, 11, 15, 16] {
        let trimmed = trim_lattice(&source, target).unwrap();
        assert_eq!(trimmed.divisions, target);
        assert!(trimmed.paths.iter().all(|p| p.len() == path_len(target)));
        assert!(trimmed.points().all(|p| all.contains(&bits(p))), "target {target}");
    }
}

/// Trimming is symmetric: mirrored target columns pick mirrored sources.
#[test]
fn test_trim_symmetric() {
    let source = generate_lattice(6).unwrap();
    let trimmed = trim_lattice(&source, 4).unwrap();
    // X=0 face, first row: B coordinates
    let row: Vec<f64> = trimmed.paths[0][..5].iter().map(|p| p[2]).collect();
    for (a, b) in row.iter().zip(row.iter().rev()) {
        assert!((a + b - 1.0).abs() < 1e-12, "{row:?}");
    }
}

#[test]
fn test_trim_never_upsamples() {
    let source = generate_lattice(4).unwrap();
    assert!(matches!(
        trim_lattice(&source, 5),
        Err(GeometryError::LatticeFidelity { available: 4, requested: 5 })
    ));
}

/// Full pipeline for every space and implemented model.
#[test]
fn test_vertex_data_every_space() {
    let d = 4;
    let lattice = generate_lattice(d).unwrap();
    let facets = lattice_facets(d).unwrap();
    for cs in ColorSpace::ALL {
        let colors = map_colors(&lattice, cs.data(), Illuminant::D65).unwrap();
        for model in [ColorModel::Rgb, ColorModel::Xyz, ColorModel::XyY, ColorModel::Luv, ColorModel::LchUv] {
            let positions = map_positions(&lattice, cs.data(), model, Illuminant::D65).unwrap();
            let v = VertexData::new(&positions, &colors, &facets).unwrap();
            assert_eq!(v.vertex_count(), lattice.point_count());
            assert!(v.positions.iter().all(|x| x.is_finite()), "{cs} {model}");
        }
    }
}
