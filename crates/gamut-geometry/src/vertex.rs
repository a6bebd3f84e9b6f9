//! Flattened vertex buffers for rendering.

use crate::{GeometryError, GeometryLattice, GeometryResult};
use serde::{Deserialize, Serialize};

/// Positions, colors and triangle indices as flat arrays.
///
/// `positions` and `colors` hold three floats per vertex in path order;
/// `indices` hold three vertex indices per triangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexData {
    /// xyz per vertex.
    pub positions: Vec<f64>,
    /// rgb per vertex, in [0, 1].
    pub colors: Vec<f64>,
    /// Triangle corners.
    pub indices: Vec<u32>,
}

impl VertexData {
    /// Flattens mapped positions, display colors and facets.
    ///
    /// # Errors
    ///
    /// [`GeometryError::MismatchedBuffers`] when the lattices differ in size.
    pub fn new(
        positions: &GeometryLattice,
        colors: &GeometryLattice,
        facets: &[[u32; 3]],
    ) -> GeometryResult<Self> {
        let (np, nc) = (positions.point_count(), colors.point_count());
        if np != nc {
            return Err(GeometryError::MismatchedBuffers {
                positions: np,
                colors: nc,
            });
        }
        Ok(Self {
            positions: positions.points().flatten().copied().collect(),
            colors: colors.points().flatten().copied().collect(),
            indices: facets.iter().flatten().copied().collect(),
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_lattice, lattice_facets, map_colors, map_positions};
    use gamut_color::ColorModel;
    use gamut_primaries::{Illuminant, SRGB};

    #[test]
    fn test_assemble() {
        let l = generate_lattice(3).unwrap();
        let pos = map_positions(&l, &SRGB, ColorModel::XyY, Illuminant::D65).unwrap();
        let col = map_colors(&l, &SRGB, Illuminant::D65).unwrap();
        let facets = lattice_facets(3).unwrap();
        let v = VertexData::new(&pos, &col, &facets).unwrap();

        assert_eq!(v.vertex_count(), 6 * 16);
        assert_eq!(v.colors.len(), v.positions.len());
        assert_eq!(v.triangle_count(), 6 * 2 * 9);
        assert!(v.indices.iter().all(|&i| (i as usize) < v.vertex_count()));

        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["indices"][0], 0);
        assert_eq!(json["positions"].as_array().unwrap().len(), 3 * 96);
    }

    #[test]
    fn test_mismatch() {
        let a = generate_lattice(2).unwrap();
        let b = generate_lattice(3).unwrap();
        assert_eq!(
            VertexData::new(&a, &b, &[]),
            Err(GeometryError::MismatchedBuffers { positions: 54, colors: 96 })
        );
    }
}
