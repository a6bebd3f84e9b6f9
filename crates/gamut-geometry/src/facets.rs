//! Triangle facets over lattice paths.

use crate::GeometryResult;
use crate::lattice::{FACE_COUNT, check_divisions, path_len, row_stride};

/// Triangles for the grid cell whose top-left corner is `point_index`.
///
/// With `p1 = p0 + 1`, `adj_p0 = p0 + row_stride` and `adj_p1 = adj_p0 + 1`
/// the cell is split into `[p0, adj_p1, adj_p0]` and `[p0, p1, adj_p1]`.
/// Points in the last column or last row start no cell.
///
/// Indices are local to one square path.
///
/// ```rust
/// use gamut_geometry::map_facets;
///
/// assert_eq!(map_facets(0, 3), Some([[0, 4, 3], [0, 1, 4]]));
/// assert_eq!(map_facets(2, 3), None);
/// assert_eq!(map_facets(6, 3), None);
/// ```
pub fn map_facets(point_index: usize, row_stride: usize) -> Option<[[usize; 3]; 2]> {
    if row_stride < 2 {
        return None;
    }
    let row = point_index / row_stride;
    let col = point_index % row_stride;
    if col == row_stride - 1 || row >= row_stride - 1 {
        return None;
    }

    let p0 = point_index;
    let p1 = p0 + 1;
    let adj_p0 = p0 + row_stride;
    let adj_p1 = adj_p0 + 1;
    Some([[p0, adj_p1, adj_p0], [p0, p1, adj_p1]])
}

/// Triangle indices for a whole lattice at `divisions`.
///
/// Each path's triangles are offset by the path's start index in the
/// flattened point buffer, so every index is below `6 * (d + 1)^2`.
///
/// # Errors
///
/// [`crate::GeometryError::InvalidDivisions`] as for
/// [`crate::generate_lattice`].
pub fn lattice_facets(divisions: u32) -> GeometryResult<Vec<[u32; 3]>> {
    check_divisions(divisions)?;
    let stride = row_stride(divisions);
    let len = path_len(divisions);

    let mut facets = Vec::with_capacity(FACE_COUNT * 2 * (stride - 1).pow(2));
    for path in 0..FACE_COUNT {
        let offset = path * len;
        for local in 0..len {
            if let Some(pair) = map_facets(local, stride) {
                // Indices fit: MAX_DIVISIONS bounds the vertex count.
                facets.extend(pair.map(|tri| tri.map(|i| (offset + i) as u32)));
            }
        }
    }
    Ok(facets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_of_d2() {
        let f = lattice_facets(2).unwrap();
        assert_eq!(f[0], [0, 4, 3]);
        assert_eq!(f[1], [0, 1, 4]);
        assert_eq!(f[2], [1, 5, 4]);
        assert_eq!(f[3], [1, 2, 5]);
    }

    #[test]
    fn test_count_and_bounds() {
        for d in 1..=9u32 {
            let f = lattice_facets(d).unwrap();
            let n = d as usize;
            assert_eq!(f.len(), FACE_COUNT * 2 * n * n);
            let total = (FACE_COUNT * path_len(d)) as u32;
            assert!(f.iter().flatten().all(|&i| i < total));
        }
    }

    #[test]
    fn test_last_path_is_meshed() {
        let f = lattice_facets(1).unwrap();
        assert_eq!(f.len(), 12);
        assert_eq!(f[10], [20, 23, 22]);
        assert_eq!(f[11], [20, 21, 23]);
    }

    #[test]
    fn test_degenerate_stride() {
        assert_eq!(map_facets(0, 1), None);
        assert_eq!(map_facets(0, 0), None);
    }
}
