//! Downsampling a lattice by re-selecting its points.
//!
//! Trimming never interpolates: every output point is a point of the source
//! lattice. For a target of `t` divisions over a source of `d`, target
//! column `c` sits at the fractional source column `c * d / t`; the same
//! holds for rows. The source index within a path is
//!
//! ```text
//! round(col_delta - center_offset + row_delta)
//! ```
//!
//! where `row_delta` is the start of the selected source row. The first
//! and last columns map exactly onto the source edges. Interior positions
//! that fall exactly between two source columns round toward the centre of
//! the face, so coarse grids stay symmetric instead of drifting toward the
//! 1-edge. Rows are selected the same way.

use crate::lattice::{check_divisions, row_stride};
use crate::{GeometryError, GeometryLattice, GeometryResult};
use tracing::{debug, warn};

/// Nudge that breaks exact half-way ties toward the centre.
const TIE_NUDGE: f64 = 1e-9;

fn center_offset(index: usize, target: u32, source: u32) -> f64 {
    if index == 0 || index == target as usize {
        return 0.0;
    }
    let delta = index as f64 * f64::from(source) / f64::from(target);
    let mid = f64::from(source) / 2.0;
    if delta > mid {
        TIE_NUDGE
    } else if delta < mid {
        -TIE_NUDGE
    } else {
        0.0
    }
}

fn col_delta(index: usize, target: u32, source: u32) -> f64 {
    index as f64 * f64::from(source) / f64::from(target)
}

/// Source line (row or column) selected for target line `index`.
fn select(index: usize, target: u32, source: u32) -> usize {
    (col_delta(index, target, source) - center_offset(index, target, source)).round() as usize
}

/// Trims `lattice` down to `target` divisions.
///
/// # Errors
///
/// - [`GeometryError::LatticeFidelity`] when `target` exceeds the source
///   divisions.
/// - [`GeometryError::InvalidDivisions`] for a zero target.
/// - [`GeometryError::MalformedLattice`] when the source paths do not fit
///   its divisions.
pub fn trim_lattice(lattice: &GeometryLattice, target: u32) -> GeometryResult<GeometryLattice> {
    check_divisions(target)?;
    lattice.validate()?;
    let source = lattice.divisions;
    if target > source {
        return Err(GeometryError::LatticeFidelity {
            available: source,
            requested: target,
        });
    }
    if target == source {
        return Ok(lattice.clone());
    }

    let src_stride = row_stride(source);
    let n = row_stride(target);
    let lines: Vec<usize> = (0..n).map(|i| select(i, target, source)).collect();

    let paths = lattice
        .paths
        .iter()
        .map(|path| {
            let mut out = Vec::with_capacity(n * n);
            for &src_row in &lines {
                let row_delta = src_row * src_stride;
                for col in 0..n {
                    let index = (col_delta(col, target, source) - center_offset(col, target, source)
                        + row_delta as f64)
                        .round() as usize;
                    out.push(path[index]);
                }
            }
            out
        })
        .collect();

    debug!(from = source, to = target, "Trimmed lattice");
    Ok(GeometryLattice {
        divisions: target,
        model: lattice.model,
        paths,
    })
}

/// Trims when possible, otherwise returns the input untrimmed.
///
/// A [`GeometryError::LatticeFidelity`] failure is logged as a warning;
/// other errors propagate.
///
/// # Errors
///
/// [`GeometryError::InvalidDivisions`] for a zero target and
/// [`GeometryError::MalformedLattice`] for a malformed source.
pub fn trim_or_keep(lattice: &GeometryLattice, target: u32) -> GeometryResult<GeometryLattice> {
    match trim_lattice(lattice, target) {
        Err(GeometryError::LatticeFidelity { available, requested }) => {
            warn!(available, requested, "Lattice too coarse to trim, keeping source");
            Ok(lattice.clone())
        }
        other => other,
    }
}
