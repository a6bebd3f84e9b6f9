//! # gamut-geometry
//!
//! Boundary geometry of RGB gamuts.
//!
//! The pipeline for one request:
//!
//! 1. [`generate_lattice`] - six face grids of the RGB unit cube
//! 2. [`trim_lattice`] - downsample a fine lattice by re-selecting points
//! 3. [`map_positions`] / [`map_colors`] - push points through the
//!    conversion graph, in parallel
//! 4. [`lattice_facets`] - triangle indices, identical for every space
//! 5. [`VertexData`] - flat buffers for a renderer
//!
//! [`spectral_locus`] maps a color matching function table the same way,
//! for drawing the horseshoe next to a gamut.
//!
//! # Example
//!
//! ```rust
//! use gamut_color::ColorModel;
//! use gamut_geometry::{VertexData, generate_lattice, lattice_facets, map_colors, map_positions};
//! use gamut_primaries::{ColorSpace, Illuminant};
//!
//! let space = ColorSpace::DisplayP3.data();
//! let lattice = generate_lattice(8).unwrap();
//! let positions = map_positions(&lattice, space, ColorModel::LchUv, Illuminant::D65).unwrap();
//! let colors = map_colors(&lattice, space, Illuminant::D65).unwrap();
//! let facets = lattice_facets(8).unwrap();
//!
//! let vertices = VertexData::new(&positions, &colors, &facets).unwrap();
//! assert_eq!(vertices.vertex_count(), 6 * 81);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod facets;
mod lattice;
mod locus;
mod mapping;
mod trim;
mod vertex;

pub use error::{GeometryError, GeometryResult};
pub use facets::{lattice_facets, map_facets};
pub use lattice::{FACE_COUNT, GeometryLattice, MAX_DIVISIONS, Point, generate_lattice, path_len, row_stride};
pub use locus::{CmfRow, spectral_locus};
pub use mapping::{map_colors, map_positions};
pub use trim::{trim_lattice, trim_or_keep};
pub use vertex::VertexData;
