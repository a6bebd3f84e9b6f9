//! # gamut-cache
//!
//! Compute-once delivery of gamut geometry.
//!
//! - [`DocumentStore`] - async find/insert/delete/count over keyed records,
//!   with [`MemoryStore`] and [`FileStore`] backends
//! - [`GeometryCache`] - get-or-create with a per-key single-flight guard
//! - [`GeometryService`] - trims every request from one reference lattice
//!   and caches positions, colors and facets
//! - [`GamutConfig`] - YAML configuration
//!
//! # Example
//!
//! ```rust
//! use gamut_cache::{GamutConfig, GeometryRequest, GeometryService, MemoryStore};
//! use gamut_color::ColorModel;
//! use gamut_primaries::{ColorSpace, Illuminant};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let service = GeometryService::new(MemoryStore::new(), GamutConfig::default());
//! let request = GeometryRequest {
//!     color_space: ColorSpace::Srgb,
//!     target_model: ColorModel::LchUv,
//!     illuminant: Illuminant::D65,
//!     divisions: 8,
//! };
//! let vertices = service.vertex_data(&request).await.unwrap();
//! assert_eq!(vertices.vertex_count(), 6 * 81);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod config;
mod error;
mod key;
mod record;
mod service;
mod store;

pub use cache::GeometryCache;
pub use config::{ConfigError, GamutConfig, StoreConfig};
pub use error::{CacheError, CacheResult};
pub use key::{CacheKey, RecordKind, RecordQuery, SpaceKey};
pub use record::{Artifact, CacheRecord};
pub use service::{GeometryRequest, GeometryService};
pub use store::{AnyStore, DocumentStore, FileStore, InsertOutcome, MemoryStore};
