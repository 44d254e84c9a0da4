//! CPU-side faceted mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data structures:
//!
//! - [`PackedLayout`] - Attribute-major section layout with computed offsets
//! - [`FacetedMesh`] - Flat-shaded triangle mesh with shared-vertex table
//! - [`PackedMesh`] - Packed vertex/index bytes ready for upload
//! - Generators for the built-in shapes (square pyramid, regular octahedron)

mod data;
pub mod generators;
mod layout;

pub use data::{
    Facet, FaceVertex, FacetedMesh, IndexFormat, MeshColoring, NormalSource, PackedMesh,
    SharedVertexGroup,
};
pub use layout::{AttributeFormat, AttributeKind, AttributeSection, PackedLayout};
