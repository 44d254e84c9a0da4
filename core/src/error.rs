//! Mesh construction error types.

use std::fmt;

/// Errors that can occur while constructing or packing a mesh.
///
/// All of these are construction-time failures: once a mesh has been
/// built successfully, the derivation and packing operations on it
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Two per-vertex attribute arrays have different lengths.
    AttributeLengthMismatch {
        /// Name of the offending attribute array.
        attribute: &'static str,
        /// Expected vertex-record count.
        expected: usize,
        /// Actual array length.
        actual: usize,
    },
    /// The index list length is not a multiple of three.
    IndexCountNotMultipleOfThree(usize),
    /// An entry of the index list is out of range.
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Number of vertex records in the mesh.
        vertex_count: usize,
    },
    /// An entry of a shared-vertex group is out of range.
    GroupIndexOutOfRange {
        /// Position of the group in the adjacency table.
        group: usize,
        /// The offending index value.
        index: u32,
        /// Number of vertex records in the mesh.
        vertex_count: usize,
    },
    /// A per-face coloring does not provide one color per triangle.
    FaceColorCountMismatch {
        /// Number of triangles in the mesh.
        expected: usize,
        /// Number of colors provided.
        actual: usize,
    },
    /// Some corners carry texture coordinates and others do not.
    InconsistentTexCoords,
    /// The mesh has too many vertex records for 16-bit indices.
    TooManyVerticesForU16(usize),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeLengthMismatch {
                attribute,
                expected,
                actual,
            } => write!(
                f,
                "attribute `{attribute}` has {actual} entries, expected {expected}"
            ),
            Self::IndexCountNotMultipleOfThree(count) => {
                write!(f, "index count {count} is not a multiple of three")
            }
            Self::IndexOutOfRange {
                index,
                vertex_count,
            } => write!(
                f,
                "index {index} out of range for {vertex_count} vertex records"
            ),
            Self::GroupIndexOutOfRange {
                group,
                index,
                vertex_count,
            } => write!(
                f,
                "shared-vertex group {group} references index {index}, out of range for {vertex_count} vertex records"
            ),
            Self::FaceColorCountMismatch { expected, actual } => write!(
                f,
                "per-face coloring has {actual} colors for {expected} triangles"
            ),
            Self::InconsistentTexCoords => {
                write!(f, "texture coordinates must be present on all corners or none")
            }
            Self::TooManyVerticesForU16(count) => {
                write!(f, "{count} vertex records exceed the 16-bit index range")
            }
        }
    }
}

impl std::error::Error for MeshError {}
