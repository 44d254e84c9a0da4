//! Faceted mesh data.
//!
//! A [`FacetedMesh`] is a flat-shaded triangle mesh: every triangle
//! contributes its own three vertex records, even where positions
//! coincide, because coincident corners of different faces carry
//! different face normals and colors. Smooth shading is layered on top
//! through a shared-vertex table that groups the records standing on
//! one geometric point; averaging the face normals over each group
//! yields the vertex normals.
//!
//! The mesh owns both normal arrays and an "active" copy that feeds
//! buffer packing; [`FacetedMesh::select_normals`] switches the active
//! array between the two without touching either source.

use crate::error::MeshError;
use crate::math::{mean_vec3, Vec3};

use super::layout::{AttributeFormat, AttributeKind, PackedLayout};

/// Index format for indexed drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integers (max 65536 vertex records).
    Uint16,
    /// 32-bit unsigned integers.
    #[default]
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }
}

/// Which normal array feeds buffer packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalSource {
    /// Per-face normals: flat, faceted shading.
    #[default]
    Face,
    /// Averaged shared-vertex normals: smooth shading.
    Vertex,
}

/// One corner of a triangle: position plus optional texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVertex {
    /// Position of this corner.
    pub position: [f32; 3],
    /// Texture coordinate, if the mesh is textured.
    pub uv: Option<[f32; 2]>,
}

impl FaceVertex {
    /// Create a corner at `position` with no texture coordinate.
    pub fn new(position: impl Into<[f32; 3]>) -> Self {
        Self {
            position: position.into(),
            uv: None,
        }
    }

    /// Attach a texture coordinate.
    pub fn with_uv(mut self, uv: [f32; 2]) -> Self {
        self.uv = Some(uv);
        self
    }
}

/// One flat triangle: three corners sharing a single face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    /// The three corners, in winding order.
    pub corners: [FaceVertex; 3],
    /// The face normal, shared by all three corners.
    pub normal: [f32; 3],
}

impl Facet {
    /// Create a facet from three corners and a face normal.
    pub fn new(corners: [FaceVertex; 3], normal: impl Into<[f32; 3]>) -> Self {
        Self {
            corners,
            normal: normal.into(),
        }
    }
}

/// Color assignment at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshColoring {
    /// One RGBA color for every vertex record.
    Uniform([f32; 4]),
    /// One RGBA color per triangle, replicated to its three records.
    PerFace(Vec<[f32; 4]>),
}

/// Vertex-record indices that stand on one geometric point.
///
/// The table is topology supplied by the caller; member positions are
/// expected to coincide but this is a precondition, not verified.
pub type SharedVertexGroup = Vec<u32>;

/// A flat-shaded triangle mesh with a shared-vertex table.
///
/// All per-record attribute arrays have the same length (the
/// vertex-record count); the index list assembles records into
/// triangles. Geometry and topology are fixed at construction; the
/// only mutable state is the derived vertex-normal array and the
/// choice of active normal source.
#[derive(Clone)]
pub struct FacetedMesh {
    positions: Vec<[f32; 3]>,
    face_normals: Vec<[f32; 3]>,
    vertex_normals: Vec<[f32; 3]>,
    active_normals: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    uvs: Option<Vec<[f32; 2]>>,
    indices: Vec<u32>,
    shared_groups: Vec<SharedVertexGroup>,
    active_source: NormalSource,
}

impl FacetedMesh {
    /// Build a mesh from facets, with the identity index list.
    ///
    /// Each facet contributes three consecutive vertex records; the
    /// index list is `0..3n`. Use [`FacetedMesh::new_indexed`] to
    /// supply an explicit index list instead.
    ///
    /// # Errors
    ///
    /// Returns an error if texture coordinates are present on only
    /// some corners, a per-face coloring is missing colors, or the
    /// shared-vertex table references records out of range.
    pub fn new(
        facets: &[Facet],
        shared_groups: Vec<SharedVertexGroup>,
        coloring: MeshColoring,
    ) -> Result<Self, MeshError> {
        let indices = (0..(facets.len() * 3) as u32).collect();
        Self::new_indexed(facets, indices, shared_groups, coloring)
    }

    /// Build a mesh from facets with an explicit index list.
    ///
    /// # Errors
    ///
    /// As [`FacetedMesh::new`], plus index-list validation: the length
    /// must be a multiple of three and every entry must reference an
    /// existing vertex record.
    pub fn new_indexed(
        facets: &[Facet],
        indices: Vec<u32>,
        shared_groups: Vec<SharedVertexGroup>,
        coloring: MeshColoring,
    ) -> Result<Self, MeshError> {
        let record_count = facets.len() * 3;

        let textured = facets
            .first()
            .map(|f| f.corners[0].uv.is_some())
            .unwrap_or(false);

        let mut positions = Vec::with_capacity(record_count);
        let mut face_normals = Vec::with_capacity(record_count);
        let mut uvs = textured.then(|| Vec::with_capacity(record_count));

        for facet in facets {
            for corner in &facet.corners {
                if corner.uv.is_some() != textured {
                    return Err(MeshError::InconsistentTexCoords);
                }
                positions.push(corner.position);
                face_normals.push(facet.normal);
                if let (Some(uvs), Some(uv)) = (uvs.as_mut(), corner.uv) {
                    uvs.push(uv);
                }
            }
        }

        let colors = match coloring {
            MeshColoring::Uniform(color) => vec![color; record_count],
            MeshColoring::PerFace(face_colors) => {
                if face_colors.len() != facets.len() {
                    return Err(MeshError::FaceColorCountMismatch {
                        expected: facets.len(),
                        actual: face_colors.len(),
                    });
                }
                let mut colors = Vec::with_capacity(record_count);
                for color in face_colors {
                    colors.extend_from_slice(&[color; 3]);
                }
                colors
            }
        };

        Self::from_raw_parts(positions, face_normals, colors, uvs, indices, shared_groups)
    }

    /// Build a mesh from raw attribute arrays.
    ///
    /// This is the fully checked construction path; [`FacetedMesh::new`]
    /// and [`FacetedMesh::new_indexed`] funnel through it.
    ///
    /// # Errors
    ///
    /// Returns an error on mismatched attribute-array lengths, an index
    /// count that is not a multiple of three, or any index-list or
    /// shared-vertex-table entry out of range.
    pub fn from_raw_parts(
        positions: Vec<[f32; 3]>,
        face_normals: Vec<[f32; 3]>,
        colors: Vec<[f32; 4]>,
        uvs: Option<Vec<[f32; 2]>>,
        indices: Vec<u32>,
        shared_groups: Vec<SharedVertexGroup>,
    ) -> Result<Self, MeshError> {
        let record_count = positions.len();

        if face_normals.len() != record_count {
            return Err(MeshError::AttributeLengthMismatch {
                attribute: "face_normals",
                expected: record_count,
                actual: face_normals.len(),
            });
        }
        if colors.len() != record_count {
            return Err(MeshError::AttributeLengthMismatch {
                attribute: "colors",
                expected: record_count,
                actual: colors.len(),
            });
        }
        if let Some(uvs) = &uvs {
            if uvs.len() != record_count {
                return Err(MeshError::AttributeLengthMismatch {
                    attribute: "uvs",
                    expected: record_count,
                    actual: uvs.len(),
                });
            }
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotMultipleOfThree(indices.len()));
        }
        for &index in &indices {
            if index as usize >= record_count {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertex_count: record_count,
                });
            }
        }
        for (group_pos, group) in shared_groups.iter().enumerate() {
            for &index in group {
                if index as usize >= record_count {
                    return Err(MeshError::GroupIndexOutOfRange {
                        group: group_pos,
                        index,
                        vertex_count: record_count,
                    });
                }
            }
        }

        Ok(Self {
            active_normals: face_normals.clone(),
            vertex_normals: vec![[0.0; 3]; record_count],
            positions,
            face_normals,
            colors,
            uvs,
            indices,
            shared_groups,
            active_source: NormalSource::Face,
        })
    }

    /// Get the number of vertex records.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the positions of all vertex records.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Get the face normals of all vertex records.
    pub fn face_normals(&self) -> &[[f32; 3]] {
        &self.face_normals
    }

    /// Get the derived vertex normals.
    ///
    /// All zeros until [`FacetedMesh::compute_vertex_normals`] runs,
    /// and zero forever for records no shared-vertex group mentions.
    pub fn vertex_normals(&self) -> &[[f32; 3]] {
        &self.vertex_normals
    }

    /// Get the normals currently feeding buffer packing.
    pub fn active_normals(&self) -> &[[f32; 3]] {
        &self.active_normals
    }

    /// Get the colors of all vertex records.
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Get the texture coordinates, if the mesh is textured.
    pub fn uvs(&self) -> Option<&[[f32; 2]]> {
        self.uvs.as_deref()
    }

    /// Check whether the mesh carries texture coordinates.
    pub fn has_tex_coords(&self) -> bool {
        self.uvs.is_some()
    }

    /// Get the triangle index list.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the shared-vertex table.
    pub fn shared_groups(&self) -> &[SharedVertexGroup] {
        &self.shared_groups
    }

    /// Get the normal source currently active.
    pub fn active_source(&self) -> NormalSource {
        self.active_source
    }

    /// Derive vertex normals by averaging face normals over each
    /// shared-vertex group.
    ///
    /// Every member of a group receives the component-wise mean of the
    /// face normals of all members. The mean is NOT renormalized to
    /// unit length. Idempotent: repeated calls with unchanged face
    /// normals produce the same array.
    pub fn compute_vertex_normals(&mut self) {
        for group in &self.shared_groups {
            let members: Vec<Vec3> = group
                .iter()
                .map(|&i| Vec3::from(self.face_normals[i as usize]))
                .collect();
            let mean: [f32; 3] = mean_vec3(&members).into();
            for &i in group {
                self.vertex_normals[i as usize] = mean;
            }
        }
        // Keep the active copy in step when vertex normals are the
        // selected source.
        if self.active_source == NormalSource::Vertex {
            self.active_normals.copy_from_slice(&self.vertex_normals);
        }
    }

    /// Select which normal array feeds buffer packing.
    ///
    /// Copies the chosen precomputed array into the active slot; the
    /// face-normal and vertex-normal source arrays are never mutated.
    /// Callable any number of times.
    pub fn select_normals(&mut self, source: NormalSource) {
        match source {
            NormalSource::Face => self.active_normals.copy_from_slice(&self.face_normals),
            NormalSource::Vertex => self.active_normals.copy_from_slice(&self.vertex_normals),
        }
        self.active_source = source;
    }

    /// Pack the mesh with 32-bit indices.
    ///
    /// See [`FacetedMesh::pack_with_format`].
    pub fn pack(&self) -> PackedMesh {
        self.pack_impl(IndexFormat::Uint32)
    }

    /// Pack all per-record attributes into one attribute-major buffer.
    ///
    /// The buffer holds all positions, then all active normals, then
    /// all colors, then all texture coordinates if present; the
    /// returned layout records each section's byte offset. Packing is
    /// deterministic: two packs with no intervening mutation yield
    /// byte-identical buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if `Uint16` is requested and the vertex-record
    /// count exceeds the 16-bit index range.
    pub fn pack_with_format(&self, format: IndexFormat) -> Result<PackedMesh, MeshError> {
        if format == IndexFormat::Uint16 && self.vertex_count() > u16::MAX as usize + 1 {
            return Err(MeshError::TooManyVerticesForU16(self.vertex_count()));
        }
        Ok(self.pack_impl(format))
    }

    fn pack_impl(&self, format: IndexFormat) -> PackedMesh {
        let record_count = self.vertex_count();

        let mut builder = PackedLayout::builder()
            .section(AttributeKind::Position, AttributeFormat::Float3, record_count)
            .section(AttributeKind::Normal, AttributeFormat::Float3, record_count)
            .section(AttributeKind::Color, AttributeFormat::Float4, record_count);
        if self.uvs.is_some() {
            builder = builder.section(AttributeKind::TexCoord0, AttributeFormat::Float2, record_count);
        }
        let layout = builder.build();

        let mut vertex_bytes = Vec::with_capacity(layout.total_size());
        vertex_bytes.extend_from_slice(bytemuck::cast_slice(&self.positions));
        vertex_bytes.extend_from_slice(bytemuck::cast_slice(&self.active_normals));
        vertex_bytes.extend_from_slice(bytemuck::cast_slice(&self.colors));
        if let Some(uvs) = &self.uvs {
            vertex_bytes.extend_from_slice(bytemuck::cast_slice(uvs));
        }
        debug_assert_eq!(vertex_bytes.len(), layout.total_size());

        let index_bytes = match format {
            IndexFormat::Uint32 => bytemuck::cast_slice(&self.indices).to_vec(),
            IndexFormat::Uint16 => {
                let narrowed: Vec<u16> = self.indices.iter().map(|&i| i as u16).collect();
                bytemuck::cast_slice(&narrowed).to_vec()
            }
        };

        PackedMesh {
            vertex_bytes,
            index_bytes,
            layout,
            index_format: format,
            index_count: self.indices.len() as u32,
        }
    }
}

impl std::fmt::Debug for FacetedMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetedMesh")
            .field("vertex_count", &self.vertex_count())
            .field("triangle_count", &self.triangle_count())
            .field("shared_groups", &self.shared_groups.len())
            .field("textured", &self.uvs.is_some())
            .field("active_source", &self.active_source)
            .finish()
    }
}

/// Packed vertex and index bytes with their section table.
///
/// Produced by [`FacetedMesh::pack`]; ready for upload to a rendering
/// backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedMesh {
    vertex_bytes: Vec<u8>,
    index_bytes: Vec<u8>,
    layout: PackedLayout,
    index_format: IndexFormat,
    index_count: u32,
}

impl PackedMesh {
    /// Get the packed attribute-major vertex bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        &self.vertex_bytes
    }

    /// Get the packed index bytes.
    pub fn index_bytes(&self) -> &[u8] {
        &self.index_bytes
    }

    /// Get the section table.
    pub fn layout(&self) -> &PackedLayout {
        &self.layout
    }

    /// Get the index format.
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Get the bytes of one attribute section.
    pub fn section_bytes(&self, kind: AttributeKind) -> Option<&[u8]> {
        self.layout
            .section(kind)
            .map(|s| &self.vertex_bytes[s.offset..s.end()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(x: f32, y: f32, z: f32) -> FaceVertex {
        FaceVertex::new([x, y, z])
    }

    fn single_triangle() -> FacetedMesh {
        let facet = Facet::new(
            [corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), corner(0.0, 1.0, 0.0)],
            [0.0, 0.0, 1.0],
        );
        FacetedMesh::new(&[facet], vec![vec![0]], MeshColoring::Uniform([1.0; 4])).unwrap()
    }

    /// Eight synthetic triangles whose corners are grouped three at a
    /// time across faces, exercising the averaging contract on a
    /// many-small-groups topology.
    fn eight_triangle_fan() -> FacetedMesh {
        let mut facets = Vec::new();
        for face in 0..8u32 {
            let angle = face as f32;
            let normal = [angle.cos(), angle.sin(), 0.0];
            facets.push(Facet::new(
                [
                    corner(0.0, 0.0, 0.0),
                    corner(1.0, 0.0, 0.0),
                    corner(0.0, 1.0, 0.0),
                ],
                normal,
            ));
        }
        // 8 disjoint groups of 3: corner 0 of face i, corner 1 of face
        // i+1, corner 2 of face i+2 (mod 8). Every record appears in
        // exactly one group.
        let groups: Vec<SharedVertexGroup> = (0..8u32)
            .map(|i| vec![i * 3, ((i + 1) % 8) * 3 + 1, ((i + 2) % 8) * 3 + 2])
            .collect();
        FacetedMesh::new(&facets, groups, MeshColoring::Uniform([1.0; 4])).unwrap()
    }

    #[test]
    fn test_identity_index_list() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.active_source(), NormalSource::Face);
    }

    #[test]
    fn test_singleton_group_mean_is_face_normal() {
        let mut mesh = single_triangle();
        mesh.compute_vertex_normals();
        assert_eq!(mesh.vertex_normals()[0], [0.0, 0.0, 1.0]);
        // Records 1 and 2 are in no group and stay zero.
        assert_eq!(mesh.vertex_normals()[1], [0.0; 3]);
        assert_eq!(mesh.vertex_normals()[2], [0.0; 3]);
    }

    #[test]
    fn test_group_members_share_the_mean() {
        let mut mesh = eight_triangle_fan();
        mesh.compute_vertex_normals();
        for group in mesh.shared_groups() {
            assert_eq!(group.len(), 3);
            let expected: [f32; 3] = {
                let mut sum = [0.0f32; 3];
                for &i in group {
                    let n = mesh.face_normals()[i as usize];
                    sum = [sum[0] + n[0], sum[1] + n[1], sum[2] + n[2]];
                }
                [sum[0] / 3.0, sum[1] / 3.0, sum[2] / 3.0]
            };
            for &i in group {
                let got = mesh.vertex_normals()[i as usize];
                for c in 0..3 {
                    assert!((got[c] - expected[c]).abs() < 1e-6);
                }
            }
            // Averaging only: the mean of unit normals is generally
            // not unit length, and that is the contract.
            let m = expected;
            let magnitude = (m[0] * m[0] + m[1] * m[1] + m[2] * m[2]).sqrt();
            assert!(magnitude < 1.0);
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut mesh = eight_triangle_fan();
        mesh.compute_vertex_normals();
        let first = mesh.vertex_normals().to_vec();
        mesh.compute_vertex_normals();
        assert_eq!(mesh.vertex_normals(), &first[..]);
    }

    #[test]
    fn test_select_normals_switch_back() {
        let mut mesh = single_triangle();
        let face_section = mesh.pack().section_bytes(AttributeKind::Normal).unwrap().to_vec();

        mesh.compute_vertex_normals();
        mesh.select_normals(NormalSource::Vertex);
        assert_eq!(mesh.active_source(), NormalSource::Vertex);

        mesh.select_normals(NormalSource::Face);
        let packed = mesh.pack();
        assert_eq!(
            packed.section_bytes(AttributeKind::Normal).unwrap(),
            &face_section[..]
        );
    }

    #[test]
    fn test_select_does_not_mutate_sources() {
        let mut mesh = eight_triangle_fan();
        mesh.compute_vertex_normals();
        let face = mesh.face_normals().to_vec();
        let vertex = mesh.vertex_normals().to_vec();
        mesh.select_normals(NormalSource::Vertex);
        mesh.select_normals(NormalSource::Face);
        mesh.select_normals(NormalSource::Vertex);
        assert_eq!(mesh.face_normals(), &face[..]);
        assert_eq!(mesh.vertex_normals(), &vertex[..]);
        assert_eq!(mesh.active_normals(), &vertex[..]);
    }

    #[test]
    fn test_pack_is_deterministic() {
        let mut mesh = eight_triangle_fan();
        mesh.compute_vertex_normals();
        mesh.select_normals(NormalSource::Vertex);
        let a = mesh.pack();
        let b = mesh.pack();
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());
        assert_eq!(a.layout(), b.layout());
    }

    #[test]
    fn test_pack_section_offsets() {
        // 4 vertex records: 12 position floats, 12 normal floats,
        // 16 color floats -> 40 floats of packed data.
        let positions = vec![[0.0f32; 3]; 4];
        let face_normals = vec![[0.0f32, 0.0, 1.0]; 4];
        let colors = vec![[1.0f32; 4]; 4];
        let mesh = FacetedMesh::from_raw_parts(
            positions,
            face_normals,
            colors,
            None,
            vec![0, 1, 2],
            vec![],
        )
        .unwrap();

        let packed = mesh.pack();
        assert_eq!(packed.vertex_bytes().len(), 40 * 4);
        let layout = packed.layout();
        assert_eq!(layout.offset_of(AttributeKind::Normal), Some(12 * 4));
        assert_eq!(layout.offset_of(AttributeKind::Color), Some(24 * 4));
    }

    #[test]
    fn test_pack_u16_indices() {
        let mesh = single_triangle();
        let packed = mesh.pack_with_format(IndexFormat::Uint16).unwrap();
        assert_eq!(packed.index_format(), IndexFormat::Uint16);
        assert_eq!(packed.index_bytes().len(), 3 * 2);
        assert_eq!(packed.index_count(), 3);
    }

    #[test]
    fn test_pack_u16_rejects_large_meshes() {
        let n = u16::MAX as usize + 2;
        let mesh = FacetedMesh::from_raw_parts(
            vec![[0.0f32; 3]; n],
            vec![[0.0f32; 3]; n],
            vec![[0.0f32; 4]; n],
            None,
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(
            mesh.pack_with_format(IndexFormat::Uint16),
            Err(MeshError::TooManyVerticesForU16(n))
        );
    }

    #[test]
    fn test_textured_mesh_packs_uv_section() {
        let facet = Facet::new(
            [
                corner(0.0, 0.0, 0.0).with_uv([0.0, 0.0]),
                corner(1.0, 0.0, 0.0).with_uv([1.0, 0.0]),
                corner(0.0, 1.0, 0.0).with_uv([0.0, 1.0]),
            ],
            [0.0, 0.0, 1.0],
        );
        let mesh =
            FacetedMesh::new(&[facet], vec![], MeshColoring::Uniform([1.0; 4])).unwrap();
        assert!(mesh.has_tex_coords());

        let packed = mesh.pack();
        let uv_section = packed.section_bytes(AttributeKind::TexCoord0).unwrap();
        assert_eq!(uv_section.len(), 3 * 2 * 4);
        assert_eq!(
            packed.layout().offset_of(AttributeKind::TexCoord0),
            Some((3 * 3 + 3 * 3 + 3 * 4) * 4)
        );
    }

    #[test]
    fn test_inconsistent_uvs_rejected() {
        let facet = Facet::new(
            [
                corner(0.0, 0.0, 0.0).with_uv([0.0, 0.0]),
                corner(1.0, 0.0, 0.0),
                corner(0.0, 1.0, 0.0),
            ],
            [0.0, 0.0, 1.0],
        );
        let result = FacetedMesh::new(&[facet], vec![], MeshColoring::Uniform([1.0; 4]));
        assert_eq!(result.unwrap_err(), MeshError::InconsistentTexCoords);
    }

    #[test]
    fn test_per_face_color_count_checked() {
        let facet = Facet::new(
            [corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), corner(0.0, 1.0, 0.0)],
            [0.0, 0.0, 1.0],
        );
        let result = FacetedMesh::new(
            &[facet],
            vec![],
            MeshColoring::PerFace(vec![[1.0; 4], [0.5; 4]]),
        );
        assert_eq!(
            result.unwrap_err(),
            MeshError::FaceColorCountMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_index_validation() {
        let facet = Facet::new(
            [corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), corner(0.0, 1.0, 0.0)],
            [0.0, 0.0, 1.0],
        );

        let result = FacetedMesh::new_indexed(
            &[facet],
            vec![0, 1],
            vec![],
            MeshColoring::Uniform([1.0; 4]),
        );
        assert_eq!(
            result.unwrap_err(),
            MeshError::IndexCountNotMultipleOfThree(2)
        );

        let result = FacetedMesh::new_indexed(
            &[facet],
            vec![0, 1, 3],
            vec![],
            MeshColoring::Uniform([1.0; 4]),
        );
        assert_eq!(
            result.unwrap_err(),
            MeshError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_group_index_validation() {
        let facet = Facet::new(
            [corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), corner(0.0, 1.0, 0.0)],
            [0.0, 0.0, 1.0],
        );
        let result = FacetedMesh::new(
            &[facet],
            vec![vec![0, 7]],
            MeshColoring::Uniform([1.0; 4]),
        );
        assert_eq!(
            result.unwrap_err(),
            MeshError::GroupIndexOutOfRange {
                group: 0,
                index: 7,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_raw_parts_length_validation() {
        let result = FacetedMesh::from_raw_parts(
            vec![[0.0f32; 3]; 3],
            vec![[0.0f32; 3]; 2],
            vec![[0.0f32; 4]; 3],
            None,
            vec![],
            vec![],
        );
        assert_eq!(
            result.unwrap_err(),
            MeshError::AttributeLengthMismatch {
                attribute: "face_normals",
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_compute_while_vertex_active_refreshes_active() {
        let mut mesh = single_triangle();
        mesh.compute_vertex_normals();
        mesh.select_normals(NormalSource::Vertex);
        let before = mesh.active_normals().to_vec();
        mesh.compute_vertex_normals();
        assert_eq!(mesh.active_normals(), &before[..]);
    }
}
