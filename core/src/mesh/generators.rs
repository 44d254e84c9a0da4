//! Generators for the built-in polyhedra.
//!
//! Each generator supplies shape data (corner positions, face normals,
//! texture coordinates, palette, shared-vertex table) to the one
//! [`FacetedMesh`] component; no generator carries its own averaging
//! or packing logic.

use super::data::{Facet, FaceVertex, FacetedMesh, MeshColoring, SharedVertexGroup};

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

/// Generate a square pyramid.
///
/// Base of half-extent 0.5 on the y=0 plane, apex at (0, 1, 0);
/// 6 triangles, 18 vertex records. The side face normals are kept
/// un-normalized (y component 0.5), matching the reference geometry.
/// Faces are colored bottom blue, front red, right yellow, back
/// magenta, left cyan.
pub fn square_pyramid() -> FacetedMesh {
    let v = |x, y, z| FaceVertex::new([x, y, z]);
    let apex = v(0.0, 1.0, 0.0);

    let facets = [
        // bottom face (2 triangles)
        Facet::new(
            [v(-0.5, 0.0, -0.5), v(0.5, 0.0, -0.5), v(0.5, 0.0, 0.5)],
            [0.0, -1.0, 0.0],
        ),
        Facet::new(
            [v(-0.5, 0.0, -0.5), v(0.5, 0.0, 0.5), v(-0.5, 0.0, 0.5)],
            [0.0, -1.0, 0.0],
        ),
        // front
        Facet::new(
            [v(-0.5, 0.0, -0.5), v(0.5, 0.0, -0.5), apex],
            [0.0, 0.5, -1.0],
        ),
        // right
        Facet::new(
            [v(0.5, 0.0, -0.5), v(0.5, 0.0, 0.5), apex],
            [1.0, 0.5, 0.0],
        ),
        // back
        Facet::new(
            [v(0.5, 0.0, 0.5), v(-0.5, 0.0, 0.5), apex],
            [0.0, 0.5, 1.0],
        ),
        // left
        Facet::new(
            [v(-0.5, 0.0, 0.5), v(-0.5, 0.0, -0.5), apex],
            [-1.0, 0.5, 0.0],
        ),
    ];

    let coloring = MeshColoring::PerFace(vec![BLUE, BLUE, RED, YELLOW, MAGENTA, CYAN]);

    // Records standing on each base corner and on the apex.
    let shared: Vec<SharedVertexGroup> = vec![
        vec![0, 3, 6, 16],  // (-0.5, 0, -0.5)
        vec![1, 7, 9],      // ( 0.5, 0, -0.5)
        vec![2, 4, 10, 12], // ( 0.5, 0,  0.5)
        vec![5, 13, 15],    // (-0.5, 0,  0.5)
        vec![8, 11, 14, 17],
    ];

    FacetedMesh::new(&facets, shared, coloring).expect("pyramid data is statically valid")
}

/// Generate a regular octahedron with edge length 1.
///
/// Apexes at ±1/√2 on each axis; 8 triangles, 24 vertex records, with
/// unit face normals (±1/√3 components) and texture coordinates from
/// an octahedral net. Pass `Some(color)` to color every record
/// uniformly; `None` uses a per-face palette.
pub fn regular_octahedron(color: Option<[f32; 4]>) -> FacetedMesh {
    let len = 1.0 / 2.0f32.sqrt();
    let nor = 1.0 / 3.0f32.sqrt();

    // (axis vertices, face normal, net texture coordinates) per face.
    #[rustfmt::skip]
    let faces: [([[f32; 3]; 3], [f32; 3], [[f32; 2]; 3]); 8] = [
        ([[ len, 0.0, 0.0], [0.0,  len, 0.0], [0.0, 0.0,  len]], [ nor,  nor,  nor],
         [[0.75, 0.5], [0.5, 1.0], [0.5, 0.5]]),
        ([[-len, 0.0, 0.0], [0.0,  len, 0.0], [0.0, 0.0,  len]], [-nor,  nor,  nor],
         [[0.25, 0.5], [0.5, 1.0], [0.5, 0.5]]),
        ([[-len, 0.0, 0.0], [0.0, -len, 0.0], [0.0, 0.0,  len]], [-nor, -nor,  nor],
         [[0.25, 0.5], [0.5, 0.0], [0.5, 0.5]]),
        ([[ len, 0.0, 0.0], [0.0, -len, 0.0], [0.0, 0.0,  len]], [ nor, -nor,  nor],
         [[0.75, 0.5], [0.5, 0.0], [0.5, 0.5]]),
        ([[ len, 0.0, 0.0], [0.0,  len, 0.0], [0.0, 0.0, -len]], [ nor,  nor, -nor],
         [[0.75, 0.5], [0.5, 1.0], [1.0, 0.5]]),
        ([[-len, 0.0, 0.0], [0.0,  len, 0.0], [0.0, 0.0, -len]], [-nor,  nor, -nor],
         [[0.25, 0.5], [0.5, 1.0], [0.0, 0.5]]),
        ([[-len, 0.0, 0.0], [0.0, -len, 0.0], [0.0, 0.0, -len]], [-nor, -nor, -nor],
         [[0.25, 0.5], [0.5, 0.0], [0.0, 0.5]]),
        ([[ len, 0.0, 0.0], [0.0, -len, 0.0], [0.0, 0.0, -len]], [ nor, -nor, -nor],
         [[0.75, 0.5], [0.5, 0.0], [1.0, 0.5]]),
    ];

    let facets: Vec<Facet> = faces
        .iter()
        .map(|(positions, normal, uvs)| {
            Facet::new(
                [
                    FaceVertex::new(positions[0]).with_uv(uvs[0]),
                    FaceVertex::new(positions[1]).with_uv(uvs[1]),
                    FaceVertex::new(positions[2]).with_uv(uvs[2]),
                ],
                *normal,
            )
        })
        .collect();

    let coloring = match color {
        Some(color) => MeshColoring::Uniform(color),
        None => {
            let palette = [RED, YELLOW, GREEN, CYAN, BLUE, MAGENTA];
            MeshColoring::PerFace((0..8).map(|i| palette[i % palette.len()]).collect())
        }
    };

    // Records standing on each of the six apexes.
    let shared: Vec<SharedVertexGroup> = vec![
        vec![0, 9, 12, 21],  // (+len, 0, 0)
        vec![3, 6, 15, 18],  // (-len, 0, 0)
        vec![2, 5, 8, 11],   // (0, 0, +len)
        vec![14, 17, 20, 23],
        vec![1, 4, 13, 16],  // (0, +len, 0)
        vec![7, 10, 19, 22], // (0, -len, 0)
    ];

    FacetedMesh::new(&facets, shared, coloring).expect("octahedron data is statically valid")
}
