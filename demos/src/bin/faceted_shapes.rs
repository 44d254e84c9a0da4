//! Headless run of the full mesh pipeline: generate the built-in
//! shapes, derive smoothed normals, upload to the dummy backend, draw
//! flat and smooth, and release.
//!
//! Run with `RUST_LOG=trace` to watch the backend traffic.

use std::error::Error;
use std::sync::Arc;

use polyfacet_core::mesh::{generators, AttributeKind, NormalSource};
use polyfacet_graphics::{DummyBackend, GpuMesh, NullShader, RenderBackend};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    polyfacet_core::init();
    polyfacet_graphics::init();

    let backend = Arc::new(DummyBackend::new());
    log::info!("backend: {}", backend.name());

    let shapes = [
        ("square_pyramid", generators::square_pyramid()),
        ("regular_octahedron", generators::regular_octahedron(None)),
    ];

    for (name, mut mesh) in shapes {
        mesh.compute_vertex_normals();

        let packed = mesh.pack();
        log::info!(
            "{name}: {} records, {} triangles, {} packed bytes, normals at offset {:?}",
            mesh.vertex_count(),
            mesh.triangle_count(),
            packed.vertex_bytes().len(),
            packed.layout().offset_of(AttributeKind::Normal),
        );

        let gpu = GpuMesh::upload(backend.clone(), &mesh)?;

        // Flat shading: face normals are active from construction.
        gpu.draw(&NullShader)?;

        // Smooth shading: flip to the averaged normals and redraw.
        mesh.select_normals(NormalSource::Vertex);
        gpu.refresh_normals(&mesh)?;
        gpu.draw(&NullShader)?;

        gpu.release();
    }

    log::info!(
        "done: {} draws issued, {} buffers live",
        backend.draw_count(),
        backend.live_buffer_count()
    );
    Ok(())
}
