//! # polyfacet graphics
//!
//! Rendering-backend seam for polyfacet meshes.
//!
//! This crate provides:
//! - [`RenderBackend`] - Trait for backend implementations
//! - [`DummyBackend`] - Bookkeeping backend for tests and headless use
//! - [`GpuMesh`] - Uploaded mesh owning its backend handles
//! - [`ShaderProgram`] - Opaque shader capability consumed by draws
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use polyfacet_core::mesh::{generators, NormalSource};
//! use polyfacet_graphics::{DummyBackend, GpuMesh, NullShader};
//!
//! let backend = Arc::new(DummyBackend::new());
//! let mut mesh = generators::square_pyramid();
//! mesh.compute_vertex_normals();
//!
//! let gpu = GpuMesh::upload(backend, &mesh)?;
//! gpu.draw(&NullShader)?;
//!
//! mesh.select_normals(NormalSource::Vertex);
//! gpu.refresh_normals(&mesh)?;
//! gpu.draw(&NullShader)?;
//! # Ok::<(), polyfacet_graphics::GraphicsError>(())
//! ```

pub mod backend;
pub mod error;
pub mod mesh;
pub mod shader;
pub mod types;

// Re-export main types for convenience
pub use backend::{AttributePointer, BufferId, DummyBackend, RenderBackend, VertexArrayId};
pub use error::GraphicsError;
pub use mesh::GpuMesh;
pub use shader::{NullShader, ShaderProgram};
pub use types::{BufferDescriptor, BufferUsage};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library startup. Call once from the host application.
pub fn init() {
    log::info!("polyfacet graphics v{} initialized", VERSION);
}
