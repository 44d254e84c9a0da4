//! Rendering backend abstraction.
//!
//! The [`RenderBackend`] trait is the boundary between mesh code and
//! whatever actually renders: it covers buffer allocation, section
//! uploads, attribute-layout declaration, indexed drawing, and handle
//! destruction. The in-tree implementation is [`DummyBackend`], which
//! performs full bookkeeping without touching GPU hardware; real
//! backends live with the host application.

pub mod dummy;

pub use dummy::DummyBackend;

use polyfacet_core::mesh::{AttributeSection, IndexFormat};

use crate::error::GraphicsError;
use crate::types::BufferDescriptor;

/// Opaque handle to a backend buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

impl BufferId {
    /// Wrap a raw backend identifier.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw backend identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Opaque handle to a backend vertex-array object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayId(u64);

impl VertexArrayId {
    /// Wrap a raw backend identifier.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw backend identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// One attribute declaration within a vertex array: which shader slot
/// reads how many float components from which byte offset of the
/// bound vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributePointer {
    /// Shader input slot.
    pub slot: u32,
    /// Number of float components per element.
    pub components: u32,
    /// Byte offset of the attribute section within the buffer.
    pub offset: usize,
}

impl AttributePointer {
    /// Build a pointer from a packed-layout section.
    pub fn from_section(section: &AttributeSection) -> Self {
        Self {
            slot: section.kind.slot(),
            components: section.format.components(),
            offset: section.offset,
        }
    }
}

/// Rendering backend capability consumed by [`crate::mesh::GpuMesh`].
///
/// All methods are synchronous; failures are returned to the caller
/// unchanged and never retried. Destruction is infallible, mirroring
/// the delete calls of the underlying APIs.
pub trait RenderBackend: Send + Sync {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Allocate a buffer.
    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferId, GraphicsError>;

    /// Write `data` into a buffer at `offset`.
    fn write_buffer(&self, buffer: BufferId, offset: u64, data: &[u8])
        -> Result<(), GraphicsError>;

    /// Allocate a vertex-array object.
    fn create_vertex_array(&self) -> Result<VertexArrayId, GraphicsError>;

    /// Declare the attribute layout of `array`, reading from `buffer`.
    fn bind_attributes(
        &self,
        array: VertexArrayId,
        buffer: BufferId,
        attributes: &[AttributePointer],
    ) -> Result<(), GraphicsError>;

    /// Attach an index buffer to `array`.
    fn bind_index_buffer(
        &self,
        array: VertexArrayId,
        buffer: BufferId,
        format: IndexFormat,
    ) -> Result<(), GraphicsError>;

    /// Issue one indexed triangle-list draw over `index_count` indices.
    ///
    /// Fails with [`GraphicsError::NotInitialized`] if `array` has no
    /// bound vertex or index buffer.
    fn draw_indexed(&self, array: VertexArrayId, index_count: u32) -> Result<(), GraphicsError>;

    /// Release a buffer.
    fn destroy_buffer(&self, buffer: BufferId);

    /// Release a vertex-array object.
    fn destroy_vertex_array(&self, array: VertexArrayId);
}
