//! GPU-side mesh.
//!
//! A [`GpuMesh`] owns the backend handles for one uploaded
//! [`FacetedMesh`]: a single attribute-major vertex buffer, an index
//! buffer, and a vertex-array object carrying the attribute
//! declarations. Handles are destroyed exactly once, on drop; because
//! release consumes the mesh, double-release and draw-after-release
//! cannot be expressed.

use std::sync::Arc;

use polyfacet_core::mesh::{AttributeKind, FacetedMesh, IndexFormat, PackedLayout, PackedMesh};

use crate::backend::{AttributePointer, BufferId, RenderBackend, VertexArrayId};
use crate::error::GraphicsError;
use crate::shader::ShaderProgram;
use crate::types::{BufferDescriptor, BufferUsage};

/// A mesh uploaded to a rendering backend.
///
/// Created by [`GpuMesh::upload`]; exclusively owns its backend
/// handles until dropped or explicitly [released](GpuMesh::release).
pub struct GpuMesh {
    backend: Arc<dyn RenderBackend>,
    vertex_buffer: BufferId,
    index_buffer: BufferId,
    vertex_array: VertexArrayId,
    layout: PackedLayout,
    index_count: u32,
    index_format: IndexFormat,
    label: Option<String>,
}

impl GpuMesh {
    /// Pack `mesh` and upload it to `backend`.
    ///
    /// Uses 16-bit indices when the vertex-record count allows it,
    /// 32-bit otherwise.
    ///
    /// # Errors
    ///
    /// Propagates backend allocation and upload failures unchanged.
    pub fn upload(
        backend: Arc<dyn RenderBackend>,
        mesh: &FacetedMesh,
    ) -> Result<Self, GraphicsError> {
        let format = if mesh.vertex_count() <= u16::MAX as usize + 1 {
            IndexFormat::Uint16
        } else {
            IndexFormat::Uint32
        };
        // The format was just chosen to fit, so packing cannot fail.
        let packed = mesh
            .pack_with_format(format)
            .map_err(|e| GraphicsError::InvalidParameter(e.to_string()))?;
        Self::upload_packed(backend, &packed, None)
    }

    /// Upload an already packed mesh to `backend`.
    ///
    /// Creates one vertex buffer of the layout's total size and writes
    /// each attribute section at its recorded offset, creates the
    /// index buffer, and declares one attribute pointer per section.
    ///
    /// # Errors
    ///
    /// Propagates backend failures unchanged. Handles created before a
    /// failure are destroyed before the error is returned.
    pub fn upload_packed(
        backend: Arc<dyn RenderBackend>,
        packed: &PackedMesh,
        label: Option<String>,
    ) -> Result<Self, GraphicsError> {
        let layout = packed.layout().clone();

        let vertex_buffer = backend.create_buffer(
            &BufferDescriptor::new(
                layout.total_size() as u64,
                BufferUsage::VERTEX | BufferUsage::COPY_DST,
            )
            .with_label(label.clone().unwrap_or_else(|| "mesh_vertices".to_string())),
        )?;

        let rest = (|| {
            for section in layout.sections() {
                backend.write_buffer(
                    vertex_buffer,
                    section.offset as u64,
                    &packed.vertex_bytes()[section.offset..section.end()],
                )?;
            }

            let index_buffer = backend.create_buffer(
                &BufferDescriptor::new(
                    packed.index_bytes().len() as u64,
                    BufferUsage::INDEX | BufferUsage::COPY_DST,
                )
                .with_label(label.clone().unwrap_or_else(|| "mesh_indices".to_string())),
            )?;

            let array = match Self::bind(&*backend, vertex_buffer, index_buffer, packed) {
                Ok(array) => array,
                Err(e) => {
                    backend.destroy_buffer(index_buffer);
                    return Err(e);
                }
            };
            Ok((index_buffer, array))
        })();

        let (index_buffer, vertex_array) = match rest {
            Ok(handles) => handles,
            Err(e) => {
                backend.destroy_buffer(vertex_buffer);
                return Err(e);
            }
        };

        log::trace!(
            "GpuMesh: uploaded {:?} ({} vertex bytes, {} indices)",
            label,
            packed.vertex_bytes().len(),
            packed.index_count()
        );

        Ok(Self {
            backend,
            vertex_buffer,
            index_buffer,
            vertex_array,
            layout,
            index_count: packed.index_count(),
            index_format: packed.index_format(),
            label,
        })
    }

    fn bind(
        backend: &dyn RenderBackend,
        vertex_buffer: BufferId,
        index_buffer: BufferId,
        packed: &PackedMesh,
    ) -> Result<VertexArrayId, GraphicsError> {
        backend.write_buffer(index_buffer, 0, packed.index_bytes())?;

        let array = backend.create_vertex_array()?;
        let attributes: Vec<AttributePointer> = packed
            .layout()
            .sections()
            .iter()
            .map(AttributePointer::from_section)
            .collect();

        let bound = backend
            .bind_attributes(array, vertex_buffer, &attributes)
            .and_then(|()| backend.bind_index_buffer(array, index_buffer, packed.index_format()));
        if let Err(e) = bound {
            backend.destroy_vertex_array(array);
            return Err(e);
        }
        Ok(array)
    }

    /// Activate `shader` and issue one indexed triangle-list draw over
    /// the full index list.
    ///
    /// # Errors
    ///
    /// Propagates backend failures unchanged, including
    /// [`GraphicsError::NotInitialized`] if the backend reports the
    /// vertex array unbound.
    pub fn draw(&self, shader: &dyn ShaderProgram) -> Result<(), GraphicsError> {
        shader.activate();
        self.backend.draw_indexed(self.vertex_array, self.index_count)
    }

    /// Rewrite the normal section from `mesh`'s active normals.
    ///
    /// Call after [`FacetedMesh::select_normals`] so the uploaded
    /// buffer reflects the newly active array; no other section is
    /// touched and nothing is reallocated.
    ///
    /// # Errors
    ///
    /// Returns an error if `mesh` no longer matches the uploaded
    /// layout, or on backend write failure.
    pub fn refresh_normals(&self, mesh: &FacetedMesh) -> Result<(), GraphicsError> {
        let section = self
            .layout
            .section(AttributeKind::Normal)
            .ok_or_else(|| GraphicsError::InvalidParameter("layout has no normal section".to_string()))?;
        let bytes: &[u8] = bytemuck::cast_slice(mesh.active_normals());
        if bytes.len() != section.byte_len {
            return Err(GraphicsError::InvalidParameter(format!(
                "normal data of {} bytes does not match uploaded section of {} bytes",
                bytes.len(),
                section.byte_len
            )));
        }
        self.backend
            .write_buffer(self.vertex_buffer, section.offset as u64, bytes)
    }

    /// Get the uploaded section table.
    pub fn layout(&self) -> &PackedLayout {
        &self.layout
    }

    /// Get the number of indices drawn per call.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Get the index format.
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    /// Get the mesh label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Release the backend handles now.
    ///
    /// Consumes the mesh, so a second release or a draw after release
    /// does not typecheck; dropping without calling this releases the
    /// same handles once.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for GpuMesh {
    fn drop(&mut self) {
        log::trace!("GpuMesh: releasing {:?}", self.label);
        self.backend.destroy_vertex_array(self.vertex_array);
        self.backend.destroy_buffer(self.index_buffer);
        self.backend.destroy_buffer(self.vertex_buffer);
    }
}

impl std::fmt::Debug for GpuMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuMesh")
            .field("label", &self.label)
            .field("index_count", &self.index_count)
            .field("index_format", &self.index_format)
            .field("sections", &self.layout.sections().len())
            .finish()
    }
}

static_assertions::assert_impl_all!(GpuMesh: Send, Sync);
