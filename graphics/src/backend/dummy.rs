//! Dummy rendering backend for testing and headless use.
//!
//! Performs no GPU work but keeps full bookkeeping: allocation sizes,
//! write bounds, attribute bindings, and draw preconditions are all
//! checked, so the mesh/backend contract is testable without hardware.

use std::collections::HashMap;
use std::sync::RwLock;

use polyfacet_core::mesh::IndexFormat;

use crate::error::GraphicsError;
use crate::types::BufferDescriptor;

use super::{AttributePointer, BufferId, RenderBackend, VertexArrayId};

/// A buffer as the dummy backend tracks it.
#[derive(Debug)]
struct BufferRecord {
    size: u64,
    label: Option<String>,
}

/// A vertex array as the dummy backend tracks it.
#[derive(Debug, Default)]
struct VertexArrayRecord {
    vertex_buffer: Option<BufferId>,
    attributes: Vec<AttributePointer>,
    index_buffer: Option<(BufferId, IndexFormat)>,
}

#[derive(Debug, Default)]
struct DummyState {
    next_id: u64,
    buffers: HashMap<u64, BufferRecord>,
    arrays: HashMap<u64, VertexArrayRecord>,
    draw_count: u64,
}

impl DummyState {
    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Bookkeeping backend with no GPU behind it.
#[derive(Debug, Default)]
pub struct DummyBackend {
    state: RwLock<DummyState>,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of live (created, not yet destroyed) buffers.
    pub fn live_buffer_count(&self) -> usize {
        self.state.read().map(|s| s.buffers.len()).unwrap_or(0)
    }

    /// Get the number of live vertex arrays.
    pub fn live_vertex_array_count(&self) -> usize {
        self.state.read().map(|s| s.arrays.len()).unwrap_or(0)
    }

    /// Get the number of draws issued so far.
    pub fn draw_count(&self) -> u64 {
        self.state.read().map(|s| s.draw_count).unwrap_or(0)
    }
}

impl RenderBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferId, GraphicsError> {
        if descriptor.size == 0 {
            return Err(GraphicsError::InvalidParameter(
                "buffer size cannot be zero".to_string(),
            ));
        }
        let mut state = self
            .state
            .write()
            .map_err(|_| GraphicsError::ResourceCreationFailed("state poisoned".to_string()))?;
        let id = state.fresh_id();
        state.buffers.insert(
            id,
            BufferRecord {
                size: descriptor.size,
                label: descriptor.label.clone(),
            },
        );
        log::trace!(
            "DummyBackend: created buffer {:?} (id {}, size {})",
            descriptor.label,
            id,
            descriptor.size
        );
        Ok(BufferId::from_raw(id))
    }

    fn write_buffer(
        &self,
        buffer: BufferId,
        offset: u64,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        let state = self
            .state
            .read()
            .map_err(|_| GraphicsError::InvalidHandle("state poisoned".to_string()))?;
        let record = state
            .buffers
            .get(&buffer.as_raw())
            .ok_or_else(|| GraphicsError::InvalidHandle(format!("buffer {}", buffer.as_raw())))?;
        let end = offset + data.len() as u64;
        if end > record.size {
            return Err(GraphicsError::InvalidParameter(format!(
                "write of {} bytes at offset {} overruns buffer of {} bytes",
                data.len(),
                offset,
                record.size
            )));
        }
        log::trace!(
            "DummyBackend: write_buffer {:?} (id {}) offset={} len={}",
            record.label,
            buffer.as_raw(),
            offset,
            data.len()
        );
        Ok(())
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId, GraphicsError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| GraphicsError::ResourceCreationFailed("state poisoned".to_string()))?;
        let id = state.fresh_id();
        state.arrays.insert(id, VertexArrayRecord::default());
        log::trace!("DummyBackend: created vertex array (id {id})");
        Ok(VertexArrayId::from_raw(id))
    }

    fn bind_attributes(
        &self,
        array: VertexArrayId,
        buffer: BufferId,
        attributes: &[AttributePointer],
    ) -> Result<(), GraphicsError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| GraphicsError::InvalidHandle("state poisoned".to_string()))?;
        if !state.buffers.contains_key(&buffer.as_raw()) {
            return Err(GraphicsError::InvalidHandle(format!(
                "buffer {}",
                buffer.as_raw()
            )));
        }
        let record = state
            .arrays
            .get_mut(&array.as_raw())
            .ok_or_else(|| GraphicsError::InvalidHandle(format!("vertex array {}", array.as_raw())))?;
        record.vertex_buffer = Some(buffer);
        record.attributes = attributes.to_vec();
        log::trace!(
            "DummyBackend: bound {} attributes on array {}",
            attributes.len(),
            array.as_raw()
        );
        Ok(())
    }

    fn bind_index_buffer(
        &self,
        array: VertexArrayId,
        buffer: BufferId,
        format: IndexFormat,
    ) -> Result<(), GraphicsError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| GraphicsError::InvalidHandle("state poisoned".to_string()))?;
        if !state.buffers.contains_key(&buffer.as_raw()) {
            return Err(GraphicsError::InvalidHandle(format!(
                "buffer {}",
                buffer.as_raw()
            )));
        }
        let record = state
            .arrays
            .get_mut(&array.as_raw())
            .ok_or_else(|| GraphicsError::InvalidHandle(format!("vertex array {}", array.as_raw())))?;
        record.index_buffer = Some((buffer, format));
        Ok(())
    }

    fn draw_indexed(&self, array: VertexArrayId, index_count: u32) -> Result<(), GraphicsError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| GraphicsError::InvalidHandle("state poisoned".to_string()))?;
        let record = state
            .arrays
            .get(&array.as_raw())
            .ok_or_else(|| GraphicsError::InvalidHandle(format!("vertex array {}", array.as_raw())))?;
        if record.vertex_buffer.is_none() || record.index_buffer.is_none() {
            return Err(GraphicsError::NotInitialized);
        }
        state.draw_count += 1;
        log::trace!(
            "DummyBackend: draw_indexed array {} ({index_count} indices)",
            array.as_raw()
        );
        Ok(())
    }

    fn destroy_buffer(&self, buffer: BufferId) {
        if let Ok(mut state) = self.state.write() {
            if state.buffers.remove(&buffer.as_raw()).is_some() {
                log::trace!("DummyBackend: destroyed buffer {}", buffer.as_raw());
            } else {
                log::warn!(
                    "DummyBackend: destroy of unknown buffer {}",
                    buffer.as_raw()
                );
            }
        }
    }

    fn destroy_vertex_array(&self, array: VertexArrayId) {
        if let Ok(mut state) = self.state.write() {
            if state.arrays.remove(&array.as_raw()).is_some() {
                log::trace!("DummyBackend: destroyed vertex array {}", array.as_raw());
            } else {
                log::warn!(
                    "DummyBackend: destroy of unknown vertex array {}",
                    array.as_raw()
                );
            }
        }
    }
}
