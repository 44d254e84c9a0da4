//! Backend-facing value types.

mod buffer;

pub use buffer::{BufferDescriptor, BufferUsage};
