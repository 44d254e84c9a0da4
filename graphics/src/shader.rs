//! Opaque shader capability.
//!
//! Meshes do not compile or own shaders; a draw only needs something
//! it can activate before issuing the call. Hosts wrap their real
//! pipeline objects in this trait.

/// A shader program as seen from a draw call.
pub trait ShaderProgram {
    /// Make this program current on the backend.
    fn activate(&self);
}

/// Shader that activates nothing. Useful with [`crate::DummyBackend`]
/// and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullShader;

impl ShaderProgram for NullShader {
    fn activate(&self) {
        log::trace!("NullShader: activate");
    }
}
