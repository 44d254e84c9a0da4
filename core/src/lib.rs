//! # polyfacet core
//!
//! CPU-side geometry for flat-shaded polyhedral meshes: construction,
//! vertex-normal averaging, and attribute-major buffer packing.

pub mod error;
pub mod math;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library startup. Call once from the host application.
pub fn init() {
    log::info!("polyfacet core v{} initialized", VERSION);
}
