//! Render pipeline components
//!
//! GPU data layouts and the line-list pipeline that consumes them.

pub mod types;
pub mod wireframe_pipeline;

// Re-export types
pub use types::{CameraUniforms, UniformSlot, Vertex, VERTEX_SIZE};

// Re-export pipelines
pub use wireframe_pipeline::{vertex_buffer_size, WireframePipeline};
