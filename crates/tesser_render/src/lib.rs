//! Wireframe rendering for 4D geometry
//!
//! This crate turns flat position buffers into line-list vertices and draws
//! them through wgpu.
//!
//! ## Key Components
//!
//! - [`draw`] - The per-frame entry points: view, projection and geometry draws
//! - [`target::RenderTarget`] - Where uniforms, vertices and draws go
//! - [`gpu_target::GpuTarget`] - A target backed by a wgpu device
//! - [`pipeline::WireframePipeline`] - Line-list pipeline with a camera uniform
//! - [`context::HeadlessContext`] - Device, queue and an offscreen texture
//!
//! Math types live in `tesser_math` and are re-exported here for convenience.

pub mod color;
pub mod context;
pub mod contract;
pub mod draw;
pub mod gpu_target;
pub mod pipeline;
pub mod target;

pub use color::{decode_rgb, Rgb};
pub use context::{GpuError, HeadlessContext};
pub use contract::{validate_clip_planes, validate_draw_inputs, ContractViolation};
pub use draw::{
    draw_geometry, upload_perspective_matrix, upload_projection_matrix, upload_view_matrix,
    FAR_PLANE, NEAR_PLANE, VECTORS_PER_VERTEX,
};
pub use gpu_target::GpuTarget;
pub use pipeline::{UniformSlot, Vertex, WireframePipeline};
pub use target::{DrawCall, RecordingTarget, RenderTarget};

// Re-export math types
pub use tesser_math::{LineGeometry, ModelTransform, RotationPlane};
