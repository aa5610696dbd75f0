//! GPU-compatible data types for the wireframe pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

use crate::color::Rgb;

/// A line-list vertex with position and color
///
/// Layout (32 bytes): position and color are each padded to four floats so the
/// shader reads both as `vec4<f32>`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// Homogeneous w, always 1.0
    pub w: f32,
    /// RGB color
    pub color: [f32; 3],
    /// Opacity, always 1.0
    pub alpha: f32,
}

impl Vertex {
    /// Create an opaque vertex at `position`
    #[inline]
    pub fn new(position: [f32; 3], color: Rgb) -> Self {
        Self {
            position,
            w: 1.0,
            color: color.to_array(),
            alpha: 1.0,
        }
    }
}

/// Size of one [`Vertex`] in bytes
pub const VERTEX_SIZE: usize = std::mem::size_of::<Vertex>();

/// Camera uniforms for the wireframe pass
/// Layout: 128 bytes total (must match wireframe.wgsl CameraUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
}

impl Default for CameraUniforms {
    fn default() -> Self {
        const IDENTITY: [[f32; 4]; 4] = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        Self {
            view_matrix: IDENTITY,
            projection_matrix: IDENTITY,
        }
    }
}

/// Slot of a 4x4 matrix inside [`CameraUniforms`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniformSlot(pub u32);

impl UniformSlot {
    pub const VIEW: Self = Self(0);
    pub const PROJECTION: Self = Self(1);

    /// Size of one matrix slot in bytes
    pub const SIZE: u64 = std::mem::size_of::<[[f32; 4]; 4]>() as u64;

    /// Byte offset of this slot in the uniform buffer
    #[inline]
    pub fn byte_offset(self) -> u64 {
        self.0 as u64 * Self::SIZE
    }
}
