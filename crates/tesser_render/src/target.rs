//! Render targets
//!
//! A [`RenderTarget`] is the GPU state the entry points write into: a set of
//! matrix uniform slots, the currently bound vertex buffer, and a line-list draw.
//! The host owns and binds the target; the entry points only fill it.

use std::collections::BTreeMap;

use crate::pipeline::{UniformSlot, Vertex, VERTEX_SIZE};

/// Sink for uniforms, vertex bytes and draw calls
pub trait RenderTarget {
    /// Upload 16 row-major coefficients to a matrix uniform slot
    fn upload_matrix(&mut self, slot: UniformSlot, coefficients: &[f32; 16]);

    /// Replace the bound vertex buffer's contents with `bytes`
    fn replace_vertices(&mut self, bytes: &[u8]);

    /// Draw `element_count` vertices from the bound buffer as a line list
    fn draw_lines(&mut self, element_count: u32);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn upload_matrix(&mut self, slot: UniformSlot, coefficients: &[f32; 16]) {
        (**self).upload_matrix(slot, coefficients);
    }

    fn replace_vertices(&mut self, bytes: &[u8]) {
        (**self).replace_vertices(bytes);
    }

    fn draw_lines(&mut self, element_count: u32) {
        (**self).draw_lines(element_count);
    }
}

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    /// Element count passed to the draw
    pub element_count: u32,
    /// Vertices in the buffer at draw time
    pub vertices: Vec<Vertex>,
}

/// Target that records everything instead of talking to a GPU
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    uniforms: BTreeMap<UniformSlot, [f32; 16]>,
    buffer: Vec<u8>,
    draws: Vec<DrawCall>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last matrix uploaded to `slot`
    pub fn uniform(&self, slot: UniformSlot) -> Option<&[f32; 16]> {
        self.uniforms.get(&slot)
    }

    /// Raw contents of the vertex buffer
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Vertex buffer contents decoded as vertices
    pub fn vertices(&self) -> Vec<Vertex> {
        decode_vertices(&self.buffer)
    }

    /// All draws in call order
    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Forget recorded draws and buffer contents, keep uniforms
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.draws.clear();
    }
}

impl RenderTarget for RecordingTarget {
    fn upload_matrix(&mut self, slot: UniformSlot, coefficients: &[f32; 16]) {
        self.uniforms.insert(slot, *coefficients);
    }

    fn replace_vertices(&mut self, bytes: &[u8]) {
        self.buffer.clear();
        self.buffer.extend_from_slice(bytes);
    }

    fn draw_lines(&mut self, element_count: u32) {
        let vertices = decode_vertices(&self.buffer);
        self.draws.push(DrawCall { element_count, vertices });
    }
}

fn decode_vertices(bytes: &[u8]) -> Vec<Vertex> {
    bytes
        .chunks_exact(VERTEX_SIZE)
        .map(bytemuck::pod_read_unaligned)
        .collect()
}
