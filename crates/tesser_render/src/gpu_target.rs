//! [`RenderTarget`] backed by a wgpu device

use crate::pipeline::{UniformSlot, WireframePipeline};
use crate::target::RenderTarget;

/// Writes uniforms and vertices through a queue and draws with a [`WireframePipeline`]
///
/// Every draw is submitted immediately as its own command buffer, so a vertex
/// buffer replaced by a later draw never affects an earlier one.
pub struct GpuTarget<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    pipeline: &'a mut WireframePipeline,
    color_view: &'a wgpu::TextureView,
    staging: Vec<u8>,
}

impl<'a> GpuTarget<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        pipeline: &'a mut WireframePipeline,
        color_view: &'a wgpu::TextureView,
    ) -> Self {
        Self {
            device,
            queue,
            pipeline,
            color_view,
            staging: Vec::new(),
        }
    }

    /// Clear color and depth of the attached view
    pub fn clear(&mut self, color: wgpu::Color) {
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Clear Encoder"),
        });
        self.pipeline.clear(&mut encoder, self.color_view, color);
        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

impl RenderTarget for GpuTarget<'_> {
    fn upload_matrix(&mut self, slot: UniformSlot, coefficients: &[f32; 16]) {
        self.queue.write_buffer(
            self.pipeline.uniform_buffer(),
            slot.byte_offset(),
            bytemuck::cast_slice(coefficients),
        );
    }

    fn replace_vertices(&mut self, bytes: &[u8]) {
        self.staging.clear();
        self.staging.extend_from_slice(bytes);
    }

    fn draw_lines(&mut self, element_count: u32) {
        // The element count may exceed the vertices written; the tail reads zeros.
        let required = element_count as usize * crate::pipeline::VERTEX_SIZE;
        if self.staging.len() < required {
            self.staging.resize(required, 0);
        }
        if self.staging.is_empty() {
            return;
        }

        self.pipeline
            .ensure_vertex_capacity(self.device, self.staging.len() as u64);
        self.queue
            .write_buffer(self.pipeline.vertex_buffer(), 0, &self.staging);

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Wireframe Encoder"),
        });
        self.pipeline.draw(&mut encoder, self.color_view, element_count);
        self.queue.submit(std::iter::once(encoder.finish()));
    }
}
