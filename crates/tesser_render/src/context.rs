//! Headless GPU context
//!
//! Owns the device, queue and an offscreen color texture. Hosts that present to
//! a window bring their own device and only need [`crate::GpuTarget`].

use std::fmt;

/// Color format of the offscreen target
pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Failure to bring up a GPU device
#[derive(Debug, Clone, PartialEq)]
pub enum GpuError {
    /// No adapter matched the request
    NoAdapter,
    /// The adapter refused to create a device
    RequestDevice(String),
    /// Mapping the readback buffer failed
    Readback(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::NoAdapter => write!(f, "no suitable GPU adapter found"),
            GpuError::RequestDevice(msg) => write!(f, "failed to create GPU device: {}", msg),
            GpuError::Readback(msg) => write!(f, "failed to read back target: {}", msg),
        }
    }
}

impl std::error::Error for GpuError {}

/// Device, queue and an offscreen render target
pub struct HeadlessContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub target_texture: wgpu::Texture,
    pub target_view: wgpu::TextureView,
    pub size: (u32, u32),
}

impl HeadlessContext {
    /// Create a context rendering into a `width` x `height` texture
    pub async fn new(width: u32, height: u32) -> Result<Self, GpuError> {
        let instance = wgpu::Instance::default();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("Using GPU adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Tesser Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| GpuError::RequestDevice(e.to_string()))?;

        let width = width.max(1);
        let height = height.max(1);
        let target_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Offscreen Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: COLOR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let target_view = target_texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self {
            device,
            queue,
            target_texture,
            target_view,
            size: (width, height),
        })
    }

    /// Width over height of the offscreen target
    pub fn aspect_ratio(&self) -> f64 {
        self.size.0 as f64 / self.size.1 as f64
    }

    /// Copy the offscreen target back to the CPU
    ///
    /// Returns tightly packed RGBA8 rows, top row first. Blocks until every
    /// submitted draw has finished.
    pub fn read_pixels(&self) -> Result<Vec<u8>, GpuError> {
        let (width, height) = self.size;
        let unpadded = width as usize * BYTES_PER_PIXEL;
        let padded = padded_bytes_per_row(width);

        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Readback Buffer"),
            size: padded as u64 * height as u64,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Readback Encoder"),
        });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.target_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(std::iter::once(encoder.finish()));

        let slice = buffer.slice(..);
        let (sender, receiver) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = sender.send(result);
        });
        let _ = self.device.poll(wgpu::Maintain::Wait);
        receiver
            .recv()
            .map_err(|e| GpuError::Readback(e.to_string()))?
            .map_err(|e| GpuError::Readback(e.to_string()))?;

        let mut pixels = Vec::with_capacity(unpadded * height as usize);
        {
            let mapped = slice.get_mapped_range();
            for row in mapped.chunks_exact(padded as usize) {
                pixels.extend_from_slice(&row[..unpadded]);
            }
        }
        buffer.unmap();

        Ok(pixels)
    }
}

const BYTES_PER_PIXEL: usize = 4;

/// Row pitch of a texture copy, rounded up to the copy alignment
fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * BYTES_PER_PIXEL as u32;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_error_display() {
        assert_eq!(GpuError::NoAdapter.to_string(), "no suitable GPU adapter found");
        let err = GpuError::RequestDevice("out of memory".to_string());
        assert!(err.to_string().contains("out of memory"));
    }

    #[test]
    fn test_padded_bytes_per_row() {
        assert_eq!(padded_bytes_per_row(1), 256);
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(640), 2560);
    }
}
