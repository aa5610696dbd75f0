//! Draws through a real device when one is available

use tesser_render::{
    context::COLOR_FORMAT, draw_geometry, upload_projection_matrix, upload_view_matrix, GpuError,
    GpuTarget, HeadlessContext, LineGeometry, UniformSlot, WireframePipeline,
};
use tesser_math::Vector4;

// Odd sizes put a pixel centre exactly on the view axis
const WIDTH: u32 = 65;
const HEIGHT: u32 = 49;

const RED: u32 = 0xFFFF0000;
const GREEN: u32 = 0xFF00FF00;
const RED_PIXEL: [u8; 4] = [255, 0, 0, 255];
const GREEN_PIXEL: [u8; 4] = [0, 255, 0, 255];
const BLACK_PIXEL: [u8; 4] = [0, 0, 0, 255];

fn context() -> Option<HeadlessContext> {
    match pollster::block_on(HeadlessContext::new(WIDTH, HEIGHT)) {
        Ok(ctx) => Some(ctx),
        Err(GpuError::NoAdapter) => {
            eprintln!("skipping: no GPU adapter");
            None
        }
        Err(e) => {
            eprintln!("skipping: {}", e);
            None
        }
    }
}

fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 4] {
    let i = ((y * WIDTH + x) * 4) as usize;
    [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
}

/// True if `color` is at (x, y) or one of its vertical neighbours
fn near(pixels: &[u8], x: u32, y: u32, color: [u8; 4]) -> bool {
    (y - 1..=y + 1).any(|row| pixel(pixels, x, row) == color)
}

fn draw(target: &mut GpuTarget<'_>, geometry: &LineGeometry, color: u32) {
    draw_geometry(target, &[0.0; 8], color, false, geometry.positions());
}

#[test]
fn test_lines_land_where_the_camera_puts_them() {
    let Some(ctx) = context() else { return };
    let mut pipeline = WireframePipeline::new(&ctx.device, COLOR_FORMAT, WIDTH, HEIGHT, 4);

    // A cross through the origin and a line two units above it
    let mut cross = LineGeometry::new();
    cross.add_line(Vector4::new(-1.0, 0.0, 0.0, 1.0), Vector4::new(1.0, 0.0, 0.0, 1.0));
    cross.add_line(Vector4::new(0.0, -1.0, 0.0, 1.0), Vector4::new(0.0, 1.0, 0.0, 1.0));
    let mut upper = LineGeometry::new();
    upper.add_line(Vector4::new(-1.0, 2.0, 0.0, 1.0), Vector4::new(1.0, 2.0, 0.0, 1.0));

    {
        let mut target = GpuTarget::new(&ctx.device, &ctx.queue, &mut pipeline, &ctx.target_view);
        target.clear(wgpu::Color::BLACK);
        upload_view_matrix(&mut target, UniformSlot::VIEW, 5.0, ctx.aspect_ratio(), 0.0, 0.0);
        upload_projection_matrix(&mut target, UniformSlot::PROJECTION);
        draw(&mut target, &cross, RED);
        draw(&mut target, &upper, GREEN);
    }
    let pixels = ctx.read_pixels().expect("readback");
    assert_eq!(pixels.len(), (WIDTH * HEIGHT * 4) as usize);

    let (cx, cy) = (WIDTH / 2, HEIGHT / 2);
    assert!(near(&pixels, cx, cy, RED_PIXEL), "centre pixel {:?}", pixel(&pixels, cx, cy));

    // y = 2 at distance 5 projects to NDC 0.4, which is row 14 counted from the top
    assert!(near(&pixels, cx, 14, GREEN_PIXEL));
    assert!(!near(&pixels, cx, HEIGHT - 1 - 14, GREEN_PIXEL));

    for (x, y) in [(0, 0), (WIDTH - 1, 0), (0, HEIGHT - 1), (WIDTH - 1, HEIGHT - 1)] {
        assert_eq!(pixel(&pixels, x, y), BLACK_PIXEL, "corner ({}, {})", x, y);
    }
}

#[test]
fn test_tesseract_grows_vertex_buffer() {
    let Some(ctx) = context() else { return };

    // Start below the tesseract's size so the vertex buffer has to grow
    let mut pipeline = WireframePipeline::new(&ctx.device, COLOR_FORMAT, WIDTH, HEIGHT, 4);
    let tesseract = LineGeometry::tesseract(1.0);

    {
        let mut target = GpuTarget::new(&ctx.device, &ctx.queue, &mut pipeline, &ctx.target_view);
        target.clear(wgpu::Color::BLACK);
        upload_view_matrix(&mut target, UniformSlot::VIEW, 5.0, ctx.aspect_ratio(), 0.3, 0.2);
        upload_projection_matrix(&mut target, UniformSlot::PROJECTION);
        draw_geometry(&mut target, &[0.0; 8], 0xFFFFFFFF, true, tesseract.positions());
    }
    let pixels = ctx.read_pixels().expect("readback");

    // 64 vertices drawn as 128 elements
    assert!(pipeline.vertex_buffer().size() >= 128 * 32);
    assert!(pixels.chunks_exact(4).any(|p| p == [255, 255, 255, 255]));
}
