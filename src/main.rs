//! Tesser - headless 4D wireframe renderer
//!
//! Renders the configured demo scene into an offscreen texture for a fixed
//! number of frames.

use std::error::Error;

use tesser::config::AppConfig;
use tesser::scene::Scene;
use tesser_render::{context::COLOR_FORMAT, GpuTarget, HeadlessContext, WireframePipeline};

fn main() {
    // Load configuration before logging so its level can seed the filter
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Tesser");

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            log::error!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let render = &config.render;
    let context = pollster::block_on(HeadlessContext::new(render.width, render.height))?;
    let mut pipeline = WireframePipeline::new(
        &context.device,
        COLOR_FORMAT,
        context.size.0,
        context.size.1,
        render.initial_vertex_capacity,
    );

    let mut scene = Scene::from_config(config);
    let aspect_ratio = context.aspect_ratio();
    let clear_color = clear_color(render.clear_color);

    for frame in 0..render.frames {
        let mut target = GpuTarget::new(
            &context.device,
            &context.queue,
            &mut pipeline,
            &context.target_view,
        );
        target.clear(clear_color);
        scene.draw(&mut target, aspect_ratio);
        scene.advance();

        log::debug!("Frame {} submitted", frame);
    }

    let pixels = context.read_pixels()?;
    let background = pixels.get(..4).unwrap_or_default();
    let drawn = pixels.chunks_exact(4).filter(|p| *p != background).count();
    log::info!("Final frame: {} of {} pixels differ from the top-left pixel", drawn, pixels.len() / 4);

    log::info!(
        "Rendered {} frames of {} objects at {}x{}",
        render.frames,
        scene.objects.len(),
        context.size.0,
        context.size.1
    );
    Ok(())
}

/// Convert a packed 0xAARRGGBB color to a wgpu clear color
fn clear_color(packed: u32) -> wgpu::Color {
    let rgb = tesser_render::decode_rgb(packed);
    wgpu::Color {
        r: rgb.red as f64,
        g: rgb.green as f64,
        b: rgb.blue as f64,
        a: ((packed >> 24) & 0xFF) as f64 / 255.0,
    }
}
