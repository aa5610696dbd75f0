//! Demo scene
//!
//! A scene is a list of line geometries, each with its own model transform and
//! color, viewed by an orbiting camera. The host advances it once per frame and
//! draws it into any [`RenderTarget`].

use tesser_math::{LineGeometry, ModelTransform};
use tesser_render::{
    draw_geometry, upload_projection_matrix, upload_view_matrix, RenderTarget, UniformSlot,
};

use crate::config::{AppConfig, CameraConfig, ShapeKind};

const AXES_COLOR: u32 = 0xFFFF4040;
const GRID_COLOR: u32 = 0xFF404040;
const GRID_HALF_EXTENT: i32 = 5;
/// Grid sits just below the main shape
const GRID_HEIGHT: f64 = -1.5;

/// One drawable object
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub geometry: LineGeometry,
    pub transform: ModelTransform,
    /// Radians added to each rotation angle per frame, [x, y, z, q]
    pub rotation_speed: [f64; 4],
    /// Packed 0xAARRGGBB
    pub color: u32,
}

impl SceneObject {
    /// A static object at the origin
    pub fn new(name: impl Into<String>, geometry: LineGeometry, color: u32) -> Self {
        Self {
            name: name.into(),
            geometry,
            transform: ModelTransform::default(),
            rotation_speed: [0.0; 4],
            color,
        }
    }

    pub fn with_translation(mut self, translation: [f64; 4]) -> Self {
        self.transform.translation = translation;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: [f64; 4]) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Step the rotation by one frame, wrapping angles into [0, 2π)
    pub fn advance(&mut self) {
        for (angle, speed) in self.transform.rotation.iter_mut().zip(self.rotation_speed) {
            *angle = (*angle + speed).rem_euclid(std::f64::consts::TAU);
        }
    }

    /// Draw through the vertex pipeline
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        draw_geometry(
            target,
            &self.transform.to_descriptor(),
            self.color,
            self.geometry.is_four_dimensional(),
            self.geometry.positions(),
        );
    }
}

/// Camera orbiting the origin at a fixed distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub distance: f64,
    pub horizontal_angle: f64,
    pub vertical_angle: f64,
    pub orbit_speed: f64,
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            distance: config.distance,
            horizontal_angle: config.horizontal_angle,
            vertical_angle: config.vertical_angle,
            orbit_speed: config.orbit_speed,
        }
    }

    pub fn advance(&mut self) {
        self.horizontal_angle = (self.horizontal_angle + self.orbit_speed).rem_euclid(std::f64::consts::TAU);
    }

    /// Upload view and projection into their slots
    pub fn upload<T: RenderTarget + ?Sized>(&self, target: &mut T, aspect_ratio: f64) {
        upload_view_matrix(
            target,
            UniformSlot::VIEW,
            self.distance,
            aspect_ratio,
            self.horizontal_angle,
            self.vertical_angle,
        );
        upload_projection_matrix(target, UniformSlot::PROJECTION);
    }
}

/// Objects plus the camera looking at them
#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub camera: OrbitCamera,
}

impl Scene {
    /// Build the demo scene described by `config`
    pub fn from_config(config: &AppConfig) -> Self {
        let scene = &config.scene;
        let shape = match scene.shape {
            ShapeKind::Tesseract => LineGeometry::tesseract(scene.size),
            ShapeKind::Cube => LineGeometry::cube(scene.size),
        };

        let mut objects = vec![SceneObject::new("shape", shape, scene.color)
            .with_translation(scene.translation)
            .with_rotation_speed(scene.rotation_speed)];

        if scene.show_axes {
            objects.push(SceneObject::new("axes", LineGeometry::axes(), AXES_COLOR));
        }
        if scene.show_grid {
            objects.push(
                SceneObject::new("grid", LineGeometry::grid(GRID_HALF_EXTENT), GRID_COLOR)
                    .with_translation([0.0, GRID_HEIGHT, 0.0, 0.0]),
            );
        }

        log::debug!(
            "Built scene with {} objects ({} lines)",
            objects.len(),
            objects.iter().map(|o| o.geometry.line_count()).sum::<usize>()
        );

        Self {
            objects,
            camera: OrbitCamera::from_config(&config.camera),
        }
    }

    /// Look up an object by name
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Step animation by one frame
    pub fn advance(&mut self) {
        self.camera.advance();
        for object in &mut self.objects {
            object.advance();
        }
    }

    /// Upload the camera and draw every object
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T, aspect_ratio: f64) {
        self.camera.upload(target, aspect_ratio);
        for object in &self.objects {
            object.draw(target);
        }
    }
}
