//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TESSER_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Offscreen target and frame loop
    #[serde(default)]
    pub render: RenderConfig,
    /// Orbital camera
    #[serde(default)]
    pub camera: CameraConfig,
    /// Demo scene contents
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TESSER_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TESSER_CAMERA__DISTANCE=8 -> camera.distance = 8.0
        figment = figment.merge(Env::prefixed("TESSER_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Offscreen render configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Number of frames to render
    pub frames: u32,
    /// Background color, packed 0xAARRGGBB
    pub clear_color: u32,
    /// Vertices the GPU buffer holds before it has to grow
    pub initial_vertex_capacity: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frames: 120,
            clear_color: 0xFF05050F,
            initial_vertex_capacity: 1024,
        }
    }
}

/// Orbital camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the orbit centre
    pub distance: f64,
    /// Starting angle around the vertical axis, radians
    pub horizontal_angle: f64,
    /// Starting elevation, radians
    pub vertical_angle: f64,
    /// Horizontal angle added per frame, radians
    pub orbit_speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 6.0,
            horizontal_angle: 0.0,
            vertical_angle: 0.35,
            orbit_speed: 0.01,
        }
    }
}

/// Shape drawn by the demo scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Tesseract,
    Cube,
}

/// Demo scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Main shape
    pub shape: ShapeKind,
    /// Edge length of the main shape
    pub size: f64,
    /// Main shape color, packed 0xAARRGGBB
    pub color: u32,
    /// Rotation added per frame [x, y, z, q], radians
    pub rotation_speed: [f64; 4],
    /// Fixed translation [x, y, z, q]
    pub translation: [f64; 4],
    /// Draw unit axes
    pub show_axes: bool,
    /// Draw a floor grid
    pub show_grid: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Tesseract,
            size: 2.0,
            color: 0xFF33CCFF,
            rotation_speed: [0.0, 0.01, 0.0, 0.02],
            translation: [0.0; 4],
            show_axes: true,
            show_grid: false,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
