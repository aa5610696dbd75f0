//! Tesser - 4D wireframe renderer
//!
//! Application layer on top of `tesser_math` and `tesser_render`: configuration
//! loading and the animated demo scene the binary draws.

pub mod config;
pub mod scene;
