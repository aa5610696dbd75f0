//! 4D Mathematics Library
//!
//! This crate provides the linear algebra behind the Tesser wireframe renderer.
//!
//! ## Core Types
//!
//! - [`Vector3`], [`Vector4`] - Fixed-size vectors indexed by [`Dimension`]
//! - [`Matrix`] - Square homogeneous matrix, [`Matrix4`] for 3D and [`Matrix5`] for 4D
//!
//! ## Builders
//!
//! - [`rotation`], [`translation`], [`scale`], [`transform_chain`] - Affine transforms
//! - [`ModelTransform`] - The fixed rotate-then-translate model matrix of one geometry
//! - [`view`], [`perspective`] - Camera matrices
//!
//! ## Geometry
//!
//! - [`LineGeometry`] - Line-list positions with a stride of four

mod vector;
mod matrix;
pub mod transform;
pub mod camera;
pub mod geometry;

pub use vector::{Dimension, Vector3, Vector4};
pub use matrix::{Matrix, Matrix4, Matrix5};
pub use transform::{rotation, scale, transform_chain, translation, ModelTransform, RotationPlane};
pub use camera::{perspective, view};
pub use geometry::{LineGeometry, POSITION_STRIDE};
