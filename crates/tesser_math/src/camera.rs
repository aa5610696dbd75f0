//! View and projection matrix builders
//!
//! Both builders follow the crate-wide row-vector convention. View space looks
//! down -Z; the projection maps the near plane to depth 0 and the far plane to
//! depth 1, matching the wgpu depth range.

use crate::{rotation, scale, transform_chain, translation, Matrix4, RotationPlane, Vector3};

/// View matrix of a camera orbiting the origin
///
/// The world is turned by `horizontal_angle` about Y and by `vertical_angle`
/// about X, pushed `distance` units away from the eye along -Z, and squeezed on
/// X by `aspect_ratio` (width / height) so the image is not stretched on wide
/// targets.
pub fn view(horizontal_angle: f64, vertical_angle: f64, distance: f64, aspect_ratio: f64) -> Matrix4 {
    transform_chain([
        rotation(RotationPlane::AroundY, horizontal_angle),
        rotation(RotationPlane::AroundX, vertical_angle),
        translation(Vector3::new(0.0, 0.0, -distance)),
        scale(Vector3::new(1.0 / aspect_ratio, 1.0, 1.0)),
    ])
}

/// Perspective projection with a fixed 90° field of view
///
/// A view-space point at `z = -near` lands at depth 0, one at `z = -far` at
/// depth 1. X and Y are divided by the distance from the eye.
///
/// Requires `0 < near < far`; anything else gives a degenerate matrix.
pub fn perspective(near: f64, far: f64) -> Matrix4 {
    debug_assert!(near > 0.0 && far > near, "invalid clip planes near={near} far={far}");

    let mut m = Matrix4::identity();
    m[(2, 2)] = -far / (far - near);
    m[(3, 2)] = -(far * near) / (far - near);
    m[(2, 3)] = -1.0;
    m[(3, 3)] = 0.0;
    m
}
