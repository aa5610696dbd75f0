//! Entry points called by the host once per frame
//!
//! - [`upload_view_matrix`] and [`upload_projection_matrix`] fill the camera
//!   uniform slots.
//! - [`draw_geometry`] runs one geometry through the vertex pipeline and draws
//!   it as a line list.
//!
//! All three run to completion on the calling thread. The target is assumed to
//! be bound by the host; nothing here creates or releases GPU resources.

use tesser_math::{perspective, view, ModelTransform, Vector4, POSITION_STRIDE};

use crate::color::decode_rgb;
use crate::contract::{validate_clip_planes, validate_draw_inputs};
use crate::pipeline::{UniformSlot, Vertex};
use crate::target::RenderTarget;

/// Near clip plane of the projection
pub const NEAR_PLANE: f64 = 0.1;
/// Far clip plane of the projection
pub const FAR_PLANE: f64 = 100.0;

/// Draw elements issued per emitted vertex
pub const VECTORS_PER_VERTEX: usize = 2;

/// Build the orbital view matrix and upload it to `slot`
pub fn upload_view_matrix<T: RenderTarget + ?Sized>(
    target: &mut T,
    slot: UniformSlot,
    distance: f64,
    aspect_ratio: f64,
    horizontal_angle: f64,
    vertical_angle: f64,
) {
    let matrix = view(horizontal_angle, vertical_angle, distance, aspect_ratio);
    target.upload_matrix(slot, &matrix.to_uniform());
}

/// Build the projection matrix for [`NEAR_PLANE`] and [`FAR_PLANE`] and upload it to `slot`
pub fn upload_projection_matrix<T: RenderTarget + ?Sized>(target: &mut T, slot: UniformSlot) {
    upload_perspective_matrix(target, slot, NEAR_PLANE, FAR_PLANE);
}

/// Build a projection matrix for arbitrary clip planes and upload it to `slot`
pub fn upload_perspective_matrix<T: RenderTarget + ?Sized>(
    target: &mut T,
    slot: UniformSlot,
    near: f64,
    far: f64,
) {
    if cfg!(debug_assertions) {
        if let Err(violation) = validate_clip_planes(near, far) {
            panic!("upload_perspective_matrix: {}", violation);
        }
    }

    let matrix = perspective(near, far);
    target.upload_matrix(slot, &matrix.to_uniform());
}

/// Transform, project and draw one geometry
///
/// `transform` is the eight-value descriptor
/// `[rotX, rotY, rotZ, rotQ, transX, transY, transZ, transQ]`, `color` a packed
/// `0xAARRGGBB` word, and `positions` a flat buffer with a stride of four.
///
/// The target's vertex buffer is replaced with one vertex per position, then a
/// line list of `positions * VECTORS_PER_VERTEX` elements is drawn.
pub fn draw_geometry<T: RenderTarget + ?Sized>(
    target: &mut T,
    transform: &[f64],
    color: u32,
    four_dimensional: bool,
    positions: &[f64],
) {
    if cfg!(debug_assertions) {
        if let Err(violation) = validate_draw_inputs(transform, positions) {
            panic!("draw_geometry: {}", violation);
        }
    }

    let model = ModelTransform::from_descriptor(transform);
    let vertices = build_vertices(&model, color, four_dimensional, positions);
    // Checked by validate_draw_inputs in debug builds
    let element_count = (vertices.len() * VECTORS_PER_VERTEX) as u32;

    log::trace!(
        "draw_geometry: {} vertices, {} elements, 4d={}",
        vertices.len(),
        element_count,
        four_dimensional
    );

    target.replace_vertices(bytemuck::cast_slice(&vertices));
    target.draw_lines(element_count);
}

/// Run positions through the model matrix and pack them into vertices
///
/// Four-dimensional positions are projected by dividing x, y and z by q after
/// the model transform. Other positions drop q.
pub fn build_vertices(
    model: &ModelTransform,
    color: u32,
    four_dimensional: bool,
    positions: &[f64],
) -> Vec<Vertex> {
    let matrix = model.matrix();
    let color = decode_rgb(color);

    positions
        .chunks_exact(POSITION_STRIDE)
        .map(|p| {
            let position = Vector4::new(p[0], p[1], p[2], p[3]) * matrix;
            let visualized = if four_dimensional {
                position.project()
            } else {
                position.xyz()
            };
            Vertex::new(visualized.to_f32(), color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::RecordingTarget;
    use std::f64::consts::FRAC_PI_2;

    const IDENTITY_TRANSFORM: [f64; 8] = [0.0; 8];
    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn position_approx_eq(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(a, b)| approx_eq(*a, *b))
    }

    #[test]
    fn test_identity_3d_keeps_xyz() {
        let model = ModelTransform::from_descriptor(&IDENTITY_TRANSFORM);
        let vertices = build_vertices(&model, 0xFFFFFFFF, false, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(vertices.len(), 1);
        assert_eq!(vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(vertices[0].w, 1.0);
        assert_eq!(vertices[0].alpha, 1.0);
    }

    #[test]
    fn test_3d_ignores_q() {
        let model = ModelTransform::from_descriptor(&[0.3, -0.2, 1.1, 0.0, 1.0, 2.0, 3.0, 0.0]);
        let a = build_vertices(&model, 0, false, &[1.0, 2.0, 3.0, 1.0]);
        let b = build_vertices(&model, 0, false, &[1.0, 2.0, 3.0, 7.5]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_4d_divides_by_q() {
        let model = ModelTransform::from_descriptor(&IDENTITY_TRANSFORM);
        let vertices = build_vertices(&model, 0, true, &[2.0, 4.0, -6.0, 2.0]);
        assert!(position_approx_eq(vertices[0].position, [1.0, 2.0, -3.0]));
    }

    #[test]
    fn test_4d_translation_on_q_shrinks() {
        // Translating along Q moves the geometry "away" in the fourth dimension.
        let model = ModelTransform::from_descriptor(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let vertices = build_vertices(&model, 0, true, &[2.0, 2.0, 2.0, 1.0]);
        assert!(position_approx_eq(vertices[0].position, [1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_q_rotation_changes_4d_projection() {
        let model = ModelTransform::from_descriptor(&[0.0, 0.0, 0.0, FRAC_PI_2, 0.0, 0.0, 0.0, 0.0]);
        // x = 1 rotates into q = 1; the original q = 1 rotates into x = -1.
        let vertices = build_vertices(&model, 0, true, &[1.0, 0.5, 0.25, 1.0]);
        assert!(position_approx_eq(vertices[0].position, [-1.0, 0.5, 0.25]));
    }

    #[test]
    fn test_zero_q_is_not_finite() {
        let model = ModelTransform::from_descriptor(&IDENTITY_TRANSFORM);
        let vertices = build_vertices(&model, 0, true, &[1.0, 1.0, 1.0, 0.0]);
        assert!(vertices[0].position.iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn test_color_is_shared() {
        let model = ModelTransform::from_descriptor(&IDENTITY_TRANSFORM);
        let vertices = build_vertices(&model, 0x00FF8000, false, &[0.0; 12]);
        assert_eq!(vertices.len(), 3);
        for v in &vertices {
            assert!(approx_eq(v.color[0], 1.0));
            assert!(approx_eq(v.color[1], 128.0 / 255.0));
            assert!(approx_eq(v.color[2], 0.0));
        }
    }

    #[test]
    fn test_draw_geometry_element_count() {
        let mut target = RecordingTarget::new();
        let positions = [0.0; 4 * 5];
        draw_geometry(&mut target, &IDENTITY_TRANSFORM, 0, false, &positions);

        assert_eq!(target.vertices().len(), 5);
        assert_eq!(target.draws().len(), 1);
        assert_eq!(target.draws()[0].element_count, 10);
    }

    #[test]
    fn test_draw_geometry_empty() {
        let mut target = RecordingTarget::new();
        draw_geometry(&mut target, &IDENTITY_TRANSFORM, 0, true, &[]);
        assert!(target.vertices().is_empty());
        assert_eq!(target.draws()[0].element_count, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "multiple of 4")]
    fn test_draw_geometry_rejects_bad_stride_in_debug() {
        let mut target = RecordingTarget::new();
        draw_geometry(&mut target, &IDENTITY_TRANSFORM, 0, false, &[0.0; 6]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "transform descriptor")]
    fn test_draw_geometry_rejects_short_transform_in_debug() {
        let mut target = RecordingTarget::new();
        draw_geometry(&mut target, &[0.0; 4], 0, false, &[0.0; 4]);
    }

    #[test]
    fn test_upload_projection_matrix() {
        let mut target = RecordingTarget::new();
        upload_projection_matrix(&mut target, UniformSlot::PROJECTION);

        let m = target.uniform(UniformSlot::PROJECTION).expect("projection uploaded");
        assert_eq!(m, &perspective(NEAR_PLANE, FAR_PLANE).to_uniform());
        // Row 2, column 3 carries the -1 that moves -z into w
        assert_eq!(m[2 * 4 + 3], -1.0);
        assert_eq!(m[3 * 4 + 3], 0.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "degenerate clip planes")]
    fn test_upload_perspective_rejects_inverted_planes_in_debug() {
        let mut target = RecordingTarget::new();
        upload_perspective_matrix(&mut target, UniformSlot::PROJECTION, 10.0, 1.0);
    }

    #[test]
    fn test_upload_view_matrix_argument_order() {
        let mut target = RecordingTarget::new();
        upload_view_matrix(&mut target, UniformSlot::VIEW, 5.0, 2.0, 0.3, -0.4);

        let expected = view(0.3, -0.4, 5.0, 2.0).to_uniform();
        assert_eq!(target.uniform(UniformSlot::VIEW), Some(&expected));
    }
}
