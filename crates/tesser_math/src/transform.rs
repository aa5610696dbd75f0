//! Affine transform builders
//!
//! Every builder returns a full homogeneous matrix. Builders are composed with
//! [`transform_chain`], which multiplies left to right, so with row vectors the
//! first matrix in the chain is applied first.

use serde::{Deserialize, Serialize};

use crate::{Dimension, Matrix, Matrix5, Vector4};

/// Plane a rotation takes place in
///
/// The `Around*` planes are the ordinary 3D rotations about an axis. The `*Q`
/// planes rotate a spatial axis into the fourth axis and only exist in 5x5
/// matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// Y turns towards Z
    AroundX,
    /// Z turns towards X
    AroundY,
    /// X turns towards Y
    AroundZ,
    /// X turns towards Q
    XQ,
    /// Y turns towards Q
    YQ,
    /// Z turns towards Q
    ZQ,
}

impl RotationPlane {
    /// The axis pair `(from, to)`; a positive angle turns `from` towards `to`
    pub const fn axes(self) -> (Dimension, Dimension) {
        match self {
            RotationPlane::AroundX => (Dimension::Y, Dimension::Z),
            RotationPlane::AroundY => (Dimension::Z, Dimension::X),
            RotationPlane::AroundZ => (Dimension::X, Dimension::Y),
            RotationPlane::XQ => (Dimension::X, Dimension::Q),
            RotationPlane::YQ => (Dimension::Y, Dimension::Q),
            RotationPlane::ZQ => (Dimension::Z, Dimension::Q),
        }
    }
}

/// Rotation by `angle` radians in `plane`
///
/// The matrix is identity except for the 2x2 block on the plane's axes.
///
/// # Example
/// ```
/// use tesser_math::{rotation, Matrix5, RotationPlane};
/// let m: Matrix5 = rotation(RotationPlane::XQ, 0.5);
/// assert_eq!(m[(1, 1)], 1.0);
/// ```
pub fn rotation<const N: usize>(plane: RotationPlane, angle: f64) -> Matrix<N> {
    let (a, b) = plane.axes();
    let (a, b) = (a.index(), b.index());
    let needed = a.max(b) + 2;
    debug_assert!(
        needed <= N,
        "{:?} rotation needs at least a {}x{} matrix",
        plane,
        needed,
        needed
    );

    let (sn, cs) = angle.sin_cos();
    let mut m = Matrix::identity();
    m[(a, a)] = cs;
    m[(a, b)] = sn;
    m[(b, a)] = -sn;
    m[(b, b)] = cs;
    m
}

/// Translation by `offset`
///
/// The offset's components land in the last row. `offset` must have `N - 1`
/// components.
pub fn translation<const N: usize>(offset: impl AsRef<[f64]>) -> Matrix<N> {
    let offset = offset.as_ref();
    debug_assert_eq!(offset.len() + 1, N, "translation offset arity");

    let mut m = Matrix::identity();
    for (col, component) in offset.iter().enumerate().take(N - 1) {
        m[(N - 1, col)] = *component;
    }
    m
}

/// Per-axis scale by `factors`
///
/// `factors` must have `N - 1` components.
pub fn scale<const N: usize>(factors: impl AsRef<[f64]>) -> Matrix<N> {
    let factors = factors.as_ref();
    debug_assert_eq!(factors.len() + 1, N, "scale factor arity");

    let mut m = Matrix::identity();
    for (i, factor) in factors.iter().enumerate().take(N - 1) {
        m[(i, i)] = *factor;
    }
    m
}

/// Multiply all `transforms` left to right: `T1 * T2 * ... * Tn`
///
/// An empty chain yields identity.
pub fn transform_chain<const N: usize>(transforms: impl IntoIterator<Item = Matrix<N>>) -> Matrix<N> {
    transforms
        .into_iter()
        .reduce(|acc, m| acc * m)
        .unwrap_or_else(Matrix::identity)
}

/// Rotation and translation of one geometry in 4D space
///
/// The model matrix always rotates about X, Y, Z, then in the XQ plane, and
/// translates last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelTransform {
    /// Rotation angles in radians, `[x, y, z, q]`
    pub rotation: [f64; 4],
    /// Translation `[x, y, z, q]`
    pub translation: [f64; 4],
}

impl ModelTransform {
    /// Number of reals in a flat descriptor
    pub const DESCRIPTOR_LEN: usize = 8;

    /// Decode a flat `[rotX, rotY, rotZ, rotQ, transX, transY, transZ, transQ]` descriptor
    ///
    /// Panics if `descriptor` holds fewer than eight values.
    pub fn from_descriptor(descriptor: &[f64]) -> Self {
        Self {
            rotation: [descriptor[0], descriptor[1], descriptor[2], descriptor[3]],
            translation: [descriptor[4], descriptor[5], descriptor[6], descriptor[7]],
        }
    }

    /// Flatten back into descriptor order
    pub fn to_descriptor(&self) -> [f64; 8] {
        let [rx, ry, rz, rq] = self.rotation;
        let [tx, ty, tz, tq] = self.translation;
        [rx, ry, rz, rq, tx, ty, tz, tq]
    }

    /// Build the 5x5 model matrix
    pub fn matrix(&self) -> Matrix5 {
        let [rx, ry, rz, rq] = self.rotation;
        let [tx, ty, tz, tq] = self.translation;
        transform_chain([
            rotation(RotationPlane::AroundX, rx),
            rotation(RotationPlane::AroundY, ry),
            rotation(RotationPlane::AroundZ, rz),
            rotation(RotationPlane::XQ, rq),
            translation(Vector4::new(tx, ty, tz, tq)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix4, Vector3};
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vector4, b: Vector4) -> bool {
        Dimension::ALL.iter().all(|d| approx_eq(a[*d], b[*d]))
    }

    const PLANES: [RotationPlane; 6] = [
        RotationPlane::AroundX,
        RotationPlane::AroundY,
        RotationPlane::AroundZ,
        RotationPlane::XQ,
        RotationPlane::YQ,
        RotationPlane::ZQ,
    ];

    #[test]
    fn test_rotation_around_x() {
        let v = Vector3::new(0.0, 3.0, 0.0) * rotation::<4>(RotationPlane::AroundX, FRAC_PI_2);
        assert!(approx_eq(v.x(), 0.0));
        assert!(approx_eq(v.y(), 0.0));
        assert!(approx_eq(v.z(), 3.0));
    }

    #[test]
    fn test_rotation_around_y_and_z() {
        let z = Vector3::new(0.0, 0.0, 1.0) * rotation::<4>(RotationPlane::AroundY, FRAC_PI_2);
        assert!(approx_eq(z.x(), 1.0), "Z should become X, got {:?}", z);

        let x = Vector3::new(1.0, 0.0, 0.0) * rotation::<4>(RotationPlane::AroundZ, FRAC_PI_2);
        assert!(approx_eq(x.y(), 1.0), "X should become Y, got {:?}", x);
    }

    #[test]
    fn test_rotation_xq_moves_x_into_q() {
        let m: Matrix5 = rotation(RotationPlane::XQ, FRAC_PI_2);
        let v = Vector4::new(1.0, 0.0, 0.0, 0.0) * m;
        assert!(vec_approx_eq(v, Vector4::new(0.0, 0.0, 0.0, 1.0)), "got {:?}", v);
    }

    #[test]
    fn test_rotation_block_only() {
        let m: Matrix5 = rotation(RotationPlane::YQ, 0.7);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(2, 2)], 1.0);
        assert_eq!(m[(4, 4)], 1.0);
        assert!(approx_eq(m[(1, 3)], 0.7f64.sin()));
        assert!(approx_eq(m[(3, 1)], -(0.7f64.sin())));
    }

    #[test]
    fn test_rotation_inverse_is_identity() {
        for plane in PLANES {
            for angle in [0.0, 0.3, 1.0, -2.5, PI, 7.0] {
                let m: Matrix5 = rotation(plane, angle) * rotation(plane, -angle);
                assert!(
                    m.approx_eq(&Matrix5::identity(), EPSILON),
                    "{:?} by {} did not cancel",
                    plane,
                    angle
                );
            }
        }
    }

    #[test]
    fn test_translation() {
        let v = Vector3::new(5.0, 6.0, 7.0) * translation::<4>(Vector3::new(2.0, 3.0, 4.0));
        assert!(approx_eq(v.x(), 7.0));
        assert!(approx_eq(v.y(), 9.0));
        assert!(approx_eq(v.z(), 11.0));
    }

    #[test]
    fn test_translation_inverse_is_identity() {
        let offset = Vector4::new(1.5, -2.0, 3.25, 0.5);
        let m: Matrix5 = translation(offset) * translation(-offset);
        assert!(m.approx_eq(&Matrix5::identity(), EPSILON));
    }

    #[test]
    fn test_scale() {
        let v = Vector3::new(5.0, 6.0, 7.0) * scale::<4>(Vector3::new(2.0, 3.0, 4.0));
        assert!(approx_eq(v.x(), 10.0));
        assert!(approx_eq(v.y(), 18.0));
        assert!(approx_eq(v.z(), 28.0));
    }

    #[test]
    fn test_transform_chain_matches_product() {
        let a: Matrix5 = rotation(RotationPlane::AroundX, 0.4);
        let b: Matrix5 = rotation(RotationPlane::ZQ, -1.1);
        let c: Matrix5 = translation(Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(transform_chain([a, b, c]), a * b * c);
    }

    #[test]
    fn test_transform_chain_empty_is_identity() {
        let m: Matrix4 = transform_chain(std::iter::empty());
        assert_eq!(m, Matrix4::identity());
    }

    #[test]
    fn test_model_matrix_rotates_before_translating() {
        let transform = ModelTransform {
            rotation: [0.0, 0.0, FRAC_PI_2, 0.0],
            translation: [10.0, 0.0, 0.0, 0.0],
        };
        // X rotates to Y about the origin, then moves by +10 on X.
        let v = Vector4::new(1.0, 0.0, 0.0, 1.0) * transform.matrix();
        assert!(vec_approx_eq(v, Vector4::new(10.0, 1.0, 0.0, 1.0)), "got {:?}", v);
    }

    #[test]
    fn test_model_matrix_fixed_order() {
        let transform = ModelTransform::from_descriptor(&[0.1, 0.2, 0.3, 0.4, 1.0, 2.0, 3.0, 4.0]);
        let expected: Matrix5 = rotation::<5>(RotationPlane::AroundX, 0.1)
            * rotation(RotationPlane::AroundY, 0.2)
            * rotation(RotationPlane::AroundZ, 0.3)
            * rotation(RotationPlane::XQ, 0.4)
            * translation(Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(transform.matrix(), expected);
    }

    #[test]
    fn test_descriptor_round_trip() {
        let descriptor = [0.1, 0.2, 0.3, 0.4, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(ModelTransform::from_descriptor(&descriptor).to_descriptor(), descriptor);
    }
}
