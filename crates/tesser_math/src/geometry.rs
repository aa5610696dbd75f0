//! Line-list geometry
//!
//! A [`LineGeometry`] is a flat list of homogeneous positions where every two
//! consecutive positions form one line segment. Positions are stored as raw
//! reals with a stride of four (`[x, y, z, q]`), the layout the vertex pipeline
//! consumes directly.

use serde::{Deserialize, Serialize};

use crate::Vector4;

/// Reals per position in a flat position buffer
pub const POSITION_STRIDE: usize = 4;

/// Homogeneous coordinate 3D shapes are built with
const BASE_Q: f64 = 1.0;

/// Line-list geometry with stride-4 positions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    positions: Vec<f64>,
    four_dimensional: bool,
}

impl LineGeometry {
    /// Empty three-dimensional geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty four-dimensional geometry
    ///
    /// Four-dimensional geometry is drawn with the divide by q.
    pub fn four_dimensional() -> Self {
        Self {
            positions: Vec::new(),
            four_dimensional: true,
        }
    }

    /// Append one line segment
    pub fn add_line(&mut self, a: Vector4, b: Vector4) {
        self.positions.extend_from_slice(a.as_ref());
        self.positions.extend_from_slice(b.as_ref());
    }

    /// Duplicate the geometry shifted by `direction` and join every point to its copy
    pub fn extrude(&mut self, direction: Vector4) {
        let original: Vec<Vector4> = self.points().collect();

        for pair in original.chunks_exact(2) {
            self.add_line(pair[0] + direction, pair[1] + direction);
        }

        // Lines share end points; join each distinct point once.
        let mut joined: Vec<Vector4> = Vec::with_capacity(original.len());
        for point in original {
            if !joined.contains(&point) {
                self.add_line(point, point + direction);
                joined.push(point);
            }
        }
    }

    /// Flat position buffer, stride [`POSITION_STRIDE`]
    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Number of positions (twice the number of lines)
    #[inline]
    pub fn position_count(&self) -> usize {
        self.positions.len() / POSITION_STRIDE
    }

    /// Number of line segments
    #[inline]
    pub fn line_count(&self) -> usize {
        self.position_count() / 2
    }

    #[inline]
    pub fn is_four_dimensional(&self) -> bool {
        self.four_dimensional
    }

    /// Iterate over positions as vectors
    pub fn points(&self) -> impl Iterator<Item = Vector4> + '_ {
        self.positions
            .chunks_exact(POSITION_STRIDE)
            .map(|c| Vector4::new(c[0], c[1], c[2], c[3]))
    }

    /// Unit X, Y and Z axes starting at the origin
    pub fn axes() -> Self {
        let mut geometry = Self::new();
        let origin = Vector4::new(0.0, 0.0, 0.0, BASE_Q);
        geometry.add_line(origin, Vector4::new(1.0, 0.0, 0.0, BASE_Q));
        geometry.add_line(origin, Vector4::new(0.0, 1.0, 0.0, BASE_Q));
        geometry.add_line(origin, Vector4::new(0.0, 0.0, 1.0, BASE_Q));
        geometry
    }

    /// Square grid on the XZ plane with unit spacing from `-half_extent` to `half_extent`
    pub fn grid(half_extent: i32) -> Self {
        let mut geometry = Self::new();
        let e = half_extent as f64;
        for i in -half_extent..=half_extent {
            let i = i as f64;
            geometry.add_line(Vector4::new(i, 0.0, -e, BASE_Q), Vector4::new(i, 0.0, e, BASE_Q));
            geometry.add_line(Vector4::new(-e, 0.0, i, BASE_Q), Vector4::new(e, 0.0, i, BASE_Q));
        }
        geometry
    }

    /// Axis-aligned cube of edge length `size` centred on the origin
    pub fn cube(size: f64) -> Self {
        let mut geometry = Self::new();
        geometry.add_square(size);
        geometry.extrude(Vector4::new(0.0, 0.0, size, 0.0));
        geometry
    }

    /// Tesseract built by extruding a cube along Q
    ///
    /// The base cube sits at q = 1 and its copy at q = 2, so the divide by q
    /// draws the copy as a smaller cube nested in the base cube.
    pub fn tesseract(size: f64) -> Self {
        let mut geometry = Self::cube(size);
        geometry.four_dimensional = true;
        geometry.extrude(Vector4::new(0.0, 0.0, 0.0, 1.0));
        geometry
    }

    /// Square of edge length `size` on the XY plane at z = -size / 2
    fn add_square(&mut self, size: f64) {
        let h = size * 0.5;
        let corners = [
            Vector4::new(h, h, -h, BASE_Q),
            Vector4::new(-h, h, -h, BASE_Q),
            Vector4::new(-h, -h, -h, BASE_Q),
            Vector4::new(h, -h, -h, BASE_Q),
        ];
        for i in 0..corners.len() {
            self.add_line(corners[i], corners[(i + 1) % corners.len()]);
        }
    }
}
