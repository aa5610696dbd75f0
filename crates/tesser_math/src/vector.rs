//! Fixed-size vectors indexed by named dimension
//!
//! Components are stored in an array so that a [`Dimension`] maps directly to an
//! index. `Vector3` has no Q component; indexing it with [`Dimension::Q`] panics.

use serde::{Deserialize, Serialize};

/// Named vector dimension
///
/// Q is the fourth spatial axis. In homogeneous positions it doubles as the
/// coordinate the 4D divide is performed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    X = 0,
    Y = 1,
    Z = 2,
    Q = 3,
}

impl Dimension {
    /// All four dimensions in storage order
    pub const ALL: [Dimension; 4] = [Dimension::X, Dimension::Y, Dimension::Z, Dimension::Q];

    /// Storage index of this dimension
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

macro_rules! impl_vector {
    ($name:ident, $n:literal) => {
        impl $name {
            pub const ZERO: Self = Self { components: [0.0; $n] };

            /// Build from a component array
            #[inline]
            pub const fn from_array(components: [f64; $n]) -> Self {
                Self { components }
            }

            /// Components in storage order
            #[inline]
            pub const fn to_array(self) -> [f64; $n] {
                self.components
            }

            /// Build by evaluating `f` once per dimension
            #[inline]
            pub fn from_fn(f: impl Fn(Dimension) -> f64) -> Self {
                let mut components = [0.0; $n];
                for (i, c) in components.iter_mut().enumerate() {
                    *c = f(Dimension::ALL[i]);
                }
                Self { components }
            }

            #[inline]
            pub fn x(&self) -> f64 {
                self.components[0]
            }

            #[inline]
            pub fn y(&self) -> f64 {
                self.components[1]
            }

            #[inline]
            pub fn z(&self) -> f64 {
                self.components[2]
            }

            /// Dot product
            #[inline]
            pub fn dot(self, other: Self) -> f64 {
                self.components
                    .iter()
                    .zip(other.components.iter())
                    .map(|(a, b)| a * b)
                    .sum()
            }

            #[inline]
            pub fn length_squared(self) -> f64 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f64 {
                self.length_squared().sqrt()
            }

            /// Narrow every component to rendering precision
            #[inline]
            pub fn to_f32(self) -> [f32; $n] {
                self.components.map(|c| c as f32)
            }
        }

        impl AsRef<[f64]> for $name {
            #[inline]
            fn as_ref(&self) -> &[f64] {
                &self.components
            }
        }

        impl std::ops::Index<Dimension> for $name {
            type Output = f64;
            #[inline]
            fn index(&self, dimension: Dimension) -> &f64 {
                &self.components[dimension.index()]
            }
        }

        impl std::ops::IndexMut<Dimension> for $name {
            #[inline]
            fn index_mut(&mut self, dimension: Dimension) -> &mut f64 {
                &mut self.components[dimension.index()]
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self::from_fn(|d| self[d] + other[d])
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self::from_fn(|d| self[d] - other[d])
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: f64) -> Self {
                Self::from_fn(|d| self[d] * scalar)
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = Self;
            #[inline]
            fn div(self, scalar: f64) -> Self {
                Self::from_fn(|d| self[d] / scalar)
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self::from_fn(|d| -self[d])
            }
        }
    };
}

/// 3D vector with x, y, z components
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    components: [f64; 3],
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { components: [x, y, z] }
    }

    /// Cross product
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl_vector!(Vector3, 3);

/// 4D vector with x, y, z, q components
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4 {
    components: [f64; 4],
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, q: f64) -> Self {
        Self { components: [x, y, z, q] }
    }

    #[inline]
    pub fn q(&self) -> f64 {
        self.components[3]
    }

    /// Drop the Q component
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Divide x, y and z by q
    ///
    /// q = 0 yields infinite or NaN components.
    #[inline]
    pub fn project(&self) -> Vector3 {
        let q = self.q();
        Vector3::from_fn(|d| self[d] / q)
    }
}

impl_vector!(Vector4, 4);
