//! Fixed-size point/direction vectors for curve geometry.
//!
//! [`Vector<T, N>`] is a stack-allocated `[T; N]` with the small algebra the
//! curve layer needs: element-wise addition and subtraction, scaling by a
//! scalar, dot products, Euclidean norms and distances. Two-element vectors
//! add [`rotate_half_pi`](Vector2::rotate_half_pi) and
//! [`cross_proj`](Vector2::cross_proj); three-element vectors add
//! [`cross`](Vector3::cross).
//!
//! # Examples
//!
//! ```
//! use arcspline::Vector2;
//!
//! let a = Vector2::from_xy(3.0_f64, 4.0);
//! assert_eq!(a.norm(), 5.0);
//! assert_eq!(a.rotate_half_pi(), Vector2::from_xy(-4.0, 3.0));
//! assert_eq!(a.cross_proj(&Vector2::from_xy(1.0, 0.0)), -4.0);
//! ```

mod ops;


use core::ops::{Index, IndexMut};

use crate::traits::{Arithmetic, FloatScalar, Scalar, VecArithmetic};

/// Fixed-size vector with `N` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    pub(crate) data: [T; N],
}

/// A 2-element vector (planar point or direction).
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element vector (spatial point or direction).
pub type Vector3<T> = Vector<T, 3>;

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from an array of components.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false` for `N > 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the components.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Vector with every component zero.
    #[inline]
    pub fn zeros() -> Self {
        Self { data: [T::zero(); N] }
    }

    /// Vector with every component set to `value`.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i] * rhs.data[i];
        }
        sum
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector yields NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn euclidean_to(&self, rhs: &Self) -> T {
        (*self - *rhs).norm()
    }
}

impl<T: Copy> Vector2<T> {
    /// Create a 2-vector from its coordinates.
    #[inline]
    pub const fn from_xy(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// First coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }
}

impl<T: Scalar + core::ops::Neg<Output = T>> Vector2<T> {
    /// Counter-clockwise rotation by 90°: `(x, y) -> (-y, x)`.
    #[inline]
    pub fn rotate_half_pi(&self) -> Self {
        Self::from_xy(-self.data[1], self.data[0])
    }

    /// Z-component of the 3-D cross product of two planar vectors.
    ///
    /// Positive when `rhs` points to the left of `self`.
    #[inline]
    pub fn cross_proj(&self, rhs: &Self) -> T {
        self.data[0] * rhs.data[1] - self.data[1] * rhs.data[0]
    }
}

impl<T: Copy> Vector3<T> {
    /// Create a 3-vector from its coordinates.
    #[inline]
    pub const fn from_xyz(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// First coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Third coordinate.
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }
}

impl<T: Scalar> Vector3<T> {
    /// Cross product of two 3-vectors.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_xyz(
            self.data[1] * rhs.data[2] - self.data[2] * rhs.data[1],
            self.data[2] * rhs.data[0] - self.data[0] * rhs.data[2],
            self.data[0] * rhs.data[1] - self.data[1] * rhs.data[0],
        )
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T: FloatScalar, const N: usize> Arithmetic<T> for Vector<T, N> {
    #[inline]
    fn zero_value() -> Self {
        Self::zeros()
    }

    #[inline]
    fn magnitude(self) -> T {
        self.norm()
    }
}

impl<T: FloatScalar, const N: usize> VecArithmetic<T> for Vector<T, N> {
    #[inline]
    fn dot(&self, rhs: &Self) -> T {
        Vector::dot(self, rhs)
    }

    #[inline]
    fn norm(&self) -> T {
        Vector::norm(self)
    }

    #[inline]
    fn normalize(&self) -> Self {
        Vector::normalize(self)
    }

    #[inline]
    fn euclidean_to(&self, rhs: &Self) -> T {
        Vector::euclidean_to(self, rhs)
    }
}
