use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as vector components.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point parameter types (`f32`, `f64`).
///
/// Sample parameters (time, arc length) and all ratios, segment lengths and
/// tolerances are expressed in this type.
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` literal into `Self` (lossy for `f32`).
    fn from_f64(value: f64) -> Self;
}

/// Trait for the values carried by a piecewise function.
///
/// A value is either a scalar (`T` itself) or a fixed-size vector over `T`.
/// Interpolation only needs addition, subtraction, negation and scaling by
/// the parameter type.
pub trait Arithmetic<T: FloatScalar>:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<T, Output = Self>
    + Div<T, Output = Self>
{
    /// The additive identity.
    fn zero_value() -> Self;

    /// Absolute value for scalars, Euclidean norm for vectors.
    fn magnitude(self) -> T;
}

/// Vector-valued [`Arithmetic`] types: points and directions in 2-D/3-D.
pub trait VecArithmetic<T: FloatScalar>: Arithmetic<T> {
    /// Inner product.
    fn dot(&self, rhs: &Self) -> T;

    /// Euclidean length.
    fn norm(&self) -> T;

    /// Unit vector in the same direction (NaN components for a zero vector).
    fn normalize(&self) -> Self;

    /// Euclidean distance to another point.
    fn euclidean_to(&self, rhs: &Self) -> T {
        (*self - *rhs).norm()
    }
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn from_f64(value: f64) -> $t {
                    value as $t
                }
            }

            impl Arithmetic<$t> for $t {
                #[inline]
                fn zero_value() -> $t {
                    0.0
                }

                #[inline]
                fn magnitude(self) -> $t {
                    Float::abs(self)
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
