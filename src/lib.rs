//! # arcspline
//!
//! Piecewise interpolation and arc-length parametrized curves, no-std
//! compatible. One-dimensional samples are interpolated linearly or with C²
//! cubic splines; ordered anchor points in 2-D or 3-D become curves that
//! answer position, frame and point-inversion queries.
//!
//! ## Quick start
//!
//! ```
//! use arcspline::interp::PiecewiseCubicFunction;
//! use arcspline::curve::PiecewiseCubicCurve;
//! use arcspline::Vector2;
//!
//! // Natural cubic spline through y = x²
//! let f = PiecewiseCubicFunction::new(
//!     vec![0.0_f64, 1.0, 2.0, 3.0],
//!     vec![0.0_f64, 1.0, 4.0, 9.0],
//! )
//! .unwrap();
//! assert!((f.eval(2.0) - 4.0).abs() < 1e-12);
//!
//! // Curve coordinates of a point next to a smooth path
//! let path = PiecewiseCubicCurve::new(vec![
//!     Vector2::from_xy(0.0_f64, 0.0),
//!     Vector2::from_xy(1.0, 0.0),
//!     Vector2::from_xy(2.0, 0.0),
//! ])
//! .unwrap();
//! let sl = path.inverse(Vector2::from_xy(1.5, 0.25));
//! assert!((sl.s - 1.5).abs() < 1e-12);
//! assert!((sl.l - 0.25).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`interp`]: Bracketing search ([`interp::nearest_upper_element`],
//!   [`interp::nearest_upper_point`]), tridiagonal and periodic tridiagonal
//!   solvers, and the piecewise functions [`interp::PiecewiseLinearFunction`]
//!   and [`interp::PiecewiseCubicFunction`] over scalar or vector values:
//!   evaluation, derivatives, definite integrals and extrema. Requires
//!   `alloc`.
//!
//! - [`curve`]: [`curve::PiecewiseLinearCurve`] and
//!   [`curve::PiecewiseCubicCurve`] over 2-D/3-D anchors, parametrized by
//!   cumulative chord length. Tangent, normal, binormal, curvature, torsion,
//!   offset evaluation in `(s, l)` / `(s, l, v)` coordinates and inversion.
//!   [`curve::Curve2`] / [`curve::Curve3`] are object-safe facades. Requires
//!   `alloc`.
//!
//! - [`vector`]: Fixed-size `Vector<T, N>` points and directions with
//!   element-wise arithmetic, dot/cross products and norms.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: vector components (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), the parameter type
//!   - [`Arithmetic`]: values a piecewise function can carry
//!   - [`VecArithmetic`]: vector values with inner products and norms
//!
//! ## Cargo features
//!
//! | Feature        | Default  | Description |
//! |----------------|----------|-------------|
//! | `std`          | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`        | via std  | `interp` and `curve` modules (heap-allocated samples) |
//! | `check-params` | yes      | Validate constructor inputs and derivative orders |
//! | `libm`         | baseline | Pure-Rust software float fallback |
//! | `all`          | no       | All features: `std` + `check-params` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod curve;
#[cfg(feature = "alloc")]
pub mod interp;
pub mod traits;
pub mod vector;

pub use traits::{Arithmetic, FloatScalar, Scalar, VecArithmetic};
pub use vector::{Vector, Vector2, Vector3};

#[cfg(feature = "alloc")]
pub use curve::{
    AnyCurve2, AnyCurve3, Curve2, Curve3, PiecewiseCubicCurve, PiecewiseLinearCurve, SlDuplet,
    SlvTriplet,
};
#[cfg(feature = "alloc")]
pub use interp::{InterpError, PiecewiseCubicFunction, PiecewiseLinearFunction};
