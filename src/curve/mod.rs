//! Arc-length parametrized curves in 2-D and 3-D.
//!
//! A curve is an ordered list of anchor points together with the cumulative
//! chord length at each anchor (starting from an arbitrary offset `s0`).
//! Positions are interpolated over that arc-length parameter, either
//! piecewise linearly ([`PiecewiseLinearCurve`]) or with a cubic spline
//! ([`PiecewiseCubicCurve`]).
//!
//! Besides evaluation, curves answer frame queries (tangent, normal,
//! binormal, curvature, torsion) and *inversion*: projecting an ambient
//! point to curve coordinates [`SlDuplet`] `(s, l)` in 2-D or
//! [`SlvTriplet`] `(s, l, v)` in 3-D, where `s` is the arc length of the
//! foot point and `l` / `v` the offsets along the normal / binormal.
//!
//! [`Curve2`] and [`Curve3`] abstract over the realizations and are object
//! safe; [`AnyCurve2`] and [`AnyCurve3`] are the closed alternatives.
//!
//! # Examples
//!
//! ```
//! use arcspline::curve::PiecewiseLinearCurve;
//! use arcspline::Vector2;
//!
//! let road = PiecewiseLinearCurve::new(vec![
//!     Vector2::from_xy(0.0_f64, 0.0),
//!     Vector2::from_xy(10.0, 0.0),
//!     Vector2::from_xy(20.0, 5.0),
//! ])
//! .unwrap();
//! let sl = road.inverse(Vector2::from_xy(4.0, -1.5));
//! assert!((sl.s - 4.0).abs() < 1e-12);
//! assert!((sl.l.abs() - 1.5).abs() < 1e-12);
//! ```

mod cubic;
mod linear;


pub use cubic::PiecewiseCubicCurve;
pub use linear::PiecewiseLinearCurve;

use alloc::vec::Vec;

use crate::interp::{nearest_upper_element, InterpError, CHECK_PARAMS, DEFAULT_TOLERANCE};
use crate::traits::FloatScalar;
use crate::vector::{Vector, Vector2, Vector3};

/// Curve coordinates in the plane: arc length `s` and lateral offset `l`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlDuplet<T> {
    pub s: T,
    pub l: T,
}

impl<T> SlDuplet<T> {
    #[inline]
    pub const fn new(s: T, l: T) -> Self {
        Self { s, l }
    }
}

/// Curve coordinates in space: arc length `s`, offset `l` along the normal
/// and `v` along the binormal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlvTriplet<T> {
    pub s: T,
    pub l: T,
    pub v: T,
}

impl<T> SlvTriplet<T> {
    #[inline]
    pub const fn new(s: T, l: T, v: T) -> Self {
        Self { s, l, v }
    }
}

/// Cumulative chord lengths of `points`, starting at `s0`.
fn chord_lengths<T: FloatScalar, const N: usize>(
    points: &[Vector<T, N>],
    s0: T,
) -> Result<Vec<T>, InterpError> {
    if CHECK_PARAMS && points.len() < 2 {
        return Err(InterpError::TooFewPoints {
            required: 2,
            actual: points.len(),
        });
    }
    let mut arcs = Vec::with_capacity(points.len());
    let mut s = s0;
    arcs.push(s);
    for pair in points.windows(2) {
        s = s + pair[1].euclidean_to(&pair[0]);
        arcs.push(s);
    }
    Ok(arcs)
}

/// `(a, b)` sorted ascending.
fn ordered<T: FloatScalar>(a: T, b: T) -> (T, T) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Anchor window `[lo, hi)` covering the arc-length range `[start, end]`:
/// the segment bracketing `start` through the segment bracketing `end`,
/// never fewer than two anchors.
fn anchor_window<T: FloatScalar>(arcs: &[T], start: T, end: T) -> (usize, usize) {
    let n = arcs.len();
    let tol = T::from_f64(DEFAULT_TOLERANCE);
    let lo = nearest_upper_element(arcs, start, tol)
        .saturating_sub(1)
        .min(n - 2);
    let hi = (nearest_upper_element(arcs, end, tol) + 1).min(n).max(lo + 2);
    (lo, hi)
}

/// Query interface shared by planar curves.
///
/// Object safe: `Box<dyn Curve2<f64>>` holds either realization.
pub trait Curve2<T: FloatScalar> {
    /// Position at arc length `s`.
    fn eval(&self, s: T) -> Vector2<T>;

    /// Position at arc length `s` offset by `l` along the normal.
    fn eval_sl(&self, s: T, l: T) -> Vector2<T>;

    /// [`eval_sl`](Self::eval_sl) from curve coordinates.
    fn eval_duplet(&self, sl: SlDuplet<T>) -> Vector2<T> {
        self.eval_sl(sl.s, sl.l)
    }

    /// Unit tangent at `s`.
    fn tangent(&self, s: T) -> Vector2<T>;

    /// Unit normal at `s`.
    fn normal(&self, s: T) -> Vector2<T>;

    /// Curvature at `s` (NaN where undefined).
    fn curvature(&self, s: T) -> T;

    /// Project a point to curve coordinates.
    fn inverse(&self, point: Vector2<T>) -> SlDuplet<T>;

    /// Project a point, considering only the part of the curve between
    /// `start_s` and `end_s`. The returned `s` lies in that interval.
    fn inverse_within(&self, point: Vector2<T>, start_s: T, end_s: T) -> SlDuplet<T>;

    /// Arc length of the first anchor.
    fn min_s(&self) -> T;

    /// Arc length of the last anchor.
    fn max_s(&self) -> T;

    /// First anchor point.
    fn front(&self) -> Vector2<T>;

    /// Last anchor point.
    fn back(&self) -> Vector2<T>;

    /// Arc length at every anchor.
    fn arc_lengths(&self) -> &[T];

    /// The anchor points.
    fn anchor_points(&self) -> &[Vector2<T>];
}

/// Query interface shared by spatial curves.
///
/// Object safe: `Box<dyn Curve3<f64>>` holds either realization.
pub trait Curve3<T: FloatScalar> {
    /// Position at arc length `s`.
    fn eval(&self, s: T) -> Vector3<T>;

    /// Position at arc length `s` offset by `l` along the normal and `v`
    /// along the binormal.
    fn eval_slv(&self, s: T, l: T, v: T) -> Vector3<T>;

    /// [`eval_slv`](Self::eval_slv) from curve coordinates.
    fn eval_triplet(&self, slv: SlvTriplet<T>) -> Vector3<T> {
        self.eval_slv(slv.s, slv.l, slv.v)
    }

    /// Unit tangent at `s`.
    fn tangent(&self, s: T) -> Vector3<T>;

    /// Unit principal normal at `s`.
    fn normal(&self, s: T) -> Vector3<T>;

    /// Unit binormal at `s`.
    fn binormal(&self, s: T) -> Vector3<T>;

    /// Curvature at `s` (NaN where undefined).
    fn curvature(&self, s: T) -> T;

    /// Torsion at `s` (NaN where undefined).
    fn torsion(&self, s: T) -> T;

    /// Project a point to curve coordinates.
    fn inverse(&self, point: Vector3<T>) -> SlvTriplet<T>;

    /// Project a point, considering only the part of the curve between
    /// `start_s` and `end_s`. The returned `s` lies in that interval.
    fn inverse_within(&self, point: Vector3<T>, start_s: T, end_s: T) -> SlvTriplet<T>;

    /// Arc length of the first anchor.
    fn min_s(&self) -> T;

    /// Arc length of the last anchor.
    fn max_s(&self) -> T;

    /// First anchor point.
    fn front(&self) -> Vector3<T>;

    /// Last anchor point.
    fn back(&self) -> Vector3<T>;

    /// Arc length at every anchor.
    fn arc_lengths(&self) -> &[T];

    /// The anchor points.
    fn anchor_points(&self) -> &[Vector3<T>];
}

// ── Trait impls forwarding to the inherent methods ──────────────────

macro_rules! impl_curve2 {
    ($curve:ident) => {
        impl<T: FloatScalar> Curve2<T> for $curve<T, 2> {
            fn eval(&self, s: T) -> Vector2<T> {
                <$curve<T, 2>>::eval(self, s)
            }
            fn eval_sl(&self, s: T, l: T) -> Vector2<T> {
                <$curve<T, 2>>::eval_sl(self, s, l)
            }
            fn tangent(&self, s: T) -> Vector2<T> {
                <$curve<T, 2>>::tangent(self, s)
            }
            fn normal(&self, s: T) -> Vector2<T> {
                <$curve<T, 2>>::normal(self, s)
            }
            fn curvature(&self, s: T) -> T {
                <$curve<T, 2>>::curvature(self, s)
            }
            fn inverse(&self, point: Vector2<T>) -> SlDuplet<T> {
                <$curve<T, 2>>::inverse(self, point)
            }
            fn inverse_within(&self, point: Vector2<T>, start_s: T, end_s: T) -> SlDuplet<T> {
                <$curve<T, 2>>::inverse_within(self, point, start_s, end_s)
            }
            fn min_s(&self) -> T {
                <$curve<T, 2>>::min_s(self)
            }
            fn max_s(&self) -> T {
                <$curve<T, 2>>::max_s(self)
            }
            fn front(&self) -> Vector2<T> {
                <$curve<T, 2>>::front(self)
            }
            fn back(&self) -> Vector2<T> {
                <$curve<T, 2>>::back(self)
            }
            fn arc_lengths(&self) -> &[T] {
                <$curve<T, 2>>::arc_lengths(self)
            }
            fn anchor_points(&self) -> &[Vector2<T>] {
                <$curve<T, 2>>::anchor_points(self)
            }
        }
    };
}

macro_rules! impl_curve3 {
    ($curve:ident) => {
        impl<T: FloatScalar> Curve3<T> for $curve<T, 3> {
            fn eval(&self, s: T) -> Vector3<T> {
                <$curve<T, 3>>::eval(self, s)
            }
            fn eval_slv(&self, s: T, l: T, v: T) -> Vector3<T> {
                <$curve<T, 3>>::eval_slv(self, s, l, v)
            }
            fn tangent(&self, s: T) -> Vector3<T> {
                <$curve<T, 3>>::tangent(self, s)
            }
            fn normal(&self, s: T) -> Vector3<T> {
                <$curve<T, 3>>::normal(self, s)
            }
            fn binormal(&self, s: T) -> Vector3<T> {
                <$curve<T, 3>>::binormal(self, s)
            }
            fn curvature(&self, s: T) -> T {
                <$curve<T, 3>>::curvature(self, s)
            }
            fn torsion(&self, s: T) -> T {
                <$curve<T, 3>>::torsion(self, s)
            }
            fn inverse(&self, point: Vector3<T>) -> SlvTriplet<T> {
                <$curve<T, 3>>::inverse(self, point)
            }
            fn inverse_within(&self, point: Vector3<T>, start_s: T, end_s: T) -> SlvTriplet<T> {
                <$curve<T, 3>>::inverse_within(self, point, start_s, end_s)
            }
            fn min_s(&self) -> T {
                <$curve<T, 3>>::min_s(self)
            }
            fn max_s(&self) -> T {
                <$curve<T, 3>>::max_s(self)
            }
            fn front(&self) -> Vector3<T> {
                <$curve<T, 3>>::front(self)
            }
            fn back(&self) -> Vector3<T> {
                <$curve<T, 3>>::back(self)
            }
            fn arc_lengths(&self) -> &[T] {
                <$curve<T, 3>>::arc_lengths(self)
            }
            fn anchor_points(&self) -> &[Vector3<T>] {
                <$curve<T, 3>>::anchor_points(self)
            }
        }
    };
}

impl_curve2!(PiecewiseLinearCurve);
impl_curve2!(PiecewiseCubicCurve);
impl_curve3!(PiecewiseLinearCurve);
impl_curve3!(PiecewiseCubicCurve);

// ── Closed sum types ────────────────────────────────────────────────

/// Either planar curve realization.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCurve2<T> {
    Linear(PiecewiseLinearCurve<T, 2>),
    Cubic(PiecewiseCubicCurve<T, 2>),
}

/// Either spatial curve realization.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCurve3<T> {
    Linear(PiecewiseLinearCurve<T, 3>),
    Cubic(PiecewiseCubicCurve<T, 3>),
}

macro_rules! dispatch {
    ($any:ident, $self:ident, $c:ident => $e:expr) => {
        match $self {
            $any::Linear($c) => $e,
            $any::Cubic($c) => $e,
        }
    };
}

impl<T: FloatScalar> Curve2<T> for AnyCurve2<T> {
    fn eval(&self, s: T) -> Vector2<T> {
        dispatch!(AnyCurve2, self, c => c.eval(s))
    }
    fn eval_sl(&self, s: T, l: T) -> Vector2<T> {
        dispatch!(AnyCurve2, self, c => c.eval_sl(s, l))
    }
    fn tangent(&self, s: T) -> Vector2<T> {
        dispatch!(AnyCurve2, self, c => c.tangent(s))
    }
    fn normal(&self, s: T) -> Vector2<T> {
        dispatch!(AnyCurve2, self, c => c.normal(s))
    }
    fn curvature(&self, s: T) -> T {
        dispatch!(AnyCurve2, self, c => c.curvature(s))
    }
    fn inverse(&self, point: Vector2<T>) -> SlDuplet<T> {
        dispatch!(AnyCurve2, self, c => c.inverse(point))
    }
    fn inverse_within(&self, point: Vector2<T>, start_s: T, end_s: T) -> SlDuplet<T> {
        dispatch!(AnyCurve2, self, c => c.inverse_within(point, start_s, end_s))
    }
    fn min_s(&self) -> T {
        dispatch!(AnyCurve2, self, c => c.min_s())
    }
    fn max_s(&self) -> T {
        dispatch!(AnyCurve2, self, c => c.max_s())
    }
    fn front(&self) -> Vector2<T> {
        dispatch!(AnyCurve2, self, c => c.front())
    }
    fn back(&self) -> Vector2<T> {
        dispatch!(AnyCurve2, self, c => c.back())
    }
    fn arc_lengths(&self) -> &[T] {
        dispatch!(AnyCurve2, self, c => c.arc_lengths())
    }
    fn anchor_points(&self) -> &[Vector2<T>] {
        dispatch!(AnyCurve2, self, c => c.anchor_points())
    }
}

impl<T: FloatScalar> Curve3<T> for AnyCurve3<T> {
    fn eval(&self, s: T) -> Vector3<T> {
        dispatch!(AnyCurve3, self, c => c.eval(s))
    }
    fn eval_slv(&self, s: T, l: T, v: T) -> Vector3<T> {
        dispatch!(AnyCurve3, self, c => c.eval_slv(s, l, v))
    }
    fn tangent(&self, s: T) -> Vector3<T> {
        dispatch!(AnyCurve3, self, c => c.tangent(s))
    }
    fn normal(&self, s: T) -> Vector3<T> {
        dispatch!(AnyCurve3, self, c => c.normal(s))
    }
    fn binormal(&self, s: T) -> Vector3<T> {
        dispatch!(AnyCurve3, self, c => c.binormal(s))
    }
    fn curvature(&self, s: T) -> T {
        dispatch!(AnyCurve3, self, c => c.curvature(s))
    }
    fn torsion(&self, s: T) -> T {
        dispatch!(AnyCurve3, self, c => c.torsion(s))
    }
    fn inverse(&self, point: Vector3<T>) -> SlvTriplet<T> {
        dispatch!(AnyCurve3, self, c => c.inverse(point))
    }
    fn inverse_within(&self, point: Vector3<T>, start_s: T, end_s: T) -> SlvTriplet<T> {
        dispatch!(AnyCurve3, self, c => c.inverse_within(point, start_s, end_s))
    }
    fn min_s(&self) -> T {
        dispatch!(AnyCurve3, self, c => c.min_s())
    }
    fn max_s(&self) -> T {
        dispatch!(AnyCurve3, self, c => c.max_s())
    }
    fn front(&self) -> Vector3<T> {
        dispatch!(AnyCurve3, self, c => c.front())
    }
    fn back(&self) -> Vector3<T> {
        dispatch!(AnyCurve3, self, c => c.back())
    }
    fn arc_lengths(&self) -> &[T] {
        dispatch!(AnyCurve3, self, c => c.arc_lengths())
    }
    fn anchor_points(&self) -> &[Vector3<T>] {
        dispatch!(AnyCurve3, self, c => c.anchor_points())
    }
}

impl<T> From<PiecewiseLinearCurve<T, 2>> for AnyCurve2<T> {
    fn from(curve: PiecewiseLinearCurve<T, 2>) -> Self {
        AnyCurve2::Linear(curve)
    }
}

impl<T> From<PiecewiseCubicCurve<T, 2>> for AnyCurve2<T> {
    fn from(curve: PiecewiseCubicCurve<T, 2>) -> Self {
        AnyCurve2::Cubic(curve)
    }
}

impl<T> From<PiecewiseLinearCurve<T, 3>> for AnyCurve3<T> {
    fn from(curve: PiecewiseLinearCurve<T, 3>) -> Self {
        AnyCurve3::Linear(curve)
    }
}

impl<T> From<PiecewiseCubicCurve<T, 3>> for AnyCurve3<T> {
    fn from(curve: PiecewiseCubicCurve<T, 3>) -> Self {
        AnyCurve3::Cubic(curve)
    }
}
