//! One-dimensional piecewise functions over a sorted parameter sequence.
//!
//! [`PiecewiseLinearFunction`] joins the samples with straight segments;
//! [`PiecewiseCubicFunction`] fits a C² cubic spline (natural, clamped,
//! second-derivative or periodic boundaries). Both are generic over the
//! parameter type `T` (`f32`/`f64`) and the value type `V`, which is either
//! `T` itself or a fixed-size [`Vector`](crate::Vector) so that a whole curve
//! can be interpolated over one shared parameter sequence.
//!
//! Queries outside `[min_t, max_t]` extrapolate linearly with the boundary
//! segment. Bracketing uses the tolerance-aware search in [`search`], and
//! the spline fit uses the O(n) solvers in [`tridiagonal`].
//!
//! # Examples
//!
//! ```
//! use arcspline::interp::PiecewiseCubicFunction;
//!
//! let ts = vec![0.0_f64, 1.0, 2.0, 3.0];
//! let ys = vec![0.0_f64, 1.0, 0.0, 1.0];
//! let spline = PiecewiseCubicFunction::new(ts, ys).unwrap();
//! assert!((spline.eval(1.0) - 1.0).abs() < 1e-14);
//! assert!(spline.derivative_n(0.0, 2).unwrap().abs() < 1e-14); // natural end
//! ```

mod cubic;
mod linear;
pub mod search;
pub mod tridiagonal;

#[cfg(test)]
mod tests;

pub use cubic::{BoundaryMode, PiecewiseCubicFunction};
pub use linear::PiecewiseLinearFunction;
pub use search::{nearest_upper_element, nearest_upper_point};
pub use tridiagonal::{PeriodicTridiagonal, Tridiagonal};

use crate::traits::{Arithmetic, FloatScalar};

/// Two parameters closer than this are treated as duplicates.
pub const DUPLICATE_TOLERANCE: f64 = 1e-8;

/// Tolerance used by the bracketing search when snapping to the end samples.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Whether constructors validate their inputs (`check-params` feature).
///
/// With the feature disabled the O(n) scans are skipped and violating a
/// precondition is a caller error: queries may panic on indexing or return
/// meaningless values.
pub const CHECK_PARAMS: bool = cfg!(feature = "check-params");

/// Errors from piecewise function and curve construction.
///
/// Every variant is an invalid-argument condition; queries never fail.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InterpError {
    /// Not enough samples for the interpolation method.
    #[error("not enough samples: {actual} given, at least {required} required")]
    TooFewPoints { required: usize, actual: usize },
    /// Parameters and values have different lengths.
    #[error("ts and ys must share the same length: ts.len() = {ts}, ys.len() = {ys}")]
    LengthMismatch { ts: usize, ys: usize },
    /// The parameters are not increasing at `index`.
    #[error("parameters must be strictly increasing (violated at index {index})")]
    NotSorted { index: usize },
    /// The parameter at `index` duplicates its predecessor.
    #[error("duplicated parameter at index {index}")]
    DuplicateParameter { index: usize },
    /// Boundary derivative order other than 1 or 2.
    #[error("boundary condition order must be 1 or 2, got {order}")]
    InvalidBoundaryOrder { order: u32 },
    /// Periodic spline whose first and last values differ.
    #[error("periodic spline requires the first and last values to coincide")]
    PeriodicMismatch,
    /// Derivative order not supported by the function kind.
    #[error("derivative order {order} is not supported (maximum {max})")]
    InvalidDerivativeOrder { order: u32, max: u32 },
}

impl InterpError {
    /// Whether this is an invalid-argument error.
    ///
    /// Every variant describes a bad input, so this is always `true`. The
    /// crate reports a single error kind and the variants only refine it.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

/// Validate a sample series: size, matching lengths, strict increase and no
/// duplicates. A no-op unless [`CHECK_PARAMS`] is set.
pub(crate) fn validate_samples<T: FloatScalar>(
    ts: &[T],
    ys_len: usize,
    required: usize,
) -> Result<(), InterpError> {
    if !CHECK_PARAMS {
        return Ok(());
    }
    if ts.len() < required || ys_len < required {
        return Err(InterpError::TooFewPoints {
            required,
            actual: ts.len().min(ys_len),
        });
    }
    if ts.len() != ys_len {
        return Err(InterpError::LengthMismatch {
            ts: ts.len(),
            ys: ys_len,
        });
    }
    let tol = T::from_f64(DUPLICATE_TOLERANCE);
    for i in 1..ts.len() {
        let gap = ts[i] - ts[i - 1];
        if gap.abs() < tol {
            return Err(InterpError::DuplicateParameter { index: i });
        }
        // NaN gaps land here too.
        if !(gap > T::zero()) {
            return Err(InterpError::NotSorted { index: i });
        }
    }
    Ok(())
}

/// Index of the segment a bracket position belongs to, clamped to the
/// boundary segments for extrapolation.
#[inline]
pub(crate) fn segment_of(pos: usize, len: usize) -> usize {
    pos.clamp(1, len - 1) - 1
}

/// `a + (b - a) * r`.
#[inline]
pub(crate) fn lerp<T: FloatScalar, V: Arithmetic<T>>(a: V, b: V, r: T) -> V {
    a + (b - a) * r
}

/// Sum `piece(p, q)` over `[a, b]` split at every sample strictly inside it.
///
/// Requires `a <= b`; a NaN bound yields a single NaN piece.
pub(crate) fn integrate_pieces<T, V, F>(ts: &[T], a: T, b: T, mut piece: F) -> V
where
    T: FloatScalar,
    V: Arithmetic<T>,
    F: FnMut(T, T) -> V,
{
    let first = ts.partition_point(|&t| t <= a);
    let last = ts.partition_point(|&t| t < b).max(first);
    let mut acc = V::zero_value();
    let mut lo = a;
    for &t in &ts[first..last] {
        acc = acc + piece(lo, t);
        lo = t;
    }
    acc + piece(lo, b)
}
