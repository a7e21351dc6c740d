//! Tolerance-aware bracketing over sorted parameters and ordered points.
//!
//! Both searches return an *upper* index `pos`: the bracketing segment is
//! `[pos - 1, pos]`, `0` means the query lies before the first sample and
//! `len` means it lies past the last one.

use crate::traits::{FloatScalar, VecArithmetic};

/// Upper bracket of `query` in an ascending `sequence`.
///
/// Queries within `tol` of the first sample snap to `1`, queries within `tol`
/// of the last sample snap to `len - 1`, so the end samples always bracket
/// into the boundary segments. Otherwise returns the first index `i` with
/// `query - sequence[i] < -tol`.
///
/// ```
/// use arcspline::interp::nearest_upper_element;
///
/// let ts = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
/// assert_eq!(nearest_upper_element(&ts, 2.5, 1e-8), 3);
/// assert_eq!(nearest_upper_element(&ts, -1.0, 1e-8), 0);
/// assert_eq!(nearest_upper_element(&ts, 9.0, 1e-8), 5);
/// ```
pub fn nearest_upper_element<T: FloatScalar>(sequence: &[T], query: T, tol: T) -> usize {
    let n = sequence.len();
    if n < 2 {
        return if n == 0 || query < sequence[0] { 0 } else { n };
    }
    if (query - sequence[0]).abs() < tol {
        return 1;
    }
    if (query - sequence[n - 1]).abs() < tol {
        return n - 1;
    }
    sequence.partition_point(|&x| !(query - x < -tol))
}

/// Upper bracket of a point against an ordered polyline of sample points.
///
/// Finds the globally nearest sample (the first one on ties), then decides on
/// which side of it the query lies by projecting onto the adjacent chord.
/// Returns `0` / `len` when the query lies beyond the first / last sample.
pub fn nearest_upper_point<T, V>(points: &[V], query: &V, tol: T) -> usize
where
    T: FloatScalar,
    V: VecArithmetic<T>,
{
    let n = points.len();
    if n < 2 {
        return 0;
    }
    let mut pos = 0;
    let mut best = T::infinity();
    for (i, p) in points.iter().enumerate() {
        let dist = query.euclidean_to(p);
        if dist < best {
            pos = i;
            best = dist;
        }
    }
    if pos == 0 {
        let chord = points[1] - points[0];
        let r = *query - points[0];
        return if chord.dot(&r) < -tol { 0 } else { 1 };
    }
    if pos == n - 1 {
        // Points backwards, into the curve.
        let chord = points[n - 2] - points[n - 1];
        let r = *query - points[n - 1];
        return if chord.dot(&r) < -tol { n } else { n - 1 };
    }
    let chord = points[pos + 1] - points[pos];
    let r = *query - points[pos];
    if chord.dot(&r) < -tol {
        pos
    } else {
        pos + 1
    }
}
