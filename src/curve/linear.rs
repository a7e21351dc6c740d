use alloc::vec::Vec;

use log::debug;

use crate::interp::{
    nearest_upper_element, nearest_upper_point, InterpError, PiecewiseLinearFunction,
    DEFAULT_TOLERANCE,
};
use crate::traits::FloatScalar;
use crate::vector::{Vector, Vector2, Vector3};

use super::{anchor_window, chord_lengths, ordered, SlDuplet, SlvTriplet};

/// Polyline through anchor points, parametrized by cumulative chord length.
///
/// The frame is estimated by finite differences over neighbouring anchors:
/// the tangent follows the bracketing segment and the normal turns toward
/// the change of direction between that segment and the previous one.
/// Curvature and torsion of a polyline are undefined and reported as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinearCurve<T, const N: usize> {
    path: PiecewiseLinearFunction<T, Vector<T, N>>,
}

/// Anchor index the frame is attached to, plus the first and second finite
/// differences there.
struct Stencil<T, const N: usize> {
    base: usize,
    diff: Vector<T, N>,
    diff2: Vector<T, N>,
}

impl<T: FloatScalar, const N: usize> PiecewiseLinearCurve<T, N> {
    /// Polyline starting at arc length zero.
    pub fn new(anchor_points: Vec<Vector<T, N>>) -> Result<Self, InterpError> {
        Self::with_offset(anchor_points, T::zero())
    }

    /// Polyline whose first anchor sits at arc length `s0`.
    ///
    /// Needs at least two anchors; coincident consecutive anchors produce
    /// `DuplicateParameter`.
    pub fn with_offset(anchor_points: Vec<Vector<T, N>>, s0: T) -> Result<Self, InterpError> {
        let arcs = chord_lengths(&anchor_points, s0)?;
        let path = PiecewiseLinearFunction::new(arcs, anchor_points)?;
        debug!(
            "piecewise linear curve ({}-D) with {} anchors",
            N,
            path.ts().len()
        );
        Ok(Self { path })
    }

    /// Position at arc length `s`.
    pub fn eval(&self, s: T) -> Vector<T, N> {
        self.path.eval(s)
    }

    /// Unit tangent at `s`.
    pub fn tangent(&self, s: T) -> Vector<T, N> {
        self.path.derivative(s).normalize()
    }

    /// Always NaN: a polyline has no defined curvature.
    pub fn curvature(&self, _s: T) -> T {
        T::nan()
    }

    /// Arc length of the first anchor.
    pub fn min_s(&self) -> T {
        self.path.min_t()
    }

    /// Arc length of the last anchor.
    pub fn max_s(&self) -> T {
        self.path.max_t()
    }

    /// First anchor point.
    pub fn front(&self) -> Vector<T, N> {
        self.path.ys()[0]
    }

    /// Last anchor point.
    pub fn back(&self) -> Vector<T, N> {
        let ys = self.path.ys();
        ys[ys.len() - 1]
    }

    /// Arc length at every anchor.
    pub fn arc_lengths(&self) -> &[T] {
        self.path.ts()
    }

    /// The anchor points.
    pub fn anchor_points(&self) -> &[Vector<T, N>] {
        self.path.ys()
    }

    fn tol() -> T {
        T::from_f64(DEFAULT_TOLERANCE)
    }

    /// Upper bracket of `s` among the arc lengths.
    fn bracket(&self, s: T) -> usize {
        nearest_upper_element(self.arc_lengths(), s, Self::tol())
    }

    /// Finite differences at bracket `pos`, using anchors in `[lo, hi)` only.
    ///
    /// Brackets in the first two slots use the forward stencil at `lo`,
    /// brackets past the window the backward stencil at `hi - 1`. The second
    /// difference is zero when the window holds only two anchors.
    fn stencil(&self, pos: usize, lo: usize, hi: usize) -> Stencil<T, N> {
        let p = self.anchor_points();
        let s = self.arc_lengths();
        let slope = |i: usize| (p[i + 1] - p[i]) / (s[i + 1] - s[i]);
        if pos < lo + 2 {
            let diff2 = if hi > lo + 2 {
                slope(lo + 1) - slope(lo)
            } else {
                Vector::zeros()
            };
            Stencil {
                base: lo,
                diff: p[lo + 1] - p[lo],
                diff2,
            }
        } else if pos >= hi {
            let diff2 = if hi >= lo + 3 {
                slope(hi - 2) - slope(hi - 3)
            } else {
                Vector::zeros()
            };
            Stencil {
                base: hi - 1,
                diff: p[hi - 1] - p[hi - 2],
                diff2,
            }
        } else {
            Stencil {
                base: pos - 1,
                diff: p[pos] - p[pos - 1],
                diff2: slope(pos - 1) - slope(pos - 2),
            }
        }
    }

    /// Stencil for an arc-length query over the whole curve.
    fn stencil_at(&self, s: T) -> Stencil<T, N> {
        self.stencil(self.bracket(s), 0, self.anchor_points().len())
    }

    /// Stencil and offset vector for projecting `point`, searching anchors in
    /// `[lo, hi)`.
    fn locate(&self, point: &Vector<T, N>, lo: usize, hi: usize) -> (Stencil<T, N>, Vector<T, N>) {
        let pos = lo + nearest_upper_point(&self.anchor_points()[lo..hi], point, Self::tol());
        let stencil = self.stencil(pos, lo, hi);
        let r = *point - self.anchor_points()[stencil.base];
        (stencil, r)
    }
}

/// Normal turning toward the curvature side; the right normal on straight
/// runs.
fn planar_normal<T: FloatScalar>(diff: &Vector2<T>, diff2: &Vector2<T>) -> Vector2<T> {
    let left = diff.rotate_half_pi().normalize();
    if diff.cross_proj(diff2) > T::zero() {
        left
    } else {
        -left
    }
}

fn spatial_frame<T: FloatScalar>(
    diff: &Vector3<T>,
    diff2: &Vector3<T>,
) -> (Vector3<T>, Vector3<T>) {
    let normal = diff.cross(&diff2.cross(diff)).normalize();
    let binormal = diff.cross(diff2).normalize();
    (normal, binormal)
}

impl<T: FloatScalar> PiecewiseLinearCurve<T, 2> {
    /// Position at arc length `s` offset by `l` along the normal.
    pub fn eval_sl(&self, s: T, l: T) -> Vector2<T> {
        self.eval(s) + self.normal(s) * l
    }

    /// [`eval_sl`](Self::eval_sl) from curve coordinates.
    pub fn eval_duplet(&self, sl: SlDuplet<T>) -> Vector2<T> {
        self.eval_sl(sl.s, sl.l)
    }

    /// Unit normal at `s`, pointing to the side the polyline turns to.
    pub fn normal(&self, s: T) -> Vector2<T> {
        let st = self.stencil_at(s);
        planar_normal(&st.diff, &st.diff2)
    }

    fn project(&self, point: Vector2<T>, lo: usize, hi: usize) -> SlDuplet<T> {
        let (st, r) = self.locate(&point, lo, hi);
        let tangent = st.diff.normalize();
        let normal = planar_normal(&st.diff, &st.diff2);
        SlDuplet {
            s: self.arc_lengths()[st.base] + r.dot(&tangent),
            l: r.dot(&normal),
        }
    }

    /// Project a point to `(s, l)` against the nearest part of the polyline.
    ///
    /// Ties between equally near anchors go to the first one, so on a
    /// polyline whose last anchor repeats the first, points on the last
    /// segment project past the front with a negative `s`.
    pub fn inverse(&self, point: Vector2<T>) -> SlDuplet<T> {
        self.project(point, 0, self.anchor_points().len())
    }

    /// Project a point considering only anchors around `[start_s, end_s]`
    /// (bounds in either order); `s` is clamped into that range.
    ///
    /// `l` is not recomputed after clamping: it stays the offset of the
    /// unclamped projection, so `eval_sl(s, l)` need not return `point`
    /// when the clamp applies.
    pub fn inverse_within(&self, point: Vector2<T>, start_s: T, end_s: T) -> SlDuplet<T> {
        let (start, end) = ordered(start_s, end_s);
        let (lo, hi) = anchor_window(self.arc_lengths(), start, end);
        let mut sl = self.project(point, lo, hi);
        sl.s = sl.s.max(start).min(end);
        sl
    }
}

impl<T: FloatScalar> PiecewiseLinearCurve<T, 3> {
    /// Position at arc length `s` offset by `l` along the normal and `v`
    /// along the binormal.
    pub fn eval_slv(&self, s: T, l: T, v: T) -> Vector3<T> {
        let st = self.stencil_at(s);
        let (normal, binormal) = spatial_frame(&st.diff, &st.diff2);
        self.eval(s) + normal * l + binormal * v
    }

    /// [`eval_slv`](Self::eval_slv) from curve coordinates.
    pub fn eval_triplet(&self, slv: SlvTriplet<T>) -> Vector3<T> {
        self.eval_slv(slv.s, slv.l, slv.v)
    }

    /// Unit principal normal at `s` (NaN along straight runs).
    pub fn normal(&self, s: T) -> Vector3<T> {
        let st = self.stencil_at(s);
        spatial_frame(&st.diff, &st.diff2).0
    }

    /// Unit binormal at `s` (NaN along straight runs).
    pub fn binormal(&self, s: T) -> Vector3<T> {
        let st = self.stencil_at(s);
        spatial_frame(&st.diff, &st.diff2).1
    }

    /// Always NaN: a polyline has no defined torsion.
    pub fn torsion(&self, _s: T) -> T {
        T::nan()
    }

    fn project(&self, point: Vector3<T>, lo: usize, hi: usize) -> SlvTriplet<T> {
        let (st, r) = self.locate(&point, lo, hi);
        let tangent = st.diff.normalize();
        let (normal, binormal) = spatial_frame(&st.diff, &st.diff2);
        SlvTriplet {
            s: self.arc_lengths()[st.base] + r.dot(&tangent),
            l: r.dot(&normal),
            v: r.dot(&binormal),
        }
    }

    /// Project a point to `(s, l, v)` against the nearest part of the
    /// polyline. Ties between equally near anchors go to the first one.
    pub fn inverse(&self, point: Vector3<T>) -> SlvTriplet<T> {
        self.project(point, 0, self.anchor_points().len())
    }

    /// Project a point considering only anchors around `[start_s, end_s]`
    /// (bounds in either order); `s` is clamped into that range.
    ///
    /// `l` and `v` keep the offsets of the unclamped projection.
    pub fn inverse_within(&self, point: Vector3<T>, start_s: T, end_s: T) -> SlvTriplet<T> {
        let (start, end) = ordered(start_s, end_s);
        let (lo, hi) = anchor_window(self.arc_lengths(), start, end);
        let mut slv = self.project(point, lo, hi);
        slv.s = slv.s.max(start).min(end);
        slv
    }
}
