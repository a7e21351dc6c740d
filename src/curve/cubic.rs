use alloc::vec::Vec;

use log::{debug, trace};

use crate::interp::{
    nearest_upper_point, segment_of, InterpError, PiecewiseCubicFunction, DEFAULT_TOLERANCE,
};
use crate::traits::FloatScalar;
use crate::vector::{Vector, Vector2, Vector3};

use super::{anchor_window, chord_lengths, ordered, SlDuplet, SlvTriplet};

/// Newton steps spent refining the foot point of an inversion.
const MAX_NEWTON_ITERATIONS: usize = 8;
/// Newton refinement stops once the arc-length step is below this.
const NEWTON_STEP_TOLERANCE: f64 = 1e-10;

/// C² cubic spline through anchor points, parametrized by cumulative chord
/// length.
///
/// All coordinates share one spline fit over the arc-length parameter.
/// Frames come from the analytic derivatives: the planar normal is the left
/// normal of the tangent and the planar curvature is signed (positive when
/// turning left).
///
/// Because the parameter is chord length rather than true arc length, `s`
/// values agree with arc length only up to the chordal error of the anchors.
///
/// A curve built with [`periodic`](Self::periodic) is closed: unbounded
/// inversion wraps across the seam and reports `s` in `[min_s, max_s)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseCubicCurve<T, const N: usize> {
    path: PiecewiseCubicFunction<T, Vector<T, N>>,
    closed: bool,
}

impl<T: FloatScalar, const N: usize> PiecewiseCubicCurve<T, N> {
    /// Open curve with natural ends, starting at arc length zero.
    pub fn new(anchor_points: Vec<Vector<T, N>>) -> Result<Self, InterpError> {
        Self::with_offset(anchor_points, T::zero())
    }

    /// Open curve with natural ends whose first anchor sits at arc length
    /// `s0`.
    pub fn with_offset(anchor_points: Vec<Vector<T, N>>, s0: T) -> Result<Self, InterpError> {
        let arcs = chord_lengths(&anchor_points, s0)?;
        let path = PiecewiseCubicFunction::new(arcs, anchor_points)?;
        debug!("cubic curve ({}-D) with {} anchors", N, path.ts().len());
        Ok(Self { path, closed: false })
    }

    /// Closed curve; the last anchor must repeat the first
    /// (`PeriodicMismatch` otherwise).
    pub fn periodic(anchor_points: Vec<Vector<T, N>>) -> Result<Self, InterpError> {
        let arcs = chord_lengths(&anchor_points, T::zero())?;
        let path = PiecewiseCubicFunction::periodic(arcs, anchor_points)?;
        debug!("closed cubic curve ({}-D) with {} anchors", N, path.ts().len());
        Ok(Self { path, closed: true })
    }

    /// Position at arc length `s`.
    pub fn eval(&self, s: T) -> Vector<T, N> {
        self.path.eval(s)
    }

    /// Unit tangent at `s`.
    pub fn tangent(&self, s: T) -> Vector<T, N> {
        self.path.derivative(s).normalize()
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

    /// Whether the curve was built with [`periodic`](Self::periodic).
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Arc length of the point on the curve nearest to `point`, searching
    /// from the anchors in `[lo, hi)` and staying inside `bounds`.
    ///
    /// The chord projection seeds Newton's method on
    /// `g(s) = (c(s) - p)·c'(s)`. Without bounds a closed curve is searched
    /// modulo its period.
    fn foot_point(
        &self,
        point: &Vector<T, N>,
        lo: usize,
        hi: usize,
        bounds: Option<(T, T)>,
    ) -> T {
        let anchors = self.anchor_points();
        let arcs = self.arc_lengths();
        let n = anchors.len();
        let seam = self.closed && bounds.is_none();
        let side_tol = T::from_f64(DEFAULT_TOLERANCE);
        let local = nearest_upper_point(&anchors[lo..hi], point, side_tol);
        // The first and last anchors of a closed curve coincide: before the
        // first anchor is the last segment, past the last one is the first.
        let base = match local {
            0 if seam => n - 2,
            k if seam && k == hi => 0,
            k => lo + segment_of(k, hi - lo),
        };
        let chord = (anchors[base + 1] - anchors[base]).normalize();
        let (first, last) = (arcs[0], arcs[n - 1]);
        let fit = |s: T| match bounds {
            Some((start, end)) => s.max(start).min(end),
            None if seam => {
                let period = last - first;
                let wrapped = s - ((s - first) / period).floor() * period;
                // The seam itself is reported at the front.
                if last - wrapped < side_tol {
                    first
                } else {
                    wrapped
                }
            }
            None => s,
        };

        let mut s = fit(arcs[base] + (*point - anchors[base]).dot(&chord));
        let tol = T::from_f64(NEWTON_STEP_TOLERANCE);
        for iter in 0..MAX_NEWTON_ITERATIONS {
            let r = self.path.eval(s) - *point;
            let d1 = self.path.derivative(s);
            let d2 = self.path.derivative2(s);
            let slope = d1.dot(&d1) + r.dot(&d2);
            if !(slope > T::zero()) {
                trace!("foot point refinement stopped at s = {:?}: slope {:?}", s, slope);
                break;
            }
            let step = r.dot(&d1) / slope;
            s = fit(s - step);
            if step.abs() < tol {
                trace!("foot point converged after {} iterations", iter + 1);
                break;
            }
        }
        s
    }
}

impl<T: FloatScalar> PiecewiseCubicCurve<T, 2> {
    /// Position at arc length `s` offset by `l` along the normal.
    pub fn eval_sl(&self, s: T, l: T) -> Vector2<T> {
        self.eval(s) + self.normal(s) * l
    }

    /// [`eval_sl`](Self::eval_sl) from curve coordinates.
    pub fn eval_duplet(&self, sl: SlDuplet<T>) -> Vector2<T> {
        self.eval_sl(sl.s, sl.l)
    }

    /// Left unit normal at `s`.
    pub fn normal(&self, s: T) -> Vector2<T> {
        self.tangent(s).rotate_half_pi()
    }

    /// Signed curvature `(c' × c'') / |c'|³`.
    pub fn curvature(&self, s: T) -> T {
        let d1 = self.path.derivative(s);
        let d2 = self.path.derivative2(s);
        let speed = d1.norm();
        d1.cross_proj(&d2) / (speed * speed * speed)
    }

    fn project(
        &self,
        point: Vector2<T>,
        lo: usize,
        hi: usize,
        bounds: Option<(T, T)>,
    ) -> SlDuplet<T> {
        let s = self.foot_point(&point, lo, hi, bounds);
        let r = point - self.eval(s);
        SlDuplet {
            s,
            l: r.dot(&self.normal(s)),
        }
    }

    /// Project a point to `(s, l)`. On a closed curve `s` wraps into
    /// `[min_s, max_s)`.
    pub fn inverse(&self, point: Vector2<T>) -> SlDuplet<T> {
        let n = self.anchor_points().len();
        self.project(point, 0, n, None)
    }

    /// Project a point considering only the curve between `start_s` and
    /// `end_s` (in either order); `s` is clamped into that range and the
    /// offsets are measured from the clamped foot point. No seam wrapping.
    pub fn inverse_within(&self, point: Vector2<T>, start_s: T, end_s: T) -> SlDuplet<T> {
        let bounds = ordered(start_s, end_s);
        let (lo, hi) = anchor_window(self.arc_lengths(), bounds.0, bounds.1);
        self.project(point, lo, hi, Some(bounds))
    }
}

impl<T: FloatScalar> PiecewiseCubicCurve<T, 3> {
    /// Position at arc length `s` offset by `l` along the normal and `v`
    /// along the binormal.
    pub fn eval_slv(&self, s: T, l: T, v: T) -> Vector3<T> {
        let (normal, binormal) = self.frame(s);
        self.eval(s) + normal * l + binormal * v
    }

    /// [`eval_slv`](Self::eval_slv) from curve coordinates.
    pub fn eval_triplet(&self, slv: SlvTriplet<T>) -> Vector3<T> {
        self.eval_slv(slv.s, slv.l, slv.v)
    }

    /// Normal and binormal at `s`.
    fn frame(&self, s: T) -> (Vector3<T>, Vector3<T>) {
        let d1 = self.path.derivative(s);
        let d2 = self.path.derivative2(s);
        let normal = d1.cross(&d2.cross(&d1)).normalize();
        let binormal = d1.cross(&d2).normalize();
        (normal, binormal)
    }

    /// Unit principal normal at `s` (NaN where the curve is straight).
    pub fn normal(&self, s: T) -> Vector3<T> {
        self.frame(s).0
    }

    /// Unit binormal at `s` (NaN where the curve is straight).
    pub fn binormal(&self, s: T) -> Vector3<T> {
        self.frame(s).1
    }

    /// Curvature `|c' × c''| / |c'|³`.
    pub fn curvature(&self, s: T) -> T {
        let d1 = self.path.derivative(s);
        let d2 = self.path.derivative2(s);
        let speed = d1.norm();
        d1.cross(&d2).norm() / (speed * speed * speed)
    }

    /// Torsion `(c' × c'')·c''' / |c' × c''|²`.
    pub fn torsion(&self, s: T) -> T {
        let d1 = self.path.derivative(s);
        let d2 = self.path.derivative2(s);
        let d3 = self.path.derivative3(s);
        let b = d1.cross(&d2);
        b.dot(&d3) / b.norm_squared()
    }

    fn project(
        &self,
        point: Vector3<T>,
        lo: usize,
        hi: usize,
        bounds: Option<(T, T)>,
    ) -> SlvTriplet<T> {
        let s = self.foot_point(&point, lo, hi, bounds);
        let r = point - self.eval(s);
        let (normal, binormal) = self.frame(s);
        SlvTriplet {
            s,
            l: r.dot(&normal),
            v: r.dot(&binormal),
        }
    }

    /// Project a point to `(s, l, v)`. On a closed curve `s` wraps into
    /// `[min_s, max_s)`.
    pub fn inverse(&self, point: Vector3<T>) -> SlvTriplet<T> {
        let n = self.anchor_points().len();
        self.project(point, 0, n, None)
    }

    /// Project a point considering only the curve between `start_s` and
    /// `end_s` (in either order); `s` is clamped into that range and the
    /// offsets are measured from the clamped foot point. No seam wrapping.
    pub fn inverse_within(&self, point: Vector3<T>, start_s: T, end_s: T) -> SlvTriplet<T> {
        let bounds = ordered(start_s, end_s);
        let (lo, hi) = anchor_window(self.arc_lengths(), bounds.0, bounds.1);
        self.project(point, lo, hi, Some(bounds))
    }
}
