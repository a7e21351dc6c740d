use alloc::vec;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::traits::{Arithmetic, FloatScalar};

use super::{
    integrate_pieces, lerp, nearest_upper_element, validate_samples, InterpError,
    PeriodicTridiagonal, Tridiagonal, CHECK_PARAMS, DEFAULT_TOLERANCE, DUPLICATE_TOLERANCE,
};

/// End condition of a cubic spline: the prescribed derivative of the given
/// order (1 or 2) at that end.
///
/// `BoundaryMode::second_order(0.0)` is the natural end condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryMode<V> {
    /// Derivative order, 1 (clamped slope) or 2 (prescribed curvature).
    pub order: u32,
    /// Value of that derivative at the end.
    pub derivative: V,
}

impl<V> BoundaryMode<V> {
    /// Prescribe the first derivative (clamped end).
    pub const fn first_order(derivative: V) -> Self {
        Self {
            order: 1,
            derivative,
        }
    }

    /// Prescribe the second derivative.
    pub const fn second_order(derivative: V) -> Self {
        Self {
            order: 2,
            derivative,
        }
    }
}

/// Cubic spline through a sample series.
///
/// Stores the samples together with the second derivative `m_i` of the
/// spline at every sample. On segment `[t_i, t_{i+1}]` with `h = t_{i+1} - t_i`
/// and `r = (t - t_i) / h`:
///
/// `S(t) = y_i (1-r) + y_{i+1} r + h²/6 [m_i ((1-r)³ - (1-r)) + m_{i+1} (r³ - r)]`
///
/// The spline is C² inside `[min_t, max_t]`. Outside, it continues along the
/// tangent line at the nearer end.
///
/// # Example
///
/// ```
/// use arcspline::interp::{BoundaryMode, PiecewiseCubicFunction};
///
/// // Clamped spline reproduces a quadratic exactly.
/// let ts: Vec<f64> = (0..6).map(|i| i as f64).collect();
/// let ys: Vec<f64> = ts.iter().map(|t| t * t).collect();
/// let f = PiecewiseCubicFunction::with_boundary(
///     ts,
///     ys,
///     BoundaryMode::first_order(0.0),
///     BoundaryMode::first_order(10.0),
/// )
/// .unwrap();
/// assert!((f.eval(2.5) - 6.25).abs() < 1e-12);
/// assert!((f.derivative(2.5) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseCubicFunction<T, V = T> {
    ts: Vec<T>,
    ys: Vec<V>,
    ddys: Vec<V>,
}

/// Segment lengths and chord slopes of a sample series.
fn chords<T: FloatScalar, V: Arithmetic<T>>(ts: &[T], ys: &[V]) -> (Vec<T>, Vec<V>) {
    let mut hs = Vec::with_capacity(ts.len() - 1);
    let mut ds = Vec::with_capacity(ts.len() - 1);
    for i in 0..ts.len() - 1 {
        let h = ts[i + 1] - ts[i];
        hs.push(h);
        ds.push((ys[i + 1] - ys[i]) / h);
    }
    (hs, ds)
}

/// Spline value on a segment at ratio `r`.
#[inline]
fn cuberp<T: FloatScalar, V: Arithmetic<T>>(y0: V, y1: V, m0: V, m1: V, r: T, h: T) -> V {
    let s = T::one() - r;
    let k = h * h / T::from_f64(6.0);
    y0 * s + y1 * r + (m0 * (s * s * s - s) + m1 * (r * r * r - r)) * k
}

/// Spline first derivative on a segment at ratio `r`.
#[inline]
fn cuberpd<T: FloatScalar, V: Arithmetic<T>>(y0: V, y1: V, m0: V, m1: V, r: T, h: T) -> V {
    let s = T::one() - r;
    let three = T::from_f64(3.0);
    let k = h / T::from_f64(6.0);
    (y1 - y0) / h + (m0 * (T::one() - three * s * s) + m1 * (three * r * r - T::one())) * k
}

impl<T: FloatScalar, V: Arithmetic<T>> PiecewiseCubicFunction<T, V> {
    /// Natural cubic spline (zero second derivative at both ends).
    pub fn new(ts: Vec<T>, ys: Vec<V>) -> Result<Self, InterpError> {
        let natural = BoundaryMode::second_order(V::zero_value());
        Self::with_boundary(ts, ys, natural, natural)
    }

    /// Cubic spline with explicit end conditions.
    ///
    /// Besides the sample checks of
    /// [`PiecewiseLinearFunction::new`](super::PiecewiseLinearFunction::new), returns
    /// `InvalidBoundaryOrder` unless both orders are 1 or 2.
    pub fn with_boundary(
        ts: Vec<T>,
        ys: Vec<V>,
        b0: BoundaryMode<V>,
        bf: BoundaryMode<V>,
    ) -> Result<Self, InterpError> {
        validate_samples(&ts, ys.len(), 2)?;
        if CHECK_PARAMS {
            for order in [b0.order, bf.order] {
                if !(1..=2).contains(&order) {
                    return Err(InterpError::InvalidBoundaryOrder { order });
                }
            }
        }

        let n = ts.len();
        let two = T::from_f64(2.0);
        let three = T::from_f64(3.0);
        let six = T::from_f64(6.0);
        let (hs, ds) = chords(&ts, &ys);

        // h[i-1]·m[i-1] + 2(h[i-1] + h[i])·m[i] + h[i]·m[i+1] = 6(d[i] - d[i-1])
        let mut lower = hs.clone();
        let mut upper = hs.clone();
        let mut diag = vec![T::one(); n];
        let mut rhs = vec![V::zero_value(); n];
        for i in 1..n - 1 {
            diag[i] = two * (hs[i - 1] + hs[i]);
            rhs[i] = (ds[i] - ds[i - 1]) * six;
        }

        if b0.order == 1 {
            upper[0] = T::from_f64(0.5);
            rhs[0] = (ds[0] - b0.derivative) * (three / hs[0]);
        } else {
            upper[0] = T::zero();
            rhs[0] = b0.derivative;
        }
        if bf.order == 1 {
            lower[n - 2] = T::from_f64(0.5);
            rhs[n - 1] = (bf.derivative - ds[n - 2]) * (three / hs[n - 2]);
        } else {
            lower[n - 2] = T::zero();
            rhs[n - 1] = bf.derivative;
        }

        let ddys = Tridiagonal::new(lower, diag, upper).solve(&rhs);
        debug!(
            "cubic spline with {} samples, boundary orders ({}, {})",
            n, b0.order, bf.order
        );
        Ok(Self { ts, ys, ddys })
    }

    /// Periodic cubic spline: value, slope and curvature match at both ends.
    ///
    /// Returns `PeriodicMismatch` when the first and last values differ by
    /// more than [`DUPLICATE_TOLERANCE`](super::DUPLICATE_TOLERANCE).
    pub fn periodic(ts: Vec<T>, ys: Vec<V>) -> Result<Self, InterpError> {
        validate_samples(&ts, ys.len(), 2)?;
        if CHECK_PARAMS
            && (ys[0] - ys[ys.len() - 1]).magnitude() > T::from_f64(DUPLICATE_TOLERANCE)
        {
            return Err(InterpError::PeriodicMismatch);
        }

        // One unknown per segment; the last sample repeats the first.
        let k = ts.len() - 1;
        let two = T::from_f64(2.0);
        let six = T::from_f64(6.0);
        let (hs, ds) = chords(&ts, &ys);

        let mut diag = Vec::with_capacity(k);
        let mut rhs = Vec::with_capacity(k);
        for i in 0..k {
            let prev = (i + k - 1) % k;
            diag.push(two * (hs[prev] + hs[i]));
            rhs.push((ds[i] - ds[prev]) * six);
        }
        let band = hs[..k - 1].to_vec();
        let corner = hs[k - 1];

        let mut ddys =
            PeriodicTridiagonal::new(band.clone(), diag, band, corner, corner).solve(&rhs);
        ddys.push(ddys[0]);
        debug!("periodic cubic spline with {} samples", ts.len());
        Ok(Self { ts, ys, ddys })
    }

    #[inline]
    fn bracket(&self, t: T) -> usize {
        nearest_upper_element(&self.ts, t, T::from_f64(DEFAULT_TOLERANCE))
    }

    /// Slope correction `-(m_end/3 + m_adj/6)·h` turning the boundary chord
    /// into the end tangent.
    #[inline]
    fn end_correction(m_end: V, m_adj: V) -> V {
        -(m_end / T::from_f64(3.0) + m_adj / T::from_f64(6.0))
    }

    /// Evaluate at `t`.
    pub fn eval(&self, t: T) -> V {
        let n = self.ts.len();
        let (ts, ys, ms) = (&self.ts, &self.ys, &self.ddys);
        match self.bracket(t) {
            0 => {
                let h = ts[1] - ts[0];
                let dt = t - ts[0];
                lerp(ys[0], ys[1], dt / h) + Self::end_correction(ms[0], ms[1]) * (dt * h)
            }
            pos if pos == n => {
                let h = ts[n - 2] - ts[n - 1];
                let dt = t - ts[n - 1];
                lerp(ys[n - 1], ys[n - 2], dt / h)
                    + Self::end_correction(ms[n - 1], ms[n - 2]) * (dt * h)
            }
            pos => {
                let h = ts[pos] - ts[pos - 1];
                let r = (t - ts[pos - 1]) / h;
                cuberp(ys[pos - 1], ys[pos], ms[pos - 1], ms[pos], r, h)
            }
        }
    }

    /// First derivative at `t`; constant end slope outside the range.
    pub fn derivative(&self, t: T) -> V {
        let n = self.ts.len();
        let (ts, ys, ms) = (&self.ts, &self.ys, &self.ddys);
        match self.bracket(t) {
            0 => {
                let h = ts[1] - ts[0];
                (ys[1] - ys[0]) / h + Self::end_correction(ms[0], ms[1]) * h
            }
            pos if pos == n => {
                let h = ts[n - 2] - ts[n - 1];
                (ys[n - 2] - ys[n - 1]) / h + Self::end_correction(ms[n - 1], ms[n - 2]) * h
            }
            pos => {
                let h = ts[pos] - ts[pos - 1];
                let r = (t - ts[pos - 1]) / h;
                cuberpd(ys[pos - 1], ys[pos], ms[pos - 1], ms[pos], r, h)
            }
        }
    }

    /// Evaluate the spline and its first derivative at `t`.
    pub fn eval_derivative(&self, t: T) -> (V, V) {
        (self.eval(t), self.derivative(t))
    }

    /// Second derivative: linear in `m` within the range, zero outside.
    pub(crate) fn derivative2(&self, t: T) -> V {
        let n = self.ts.len();
        match self.bracket(t) {
            0 => V::zero_value(),
            pos if pos == n => V::zero_value(),
            pos => {
                let r = (t - self.ts[pos - 1]) / (self.ts[pos] - self.ts[pos - 1]);
                lerp(self.ddys[pos - 1], self.ddys[pos], r)
            }
        }
    }

    /// Third derivative: constant per segment, zero outside the range.
    pub(crate) fn derivative3(&self, t: T) -> V {
        let n = self.ts.len();
        match self.bracket(t) {
            0 => V::zero_value(),
            pos if pos == n => V::zero_value(),
            pos => (self.ddys[pos] - self.ddys[pos - 1]) / (self.ts[pos] - self.ts[pos - 1]),
        }
    }

    /// Derivative of order 1, 2 or 3.
    pub fn derivative_n(&self, t: T, order: u32) -> Result<V, InterpError> {
        match order {
            1 => Ok(self.derivative(t)),
            2 => Ok(self.derivative2(t)),
            3 => Ok(self.derivative3(t)),
            _ => Err(InterpError::InvalidDerivativeOrder { order, max: 3 }),
        }
    }

    /// Definite integral from `lower` to `upper` (negated when
    /// `lower > upper`).
    ///
    /// Exact for the spline: each piece inside the range uses the corrected
    /// trapezoid `(f(a) + f(b))·h/2 - (f''(a) + f''(b))·h³/24`, extrapolated
    /// pieces are linear and use the plain trapezoid.
    pub fn integral(&self, lower: T, upper: T) -> V {
        let (a, b, flip) = if lower > upper {
            (upper, lower, true)
        } else {
            (lower, upper, false)
        };
        let half = T::from_f64(0.5);
        let k = T::from_f64(1.0 / 24.0);
        let (first, last) = (self.min_t(), self.max_t());
        let area = integrate_pieces(&self.ts, a, b, |p, q| {
            let h = q - p;
            let trapezoid = (self.eval(p) + self.eval(q)) * (h * half);
            if q <= first || p >= last {
                trapezoid
            } else {
                trapezoid - (self.derivative2(p) + self.derivative2(q)) * (h * h * h * k)
            }
        });
        if flip {
            -area
        } else {
            area
        }
    }

    /// First sample parameter.
    #[inline]
    pub fn min_t(&self) -> T {
        self.ts[0]
    }

    /// Last sample parameter.
    #[inline]
    pub fn max_t(&self) -> T {
        self.ts[self.ts.len() - 1]
    }

    /// The sample parameters.
    #[inline]
    pub fn ts(&self) -> &[T] {
        &self.ts
    }

    /// The sample values.
    #[inline]
    pub fn ys(&self) -> &[V] {
        &self.ys
    }

    /// Second derivatives of the spline at the samples.
    #[inline]
    pub fn second_derivatives(&self) -> &[V] {
        &self.ddys
    }
}

impl<T: FloatScalar + Arithmetic<T>> PiecewiseCubicFunction<T, T> {
    /// Locate the minimum (`sign = 1`) or maximum (`sign = -1`) of the
    /// spline over `[min_t, max_t]`.
    ///
    /// Starts from the extreme sample, picks the adjacent segment the slope
    /// points into, then runs three Newton steps on the segment ratio from its
    /// midpoint. Returns `(t, value)`.
    fn extremum(&self, sign: T) -> (T, T) {
        let (ts, ys, ms) = (&self.ts, &self.ys, &self.ddys);
        let n = ts.len();
        let slope = |i: usize, r: T| {
            sign * cuberpd(ys[i], ys[i + 1], ms[i], ms[i + 1], r, ts[i + 1] - ts[i])
        };

        let mut pos = 0;
        for i in 1..n {
            if sign * ys[i] < sign * ys[pos] {
                pos = i;
            }
        }
        if pos == 0 {
            if slope(0, T::zero()) < T::zero() {
                pos = 1;
            } else {
                return (ts[0], ys[0]);
            }
        } else if pos == n - 1 {
            if slope(n - 2, T::one()) < T::zero() {
                return (ts[n - 1], ys[n - 1]);
            }
        } else if slope(pos, T::zero()) < T::zero() {
            pos += 1;
        }

        let i = pos - 1;
        let h = ts[pos] - ts[i];
        let mut r = T::from_f64(0.5);
        for _ in 0..3 {
            let d = cuberpd(ys[i], ys[pos], ms[i], ms[pos], r, h);
            let dd = lerp(ms[i], ms[pos], r);
            if dd == T::zero() {
                trace!("extremum refinement stopped: zero curvature at ratio {:?}", r);
                break;
            }
            r = r - d / (dd * h);
        }
        (ts[i] + r * h, cuberp(ys[i], ys[pos], ms[i], ms[pos], r, h))
    }

    /// Minimum value of the spline over its sample range.
    pub fn min_y(&self) -> T {
        self.extremum(T::one()).1
    }

    /// Maximum value of the spline over its sample range.
    pub fn max_y(&self) -> T {
        self.extremum(-T::one()).1
    }

    /// Parameter at which [`min_y`](Self::min_y) is attained.
    pub fn argmin(&self) -> T {
        self.extremum(T::one()).0
    }

    /// Parameter at which [`max_y`](Self::max_y) is attained.
    pub fn argmax(&self) -> T {
        self.extremum(-T::one()).0
    }
}
