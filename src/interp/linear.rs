use alloc::vec::Vec;

use log::debug;

use crate::traits::{Arithmetic, FloatScalar};

use super::{
    integrate_pieces, lerp, nearest_upper_element, segment_of, validate_samples, InterpError,
    DEFAULT_TOLERANCE,
};

/// Piecewise linear function through a sample series.
///
/// Values may be scalars (`V = T`) or fixed-size vectors. Outside
/// `[min_t, max_t]` the boundary segments are extended linearly.
///
/// # Example
///
/// ```
/// use arcspline::interp::PiecewiseLinearFunction;
///
/// let f = PiecewiseLinearFunction::new(vec![0.0_f64, 1.0, 3.0], vec![0.0_f64, 2.0, 2.0]).unwrap();
/// assert!((f.eval(0.5) - 1.0).abs() < 1e-14);
/// assert!((f.derivative(2.0)).abs() < 1e-14);
/// assert!((f.integral(0.0, 3.0) - 5.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinearFunction<T, V = T> {
    ts: Vec<T>,
    ys: Vec<V>,
}

impl<T: FloatScalar, V: Arithmetic<T>> PiecewiseLinearFunction<T, V> {
    /// Construct from sorted parameters and their values.
    ///
    /// Returns `TooFewPoints` for fewer than two samples, `LengthMismatch`,
    /// `NotSorted` or `DuplicateParameter` (spacing below
    /// [`DUPLICATE_TOLERANCE`](super::DUPLICATE_TOLERANCE)).
    pub fn new(ts: Vec<T>, ys: Vec<V>) -> Result<Self, InterpError> {
        validate_samples(&ts, ys.len(), 2)?;
        debug!("piecewise linear function with {} samples", ts.len());
        Ok(Self { ts, ys })
    }

    #[inline]
    fn segment(&self, t: T) -> usize {
        let pos = nearest_upper_element(&self.ts, t, T::from_f64(DEFAULT_TOLERANCE));
        segment_of(pos, self.ts.len())
    }

    /// Evaluate at `t`.
    pub fn eval(&self, t: T) -> V {
        let i = self.segment(t);
        let r = (t - self.ts[i]) / (self.ts[i + 1] - self.ts[i]);
        lerp(self.ys[i], self.ys[i + 1], r)
    }

    /// First derivative: the chord slope of the bracketing segment.
    pub fn derivative(&self, t: T) -> V {
        let i = self.segment(t);
        (self.ys[i + 1] - self.ys[i]) / (self.ts[i + 1] - self.ts[i])
    }

    /// Evaluate the function and its derivative at `t`.
    pub fn eval_derivative(&self, t: T) -> (V, V) {
        let i = self.segment(t);
        let h = self.ts[i + 1] - self.ts[i];
        let dy = self.ys[i + 1] - self.ys[i];
        (self.ys[i] + dy * ((t - self.ts[i]) / h), dy / h)
    }

    /// Derivative of the given order. Only order 1 exists.
    pub fn derivative_n(&self, t: T, order: u32) -> Result<V, InterpError> {
        if order != 1 {
            return Err(InterpError::InvalidDerivativeOrder { order, max: 1 });
        }
        Ok(self.derivative(t))
    }

    /// Definite integral from `lower` to `upper` (negated when
    /// `lower > upper`). Exact, including extrapolated regions.
    pub fn integral(&self, lower: T, upper: T) -> V {
        let (a, b, flip) = if lower > upper {
            (upper, lower, true)
        } else {
            (lower, upper, false)
        };
        let half = T::from_f64(0.5);
        let area = integrate_pieces(&self.ts, a, b, |p, q| {
            (self.eval(p) + self.eval(q)) * ((q - p) * half)
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
}

impl<T: FloatScalar> PiecewiseLinearFunction<T, T> {
    /// Smallest sample value (the minimum of a piecewise linear function is
    /// always attained at a sample).
    pub fn min_y(&self) -> T {
        self.ys.iter().copied().fold(T::infinity(), T::min)
    }

    /// Largest sample value.
    pub fn max_y(&self) -> T {
        self.ys.iter().copied().fold(T::neg_infinity(), T::max)
    }
}
