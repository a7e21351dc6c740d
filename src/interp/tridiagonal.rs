//! O(n) solvers for tridiagonal and periodic (cyclic) tridiagonal systems.
//!
//! Coefficients are in the parameter type `T`; right-hand sides and
//! solutions may be any [`Arithmetic`] value, so one factorization serves
//! every coordinate of a vector-valued spline at once.
//!
//! No pivoting is performed. Spline systems are strictly diagonally dominant
//! so elimination is stable; a pivot that is not finite or smaller than
//! machine epsilon is reported with `log::warn!` and the solve proceeds.

use alloc::vec;
use alloc::vec::Vec;

use log::warn;

use crate::traits::{Arithmetic, FloatScalar};

fn check_pivot<T: FloatScalar>(pivot: T, row: usize) {
    if !pivot.is_finite() || pivot.abs() < T::epsilon() {
        warn!("tridiagonal solve: degenerate pivot {:?} at row {}", pivot, row);
    }
}

/// Tridiagonal matrix stored as its three diagonals.
///
/// Row `i` reads `lower[i-1]·x[i-1] + diag[i]·x[i] + upper[i]·x[i+1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tridiagonal<T> {
    lower: Vec<T>,
    diag: Vec<T>,
    upper: Vec<T>,
}

impl<T: FloatScalar> Tridiagonal<T> {
    /// Build from the sub-diagonal, diagonal and super-diagonal.
    ///
    /// # Panics
    ///
    /// If `lower` or `upper` does not have `diag.len() - 1` entries.
    pub fn new(lower: Vec<T>, diag: Vec<T>, upper: Vec<T>) -> Self {
        let off = diag.len().saturating_sub(1);
        assert_eq!(lower.len(), off, "sub-diagonal length");
        assert_eq!(upper.len(), off, "super-diagonal length");
        Self { lower, diag, upper }
    }

    /// System size.
    #[inline]
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    /// `true` for the empty system.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Solve `A x = rhs` with the Thomas algorithm.
    ///
    /// # Panics
    ///
    /// If `rhs.len() != self.len()`.
    pub fn solve<V: Arithmetic<T>>(&self, rhs: &[V]) -> Vec<V> {
        let n = self.diag.len();
        assert_eq!(rhs.len(), n, "right-hand side length");
        if n == 0 {
            return Vec::new();
        }

        // Forward sweep: c = modified super-diagonal, x = modified rhs.
        let mut c = vec![T::zero(); n];
        let mut x = Vec::with_capacity(n);
        let mut pivot = self.diag[0];
        check_pivot(pivot, 0);
        if n > 1 {
            c[0] = self.upper[0] / pivot;
        }
        x.push(rhs[0] / pivot);
        for i in 1..n {
            pivot = self.diag[i] - self.lower[i - 1] * c[i - 1];
            check_pivot(pivot, i);
            if i < n - 1 {
                c[i] = self.upper[i] / pivot;
            }
            let xi = (rhs[i] - x[i - 1] * self.lower[i - 1]) / pivot;
            x.push(xi);
        }

        // Back substitution
        for i in (0..n - 1).rev() {
            x[i] = x[i] - x[i + 1] * c[i];
        }
        x
    }
}

/// Cyclic tridiagonal matrix: a [`Tridiagonal`] band plus the two corner
/// entries `A[0][n-1]` (`top_right`) and `A[n-1][0]` (`bottom_left`).
///
/// Arises from periodic splines where the last unknown couples back to the
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTridiagonal<T> {
    band: Tridiagonal<T>,
    top_right: T,
    bottom_left: T,
}

impl<T: FloatScalar> PeriodicTridiagonal<T> {
    /// Build from the band diagonals and the two corner coefficients.
    ///
    /// # Panics
    ///
    /// If `lower` or `upper` does not have `diag.len() - 1` entries.
    pub fn new(lower: Vec<T>, diag: Vec<T>, upper: Vec<T>, top_right: T, bottom_left: T) -> Self {
        Self {
            band: Tridiagonal::new(lower, diag, upper),
            top_right,
            bottom_left,
        }
    }

    /// System size.
    #[inline]
    pub fn len(&self) -> usize {
        self.band.len()
    }

    /// `true` for the empty system.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.band.is_empty()
    }

    /// Solve `A x = rhs` with a bordered LU factorization.
    ///
    /// The leading `(n-1)×(n-1)` block is eliminated as an ordinary band;
    /// the last column (`top`) and last row (`bottom`) carry the corner
    /// coupling, including the fill-in where they meet the band at
    /// `A[n-2][n-1]` and `A[n-1][n-2]`. Systems of size 1 and 2 are solved
    /// directly since the corners fold onto the band.
    ///
    /// # Panics
    ///
    /// If `rhs.len() != self.len()`.
    pub fn solve<V: Arithmetic<T>>(&self, rhs: &[V]) -> Vec<V> {
        let Tridiagonal { lower, diag, upper } = &self.band;
        let n = diag.len();
        assert_eq!(rhs.len(), n, "right-hand side length");

        match n {
            0 => return Vec::new(),
            1 => {
                let pivot = diag[0] + self.top_right + self.bottom_left;
                check_pivot(pivot, 0);
                return vec![rhs[0] / pivot];
            }
            2 => {
                let a01 = upper[0] + self.top_right;
                let a10 = lower[0] + self.bottom_left;
                let det = diag[0] * diag[1] - a01 * a10;
                check_pivot(det, 0);
                return vec![
                    (rhs[0] * diag[1] - rhs[1] * a01) / det,
                    (rhs[1] * diag[0] - rhs[0] * a10) / det,
                ];
            }
            _ => {}
        }

        // Factorization. `u`: pivots, `l`: band multipliers,
        // `top[i]` = U[i][n-1], `bottom[i]` = L[n-1][i] for i < n-1.
        let mut u = vec![T::zero(); n];
        let mut l = vec![T::zero(); n - 2];
        let mut top = vec![T::zero(); n - 1];
        let mut bottom = vec![T::zero(); n - 1];

        u[0] = diag[0];
        check_pivot(u[0], 0);
        top[0] = self.top_right;
        bottom[0] = self.bottom_left / u[0];
        for i in 1..n - 1 {
            l[i - 1] = lower[i - 1] / u[i - 1];
            u[i] = diag[i] - l[i - 1] * upper[i - 1];
            check_pivot(u[i], i);
            if i < n - 2 {
                top[i] = -l[i - 1] * top[i - 1];
                bottom[i] = -bottom[i - 1] * upper[i - 1] / u[i];
            } else {
                top[i] = upper[i] - l[i - 1] * top[i - 1];
                bottom[i] = (lower[i] - bottom[i - 1] * upper[i - 1]) / u[i];
            }
        }
        let mut corner = diag[n - 1];
        for i in 0..n - 1 {
            corner = corner - bottom[i] * top[i];
        }
        u[n - 1] = corner;
        check_pivot(corner, n - 1);

        // Forward substitution (unit lower factor).
        let mut y = Vec::with_capacity(n);
        y.push(rhs[0]);
        for i in 1..n - 1 {
            let yi = rhs[i] - y[i - 1] * l[i - 1];
            y.push(yi);
        }
        let mut last = rhs[n - 1];
        for i in 0..n - 1 {
            last = last - y[i] * bottom[i];
        }
        y.push(last);

        // Back substitution, reusing `y` for the solution.
        y[n - 1] = y[n - 1] / u[n - 1];
        let x_last = y[n - 1];
        y[n - 2] = (y[n - 2] - x_last * top[n - 2]) / u[n - 2];
        for i in (0..n - 2).rev() {
            y[i] = (y[i] - y[i + 1] * upper[i] - x_last * top[i]) / u[i];
        }
        y
    }
}
