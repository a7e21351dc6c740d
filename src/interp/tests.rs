use super::*;
use crate::vector::Vector2;
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;

fn uniform(n: usize, span: f64) -> Vec<f64> {
    (0..=n).map(|i| span * i as f64 / n as f64).collect()
}

// ======================== Search ========================

#[test]
fn upper_element_interior_and_outside() {
    let ts = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
    let tol = DEFAULT_TOLERANCE;
    assert_eq!(nearest_upper_element(&ts, 2.5, tol), 3);
    assert_eq!(nearest_upper_element(&ts, -1.0, tol), 0);
    assert_eq!(nearest_upper_element(&ts, 7.0, tol), 5);
    // An interior sample brackets into the segment that starts there.
    assert_eq!(nearest_upper_element(&ts, 2.0, tol), 3);
}

#[test]
fn upper_element_snaps_to_ends() {
    let ts = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
    let tol = DEFAULT_TOLERANCE;
    assert_eq!(nearest_upper_element(&ts, 0.0, tol), 1);
    assert_eq!(nearest_upper_element(&ts, -1e-9, tol), 1);
    assert_eq!(nearest_upper_element(&ts, 4.0, tol), 4);
    assert_eq!(nearest_upper_element(&ts, 4.0 - 1e-9, tol), 4);
    assert_eq!(nearest_upper_element(&ts, 4.0 + 1e-9, tol), 4);
    // Outside the snapping tolerance the query extrapolates.
    assert_eq!(nearest_upper_element(&ts, 4.000001, tol), 5);
}

#[test]
fn upper_element_short_sequences() {
    let empty: [f64; 0] = [];
    assert_eq!(nearest_upper_element(&empty, 1.0, 1e-8), 0);
    assert_eq!(nearest_upper_element(&[1.0_f64], 0.5, 1e-8), 0);
    assert_eq!(nearest_upper_element(&[1.0_f64], 1.5, 1e-8), 1);
}

#[test]
fn upper_point_decides_side_by_chord() {
    let pts = [
        Vector2::from_xy(0.0_f64, 0.0),
        Vector2::from_xy(1.0, 0.0),
        Vector2::from_xy(2.0, 0.0),
    ];
    let tol = DEFAULT_TOLERANCE;
    assert_eq!(nearest_upper_point(&pts, &Vector2::from_xy(1.4, 0.3), tol), 2);
    assert_eq!(nearest_upper_point(&pts, &Vector2::from_xy(0.7, 0.1), tol), 1);
    assert_eq!(nearest_upper_point(&pts, &Vector2::from_xy(0.2, -0.5), tol), 1);
    assert_eq!(nearest_upper_point(&pts, &Vector2::from_xy(-1.0, 0.0), tol), 0);
    assert_eq!(nearest_upper_point(&pts, &Vector2::from_xy(3.0, 0.0), tol), 3);
    // Perpendicular to the last chord still counts as inside.
    assert_eq!(nearest_upper_point(&pts, &Vector2::from_xy(2.0, 1.0), tol), 2);
    assert_eq!(nearest_upper_point(&pts[..1], &Vector2::from_xy(5.0, 5.0), tol), 0);
}

// ======================== Tridiagonal ========================

fn periodic_matvec(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    top_right: f64,
    bottom_left: f64,
    x: &[f64],
) -> Vec<f64> {
    let n = diag.len();
    (0..n)
        .map(|i| {
            let mut s = diag[i] * x[i];
            if i > 0 {
                s += lower[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                s += upper[i] * x[i + 1];
            }
            if i == 0 {
                s += top_right * x[n - 1];
            }
            if i == n - 1 {
                s += bottom_left * x[0];
            }
            s
        })
        .collect()
}

#[test]
fn thomas_scalar_and_vector_rhs() {
    let a = Tridiagonal::new(vec![1.0_f64, 1.0], vec![4.0, 4.0, 4.0], vec![1.0, 1.0]);
    let x = a.solve(&[6.0_f64, 12.0, 14.0]);
    for (xi, ei) in x.iter().zip([1.0, 2.0, 3.0]) {
        assert!((xi - ei).abs() < 1e-14);
    }

    let rhs = [
        Vector2::from_xy(6.0, -6.0),
        Vector2::from_xy(12.0, -12.0),
        Vector2::from_xy(14.0, -14.0),
    ];
    let xv = a.solve(&rhs);
    for (i, v) in xv.iter().enumerate() {
        let e = (i + 1) as f64;
        assert!((v.x() - e).abs() < 1e-14);
        assert!((v.y() + e).abs() < 1e-14);
    }
}

#[test]
fn thomas_single_row() {
    let a = Tridiagonal::new(vec![], vec![2.0_f64], vec![]);
    assert_eq!(a.solve(&[3.0]), vec![1.5]);
    assert_eq!(a.len(), 1);
}

#[test]
#[should_panic]
fn thomas_rejects_inconsistent_bands() {
    let _ = Tridiagonal::new(vec![1.0_f64], vec![4.0, 4.0, 4.0], vec![1.0, 1.0]);
}

#[test]
fn periodic_solve_all_sizes() {
    let xs = [1.0, -2.0, 3.0, 0.5, 2.0, -1.0, 4.0, 0.25];
    for n in 1..=8 {
        let diag: Vec<f64> = (0..n).map(|i| 5.0 + i as f64).collect();
        let lower: Vec<f64> = (0..n - 1).map(|i| 1.0 + (i % 3) as f64).collect();
        let upper: Vec<f64> = (0..n - 1).map(|i| 2.0 - (i % 2) as f64).collect();
        let x = &xs[..n];
        let b = periodic_matvec(&lower, &diag, &upper, 1.5, 0.5, x);
        let a = PeriodicTridiagonal::new(lower, diag, upper, 1.5, 0.5);
        let sol = a.solve(&b);
        assert_eq!(sol.len(), n);
        for (s, e) in sol.iter().zip(x) {
            assert!((s - e).abs() < 1e-12, "n = {}: {} vs {}", n, s, e);
        }
    }
}

// ======================== Linear ========================

#[test]
fn linear_reproduces_samples() {
    let ts = vec![0.0_f64, 0.5, 1.7, 2.0, 3.5];
    let ys = vec![1.0, -1.0, 2.0, 0.0, 4.0];
    let f = PiecewiseLinearFunction::<f64>::new(ts.clone(), ys.clone()).unwrap();
    for (t, y) in ts.iter().zip(&ys) {
        assert!((f.eval(*t) - y).abs() < 1e-14);
    }
    assert_eq!(f.min_t(), 0.0);
    assert_eq!(f.max_t(), 3.5);
    assert_eq!(f.ts(), &ts[..]);
    assert_eq!(f.ys(), &ys[..]);
}

#[test]
fn linear_eval_and_extrapolation() {
    let f =
        PiecewiseLinearFunction::<f64>::new(vec![1.0_f64, 2.0, 3.0], vec![1.0, 3.0, 2.0]).unwrap();
    assert!((f.eval(1.5) - 2.0).abs() < 1e-14);
    assert!((f.eval(0.0) + 1.0).abs() < 1e-14); // slope 2
    assert!((f.eval(4.0) - 1.0).abs() < 1e-14); // slope -1
    assert!((f.derivative(0.0) - 2.0).abs() < 1e-14);
    assert!((f.derivative(2.5) + 1.0).abs() < 1e-14);
    assert!((f.derivative(9.0) + 1.0).abs() < 1e-14);
    let (v, d) = f.eval_derivative(1.25);
    assert!((v - 1.5).abs() < 1e-14);
    assert!((d - 2.0).abs() < 1e-14);
}

#[test]
fn linear_derivative_orders() {
    let f = PiecewiseLinearFunction::<f64>::new(vec![0.0_f64, 1.0], vec![0.0, 3.0]).unwrap();
    assert_eq!(f.derivative_n(0.5, 1), Ok(3.0));
    let err = f.derivative_n(0.5, 2).unwrap_err();
    assert_eq!(err, InterpError::InvalidDerivativeOrder { order: 2, max: 1 });
    assert!(err.is_invalid_argument());
}

#[test]
fn linear_integral_exact_with_extrapolation() {
    let f =
        PiecewiseLinearFunction::<f64>::new(vec![0.0_f64, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
    assert!((f.integral(0.0, 2.0) - 1.0).abs() < 1e-14);
    assert!(f.integral(-1.0, 3.0).abs() < 1e-14);
    assert!((f.integral(0.5, 1.5) - 0.75).abs() < 1e-14);
    assert!((f.integral(0.2, 0.4) - 0.06).abs() < 1e-14);
    assert!((f.integral(1.5, 0.5) + 0.75).abs() < 1e-14);
    assert_eq!(f.integral(1.0, 1.0), 0.0);
}

#[test]
fn linear_integral_antisymmetric() {
    let f = PiecewiseLinearFunction::<f64>::new(
        vec![0.0_f64, 0.3, 1.1, 2.0, 2.4],
        vec![1.0, -2.0, 0.5, 3.0, 1.0],
    )
    .unwrap();
    for (a, b) in [(-0.5, 1.0), (0.3, 2.4), (0.7, 3.1), (1.2, 1.3)] {
        assert!((f.integral(a, b) + f.integral(b, a)).abs() < 1e-13);
    }
}

#[test]
fn linear_min_max() {
    let f = PiecewiseLinearFunction::<f64>::new(
        vec![0.0_f64, 1.0, 2.0, 3.0],
        vec![2.0, -1.0, 5.0, 0.0],
    )
    .unwrap();
    assert_eq!(f.min_y(), -1.0);
    assert_eq!(f.max_y(), 5.0);
}

#[test]
fn linear_vector_values() {
    let ys = vec![
        Vector2::from_xy(0.0_f64, 0.0),
        Vector2::from_xy(2.0, 1.0),
        Vector2::from_xy(2.0, 3.0),
    ];
    let f = PiecewiseLinearFunction::new(vec![0.0, 1.0, 2.0], ys).unwrap();
    assert_eq!(f.eval(0.5), Vector2::from_xy(1.0, 0.5));
    assert_eq!(f.derivative(1.5), Vector2::from_xy(0.0, 2.0));
    let area = f.integral(0.0, 2.0);
    assert!((area.x() - 3.0).abs() < 1e-14);
    assert!((area.y() - 2.5).abs() < 1e-14);
}

#[test]
fn linear_f32() {
    let f =
        PiecewiseLinearFunction::<f32>::new(vec![0.0_f32, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
    assert!((f.eval(1.5) - 2.5).abs() < 1e-6);
}

#[cfg(feature = "check-params")]
#[test]
fn linear_rejects_bad_samples() {
    assert_eq!(
        PiecewiseLinearFunction::<f64>::new(vec![1.0_f64], vec![2.0]).unwrap_err(),
        InterpError::TooFewPoints { required: 2, actual: 1 }
    );
    assert_eq!(
        PiecewiseLinearFunction::<f64>::new(vec![0.0_f64, 1.0, 2.0], vec![0.0, 1.0]).unwrap_err(),
        InterpError::LengthMismatch { ts: 3, ys: 2 }
    );
    assert_eq!(
        PiecewiseLinearFunction::<f64>::new(vec![0.0_f64, 2.0, 1.0], vec![0.0; 3]).unwrap_err(),
        InterpError::NotSorted { index: 2 }
    );
    assert_eq!(
        PiecewiseLinearFunction::<f64>::new(vec![0.0_f64, 1.0, 1.0 + 1e-9], vec![0.0; 3])
            .unwrap_err(),
        InterpError::DuplicateParameter { index: 2 }
    );
    assert_eq!(
        PiecewiseLinearFunction::<f64>::new(vec![0.0_f64, f64::NAN], vec![0.0; 2]).unwrap_err(),
        InterpError::NotSorted { index: 1 }
    );
}

// ======================== Cubic ========================

#[test]
fn cubic_reproduces_samples_and_natural_ends() {
    let ts = vec![0.0_f64, 0.7, 1.5, 2.0, 3.2, 4.0];
    let ys = vec![0.0, 1.5, -0.3, 0.8, 2.0, 1.0];
    let f = PiecewiseCubicFunction::<f64>::new(ts.clone(), ys.clone()).unwrap();
    for (t, y) in ts.iter().zip(&ys) {
        assert!((f.eval(*t) - y).abs() < 1e-13);
    }
    let m = f.second_derivatives();
    assert_eq!(m.len(), ts.len());
    assert!(m[0].abs() < 1e-14 && m[5].abs() < 1e-14);
    assert!(f.derivative_n(0.0, 2).unwrap().abs() < 1e-14);
    assert!(f.derivative_n(4.0, 2).unwrap().abs() < 1e-14);
}

fn assert_c2_at_knots(f: &PiecewiseCubicFunction<f64>) {
    let ts = f.ts();
    let e = 1e-6;
    for &t in &ts[1..ts.len() - 1] {
        assert!((f.eval(t - e) - f.eval(t + e)).abs() < 1e-4);
        assert!((f.derivative(t - e) - f.derivative(t + e)).abs() < 1e-4);
        let d2l = f.derivative_n(t - e, 2).unwrap();
        let d2r = f.derivative_n(t + e, 2).unwrap();
        assert!((d2l - d2r).abs() < 1e-4, "f'' jump at {}", t);
    }
}

#[test]
fn cubic_continuity_natural_and_clamped() {
    let ts = vec![0.0_f64, 0.7, 1.5, 2.0, 3.2, 4.0];
    let ys = vec![0.0, 1.5, -0.3, 0.8, 2.0, 1.0];
    let natural = PiecewiseCubicFunction::<f64>::new(ts.clone(), ys.clone()).unwrap();
    assert_c2_at_knots(&natural);

    let clamped = PiecewiseCubicFunction::<f64>::with_boundary(
        ts,
        ys,
        BoundaryMode::first_order(0.5),
        BoundaryMode::first_order(-1.0),
    )
    .unwrap();
    assert_c2_at_knots(&clamped);
    assert!((clamped.derivative(0.0) - 0.5).abs() < 1e-12);
    assert!((clamped.derivative(4.0) + 1.0).abs() < 1e-12);
}

#[test]
fn cubic_reproduces_cubic_polynomial() {
    let g = |t: f64| t * t * t - 2.0 * t * t + 1.0;
    let dg = |t: f64| 3.0 * t * t - 4.0 * t;
    let ts = vec![0.0, 0.5, 1.3, 2.0, 3.0, 4.0];
    let ys = ts.iter().map(|&t| g(t)).collect();
    // g'' = 6t - 4
    let f = PiecewiseCubicFunction::<f64>::with_boundary(
        ts,
        ys,
        BoundaryMode::second_order(-4.0),
        BoundaryMode::second_order(20.0),
    )
    .unwrap();
    for t in [0.1, 0.7, 1.9, 2.5, 3.9] {
        assert!((f.eval(t) - g(t)).abs() < 1e-12);
        assert!((f.derivative(t) - dg(t)).abs() < 1e-11);
        assert!((f.derivative_n(t, 2).unwrap() - (6.0 * t - 4.0)).abs() < 1e-11);
        assert!((f.derivative_n(t, 3).unwrap() - 6.0).abs() < 1e-10);
    }
    assert!((f.integral(0.0, 4.0) - (64.0 - 128.0 / 3.0 + 4.0)).abs() < 1e-11);
    let exact = |t: f64| t.powi(4) / 4.0 - 2.0 * t.powi(3) / 3.0 + t;
    assert!((f.integral(0.6, 0.9) - (exact(0.9) - exact(0.6))).abs() < 1e-12);
    assert!((f.integral(4.0, 0.0) + f.integral(0.0, 4.0)).abs() < 1e-12);
}

#[test]
fn cubic_clamped_reproduces_quadratic() {
    let q = |t: f64| 3.0 * t * t - t + 2.0;
    let ts = vec![-1.0, 0.0, 0.3, 1.1, 2.0];
    let ys = ts.iter().map(|&t| q(t)).collect();
    let f = PiecewiseCubicFunction::<f64>::with_boundary(
        ts,
        ys,
        BoundaryMode::first_order(-7.0),
        BoundaryMode::first_order(11.0),
    )
    .unwrap();
    for t in [-0.5, 0.1, 0.7, 1.5] {
        assert!((f.eval(t) - q(t)).abs() < 1e-12);
    }
}

#[test]
fn cubic_reproduces_line_everywhere() {
    let ts = vec![0.0_f64, 1.0, 2.5, 4.0];
    let ys = ts.iter().map(|t| 2.0 * t + 1.0).collect();
    let f = PiecewiseCubicFunction::<f64>::new(ts, ys).unwrap();
    assert!((f.eval(-3.0) + 5.0).abs() < 1e-12);
    assert!((f.eval(10.0) - 21.0).abs() < 1e-12);
    assert!((f.derivative(-3.0) - 2.0).abs() < 1e-12);
    assert!((f.integral(-2.0, 6.0) - 40.0).abs() < 1e-11);
}

#[test]
fn cubic_extrapolates_along_end_tangent() {
    let f = PiecewiseCubicFunction::<f64>::new(
        vec![0.0_f64, 0.7, 1.5, 2.0, 3.2, 4.0],
        vec![0.0, 1.5, -0.3, 0.8, 2.0, 1.0],
    )
    .unwrap();
    let slope0 = f.derivative(0.0);
    let slope1 = f.derivative(4.0);
    assert!((f.eval(-0.5) - (f.eval(0.0) - 0.5 * slope0)).abs() < 1e-12);
    assert!((f.eval(5.0) - (f.eval(4.0) + slope1)).abs() < 1e-12);
    assert!((f.derivative(-2.0) - slope0).abs() < 1e-12);
    assert!((f.derivative(7.0) - slope1).abs() < 1e-12);
    assert_eq!(f.derivative_n(-1.0, 2), Ok(0.0));
    assert_eq!(f.derivative_n(5.0, 3), Ok(0.0));
}

#[test]
fn cubic_derivative_order_errors() {
    let f =
        PiecewiseCubicFunction::<f64>::new(vec![0.0_f64, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
    assert_eq!(
        f.derivative_n(0.5, 4),
        Err(InterpError::InvalidDerivativeOrder { order: 4, max: 3 })
    );
    assert!(f.derivative_n(0.5, 0).is_err());
}

#[test]
fn cubic_integral_antisymmetric() {
    let f = PiecewiseCubicFunction::<f64>::new(
        vec![0.0_f64, 0.3, 1.1, 2.0, 2.4],
        vec![1.0, -2.0, 0.5, 3.0, 1.0],
    )
    .unwrap();
    for (a, b) in [(-0.5, 1.0), (0.3, 2.4), (0.7, 3.1), (1.2, 1.3), (-2.0, -1.0)] {
        assert!((f.integral(a, b) + f.integral(b, a)).abs() < 1e-12);
    }
}

#[test]
fn periodic_spline_wraps_smoothly() {
    let ts = uniform(32, 2.0 * PI);
    let mut ys: Vec<f64> = ts.iter().map(|t| t.sin()).collect();
    ys[32] = ys[0];
    let f = PiecewiseCubicFunction::<f64>::periodic(ts, ys).unwrap();
    let end = 2.0 * PI;
    assert!((f.derivative(0.0) - f.derivative(end)).abs() < 1e-12);
    let m = f.second_derivatives();
    assert_eq!(m[0], m[32]);
    assert_c2_at_knots(&f);
    for i in 0..62 {
        let t = i as f64 / 10.0;
        assert!((f.derivative(t) - t.cos()).abs() < 1e-4);
    }
}

#[test]
fn periodic_small_systems() {
    let flat = PiecewiseCubicFunction::<f64>::periodic(vec![0.0_f64, 1.0], vec![1.0, 1.0]).unwrap();
    assert_eq!(flat.second_derivatives(), &[0.0, 0.0]);
    assert!((flat.eval(0.3) - 1.0).abs() < 1e-15);

    let tent = PiecewiseCubicFunction::<f64>::periodic(vec![0.0_f64, 1.0, 2.0], vec![0.0, 1.0, 0.0])
        .unwrap();
    let m = tent.second_derivatives();
    assert!((m[0] - 6.0).abs() < 1e-12);
    assert!((m[1] + 6.0).abs() < 1e-12);
    assert!(tent.derivative(0.0).abs() < 1e-12);
    assert!(tent.derivative(2.0).abs() < 1e-12);
}

#[test]
fn periodic_vector_circle() {
    let ts = uniform(24, 2.0 * PI);
    let mut ys: Vec<Vector2<f64>> = ts
        .iter()
        .map(|t| Vector2::from_xy(t.cos(), t.sin()))
        .collect();
    ys[24] = ys[0];
    let f = PiecewiseCubicFunction::periodic(ts, ys).unwrap();
    for i in 0..20 {
        let t = 0.3 * i as f64;
        let p = f.eval(t);
        assert!((p.norm() - 1.0).abs() < 1e-4);
        let d = f.derivative(t);
        assert!(p.dot(&d).abs() < 1e-3);
    }
}

#[cfg(feature = "check-params")]
#[test]
fn cubic_rejects_bad_configuration() {
    let ts = vec![0.0_f64, 1.0, 2.0];
    let ys = vec![0.0, 1.0, 0.5];
    assert_eq!(
        PiecewiseCubicFunction::<f64>::periodic(ts.clone(), ys.clone()).unwrap_err(),
        InterpError::PeriodicMismatch
    );
    let bad = BoundaryMode {
        order: 3,
        derivative: 0.0,
    };
    assert_eq!(
        PiecewiseCubicFunction::<f64>::with_boundary(ts.clone(), ys.clone(), bad, bad).unwrap_err(),
        InterpError::InvalidBoundaryOrder { order: 3 }
    );
    assert_eq!(
        PiecewiseCubicFunction::<f64>::new(vec![0.0_f64], vec![0.0]).unwrap_err(),
        InterpError::TooFewPoints { required: 2, actual: 1 }
    );
    assert!(PiecewiseCubicFunction::<f64>::new(vec![1.0_f64, 0.0], vec![0.0, 0.0])
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn cubic_extrema_of_sine() {
    let ts = uniform(21, 2.0 * PI);
    let ys = ts.iter().map(|t| t.sin()).collect();
    let f = PiecewiseCubicFunction::<f64>::new(ts, ys).unwrap();
    assert!((f.argmax() - PI / 2.0).abs() < 1e-3);
    assert!((f.max_y() - 1.0).abs() < 1e-4);
    assert!((f.argmin() - 1.5 * PI).abs() < 1e-3);
    assert!((f.min_y() + 1.0).abs() < 1e-4);
}

#[test]
fn cubic_extrema_at_ends_of_monotone_data() {
    let f = PiecewiseCubicFunction::<f64>::new(
        vec![0.0_f64, 1.0, 2.0, 3.0],
        vec![0.0, 1.0, 3.0, 6.0],
    )
    .unwrap();
    assert_eq!(f.min_y(), 0.0);
    assert_eq!(f.argmin(), 0.0);
    assert_eq!(f.max_y(), 6.0);
    assert_eq!(f.argmax(), 3.0);
}

#[test]
fn cubic_f32() {
    let f = PiecewiseCubicFunction::<f32>::new(
        vec![0.0_f32, 1.0, 2.0, 3.0],
        vec![0.0, 1.0, 0.0, 1.0],
    )
    .unwrap();
    assert!((f.eval(1.0) - 1.0).abs() < 1e-6);
    assert!(f.eval(1.5).is_finite());
}

fn peak_to_peak<T: FloatScalar + Arithmetic<T>>(f: &PiecewiseCubicFunction<T>) -> T {
    f.max_y() - f.min_y()
}

#[test]
fn cubic_extrema_in_generic_code() {
    let ts = uniform(40, 2.0 * PI);
    let ys: Vec<f64> = ts.iter().map(|t| t.sin()).collect();
    let f = PiecewiseCubicFunction::<f64>::new(ts, ys).unwrap();
    assert!((peak_to_peak(&f) - 2.0).abs() < 1e-3);

    let g = PiecewiseCubicFunction::<f32>::new(
        vec![0.0_f32, 1.0, 2.0, 3.0],
        vec![0.0, 2.0, -1.0, 0.5],
    )
    .unwrap();
    assert!(peak_to_peak(&g) >= 3.0);
}

#[test]
fn every_error_is_an_invalid_argument() {
    let errors = [
        InterpError::TooFewPoints { required: 2, actual: 0 },
        InterpError::LengthMismatch { ts: 3, ys: 2 },
        InterpError::NotSorted { index: 1 },
        InterpError::DuplicateParameter { index: 1 },
        InterpError::InvalidBoundaryOrder { order: 0 },
        InterpError::PeriodicMismatch,
        InterpError::InvalidDerivativeOrder { order: 4, max: 3 },
    ];
    for err in &errors {
        assert!(err.is_invalid_argument(), "{:?}", err);
    }
}
