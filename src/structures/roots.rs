//! Closed-form real root finding for polynomials of degree at most four.
//!
//! Every solver takes raw coefficients in ascending order (`c0 + c1 x + ...`)
//! and returns the distinct real roots sorted ascending. A solver whose
//! leading coefficient is zero falls back to the next lower degree.
//!
//! Discriminants and depressed coefficients are compared against the size
//! of the terms they are computed from, so rounding cannot turn a repeated
//! root into a complex pair. Cubic and quartic roots are then polished by
//! Newton steps, and critical points where the polynomial vanishes are
//! reported as (repeated) roots.

use core::f64::consts::PI;

use tracing::trace;

use crate::structures::poly::Poly;
use crate::utils::{merge_close, ROOT_TOLERANCE};

/// A computed quantity smaller than this fraction of the terms it was
/// computed from is rounding noise and treated as zero.
const CANCELLATION_TOLERANCE: f64 = 1e-10;

/// `|p(c)|` below this fraction of `sum |a_i c^i|` counts as a zero of `p`.
const EVAL_TOLERANCE: f64 = 1e-12;

/// A critical-point root closer than this (relative) to a computed root is
/// already reported.
const CRITICAL_POINT_SEPARATION: f64 = 1e-6;

const NEWTON_STEPS: usize = 2;

/// Which closed form applies to a polynomial, keyed by its degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootClass {
    /// The zero polynomial. Every `x` is a root; no roots are reported.
    Degenerate,
    /// A non-zero constant.
    Constant,
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    /// Degree 5 and above: no closed form.
    Unsupported,
}

impl RootClass {
    /// Classify `poly` by degree.
    pub fn of(poly: &Poly) -> Self {
        match poly.degree() {
            d if d < 0 => RootClass::Degenerate,
            0 => RootClass::Constant,
            1 => RootClass::Linear,
            2 => RootClass::Quadratic,
            3 => RootClass::Cubic,
            4 => RootClass::Quartic,
            _ => RootClass::Unsupported,
        }
    }
}

/// Real roots of `poly`, ascending and without repeats.
///
/// # Example
///
/// ```
/// use polyplot::{find_real_roots, Poly};
///
/// // (x - 1)^2 (x + 2)
/// let p = Poly::new(vec![2.0, -3.0, 0.0, 1.0]);
/// assert_eq!(find_real_roots(&p), vec![-2.0, 1.0]);
///
/// // no closed form beyond quartics
/// assert!(find_real_roots(&Poly::monomial(1.0, 5)).is_empty());
/// ```
pub fn find_real_roots(poly: &Poly) -> Vec<f64> {
    let class = RootClass::of(poly);
    trace!(?class, degree = poly.degree(), "finding real roots");

    let c = poly.coefficients();
    match class {
        RootClass::Degenerate | RootClass::Constant | RootClass::Unsupported => Vec::new(),
        RootClass::Linear => solve_linear(c[0], c[1]),
        RootClass::Quadratic => solve_quadratic(c[0], c[1], c[2]),
        RootClass::Cubic => solve_cubic(c[0], c[1], c[2], c[3]),
        RootClass::Quartic => solve_quartic(c[0], c[1], c[2], c[3], c[4]),
    }
}

/// Solve `c0 + c1 x = 0`.
///
/// A zero slope has either no root or infinitely many; both report none.
pub fn solve_linear(c0: f64, c1: f64) -> Vec<f64> {
    if c1 == 0.0 {
        return Vec::new();
    }
    merge_close(vec![-c0 / c1], ROOT_TOLERANCE)
}

/// Solve `c0 + c1 x + c2 x² = 0`.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> Vec<f64> {
    if c2 == 0.0 {
        return solve_linear(c0, c1);
    }

    // Discriminant Δ.
    let delta = snap(
        c1 * c1 - 4.0 * c2 * c0,
        (c1 * c1).max((4.0 * c2 * c0).abs()),
    );

    // Δ < 0 => complex pair (ignored)
    // Δ = 0 => one root (with multiplicity two)
    // Δ > 0 => two distinct roots
    if delta < 0.0 {
        return Vec::new();
    }
    if delta == 0.0 {
        return merge_close(vec![-c1 / (2.0 * c2)], ROOT_TOLERANCE);
    }

    let sqrt_delta = delta.sqrt();
    merge_close(
        vec![
            (-c1 - sqrt_delta) / (2.0 * c2),
            (-c1 + sqrt_delta) / (2.0 * c2),
        ],
        ROOT_TOLERANCE,
    )
}

/// Solve `c0 + c1 x + c2 x² + c3 x³ = 0`.
///
/// The cubic is reduced to the depressed form `t³ + pt + q` with
/// `x = t - c2 / (3 c3)`, then classified by `D = -(4p³ + 27q²)`.
pub fn solve_cubic(c0: f64, c1: f64, c2: f64, c3: f64) -> Vec<f64> {
    if c3 == 0.0 {
        return solve_quadratic(c0, c1, c2);
    }

    let a = c2 / c3;
    let b = c1 / c3;
    let c = c0 / c3;

    let p = snap(b - a * a / 3.0, b.abs() + a * a / 3.0);
    let q = snap(
        2.0 * a.powi(3) / 27.0 - a * b / 3.0 + c,
        2.0 * a.abs().powi(3) / 27.0 + (a * b).abs() / 3.0 + c.abs(),
    );
    let shift = -a / 3.0;

    let coeffs = [c0, c1, c2, c3];
    let roots = depressed_cubic(p, q)
        .into_iter()
        .map(|t| polish(&coeffs, t + shift))
        .collect();
    let derivative_roots = solve_quadratic(c1, 2.0 * c2, 3.0 * c3);
    merge_close(
        with_critical_roots(&coeffs, roots, derivative_roots),
        ROOT_TOLERANCE,
    )
}

fn depressed_cubic(p: f64, q: f64) -> Vec<f64> {
    if p == 0.0 && q == 0.0 {
        // t³ = 0, triple root
        return vec![0.0];
    }

    let discriminant = snap(
        -(4.0 * p.powi(3) + 27.0 * q * q),
        (4.0 * p.powi(3)).abs().max(27.0 * q * q),
    );

    if discriminant < 0.0 {
        // One real root (Cardano). q²/4 + p³/27 = -D/108 > 0 here.
        let half_q = q / 2.0;
        let root = (half_q * half_q + p.powi(3) / 27.0).max(0.0).sqrt();
        let u = (-half_q + root).cbrt();
        let v = (-half_q - root).cbrt();
        return vec![u + v];
    }

    if discriminant == 0.0 {
        // p != 0: a simple root and a double root.
        return vec![3.0 * q / p, -3.0 * q / (2.0 * p)];
    }

    // Three distinct real roots, p < 0: trigonometric form.
    let m = 2.0 * (-p / 3.0).sqrt();
    let cos_arg = (3.0 * q / (p * m)).clamp(-1.0, 1.0);
    let theta = cos_arg.acos() / 3.0;
    (0..3)
        .map(|k| m * (theta - 2.0 * PI * k as f64 / 3.0).cos())
        .collect()
}

/// Solve `c0 + c1 x + c2 x² + c3 x³ + c4 x⁴ = 0` by Ferrari's method.
///
/// The depressed quartic `y⁴ + py² + qy + r` is split into two quadratics
/// through a positive root of the resolvent cubic
/// `8m³ + 8pm² + (2p² - 8r)m - q² = 0`.
pub fn solve_quartic(c0: f64, c1: f64, c2: f64, c3: f64, c4: f64) -> Vec<f64> {
    if c4 == 0.0 {
        return solve_cubic(c0, c1, c2, c3);
    }

    let a = c3 / c4;
    let b = c2 / c4;
    let c = c1 / c4;
    let d = c0 / c4;
    let a2 = a * a;

    let p = snap(b - 3.0 * a2 / 8.0, b.abs() + 3.0 * a2 / 8.0);
    let q = snap(
        c - a * b / 2.0 + a2 * a / 8.0,
        c.abs() + (a * b).abs() / 2.0 + (a2 * a).abs() / 8.0,
    );
    let r = snap(
        d - a * c / 4.0 + a2 * b / 16.0 - 3.0 * a2 * a2 / 256.0,
        d.abs() + (a * c).abs() / 4.0 + (a2 * b).abs() / 16.0 + 3.0 * a2 * a2 / 256.0,
    );
    let shift = -a / 4.0;

    let coeffs = [c0, c1, c2, c3, c4];
    let roots = depressed_quartic(p, q, r)
        .into_iter()
        .map(|y| polish(&coeffs, y + shift))
        .collect();
    let derivative_roots = solve_cubic(c1, 2.0 * c2, 3.0 * c3, 4.0 * c4);
    merge_close(
        with_critical_roots(&coeffs, roots, derivative_roots),
        ROOT_TOLERANCE,
    )
}

fn depressed_quartic(p: f64, q: f64, r: f64) -> Vec<f64> {
    if q == 0.0 {
        // y⁴ + py² + r: quadratic in z = y².
        let mut roots = Vec::new();
        for z in solve_quadratic(r, p, 1.0) {
            if z > 0.0 {
                let y = z.sqrt();
                roots.push(-y);
                roots.push(y);
            } else if z == 0.0 {
                roots.push(0.0);
            }
        }
        return roots;
    }

    // The resolvent is negative at m = 0 and grows without bound, so its
    // largest real root is positive whenever q != 0.
    let m = solve_cubic(-q * q, 2.0 * p * p - 8.0 * r, 8.0 * p, 8.0)
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);
    if m.is_nan() || m <= 0.0 {
        trace!(p, q, r, m, "resolvent cubic has no positive root");
        return Vec::new();
    }

    let s = (2.0 * m).sqrt();
    let t = q / (2.0 * s);

    // (y² + p/2 + m)² = (s y - t)²
    let mut roots = solve_quadratic(p / 2.0 + m - t, s, 1.0);
    roots.extend(solve_quadratic(p / 2.0 + m + t, -s, 1.0));
    roots
}

/// `value`, or zero when it is within rounding noise of `scale`.
fn snap(value: f64, scale: f64) -> f64 {
    if value.abs() <= CANCELLATION_TOLERANCE * scale {
        0.0
    } else {
        value
    }
}

fn eval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// `sum |c_i| |x|^i`, the rounding scale of [`eval`] at `x`.
fn eval_scale(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x.abs() + c.abs())
}

/// Newton steps on the full polynomial, kept only while they reduce `|p(x)|`.
fn polish(coeffs: &[f64], mut x: f64) -> f64 {
    for _ in 0..NEWTON_STEPS {
        let fx = eval(coeffs, x);
        let slope = coeffs
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (i, &c)| acc * x + c * i as f64);
        if fx == 0.0 || slope == 0.0 {
            break;
        }
        let next = x - fx / slope;
        let improved = eval(coeffs, next).abs() < fx.abs();
        if !improved {
            break;
        }
        x = next;
    }
    x
}

/// Add every critical point where the polynomial vanishes and no root was
/// found nearby: a repeated root the closed form lost to rounding.
fn with_critical_roots(coeffs: &[f64], mut roots: Vec<f64>, critical: Vec<f64>) -> Vec<f64> {
    for point in critical {
        let vanishes = eval(coeffs, point).abs() <= EVAL_TOLERANCE * eval_scale(coeffs, point);
        let known = roots
            .iter()
            .any(|r| (r - point).abs() <= CRITICAL_POINT_SEPARATION * (1.0 + point.abs()));
        if vanishes && !known {
            trace!(point, "critical point is a repeated root");
            roots.push(point);
        }
    }
    roots
}
