use core::fmt;
use core::ops::{Add, Mul, Neg, Range, Sub};

use crate::error::{PolyError, Result};
use crate::plot::layout::{compute_layout, PlotLayout};
use crate::structures::roots;

/// Polynomial in one variable with real (`f64`) coefficients.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// The zero polynomial is represented as an empty coefficient vector and has
/// degree `-1`. No trailing zero coefficient is ever stored; interior zeros
/// (a missing `x^1` term, say) are kept as explicit zeros.
#[derive(Clone, PartialEq)]
pub struct Poly {
    coeffs: Vec<f64>,
}

impl Poly {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`.
    /// Trailing zeros are automatically removed.
    ///
    /// # Example
    ///
    /// ```
    /// use polyplot::Poly;
    ///
    /// // 1 + x + 2x^2 + 2x^4
    /// let p = Poly::new(vec![1.0, 1.0, 2.0, 0.0, 2.0, 0.0]);
    /// assert_eq!(p.degree(), 4);
    /// assert_eq!(p.to_string(), "1+X+2X^2+2X^4");
    /// ```
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Create the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use polyplot::Poly;
    ///
    /// let zero = Poly::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.degree(), -1);
    /// assert_eq!(zero.to_string(), "");
    /// ```
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Create a constant polynomial.
    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self {
            coeffs: vec![0.0, 1.0],
        }
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use polyplot::Poly;
    ///
    /// let m = Poly::monomial(3.0, 2); // 3x^2
    /// assert_eq!(m.degree(), 2);
    /// assert_eq!(m.eval(2.0), 12.0);
    /// ```
    pub fn monomial(c: f64, n: usize) -> Self {
        if c == 0.0 {
            return Self::zero();
        }
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `-1` for the zero polynomial, the highest power with a
    /// non-zero coefficient otherwise.
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<f64> {
        self.coeffs.last().copied()
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Consume the polynomial, returning its canonical coefficients.
    pub fn into_coefficients(self) -> Vec<f64> {
        self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use polyplot::Poly;
    ///
    /// // p(x) = 3 + 4x - x^2 + 2x^3
    /// let p = Poly::new(vec![3.0, 4.0, -1.0, 2.0]);
    /// assert_eq!(p.eval(3.0), 60.0);
    /// assert_eq!(p.eval(-1.0), -4.0);
    /// ```
    pub fn eval(&self, x: f64) -> f64 {
        // Horner's method: p(x) = a_0 + x(a_1 + x(a_2 + ... + x*a_n))
        self.coeffs
            .iter()
            .rev()
            .fold(0.0, |acc, &coeff| acc * x + coeff)
    }

    /// Evaluate the polynomial at every point of `xs`.
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&0.0) {
            self.coeffs.pop();
        }
    }

    /// Create a polynomial from its roots: `(x - r1)(x - r2)...(x - rn)`.
    ///
    /// # Example
    ///
    /// ```
    /// use polyplot::Poly;
    ///
    /// // (x - 2)(x - 5) = x^2 - 7x + 10
    /// let p = Poly::from_roots(&[2.0, 5.0]);
    /// assert_eq!(p, Poly::new(vec![10.0, -7.0, 1.0]));
    /// assert_eq!(p.eval(5.0), 0.0);
    /// ```
    pub fn from_roots(roots: &[f64]) -> Self {
        roots
            .iter()
            .fold(Self::constant(1.0), |acc, &root| {
                acc * Self::new(vec![-root, 1.0])
            })
    }

    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// Returns `None` if the polynomial is zero.
    pub fn monic(&self) -> Option<Self> {
        let lc = self.leading_coeff()?;
        Some(self.scale(1.0 / lc))
    }

    /// Multiply every coefficient by `k`.
    ///
    /// Scaling by zero yields the zero polynomial.
    pub fn scale(&self, k: f64) -> Self {
        if k == 0.0 {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|&c| c * k).collect())
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and
    /// `deg(r) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if the divisor is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use polyplot::Poly;
    ///
    /// // (x^2 - 1) / (x - 1) = (x + 1), remainder 0
    /// let dividend = Poly::new(vec![-1.0, 0.0, 1.0]);
    /// let divisor = Poly::new(vec![-1.0, 1.0]);
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, Poly::new(vec![1.0, 1.0]));
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let lc = divisor.leading_coeff().ok_or(PolyError::DivisionByZero)?;
        let divisor_len = divisor.coeffs.len();

        // If dividend degree < divisor degree, quotient is 0
        if self.coeffs.len() < divisor_len {
            return Ok((Self::zero(), self.clone()));
        }

        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![0.0; self.coeffs.len() - divisor_len + 1];

        for shift in (0..quotient.len()).rev() {
            let top = shift + divisor_len - 1;
            let factor = remainder[top] / lc;
            quotient[shift] = factor;

            // remainder -= factor * x^shift * divisor
            for (i, &d) in divisor.coeffs.iter().enumerate() {
                remainder[shift + i] -= factor * d;
            }
            // The leading term is eliminated by construction; drop rounding residue.
            remainder[top] = 0.0;
        }

        remainder.truncate(divisor_len - 1);
        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// Compute the quotient of division.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if the divisor is zero.
    pub fn quotient(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Compute the remainder of division.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if the divisor is zero.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Formal derivative.
    ///
    /// # Example
    ///
    /// ```
    /// use polyplot::Poly;
    ///
    /// // f(x) = 1 + x + 2x^2 + 2x^4, f'(x) = 1 + 4x + 8x^3
    /// let f = Poly::new(vec![1.0, 1.0, 2.0, 0.0, 2.0]);
    /// assert_eq!(f.derivative(), Poly::new(vec![1.0, 4.0, 0.0, 8.0]));
    /// ```
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }

        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * i as f64)
            .collect();

        Self::new(coeffs)
    }

    /// Antiderivative with a zero constant term.
    ///
    /// `p.integral().derivative() == p` for every `p`.
    pub fn integral(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.0);
        for (i, &c) in self.coeffs.iter().enumerate() {
            coeffs.push(c / (i + 1) as f64);
        }

        Self::new(coeffs)
    }

    /// Real roots in ascending order, by closed form for degree <= 4.
    ///
    /// Degree 5 and above, constants and the zero polynomial give no roots.
    ///
    /// # Example
    ///
    /// ```
    /// use polyplot::Poly;
    ///
    /// let p = Poly::new(vec![-1.0, 0.0, 1.0]); // x^2 - 1
    /// assert_eq!(p.real_roots(), vec![-1.0, 1.0]);
    /// ```
    pub fn real_roots(&self) -> Vec<f64> {
        roots::find_real_roots(self)
    }

    /// Map this polynomial over `interval` onto a `width` x `height` canvas.
    ///
    /// See [`compute_layout`].
    pub fn layout(&self, interval: Range<f64>, width: f64, height: f64) -> Result<PlotLayout> {
        compute_layout(self, interval, width, height)
    }

    /// Random polynomial of exactly `degree`, coefficients drawn from `[-10, 10)`.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng>(rng: &mut R, degree: usize) -> Self {
        let mut coeffs: Vec<f64> = (0..=degree).map(|_| rng.gen_range(-10.0..10.0)).collect();
        while coeffs[degree] == 0.0 {
            coeffs[degree] = rng.gen_range(-10.0..10.0);
        }
        Self { coeffs }
    }

    fn sum(&self, rhs: &Poly) -> Poly {
        let (hi, lo) = if rhs.coeffs.len() > self.coeffs.len() {
            (rhs, self)
        } else {
            (self, rhs)
        };

        let coeffs = hi
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| match lo.coeffs.get(i) {
                Some(&other) => c + other,
                None => c,
            })
            .collect();

        Poly::new(coeffs)
    }

    /// Polynomial multiplication using naive O(n*m) convolution.
    fn product(&self, rhs: &Poly) -> Poly {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![0.0; n + m - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }

        Poly::new(coeffs)
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vec<f64>> for Poly {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl From<&[f64]> for Poly {
    fn from(coeffs: &[f64]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl FromIterator<f64> for Poly {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/* ---- Arithmetic operators ---- */

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(&rhs)
    }
}

impl Add<&Poly> for Poly {
    type Output = Self;

    fn add(self, rhs: &Poly) -> Self::Output {
        self.sum(rhs)
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Self::Output {
        self.sum(rhs)
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sum(&rhs.scale(-1.0))
    }
}

impl Sub<&Poly> for Poly {
    type Output = Self;

    fn sub(self, rhs: &Poly) -> Self::Output {
        self.sum(&rhs.scale(-1.0))
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Self::Output {
        self.sum(&rhs.scale(-1.0))
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.product(&rhs)
    }
}

impl Mul<&Poly> for Poly {
    type Output = Self;

    fn mul(self, rhs: &Poly) -> Self::Output {
        self.product(rhs)
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Self::Output {
        self.product(rhs)
    }
}

/// Scalar multiplication: polynomial * real
impl Mul<f64> for Poly {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f64> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

/// Scalar multiplication: real * polynomial
impl Mul<Poly> for f64 {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Self::Output {
        rhs.scale(self)
    }
}

impl Mul<&Poly> for f64 {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Self::Output {
        rhs.scale(self)
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Poly").field(&self.coeffs).finish()
    }
}

/// Schoolbook form, lowest power first: `1+X+2X^2-X^4`.
///
/// The zero polynomial renders as the empty string.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff == 0.0 {
                continue;
            }

            if coeff < 0.0 {
                write!(f, "-")?;
            } else if !first {
                write!(f, "+")?;
            }
            first = false;

            let magnitude = coeff.abs();
            match i {
                0 => write!(f, "{}", magnitude)?,
                1 if magnitude == 1.0 => write!(f, "X")?,
                1 => write!(f, "{}X", magnitude)?,
                _ if magnitude == 1.0 => write!(f, "X^{}", i)?,
                _ => write!(f, "{}X^{}", magnitude, i)?,
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as the canonical coefficient vector
        self.coeffs.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poly {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = Vec::<f64>::deserialize(deserializer)?;
        Ok(Self::new(coeffs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(coeffs: &[f64]) -> Poly {
        Poly::from(coeffs)
    }

    #[test]
    fn new_normalizes() {
        // Trailing zeros should be removed
        let p = p(&[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coefficients(), &[1.0, 2.0]);
    }

    #[test]
    fn new_all_zeros() {
        for zeros in [vec![], vec![0.0], vec![0.0, 0.0, 0.0]] {
            let z = Poly::new(zeros);
            assert!(z.is_zero());
            assert_eq!(z.degree(), -1);
            assert_eq!(z.to_string(), "");
        }
    }

    #[test]
    fn new_keeps_interior_zeros() {
        let p = p(&[1.0, 0.0, 0.0, 3.0]);
        assert_eq!(p.coefficients(), &[1.0, 0.0, 0.0, 3.0]);
    }

    #[test]
    fn negative_zero_is_trailing_zero() {
        assert_eq!(p(&[1.0, -0.0]), p(&[1.0]));
    }

    #[test]
    fn zero() {
        let z = Poly::zero();
        assert!(z.is_zero());
        assert_eq!(z.leading_coeff(), None);
        assert_eq!(z, Poly::default());
    }

    #[test]
    fn constant_zero() {
        assert!(Poly::constant(0.0).is_zero());
        assert_eq!(Poly::constant(4.0).degree(), 0);
    }

    #[test]
    fn monomial() {
        let m = Poly::monomial(3.0, 2);
        assert_eq!(m.coefficients(), &[0.0, 0.0, 3.0]);
        assert!(Poly::monomial(0.0, 5).is_zero());
    }

    #[test]
    fn coeff_out_of_range() {
        let p = p(&[1.0, 2.0]);
        assert_eq!(p.coeff(1), 2.0);
        assert_eq!(p.coeff(10), 0.0);
    }

    // ---- display ----

    #[test]
    fn display_schoolbook() {
        assert_eq!(p(&[1.0]).to_string(), "1");
        assert_eq!(p(&[1.0, 0.0, 0.0]).to_string(), "1");
        assert_eq!(p(&[0.0, 1.0]).to_string(), "X");
        assert_eq!(p(&[0.0, -1.0]).to_string(), "-X");
        assert_eq!(p(&[1.0, 1.0, 2.0, 0.0, 2.0]).to_string(), "1+X+2X^2+2X^4");
        assert_eq!(p(&[1.0, -1.0, 2.0, 0.0, -2.0]).to_string(), "1-X+2X^2-2X^4");
        assert_eq!(p(&[-1.0, -2.0, 0.0, 1.0]).to_string(), "-1-2X+X^3");
        assert_eq!(p(&[0.0, 0.0, -1.0]).to_string(), "-X^2");
        assert_eq!(p(&[0.5, 2.5]).to_string(), "0.5+2.5X");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", p(&[1.0, 2.0])), "Poly([1.0, 2.0])");
    }

    // ---- eval ----

    #[test]
    fn eval_zero_poly() {
        assert_eq!(Poly::zero().eval(12.5), 0.0);
    }

    #[test]
    fn eval_constant_and_identity() {
        assert_eq!(p(&[2.0]).eval(3.0), 2.0);
        let x = Poly::x();
        assert_eq!(x.eval(3.0), 3.0);
        assert_eq!(x.eval(-1.0), -1.0);
        assert_eq!(x.eval(0.0), 0.0);
    }

    #[test]
    fn eval_cubic() {
        let p = p(&[3.0, 4.0, -1.0, 2.0]);
        assert_eq!(p.eval(0.0), 3.0);
        assert_eq!(p.eval(1.0), 8.0);
        assert_eq!(p.eval(-1.0), -4.0);
        assert_eq!(p.eval(3.0), 60.0);
        assert_eq!(p.eval_many(&[-1.0, 0.0, 3.0]), vec![-4.0, 3.0, 60.0]);
    }

    // ---- linear manipulation ----

    #[test]
    fn scalar_multiplication_both_sides() {
        let p0 = p(&[1.0, 1.0, 2.0, 0.0, 2.0]);
        let left = 3.0 * &p0;
        let right = p0.clone() * 3.0;
        assert_eq!(left, right);
        assert_eq!(left.to_string(), "3+3X+6X^2+6X^4");
        assert!((0.0 * p0).is_zero());
    }

    #[test]
    fn add_same_degree() {
        let p0 = p(&[1.0, 1.0, 2.0, 0.0, 2.0]);
        let sum = p0.clone() + p0 * 3.0;
        assert_eq!(sum.to_string(), "4+4X+8X^2+8X^4");
    }

    #[test]
    fn add_different_degrees() {
        let p0 = p(&[1.0, 1.0, 2.0, 0.0, 2.0]);
        let p1 = p(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let sum = p0 + p1;
        assert_eq!(sum.degree(), 5);
        assert_eq!(sum.to_string(), "2+X+2X^2+2X^4+X^5");
    }

    #[test]
    fn add_cancellation() {
        let p0 = p(&[1.0, 1.0, 2.0, 0.0, 2.0]);
        let p1 = p(&[1.0, 0.0, 0.0, 1.0, -2.0]);
        let sum = p0 + p1;
        assert_eq!(sum.degree(), 3);
        assert_eq!(sum.to_string(), "2+X+2X^2+X^3");
    }

    #[test]
    fn sub_self_is_zero() {
        let p0 = p(&[1.0, 1.0, 2.0, 0.0, 2.0]);
        let diff = &p0 - &p0;
        assert_eq!(diff.degree(), -1);
        assert_eq!(diff.to_string(), "");
    }

    #[test]
    fn neg_basic() {
        assert_eq!(-p(&[1.0, -2.0]), p(&[-1.0, 2.0]));
        assert!((-Poly::zero()).is_zero());
    }

    // ---- multiplication ----

    #[test]
    fn mul_identity() {
        let one = p(&[1.0]);
        let p1 = p(&[2.0, 0.0, 1.0, 1.0]);
        assert_eq!(one * &p1, p1);
    }

    #[test]
    fn mul_convolution() {
        // (1 + x + 2x^2 + 2x^4)(2 + x^2 + x^3)
        let p0 = p(&[1.0, 1.0, 2.0, 0.0, 2.0]);
        let p1 = p(&[2.0, 0.0, 1.0, 1.0]);
        let prod = p0 * p1;
        assert_eq!(prod.degree(), 7);
        assert_eq!(
            prod.coefficients(),
            &[2.0, 2.0, 5.0, 2.0, 7.0, 2.0, 2.0, 2.0]
        );
    }

    #[test]
    fn mul_by_zero_poly() {
        assert!((p(&[1.0, 2.0]) * Poly::zero()).is_zero());
    }

    #[test]
    fn arithmetic_eval_consistency() {
        let a = p(&[1.0, 2.0]);
        let b = p(&[3.0, 4.0, 5.0]);
        let x = 7.0;
        assert_eq!((&a + &b).eval(x), a.eval(x) + b.eval(x));
        assert_eq!((&a * &b).eval(x), a.eval(x) * b.eval(x));
    }

    #[test]
    fn from_roots_roundtrip() {
        assert_eq!(Poly::from_roots(&[]), p(&[1.0]));
        let q = Poly::from_roots(&[-1.0, 1.0]);
        assert_eq!(q, p(&[-1.0, 0.0, 1.0]));
    }

    #[test]
    fn monic_basic() {
        let m = p(&[2.0, 4.0, 2.0]).monic().unwrap();
        assert_eq!(m, p(&[1.0, 2.0, 1.0]));
        assert!(Poly::zero().monic().is_none());
    }

    // ---- division ----

    #[test]
    fn div_rem_exact_division() {
        let dividend = p(&[-1.0, 0.0, 1.0]);
        let divisor = p(&[-1.0, 1.0]);
        let (q, r) = dividend.div_rem(&divisor).unwrap();
        assert_eq!(q, p(&[1.0, 1.0]));
        assert!(r.is_zero());
        assert_eq!(q * divisor, dividend);
    }

    #[test]
    fn div_rem_same_degree() {
        // (2 + 5x + 2x^2) / (1 + 2x + 2x^2) = 1, remainder 1 + 3x
        let a = p(&[2.0, 5.0, 2.0]);
        let b = p(&[1.0, 2.0, 2.0]);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_string(), "1");
        assert_eq!(r.to_string(), "1+3X");
        assert_eq!(a.quotient(&b).unwrap(), q);
        assert_eq!(a.rem(&b).unwrap(), r);
    }

    #[test]
    fn div_rem_dividend_smaller() {
        let dividend = p(&[1.0, 1.0]);
        let divisor = p(&[1.0, 0.0, 1.0]);
        let (q, r) = dividend.div_rem(&divisor).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, dividend);
    }

    #[test]
    fn div_rem_zero_dividend() {
        let (q, r) = Poly::zero().div_rem(&p(&[1.0, 1.0])).unwrap();
        assert!(q.is_zero());
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_zero_divisor() {
        let dividend = p(&[1.0, 1.0]);
        assert_eq!(
            dividend.div_rem(&Poly::zero()),
            Err(PolyError::DivisionByZero)
        );
        assert_eq!(dividend.rem(&Poly::zero()), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn div_rem_by_constant() {
        let (q, r) = p(&[4.0, 2.0]).div_rem(&p(&[2.0])).unwrap();
        assert_eq!(q, p(&[2.0, 1.0]));
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_cubic_reconstructs() {
        // (x^3 + 2x^2 + 3x + 4) / (2x + 1)
        let dividend = p(&[4.0, 3.0, 2.0, 1.0]);
        let divisor = p(&[1.0, 2.0]);
        let (q, r) = dividend.div_rem(&divisor).unwrap();
        assert!(r.degree() < divisor.degree());

        let rebuilt = q * &divisor + &r;
        for (a, b) in rebuilt.coefficients().iter().zip(dividend.coefficients()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    // ---- calculus ----

    #[test]
    fn derivative_basic() {
        assert!(Poly::zero().derivative().is_zero());
        assert!(p(&[5.0]).derivative().is_zero());
        assert_eq!(p(&[1.0, 1.0, 2.0, 0.0, 2.0]).derivative(), p(&[1.0, 4.0, 0.0, 8.0]));
    }

    #[test]
    fn integral_basic() {
        assert!(Poly::zero().integral().is_zero());
        assert_eq!(p(&[2.0, 2.0, 3.0]).integral(), p(&[0.0, 2.0, 1.0, 1.0]));
    }

    #[test]
    fn integral_then_derivative() {
        let q = p(&[1.0, 2.0, 3.0, 0.0, 5.0]);
        assert_eq!(q.integral(), p(&[0.0, 1.0, 1.0, 1.0, 0.0, 1.0]));
        assert_eq!(q.integral().derivative(), q);
    }

    #[test]
    fn from_iterator_and_into() {
        let q: Poly = vec![1.0, 2.0, 0.0].into_iter().collect();
        assert_eq!(q.into_coefficients(), vec![1.0, 2.0]);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_has_requested_degree() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(17);
        for degree in 0..8 {
            let q = Poly::random(&mut rng, degree);
            assert_eq!(q.degree(), degree as isize);
            assert!(q.coefficients().iter().all(|c| (-10.0..10.0).contains(c)));
        }

        // same seed, same polynomial
        let a = Poly::random(&mut StdRng::seed_from_u64(3), 4);
        let b = Poly::random(&mut StdRng::seed_from_u64(3), 4);
        assert_eq!(a, b);
    }
}
