//! Polynomial Arithmetic
//!
//! This example demonstrates `Poly` operations including:
//! - Basic arithmetic (add, sub, mul, scalar mul)
//! - Division with remainder
//! - Derivatives, integrals and evaluation
//!
//! Run with: cargo run --example poly_arithmetic

use polyplot::{Poly, PolyError};

fn main() -> Result<(), PolyError> {
    println!("=== Polynomial Arithmetic over R[X] ===\n");

    basic_operations();
    division()?;
    calculus_and_eval();

    Ok(())
}

/// Demonstrate basic polynomial operations
fn basic_operations() {
    println!("--- Basic Operations ---\n");

    // p(x) = 1 + 2x + 3x^2, q(x) = 1 + 2x + 2x^2
    let p = Poly::new(vec![1.0, 2.0, 3.0]);
    let q = Poly::new(vec![1.0, 2.0, 2.0]);

    println!("p(X) = {}    {:?}", p, p);
    println!("q(X) = {}", q);
    println!("degree(p) = {}", p.degree());
    println!();

    println!("p + q = {}", &p + &q);
    println!("p - q = {}", &p - &q);
    println!("p * q = {}", &p * &q);
    println!("-2 * p = {}", -2.0 * &p);

    // Subtracting equal polynomials collapses to the zero polynomial
    let zero = &p - &p;
    println!("p - p = {:?}, degree {}", zero, zero.degree());

    println!("\nSpecial polynomials:");
    println!("  zero = {:?}", Poly::zero());
    println!("  x = {}", Poly::x());
    println!("  constant(5) = {}", Poly::constant(5.0));
    println!("  monomial(-3, 4) = {}", Poly::monomial(-3.0, 4));
    println!("  from_roots([1, -2]) = {}", Poly::from_roots(&[1.0, -2.0]));

    println!();
}

/// Demonstrate division with remainder
fn division() -> Result<(), PolyError> {
    println!("--- Division ---\n");

    let p = Poly::new(vec![2.0, 5.0, 2.0]);
    let q = Poly::new(vec![1.0, 2.0, 2.0]);

    let (quotient, remainder) = p.div_rem(&q)?;
    println!("({}) / ({}):", p, q);
    println!("  quotient  = {}", quotient);
    println!("  remainder = {}", remainder);

    // Verify: p = q * quotient + remainder
    let reconstructed = &(&q * &quotient) + &remainder;
    println!("  q * quotient + remainder = {}", reconstructed);
    println!();

    // x^3 - 1 = (x - 1)(x^2 + x + 1)
    let cube = Poly::new(vec![-1.0, 0.0, 0.0, 1.0]);
    let factor = Poly::new(vec![-1.0, 1.0]);
    println!("({}) / ({}) = {}", cube, factor, cube.quotient(&factor)?);

    match cube.div_rem(&Poly::zero()) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("dividing by zero: {}", e),
    }

    println!();
    Ok(())
}

/// Demonstrate derivatives, integrals and evaluation
fn calculus_and_eval() {
    println!("--- Calculus and Evaluation ---\n");

    let p = Poly::new(vec![1.0, 2.0, 3.0, 4.0]);
    println!("p(X) = {}", p);
    println!("p'(X) = {}", p.derivative());
    println!("p''(X) = {}", p.derivative().derivative());
    println!("integral of p = {}", p.integral());
    println!();

    println!("Evaluation:");
    for x in [0.0, 1.0, -0.5, 2.0] {
        println!("  p({}) = {}", x, p.eval(x));
    }

    let xs = [-1.0, 0.0, 1.0];
    println!("  p at {:?} = {:?}", xs, p.eval_many(&xs));
}
