//! Real Roots
//!
//! Closed-form real roots of polynomials up to degree four.
//!
//! Run with: cargo run --example roots

use polyplot::{find_real_roots, Poly, RootClass};

fn show(p: &Poly) {
    let roots = find_real_roots(p);
    let class = format!("{:?}", RootClass::of(p));
    println!("{:<12} {:<40} roots = {:?}", class, p.to_string(), roots);
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    println!("=== Real Roots ===\n");

    show(&Poly::zero());
    show(&Poly::constant(4.0));
    show(&Poly::new(vec![3.0, -2.0]));

    // Quadratics: two, one and no real roots
    show(&Poly::new(vec![-1.0, 0.0, 1.0]));
    show(&Poly::new(vec![1.0, 2.0, 1.0]));
    show(&Poly::new(vec![1.0, 0.0, 1.0]));

    // Cubics: three distinct, double and single real roots
    show(&Poly::from_roots(&[1.0, 2.0, 3.0]));
    show(&Poly::new(vec![2.0, -3.0, 0.0, 1.0]));
    show(&Poly::new(vec![-1.0, 1.0, 0.0, 1.0]));

    // Quartics: general, biquadratic and none
    show(&Poly::from_roots(&[-2.0, -0.5, 1.0, 3.0]));
    show(&Poly::new(vec![4.0, 0.0, -5.0, 0.0, 1.0]));
    show(&Poly::new(vec![1.0, 0.0, 0.0, 0.0, 1.0]));

    // No closed form past degree four
    show(&Poly::monomial(1.0, 5));
}
