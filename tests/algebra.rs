use rand::Rng;

use unipoly::coefficient::Coefficient;
use unipoly::error::PolynomialError;
use unipoly::poly::polynomial::Polynomial;
use unipoly::poly::roots::Roots;

/// A random polynomial with small integer coefficients, so that all
/// arithmetic below stays exact.
fn random_polynomial(rng: &mut impl Rng) -> Polynomial {
    let len = rng.gen_range(1..6);
    let coefficients: Vec<i64> = (0..len).map(|_| rng.gen_range(-5..=5)).collect();
    Polynomial::new(coefficients).unwrap()
}

#[test]
fn render_round_trip() {
    let p = Polynomial::new([5, 3, 1]).unwrap();
    assert_eq!(p.to_string(), "5x^2 + 3x + 1");
}

#[test]
fn quadratic_roots() {
    let p = Polynomial::new([1, 0, -4]).unwrap();
    let findings = p.real_roots().unwrap();

    assert_eq!(findings.roots, Roots::Distinct(2., -2.));
    assert!(!findings.zero_root);
}

#[test]
fn complex_roots_are_out_of_reach() {
    let p = Polynomial::new([1, 0, 1]).unwrap();
    assert_eq!(
        p.real_roots().unwrap_err(),
        PolynomialError::NoRealRoots { discriminant: -4. }
    );
}

#[test]
fn cubic_without_the_zero_factor_shape_is_rejected() {
    let p = Polynomial::new([1, 0, 0, 0]).unwrap();
    assert_eq!(
        p.real_roots().unwrap_err(),
        PolynomialError::DegreeTooHigh { degree: 3 }
    );
}

#[test]
fn factored_zero_root_is_reported() {
    // x^3 - 3x^2 + 2x = x (x - 1)(x - 2)
    let p = Polynomial::new([1, -3, 2, 0]).unwrap();
    let findings = p.real_roots().unwrap();

    assert_eq!(findings.roots, Roots::Distinct(2., 1.));
    assert!(findings.zero_root);
    assert_eq!(
        findings.to_string(),
        "Roots at (2.0, 0.0) and (1.0, 0.0) and (0.0, 0.0)"
    );
}

#[test]
fn evaluation() {
    let p = Polynomial::new([2, 4]).unwrap();
    assert_eq!(p.evaluate(3.), 10.);
}

#[test]
fn vertex_of_a_parabola() {
    let p = Polynomial::new([1, 0, -4]).unwrap();
    let vertex = p.parabola_vertex().unwrap();

    assert_eq!((vertex.x, vertex.y), (0., -4.));

    let line = Polynomial::new([2, 4]).unwrap();
    assert_eq!(
        line.parabola_vertex().unwrap_err(),
        PolynomialError::NotAParabola { degree: 1 }
    );
}

#[test]
fn addition_with_zero_is_the_identity() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let p = random_polynomial(&mut rng);
        let zero = p.zero();

        assert_eq!(&p + &zero, p);
        assert_eq!(&zero + &p, p);
        assert_eq!(&p + 0, p);
    }
}

#[test]
fn addition_is_commutative_and_associative() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let p = random_polynomial(&mut rng);
        let q = random_polynomial(&mut rng);
        let r = random_polynomial(&mut rng);

        assert_eq!(&p + &q, &q + &p);
        assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));
    }
}

#[test]
fn multiplication_distributes_over_addition() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let p = random_polynomial(&mut rng);
        let q = random_polynomial(&mut rng);
        let r = random_polynomial(&mut rng);

        assert_eq!(&p * &(&q + &r), &(&p * &q) + &(&p * &r));
    }
}

#[test]
fn evaluation_is_linear_in_the_coefficients() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let p = random_polynomial(&mut rng);
        let q = random_polynomial(&mut rng);
        let x = rng.gen_range(-4..=4) as f64;

        assert_eq!((&p + &q).evaluate(x), p.evaluate(x) + q.evaluate(x));
    }
}

#[test]
fn operands_survive_their_operations() {
    let p = Polynomial::new([1, 2]).unwrap();
    let q = Polynomial::new([3, 4, 5]).unwrap();

    for _ in 0..3 {
        let sum = &p + &q;
        let difference = &q - &p;
        let product = &p * &q;

        assert_eq!(sum, Polynomial::new([3, 5, 7]).unwrap());
        assert_eq!(difference, Polynomial::new([3, 3, 3]).unwrap());
        assert_eq!(product, Polynomial::new([3, 10, 13, 10]).unwrap());
    }

    assert_eq!(p, Polynomial::new([1, 2]).unwrap());
    assert_eq!(q, Polynomial::new([3, 4, 5]).unwrap());
}

#[test]
fn scalar_arithmetic_touches_the_constant_term() {
    let p = Polynomial::new([5, 3, 1]).unwrap();

    assert_eq!(&p + 4, Polynomial::new([5, 3, 5]).unwrap());
    assert_eq!(&p - 1, Polynomial::new([5, 3, 0]).unwrap());
    assert_eq!(&p * 2, Polynomial::new([10, 6, 2]).unwrap());
    assert_eq!(&p / 2.0, Polynomial::new([2.5, 1.5, 0.5]).unwrap());
    assert_eq!(p.floor_div(2), Polynomial::new([2, 1, 0]).unwrap());
}

#[test]
fn division_by_a_constant_polynomial_only() {
    let p = Polynomial::new([4, 0, -8]).unwrap();

    let half = p.constant(Coefficient::Integer(2));
    assert_eq!(p.try_div(&half).unwrap(), Polynomial::new([2.0, 0.0, -4.0]).unwrap());

    let q = Polynomial::new([1, 1]).unwrap();
    assert_eq!(p.try_div(&q).unwrap_err(), PolynomialError::PolynomialDivision);
}

#[test]
fn containment_is_value_membership() {
    let p = Polynomial::new([5, 3, 1]).unwrap();

    assert!(p.contains(&Polynomial::new([3, 5]).unwrap()));
    assert!(p.contains(&Polynomial::new([1]).unwrap()));
    assert!(!p.contains(&Polynomial::new([5, 4]).unwrap()));
}
