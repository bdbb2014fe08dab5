#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use cpu_bomber::lib_matrix::{run_load, Matrix};

#[test]
fn product_is_square_of_requested_size() {
    for n in [1, 10, 100] {
        let m = run_load(n).expect("load");
        assert_eq!(m.dims(), (n, n));
        assert_eq!(m.size(), n);
        assert_eq!(m.as_slice().len(), n * n);
    }
}

#[test]
fn consecutive_loads_differ() {
    let a = run_load(10).expect("load");
    let b = run_load(10).expect("load");
    assert_ne!(a, b);
}

#[test]
fn random_entries_in_unit_interval() {
    let mut rng = rand::thread_rng();
    let m = Matrix::random(50, &mut rng).expect("random");
    assert!(m.as_slice().iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn product_of_unit_entries_bounded_by_size() {
    let n = 20;
    let m = run_load(n).expect("load");
    #[allow(clippy::cast_precision_loss)]
    let bound = n as f64;
    assert!(m.as_slice().iter().all(|v| *v >= 0.0 && *v < bound));
}

#[test]
fn multiply_zeros_and_identity_shape() {
    let mut rng = rand::thread_rng();
    let a = Matrix::random(4, &mut rng).expect("random");
    let z = Matrix::zeros(4).expect("zeros");
    let p = a.multiply(&z).expect("multiply");
    assert!(p.as_slice().iter().all(|v| *v == 0.0));
}

#[test]
fn multiply_known_values() {
    let mut rng = rand::thread_rng();
    let a = Matrix::random(3, &mut rng).expect("random");
    let p = a.multiply(&a).expect("multiply");
    for i in 0..3 {
        for j in 0..3 {
            let expected: f64 = (0..3)
                .map(|k| a.get(i, k).expect("a") * a.get(k, j).expect("a"))
                .sum();
            let got = p.get(i, j).expect("p");
            assert!((got - expected).abs() < 1e-12);
        }
    }
}

#[test]
fn err_dimension_mismatch() {
    let a = Matrix::zeros(2).expect("zeros");
    let b = Matrix::zeros(3).expect("zeros");
    assert!(a.multiply(&b).is_err());
}

#[test]
fn zero_size_is_empty() {
    let m = run_load(0).expect("load");
    assert_eq!(m.dims(), (0, 0));
    assert!(m.as_slice().is_empty());
    assert_eq!(m.get(0, 0), None);
}

#[test]
fn err_size_overflow() {
    assert!(Matrix::zeros(usize::MAX).is_err());
}
