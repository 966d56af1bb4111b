//! Property-based tests for the algebraic contract.
//!
//! These verify the properties that make the two representations
//! interchangeable: commutativity, representation independence,
//! bilinearity, and the normalize guarantees.

use duovec::{dot, norm, normalize, DenseVector, Scalar, SparseVector, VectorView};
use proptest::prelude::*;

fn dense_pair(len: usize) -> impl Strategy<Value = (DenseVector, DenseVector)> {
    (
        proptest::collection::vec(-100.0f64..100.0, len),
        proptest::collection::vec(-100.0f64..100.0, len),
    )
        .prop_map(|(a, b)| (DenseVector::from_slice(&a), DenseVector::from_slice(&b)))
}

fn term_sparse(max_entries: usize) -> impl Strategy<Value = SparseVector> {
    proptest::collection::btree_map("[a-z]{1,3}", -100.0f64..100.0, 0..max_entries).prop_map(
        |map| {
            SparseVector::new(map).expect("btree_map keys are unique and uniformly term-keyed")
        },
    )
}

/// Re-express a dense vector as a position-keyed sparse vector.
fn to_sparse(d: &DenseVector) -> SparseVector {
    let pairs: Vec<_> = d.stored_entries().collect();
    SparseVector::new(pairs).expect("dense entries have unique positional keys")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    // ─────────────────────────────────────────────────────────────────────────
    // Commutativity
    // ─────────────────────────────────────────────────────────────────────────

    /// Dense dot is commutative bit for bit: both orders traverse the same
    /// pairs in the same key order.
    #[test]
    fn dot_dense_commutative((a, b) in dense_pair(64)) {
        let ab = dot(&a, &b).unwrap();
        let ba = dot(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    /// Sparse dot is commutative bit for bit, regardless of how the two
    /// entry counts compare.
    #[test]
    fn dot_sparse_commutative(a in term_sparse(32), b in term_sparse(8)) {
        let ab = dot(&a, &b).unwrap();
        let ba = dot(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Representation independence
    // ─────────────────────────────────────────────────────────────────────────

    /// Re-expressing one operand as sparse never changes a dot result:
    /// zero-valued positions contribute exactly zero either way.
    #[test]
    fn dot_representation_independent((a, b) in dense_pair(48)) {
        let dense_result = dot(&a, &b).unwrap();
        let mixed_result = dot(&a, &to_sparse(&b)).unwrap();
        let sparse_result = dot(&to_sparse(&a), &to_sparse(&b)).unwrap();
        prop_assert_eq!(dense_result, mixed_result);
        prop_assert_eq!(dense_result, sparse_result);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bilinearity
    // ─────────────────────────────────────────────────────────────────────────

    /// dot(a, b + c) ≈ dot(a, b) + dot(a, c), within accumulated float
    /// error. Tolerance scales with the magnitude of the products, not the
    /// potentially small result.
    #[test]
    fn dot_bilinear(
        (a, b) in dense_pair(32),
        c in proptest::collection::vec(-100.0f64..100.0, 32)
    ) {
        let c = DenseVector::from_slice(&c);
        let summed: Vec<f64> = b
            .values()
            .iter()
            .zip(c.values())
            .map(|(x, y)| x.as_f64() + y.as_f64())
            .collect();
        let summed = DenseVector::from_slice(&summed);

        let lhs = dot(&a, &summed).unwrap().as_f64();
        let rhs = dot(&a, &b).unwrap().as_f64() + dot(&a, &c).unwrap().as_f64();

        let magnitude: f64 = a
            .values()
            .iter()
            .zip(summed.values())
            .map(|(x, y)| (x.as_f64() * y.as_f64()).abs())
            .sum();
        let tolerance = magnitude * 1e-12 + 1e-9;
        prop_assert!(
            (lhs - rhs).abs() < tolerance,
            "bilinearity violated: {} vs {} (tol {})",
            lhs, rhs, tolerance
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Normalize
    // ─────────────────────────────────────────────────────────────────────────

    /// Normalizing a non-zero vector yields unit norm.
    #[test]
    fn normalize_unit_norm(
        v in proptest::collection::vec(-100.0f64..100.0, 32)
            .prop_filter("non-zero", |v| v.iter().any(|x| x.abs() > 1e-9))
    ) {
        let unit = normalize(&DenseVector::from_slice(&v));
        let self_dot = dot(&unit, &unit).unwrap().as_f64();
        prop_assert!(
            (self_dot - 1.0).abs() < 1e-12,
            "unit norm violated: dot(n, n) = {}",
            self_dot
        );
    }

    /// Normalize is idempotent within float tolerance.
    #[test]
    fn normalize_idempotent(
        v in proptest::collection::vec(-100.0f64..100.0, 32)
            .prop_filter("non-zero", |v| v.iter().any(|x| x.abs() > 1e-9))
    ) {
        let once = normalize(&DenseVector::from_slice(&v));
        let twice = normalize(&once);
        for (a, b) in once.values().iter().zip(twice.values()) {
            prop_assert!(
                (a.as_f64() - b.as_f64()).abs() < 1e-12,
                "idempotence violated: {} vs {}",
                a, b
            );
        }
    }

    /// Sparse normalize preserves the key set (no coordinate of a non-zero
    /// vector normalizes to exactly zero unless it underflows).
    #[test]
    fn normalize_sparse_unit_norm(
        s in term_sparse(24).prop_filter("non-zero", |s| s.stored_len() > 0)
    ) {
        let unit = normalize(&s);
        prop_assert!(
            (norm(&unit) - 1.0).abs() < 1e-12,
            "sparse unit norm violated: {}",
            norm(&unit)
        );
    }

    /// The zero vector is a fixed point of normalize, dense and sparse.
    #[test]
    fn normalize_zero_fixed_point(len in 0usize..32) {
        let zeros = vec![0.0f64; len];
        let dense_zero = DenseVector::from_slice(&zeros);
        prop_assert_eq!(normalize(&dense_zero), dense_zero);

        let sparse_zero = SparseVector::new(Vec::<(usize, f64)>::new()).unwrap();
        prop_assert_eq!(normalize(&sparse_zero), sparse_zero);
    }

    /// Norm scales linearly with scalar multiplication of the input.
    #[test]
    fn norm_scales_with_scalar(
        v in proptest::collection::vec(-10.0f64..10.0, 24),
        scale in 0.1f64..10.0
    ) {
        let scaled: Vec<f64> = v.iter().map(|x| x * scale).collect();
        let norm_v = norm(&DenseVector::from_slice(&v));
        let norm_scaled = norm(&DenseVector::from_slice(&scaled));
        let expected = norm_v * scale;
        let tolerance = expected.abs() * 1e-12 + 1e-12;
        prop_assert!(
            (norm_scaled - expected).abs() < tolerance,
            "norm scaling violated: {} != {}",
            norm_scaled, expected
        );
    }

    /// Integer dot products are exact: promotion accumulates in the
    /// integer kind, so the result matches the wide-integer reference.
    #[test]
    fn dot_integer_exact(
        a in proptest::collection::vec(-1000i64..1000, 16),
        b in proptest::collection::vec(-1000i64..1000, 16)
    ) {
        let expected: i64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
        let result = dot(&DenseVector::from_slice(&a), &DenseVector::from_slice(&b)).unwrap();
        prop_assert_eq!(result, Scalar::from(expected));
    }
}
