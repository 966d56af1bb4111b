//! The two algorithms: inner product and normalization.
//!
//! Both operate purely through [`VectorView`], so every combination of
//! dense and sparse operands runs the same code path. Efficiency comes
//! from one strategy decision made per call, not per element: iterate the
//! operand with fewer stored entries and probe the other by key.

use crate::error::{Result, VectorError};
use crate::scalar::{promote, Scalar, ScalarKind};
use crate::view::{MapValues, VectorView};

/// Inner product of two vectors: `Σ a[k] * b[k]` over every key stored in
/// either operand.
///
/// Accepts any combination of [`DenseVector`](crate::DenseVector) and
/// [`SparseVector`](crate::SparseVector); a dense operand behaves as a
/// sparse vector keyed by integer position. The result is computed and
/// returned in the [`promote`]d kind of the two operands.
///
/// # Cost
///
/// The operand with fewer stored entries is traversed and the other is
/// probed by key: O(min(lenA, lenB)) for dense·dense and no more than
/// O(min(|a|, |b|)) probes for sparse operands — never proportional to a
/// dense dimensionality the sparse side ignores.
///
/// # Determinism
///
/// Summation is naive (no compensation) in ascending key order, and a
/// coordinate paired with the other operand's additive identity is
/// skipped rather than multiplied: only keys stored non-zero on both
/// sides enter the sum. Both traversal orders therefore accumulate the
/// same products in the same order, so `dot(a, b)` and `dot(b, a)` are
/// commutative bit for bit (including when an infinity or NaN sits at a
/// key the other operand lacks) and reproducible across calls.
/// Reordering the *elements* of an input (e.g. re-keying) may change
/// low-order float bits.
///
/// # Overflow
///
/// Integer dot products accumulate through 128-bit intermediates, so
/// products of 64-bit coordinates never wrap. A result beyond the range
/// of the promoted kind saturates to that kind's nearest bound.
///
/// # Errors
///
/// [`VectorError::DomainMismatch`] when both operands store entries but
/// their key spaces cannot be reconciled (term-keyed sparse against
/// anything position-keyed). Empty operands never error: the result is
/// the additive identity of the promoted kind.
///
/// # Example
///
/// ```rust
/// use duovec::{dot, DenseVector, Scalar, SparseVector};
///
/// let d = DenseVector::from_slice(&[1, 2, 3]);
/// assert_eq!(dot(&d, &DenseVector::from_slice(&[4, 5, 6]))?, Scalar::from(32));
///
/// // Mixed representations: sparse positions probe the dense operand
/// let s = SparseVector::new([(0usize, 4), (2usize, 6)])?;
/// assert_eq!(dot(&d, &s)?, Scalar::from(22));
///
/// // Term-keyed sparse vectors work the same way
/// let a = SparseVector::new([("a", 2), ("b", 3)])?;
/// let b = SparseVector::new([("b", 5), ("c", 7)])?;
/// assert_eq!(dot(&a, &b)?, Scalar::from(15));
/// # Ok::<(), duovec::VectorError>(())
/// ```
pub fn dot<A: VectorView, B: VectorView>(a: &A, b: &B) -> Result<Scalar> {
    let kind = promoted_kind(a.element_kind(), b.element_kind());
    if a.stored_len() == 0 || b.stored_len() == 0 {
        return Ok(Scalar::zero(kind));
    }
    if let (Some(left), Some(right)) = (a.key_domain(), b.key_domain()) {
        if left != right {
            return Err(VectorError::DomainMismatch { left, right });
        }
    }
    let (small, big): (&dyn VectorView, &dyn VectorView) = if a.stored_len() <= b.stored_len() {
        (a, b)
    } else {
        (b, a)
    };
    Ok(dot_kernel(small, big, kind))
}

/// Euclidean norm: `sqrt(dot(v, v))`.
///
/// Runs through the same kernel as [`dot`], so the numerical behavior of
/// the two operations is consistent; integer vectors accumulate their
/// squared norm exactly before the final square root, saturating past
/// the 64-bit bound as [`dot`] does.
///
/// Callers that need to distinguish "already zero" from "successfully
/// normalized" inspect this before calling [`normalize`].
#[must_use]
pub fn norm<V: VectorView>(v: &V) -> f64 {
    let kind = promoted_kind(v.element_kind(), v.element_kind());
    if v.stored_len() == 0 {
        return 0.0;
    }
    dot_kernel(v, v, kind).as_f64().sqrt()
}

/// Rescale a vector to unit Euclidean norm.
///
/// The result is in the same representation family as the input — dense
/// stays dense (same length), sparse stays sparse (same keys, minus any
/// that divide to exactly zero) — with float-kind values.
///
/// Never fails: a zero vector (including an empty one) has no direction
/// to preserve, so it is returned as a zero vector of matching shape
/// rather than dividing by zero. NaN coordinates propagate.
///
/// # Example
///
/// ```rust
/// use duovec::{normalize, DenseVector};
///
/// let unit = normalize(&DenseVector::from_slice(&[3, 4]));
/// assert_eq!(unit, DenseVector::from_slice(&[0.6, 0.8]));
///
/// // Zero vector is a fixed point, not an error
/// let zero = DenseVector::from_slice(&[0, 0, 0]);
/// assert_eq!(normalize(&zero), zero);
/// ```
#[must_use]
pub fn normalize<V: MapValues>(v: &V) -> V::Output {
    let n = norm(v);
    if n == 0.0 {
        // All stored values are zero; rebuild them as float zeros to keep
        // the shape while coercing the kind.
        v.map_values(|_| 0.0)
    } else {
        // True division: 3/5 is exactly 0.6, where 3 * (1/5) is not.
        v.map_values(|x| x / n)
    }
}

fn promoted_kind(a: Option<ScalarKind>, b: Option<ScalarKind>) -> ScalarKind {
    match (a, b) {
        (Some(a), Some(b)) => promote(a, b),
        (Some(k), None) | (None, Some(k)) => k,
        // No kind evidence on either side: the contract's default float
        // width.
        (None, None) => ScalarKind::Float,
    }
}

/// Accumulate `Σ small[k] * big[k]` in `kind`, traversing `small` and
/// probing `big`. One match selects a monomorphic loop; no per-element
/// dispatch.
///
/// A pair with a zero on either side is skipped, not multiplied, so the
/// sum ranges over the keys stored non-zero on both sides whichever
/// operand is traversed. Integer arms accumulate in 128 bits and
/// saturate on the way back to 64.
fn dot_kernel(small: &dyn VectorView, big: &dyn VectorView, kind: ScalarKind) -> Scalar {
    match kind {
        ScalarKind::Float => {
            let mut acc = 0.0f64;
            for (key, value) in small.stored_entries() {
                if value.is_zero() {
                    continue;
                }
                let other = big.get(&key);
                if other.is_zero() {
                    continue;
                }
                acc += value.as_f64() * other.as_f64();
            }
            Scalar::Float(acc)
        }
        ScalarKind::Int => {
            let mut acc = 0i128;
            for (key, value) in small.stored_entries() {
                if value.is_zero() {
                    continue;
                }
                let other = big.get(&key);
                if other.is_zero() {
                    continue;
                }
                acc = acc.saturating_add(value.as_i128() * other.as_i128());
            }
            Scalar::Int(acc.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
        }
        ScalarKind::UInt => {
            let mut acc = 0u128;
            for (key, value) in small.stored_entries() {
                if value.is_zero() {
                    continue;
                }
                let other = big.get(&key);
                if other.is_zero() {
                    continue;
                }
                acc = acc.saturating_add(u128::from(value.as_u64()) * u128::from(other.as_u64()));
            }
            Scalar::UInt(acc.min(u128::from(u64::MAX)) as u64)
        }
    }
}
