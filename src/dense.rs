//! Dense vectors: every coordinate stored, position is the key.

use crate::error::{Result, VectorError};
use crate::key::{Key, KeyDomain};
use crate::scalar::{Scalar, ScalarKind};
use crate::view::{Entries, MapValues, VectorView};

/// An ordered, fixed-length sequence of numeric coordinates.
///
/// Position is the implicit key; absence is not representable, so explicit
/// zeros are stored like any other value. The length is fixed at
/// construction and the vector is immutable afterwards.
///
/// All coordinates must share one element kind. Construction from a typed
/// slice cannot violate this; construction from raw [`Scalar`]s is
/// validated.
///
/// # Example
///
/// ```rust
/// use duovec::{DenseVector, Scalar};
///
/// let v = DenseVector::from_slice(&[1, 2, 3]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.get(1), Scalar::from(2));
/// // Out of range is the additive identity, not an error
/// assert_eq!(v.get(9), Scalar::from(0));
/// ```
#[derive(Debug, Clone)]
pub struct DenseVector {
    values: Vec<Scalar>,
    kind: Option<ScalarKind>,
}

impl DenseVector {
    /// Construct from raw scalars, validating that all elements share one
    /// kind.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidVector`] if the sequence mixes element kinds
    /// (e.g. an integer next to a float).
    pub fn new(values: Vec<Scalar>) -> Result<Self> {
        let kind = values.first().map(Scalar::kind);
        if let Some(expected) = kind {
            for (i, v) in values.iter().enumerate() {
                if v.kind() != expected {
                    return Err(VectorError::InvalidVector(format!(
                        "mixed element kinds in dense sequence: {} at position 0, {} at position {i}",
                        expected,
                        v.kind(),
                    )));
                }
            }
        }
        Ok(DenseVector { values, kind })
    }

    /// Construct from a slice of any one primitive numeric type.
    ///
    /// Infallible: a typed slice cannot mix element kinds.
    #[must_use]
    pub fn from_slice<T: Into<Scalar> + Copy>(values: &[T]) -> Self {
        let values: Vec<Scalar> = values.iter().map(|&v| v.into()).collect();
        let kind = values.first().map(Scalar::kind);
        DenseVector { values, kind }
    }

    /// Number of coordinates.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the vector has no coordinates.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at position `i`, or the additive identity if `i` is out
    /// of range.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Scalar {
        self.values
            .get(i)
            .copied()
            .unwrap_or_else(|| self.identity())
    }

    /// The stored coordinates in order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    fn identity(&self) -> Scalar {
        Scalar::zero(self.kind.unwrap_or(ScalarKind::Float))
    }
}

/// Elementwise numeric equality; lengths must match. Kind-insensitive, so
/// an integer vector equals the float vector with the same coordinates.
impl PartialEq for DenseVector {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl VectorView for DenseVector {
    fn key_domain(&self) -> Option<KeyDomain> {
        // Structurally position-keyed, empty or not.
        Some(KeyDomain::Position)
    }

    fn element_kind(&self) -> Option<ScalarKind> {
        self.kind
    }

    fn stored_len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, key: &Key) -> Scalar {
        match key {
            Key::Position(i) => self.get(*i),
            Key::Term(_) => self.identity(),
        }
    }

    fn stored_entries(&self) -> Entries<'_> {
        Entries::dense(&self.values)
    }
}

impl MapValues for DenseVector {
    type Output = DenseVector;

    fn map_values<F: FnMut(f64) -> f64>(&self, mut f: F) -> DenseVector {
        let values: Vec<Scalar> = self
            .values
            .iter()
            .map(|v| Scalar::Float(f(v.as_f64())))
            .collect();
        let kind = values.first().map(Scalar::kind);
        DenseVector { values, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uniform_kinds_ok() {
        let v = DenseVector::new(vec![Scalar::from(1), Scalar::from(2)]).unwrap();
        assert_eq!(v.element_kind(), Some(ScalarKind::Int));
    }

    #[test]
    fn test_new_mixed_kinds_rejected() {
        let err = DenseVector::new(vec![Scalar::from(1), Scalar::from(2.0)]).unwrap_err();
        assert!(matches!(err, VectorError::InvalidVector(_)));
        // Signed next to unsigned is also a mix
        let err = DenseVector::new(vec![Scalar::from(1i64), Scalar::from(2u64)]).unwrap_err();
        assert!(matches!(err, VectorError::InvalidVector(_)));
    }

    #[test]
    fn test_empty_is_valid() {
        let v = DenseVector::new(Vec::new()).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.element_kind(), None);
        assert_eq!(v.get(0), Scalar::from(0));
    }

    #[test]
    fn test_get_out_of_range_is_identity() {
        let v = DenseVector::from_slice(&[1.0, 2.0]);
        assert_eq!(v.get(2), Scalar::Float(0.0));
        assert_eq!(VectorView::get(&v, &Key::from(100)), Scalar::Float(0.0));
    }

    #[test]
    fn test_term_key_lookup_is_identity() {
        let v = DenseVector::from_slice(&[1, 2]);
        assert_eq!(VectorView::get(&v, &Key::from("a")), Scalar::from(0));
    }

    #[test]
    fn test_entries_are_all_positions_in_order() {
        let v = DenseVector::from_slice(&[5, 0, 7]);
        let entries: Vec<_> = v.stored_entries().collect();
        assert_eq!(
            entries,
            vec![
                (Key::Position(0), Scalar::from(5)),
                (Key::Position(1), Scalar::from(0)),
                (Key::Position(2), Scalar::from(7)),
            ]
        );
        // Restartable
        assert_eq!(v.stored_entries().count(), 3);
    }

    #[test]
    fn test_equality_is_numeric_across_kinds() {
        let ints = DenseVector::from_slice(&[1, 2, 3]);
        let floats = DenseVector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(ints, floats);
        assert_ne!(ints, DenseVector::from_slice(&[1, 2]));
    }

    #[test]
    fn test_map_values_produces_float_vector() {
        let v = DenseVector::from_slice(&[1, 2]);
        let doubled = v.map_values(|x| x * 2.0);
        assert_eq!(doubled.element_kind(), Some(ScalarKind::Float));
        assert_eq!(doubled, DenseVector::from_slice(&[2.0, 4.0]));
        assert_eq!(doubled.len(), v.len());
    }
}
