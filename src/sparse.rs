//! Sparse vectors: only non-zero coordinates stored, keyed arbitrarily.

use std::collections::BTreeMap;

use crate::error::{Result, VectorError};
use crate::key::{Key, KeyDomain};
use crate::scalar::{promote, Scalar, ScalarKind};
use crate::view::{Entries, MapValues, VectorView};

/// A mapping from key to non-zero numeric value.
///
/// An absent key denotes the additive identity for that coordinate.
/// Explicit zeros supplied at construction are dropped (after duplicate
/// detection), so the zero-equivalence invariant holds structurally:
/// equality, entry counts and traversal never see a stored zero.
///
/// Entries are kept in a `BTreeMap`, so traversal order is ascending by
/// key and identical across traversals and across vector instances. That
/// makes the summation order inside [`dot`](crate::dot) deterministic.
///
/// # Example
///
/// ```rust
/// use duovec::{Scalar, SparseVector};
///
/// let v = SparseVector::new([("a", 2), ("b", 3)])?;
/// assert_eq!(v.stored_len(), 2);
/// assert_eq!(v.get(&"a".into()), Scalar::from(2));
/// // Absent key is the additive identity, not an error
/// assert_eq!(v.get(&"zzz".into()), Scalar::from(0));
/// # Ok::<(), duovec::VectorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SparseVector {
    entries: BTreeMap<Key, Scalar>,
    kind: Option<ScalarKind>,
    domain: Option<KeyDomain>,
}

impl SparseVector {
    /// Construct from key/value pairs.
    ///
    /// Accepts anything convertible to [`Key`] and [`Scalar`], so
    /// `[("a", 2.0)]` and `[(0usize, 4)]` both work. Zero values are
    /// accepted and dropped.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidVector`] if the input repeats a key (the
    /// intent is ambiguous; values are never summed or overwritten) or
    /// mixes position and term keys within one vector.
    pub fn new<K, V, I>(pairs: I) -> Result<Self>
    where
        K: Into<Key>,
        V: Into<Scalar>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = BTreeMap::new();
        let mut domain = None;
        for (key, value) in pairs {
            let key = key.into();
            let key_domain = key.domain();
            match domain {
                None => domain = Some(key_domain),
                Some(d) if d != key_domain => {
                    return Err(VectorError::InvalidVector(format!(
                        "mixed key domains in sparse input: {d} and {key_domain}"
                    )));
                }
                Some(_) => {}
            }
            if entries.insert(key.clone(), value.into()).is_some() {
                return Err(VectorError::InvalidVector(format!(
                    "duplicate key in sparse input: {key}"
                )));
            }
        }
        entries.retain(|_, v| !v.is_zero());
        if entries.is_empty() {
            domain = None;
        }
        let kind = entries
            .values()
            .map(Scalar::kind)
            .reduce(promote);
        Ok(SparseVector { entries, kind, domain })
    }

    /// Number of stored (non-zero) entries.
    #[inline]
    #[must_use]
    pub fn stored_len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are stored: the zero vector.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value at `key`, or the additive identity if absent.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &Key) -> Scalar {
        self.entries
            .get(key)
            .copied()
            .unwrap_or_else(|| self.identity())
    }

    /// Iterate the stored `(key, value)` pairs in ascending key order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> Entries<'_> {
        Entries::sparse(self.entries.iter())
    }

    fn identity(&self) -> Scalar {
        Scalar::zero(self.kind.unwrap_or(ScalarKind::Float))
    }

    fn rebuild<F: FnMut(f64) -> f64>(&self, mut f: F) -> SparseVector {
        let entries: BTreeMap<Key, Scalar> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), Scalar::Float(f(v.as_f64()))))
            .filter(|(_, v)| !v.is_zero())
            .collect();
        let domain = entries.keys().next().map(Key::domain);
        let kind = if entries.is_empty() {
            None
        } else {
            Some(ScalarKind::Float)
        };
        SparseVector { entries, kind, domain }
    }
}

/// Entry-map equality with numeric value comparison. Two vectors are equal
/// when they store the same keys with numerically equal values; since
/// zeros are never stored, a mapping that only ever held zeros equals the
/// empty vector.
impl PartialEq for SparseVector {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl VectorView for SparseVector {
    fn key_domain(&self) -> Option<KeyDomain> {
        self.domain
    }

    fn element_kind(&self) -> Option<ScalarKind> {
        self.kind
    }

    fn stored_len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, key: &Key) -> Scalar {
        SparseVector::get(self, key)
    }

    fn stored_entries(&self) -> Entries<'_> {
        self.entries()
    }
}

impl MapValues for SparseVector {
    type Output = SparseVector;

    fn map_values<F: FnMut(f64) -> f64>(&self, f: F) -> SparseVector {
        self.rebuild(f)
    }
}
