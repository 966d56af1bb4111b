//! The shared read contract over both vector representations.
//!
//! [`VectorView`] is the whole capability surface the algorithms in
//! [`ops`](crate::ops) use: classify the key space, classify the element
//! kind, iterate stored entries, and look a key up with the additive
//! identity as the default. Neither `dot` nor `normalize` ever touches a
//! concrete backing structure beyond this.

use std::collections::btree_map;
use std::iter::Enumerate;
use std::slice;

use crate::key::{Key, KeyDomain};
use crate::scalar::{Scalar, ScalarKind};

/// Read-only view of a vector, implemented by both representations.
///
/// The contract generalizes "index out of range" and "key not found" into
/// one rule: [`get`](VectorView::get) returns the additive identity for
/// any key the vector does not store. Lookups and iteration are free of
/// internal mutation, so sharing a vector across threads for concurrent
/// reads is safe.
///
/// The trait is object-safe; the dot kernel runs over `&dyn VectorView`.
pub trait VectorView {
    /// The key space this vector is addressed by, or `None` when the
    /// vector stores nothing and so constrains nothing.
    ///
    /// Dense vectors are always `Position`-keyed, even when empty: their
    /// key space is structural, not inferred from contents.
    fn key_domain(&self) -> Option<KeyDomain>;

    /// The element kind of stored coordinates, or `None` when nothing is
    /// stored. For sparse vectors of mixed numeric kinds this is the
    /// promotion-join of the entry kinds.
    fn element_kind(&self) -> Option<ScalarKind>;

    /// Number of stored coordinates. For dense vectors this is the length
    /// (every position is stored, zeros included); for sparse vectors it
    /// is the non-zero entry count.
    fn stored_len(&self) -> usize;

    /// The value at `key`, or the additive identity if the key is absent
    /// or out of range.
    fn get(&self, key: &Key) -> Scalar;

    /// Iterate all stored `(key, value)` pairs.
    ///
    /// Finite and restartable: each call yields a fresh traversal in the
    /// representation's deterministic order (ascending position for dense,
    /// ascending key for sparse).
    fn stored_entries(&self) -> Entries<'_>;
}

/// Rebuild capability: produce a new vector of the same representation
/// family with every stored value mapped through a float function.
///
/// [`normalize`](crate::normalize) is the consumer: it rebuilds its input
/// with each stored value divided by the norm, staying dense for dense
/// input and sparse for sparse input.
pub trait MapValues: VectorView {
    /// The owning vector type produced by the rebuild.
    type Output: VectorView;

    /// Map every stored value through `f`, coercing the result to the
    /// float kind. Unstored coordinates stay implicitly zero.
    fn map_values<F: FnMut(f64) -> f64>(&self, f: F) -> Self::Output;
}

/// Iterator over a view's stored `(key, value)` pairs.
///
/// One concrete type covering both backings keeps [`VectorView`]
/// object-safe without boxing. Term keys are cloned as they are yielded.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Inner<'a>,
}

#[derive(Debug, Clone)]
enum Inner<'a> {
    Dense(Enumerate<slice::Iter<'a, Scalar>>),
    Sparse(btree_map::Iter<'a, Key, Scalar>),
}

impl<'a> Entries<'a> {
    pub(crate) fn dense(values: &'a [Scalar]) -> Self {
        Entries {
            inner: Inner::Dense(values.iter().enumerate()),
        }
    }

    pub(crate) fn sparse(entries: btree_map::Iter<'a, Key, Scalar>) -> Self {
        Entries {
            inner: Inner::Sparse(entries),
        }
    }
}

impl Iterator for Entries<'_> {
    type Item = (Key, Scalar);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Dense(iter) => iter.next().map(|(i, v)| (Key::Position(i), *v)),
            Inner::Sparse(iter) => iter.next().map(|(k, v)| (k.clone(), *v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Dense(iter) => iter.size_hint(),
            Inner::Sparse(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}
