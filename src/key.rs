//! Coordinate keys and key domains.
//!
//! A dense vector is addressed by position; a sparse vector may be
//! addressed by position or by an arbitrary term. The two domains never
//! mix inside one vector, and `dot` refuses to reconcile them across
//! operands (a dense vector coerces to sparse-by-position, never to
//! sparse-by-term).

use std::fmt;

/// A coordinate key: integer position or arbitrary term.
///
/// `Position` keys order before `Term` keys; within a domain, keys order
/// naturally. The ordering only has to be total and stable — it fixes the
/// traversal (and therefore summation) order of sparse vectors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Zero-based coordinate position, the implicit key of dense vectors.
    Position(usize),
    /// Arbitrary named coordinate (e.g. a token in a term-weight map).
    Term(String),
}

impl Key {
    /// The domain this key belongs to.
    #[inline]
    #[must_use]
    pub fn domain(&self) -> KeyDomain {
        match self {
            Key::Position(_) => KeyDomain::Position,
            Key::Term(_) => KeyDomain::Term,
        }
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(i: usize) -> Key {
        Key::Position(i)
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(s: &str) -> Key {
        Key::Term(s.to_owned())
    }
}

impl From<String> for Key {
    #[inline]
    fn from(s: String) -> Key {
        Key::Term(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Position(i) => write!(f, "{i}"),
            Key::Term(s) => write!(f, "{s:?}"),
        }
    }
}

/// The key space a vector is addressed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDomain {
    /// Integer positions (dense vectors, and position-keyed sparse ones).
    Position,
    /// Arbitrary terms.
    Term,
}

impl fmt::Display for KeyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyDomain::Position => write!(f, "position"),
            KeyDomain::Term => write!(f, "term"),
        }
    }
}
