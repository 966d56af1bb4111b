//! Error taxonomy.
//!
//! Two errors, by design: malformed *shape* at construction
//! ([`VectorError::InvalidVector`]) and irreconcilable key spaces at
//! [`dot`](crate::dot) time ([`VectorError::DomainMismatch`]). Value
//! degeneracy — empty vectors, all-zero vectors, dense vectors of
//! different lengths — is ordinary data and never errors.

use crate::key::KeyDomain;

/// Error type for vector construction and dot products.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// Structurally malformed input at construction time: mixed element
    /// kinds in a dense sequence, or duplicate keys / mixed key domains in
    /// a sparse pair list. Construction never partially succeeds.
    #[error("invalid vector: {0}")]
    InvalidVector(String),

    /// The two operands of a dot product are addressed by key spaces with
    /// no coercion rule between them. A dense vector coerces to
    /// sparse-by-position only.
    #[error("domain mismatch: cannot reconcile {left}-keyed operand with {right}-keyed operand")]
    DomainMismatch {
        /// Key domain of the left operand.
        left: KeyDomain,
        /// Key domain of the right operand.
        right: KeyDomain,
    },
}

/// Result alias for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;
