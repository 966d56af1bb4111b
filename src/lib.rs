//! Dense and sparse vector algebra behind one read contract.
//!
//! `duovec` ("duo" for the two representations) provides a small,
//! reusable core for numeric vectors:
//!
//! - **Dense**: [`DenseVector`] — fixed-length, position-indexed
//! - **Sparse**: [`SparseVector`] — key→value map, absent keys implicitly zero
//! - **Operations**: [`dot`], [`norm`], [`normalize`]
//!
//! Both representations implement [`VectorView`], and the operations are
//! written once against that contract, so dense·dense, dense·sparse,
//! sparse·dense and sparse·sparse all agree in mathematical meaning.
//! Sparse work stays proportional to the smaller operand's stored-entry
//! count, never to a dense dimensionality.
//!
//! # Shape vs. value
//!
//! Malformed *shape* is an error; degenerate *values* are data. Mixed
//! element kinds in one dense sequence, duplicate sparse keys, or
//! irreconcilable key spaces fail with [`VectorError`]. Empty vectors,
//! all-zero vectors and dense vectors of different lengths are all
//! well-formed: missing coordinates are the additive identity.
//!
//! # Promotion
//!
//! Coordinates may be signed, unsigned or floating point (any primitive
//! width; everything widens to 64-bit at construction). Combining two
//! vectors promotes once per call: float beats integer, signed beats
//! unsigned — see [`promote`]. `normalize` always produces float output.
//!
//! # Example
//!
//! ```rust
//! use duovec::{dot, normalize, DenseVector, Scalar, SparseVector};
//!
//! let dense = DenseVector::from_slice(&[1, 2, 3]);
//! let sparse = SparseVector::new([(0usize, 4), (2usize, 6)])?;
//!
//! // Mixed representations agree with the all-dense equivalent
//! assert_eq!(dot(&dense, &sparse)?, Scalar::from(22));
//!
//! // Normalization stays in the input's representation family
//! let unit = normalize(&DenseVector::from_slice(&[3, 4]));
//! assert_eq!(unit, DenseVector::from_slice(&[0.6, 0.8]));
//! # Ok::<(), duovec::VectorError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dense;
mod error;
mod key;
mod ops;
mod scalar;
mod sparse;
mod view;

pub use dense::DenseVector;
pub use error::{Result, VectorError};
pub use key::{Key, KeyDomain};
pub use ops::{dot, norm, normalize};
pub use scalar::{promote, Scalar, ScalarKind};
pub use sparse::SparseVector;
pub use view::{Entries, MapValues, VectorView};
