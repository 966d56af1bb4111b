//! Numeric element contract: which scalars may be vector coordinates,
//! and how two element kinds combine.
//!
//! Every coordinate is widened to a canonical 64-bit kind at the
//! construction boundary ([`Scalar`]). Arithmetic inside `dot` and
//! `normalize` runs in the [`promote`]d kind of the two operands, selected
//! once per call, so the inner loops stay free of per-element dispatch.

use std::fmt;

/// The kind of a [`Scalar`]: signed integer, unsigned integer, or float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Signed 64-bit integer.
    Int,
    /// Unsigned 64-bit integer.
    UInt,
    /// 64-bit float.
    Float,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Int => write!(f, "int"),
            ScalarKind::UInt => write!(f, "uint"),
            ScalarKind::Float => write!(f, "float"),
        }
    }
}

/// Promotion rule for combining two element kinds.
///
/// A float on either side wins; otherwise signedness resolves toward the
/// signed kind. Width never changes: all scalars are already 64-bit.
///
/// # Example
///
/// ```rust
/// use duovec::{promote, ScalarKind};
///
/// assert_eq!(promote(ScalarKind::Int, ScalarKind::Float), ScalarKind::Float);
/// assert_eq!(promote(ScalarKind::UInt, ScalarKind::Int), ScalarKind::Int);
/// assert_eq!(promote(ScalarKind::UInt, ScalarKind::UInt), ScalarKind::UInt);
/// ```
#[inline]
#[must_use]
pub fn promote(a: ScalarKind, b: ScalarKind) -> ScalarKind {
    use ScalarKind::*;
    match (a, b) {
        (Float, _) | (_, Float) => Float,
        (Int, _) | (_, Int) => Int,
        (UInt, UInt) => UInt,
    }
}

/// A single vector coordinate.
///
/// Construction entry points accept any primitive integer width and both
/// float widths; narrow inputs widen losslessly into the three canonical
/// kinds. Equality is numeric across kinds: `Scalar::from(3) ==
/// Scalar::from(3.0)`.
///
/// # Example
///
/// ```rust
/// use duovec::Scalar;
///
/// assert_eq!(Scalar::from(3u8), Scalar::from(3i64));
/// assert_eq!(Scalar::from(3), Scalar::from(3.0));
/// assert_ne!(Scalar::from(-1), Scalar::from(1u64));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Scalar {
    /// Signed integer coordinate.
    Int(i64),
    /// Unsigned integer coordinate.
    UInt(u64),
    /// Floating-point coordinate.
    Float(f64),
}

impl Scalar {
    /// The kind of this scalar.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::UInt(_) => ScalarKind::UInt,
            Scalar::Float(_) => ScalarKind::Float,
        }
    }

    /// The additive identity of `kind`.
    #[inline]
    #[must_use]
    pub fn zero(kind: ScalarKind) -> Scalar {
        match kind {
            ScalarKind::Int => Scalar::Int(0),
            ScalarKind::UInt => Scalar::UInt(0),
            ScalarKind::Float => Scalar::Float(0.0),
        }
    }

    /// True if this scalar is the additive identity (of any kind).
    ///
    /// `Float(-0.0)` counts as zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Scalar::Int(v) => v == 0,
            Scalar::UInt(v) => v == 0,
            Scalar::Float(v) => v == 0.0,
        }
    }

    /// This scalar as an `f64`.
    ///
    /// Integers above 2^53 in magnitude round to the nearest representable
    /// float.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Scalar::Int(v) => v as f64,
            Scalar::UInt(v) => v as f64,
            Scalar::Float(v) => v,
        }
    }

    /// This scalar as an `i64`.
    ///
    /// Unsigned values above `i64::MAX` wrap; floats truncate. Exact
    /// cross-kind conversion for signed accumulation goes through
    /// [`as_i128`](Self::as_i128) instead.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        match *self {
            Scalar::Int(v) => v,
            Scalar::UInt(v) => v as i64,
            Scalar::Float(v) => v as i64,
        }
    }

    /// This scalar as a `u64`, for accumulation in the unsigned kind.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        match *self {
            Scalar::Int(v) => v as u64,
            Scalar::UInt(v) => v,
            Scalar::Float(v) => v as u64,
        }
    }

    /// This scalar as an `i128`, exact for both integer kinds.
    ///
    /// The signed accumulation path uses this so unsigned values above
    /// `i64::MAX` keep their numeric value. Floats truncate (unreachable
    /// from the dot kernel, which takes the float path whenever a float
    /// is involved).
    #[inline]
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        match *self {
            Scalar::Int(v) => i128::from(v),
            Scalar::UInt(v) => i128::from(v),
            Scalar::Float(v) => v as i128,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        use Scalar::*;
        match (*self, *other) {
            (Int(a), Int(b)) => a == b,
            (UInt(a), UInt(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(a), UInt(b)) | (UInt(b), Int(a)) => a >= 0 && a as u64 == b,
            // Integer-vs-float comparison routes through f64; integers
            // above 2^53 lose precision there.
            (Int(a), Float(b)) | (Float(b), Int(a)) => a as f64 == b,
            (UInt(a), Float(b)) | (Float(b), UInt(a)) => a as f64 == b,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::UInt(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar {
            #[inline]
            fn from(v: $t) -> Scalar {
                Scalar::Int(v as i64)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar {
            #[inline]
            fn from(v: $t) -> Scalar {
                Scalar::UInt(v as u64)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Scalar {
    #[inline]
    fn from(v: f32) -> Scalar {
        Scalar::Float(f64::from(v))
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(v: f64) -> Scalar {
        Scalar::Float(v)
    }
}
