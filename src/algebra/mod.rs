//! Offset-indexed vectors and packed upper triangular matrices.
//!
//! All containers are generic over an element type implementing
//! [`ElementT`](crate::algebra::ElementT), which is satisfied by the
//! primitive integer and floating point types.

/// Largest permitted `size` of a [`Vector`].
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest permitted dimension of a [`Matrix`].
pub const MAX_MATRIX_SIZE: usize = 10_000;

mod elements;
pub use elements::*;
mod error_types;
pub use error_types::*;
mod scalarmath;
pub(crate) use scalarmath::*;
mod vector;
pub use vector::*;
mod triangular;
pub use triangular::*;

#[cfg(test)]
mod tests;
