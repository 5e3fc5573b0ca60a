//! __utmatrix__ provides two small numeric containers with value semantics:
//!
//! * [`Vector`](crate::algebra::Vector), a bounds-checked vector whose valid
//!   index range is `[start_index, size)` rather than always starting at zero.
//!
//! * [`Matrix`](crate::algebra::Matrix), a square upper triangular matrix in
//!   which only the entries `(i, j)` with `j >= i` are stored.  Row `i` behaves
//!   like a vector starting at index `i`, so sub-diagonal entries are not
//!   implicitly zero; they are out of range.
//!
//! Both types support scalar and elementwise arithmetic, equality, deep copy
//! and whitespace-delimited text input / output.
//!
//! ```
//! use utmatrix::algebra::*;
//!
//! let mut a = Matrix::<i32>::new(3)?;
//! a[(0, 0)] = 1;
//! a[(1, 2)] = 5;
//!
//! let b = (&a + &a)?;
//! assert_eq!(b[(1, 2)], 10);
//! assert!(b.get((2, 1)).is_err());
//! # Ok::<(), AlgebraError>(())
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod io;
