use crate::algebra::*;
use std::iter::zip;
use std::ops::{Add, Sub};

impl<T> Matrix<T>
where
    T: ElementT,
{
    // Combines corresponding rows with a vector operation, which applies
    // its own shape check to every row pair.
    fn rowwise<F>(&self, other: &Self, op: F) -> Result<Self, AlgebraError>
    where
        F: Fn(&BorrowedVector<'_, T>, &BorrowedVector<'_, T>) -> Result<Vector<T>, AlgebraError>,
    {
        if self.n != other.n {
            return Err(AlgebraError::ShapeMismatch {
                lhs: (self.n, 0),
                rhs: (other.n, 0),
            });
        }
        let mut data = Vec::with_capacity(self.nnz());
        for (a, b) in zip(self.rows(), other.rows()) {
            data.extend_from_slice(op(&a, &b)?.data());
        }
        Ok(Self { n: self.n, data })
    }

    /// Elementwise sum, computed row by row.
    ///
    /// Fails with `ShapeMismatch` if the dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.rowwise(other, |a, b| a.try_add(b))
    }

    /// Elementwise difference, computed row by row.
    ///
    /// Fails with `ShapeMismatch` if the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.rowwise(other, |a, b| a.try_sub(b))
    }
}

impl<T> Add<&Matrix<T>> for &Matrix<T>
where
    T: ElementT,
{
    type Output = Result<Matrix<T>, AlgebraError>;
    fn add(self, other: &Matrix<T>) -> Self::Output {
        self.try_add(other)
    }
}

impl<T> Sub<&Matrix<T>> for &Matrix<T>
where
    T: ElementT,
{
    type Output = Result<Matrix<T>, AlgebraError>;
    fn sub(self, other: &Matrix<T>) -> Self::Output {
        self.try_sub(other)
    }
}
