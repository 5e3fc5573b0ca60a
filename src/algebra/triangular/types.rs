use crate::algebra::*;
use std::ops::{Index, IndexMut, Range};

/// Square upper triangular matrix.
///
/// Only the entries `(i, j)` with `j >= i` exist.  They are packed row by
/// row into a single buffer, so row `i` occupies `n - i` consecutive
/// elements and behaves like a [`Vector`] with valid indices `i..n`.
/// Accessing an entry below the diagonal fails with `IndexOutOfRange`
/// rather than reading an implicit zero.
///
/// ```text
///  [ a00 a01 a02 ]
///  [  ⋅  a11 a12 ]    packed as  [a00 a01 a02 a11 a12 a22]
///  [  ⋅   ⋅  a22 ]
/// ```
#[derive(Debug)]
pub struct Matrix<T> {
    /// dimension
    pub(crate) n: usize,
    /// upper triangle in row-major packed format
    pub(crate) data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Dimension of the matrix, i.e. its number of rows and columns
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Stored entries in row-major packed order
    pub fn data(&self) -> &[T] {
        &self.data
    }

    // storage range of row i.  A matrix built by trusted conversion
    // from malformed rows may not back every row.
    pub(crate) fn row_range(&self, i: usize) -> Result<Range<usize>, AlgebraError> {
        let start = triangular_row_offset(self.n, i.min(self.n));
        let end = start + self.n.saturating_sub(i);
        if i >= self.n || end > self.data.len() {
            return Err(AlgebraError::IndexOutOfRange {
                index: i,
                start_index: 0,
                size: self.n,
            });
        }
        Ok(start..end)
    }

    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> Result<usize, AlgebraError> {
        let (i, j) = idx;
        let range = self.row_range(i)?;
        if j < i || j >= self.n {
            return Err(AlgebraError::IndexOutOfRange {
                index: j,
                start_index: i,
                size: self.n,
            });
        }
        Ok(range.start + (j - i))
    }

    /// Row `i` as a vector view with valid indices `i..size`
    pub fn row(&self, i: usize) -> Result<BorrowedVector<'_, T>, AlgebraError> {
        let range = self.row_range(i)?;
        Ok(BorrowedVector::from_parts(self.n, i, &self.data[range]))
    }

    /// Mutable view of row `i`, with valid indices `i..size`
    pub fn row_mut(&mut self, i: usize) -> Result<BorrowedVectorMut<'_, T>, AlgebraError> {
        let range = self.row_range(i)?;
        Ok(BorrowedVectorMut::from_parts(
            self.n,
            i,
            &mut self.data[range],
        ))
    }

    /// Iterator over row views, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = BorrowedVector<'_, T>> {
        (0..self.n).map_while(move |i| self.row(i).ok())
    }

    /// Entry `(i, j)`, or `IndexOutOfRange` unless `i <= j < size`
    pub fn get(&self, idx: (usize, usize)) -> Result<&T, AlgebraError> {
        let lidx = self.index_linear(idx)?;
        Ok(&self.data[lidx])
    }

    /// Mutable entry `(i, j)`, or `IndexOutOfRange` unless `i <= j < size`
    pub fn get_mut(&mut self, idx: (usize, usize)) -> Result<&mut T, AlgebraError> {
        let lidx = self.index_linear(idx)?;
        Ok(&mut self.data[lidx])
    }
}

impl<T> PartialEq for Matrix<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.n == other.n && self.data == other.data
    }
}

impl<T> Eq for Matrix<T> where T: Eq {}

impl<T> Clone for Matrix<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            n: self.n,
            data: self.data.clone(),
        }
    }

    // reuses the existing allocation where possible
    fn clone_from(&mut self, source: &Self) {
        if self.n != source.n {
            log::debug!("resizing matrix from {} to {}", self.n, source.n);
        }
        self.n = source.n;
        self.data.clone_from(&source.data);
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        match self.get(idx) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        match self.get_mut(idx) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}
