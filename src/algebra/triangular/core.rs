use crate::algebra::*;

impl<T> Matrix<T>
where
    T: ElementT,
{
    /// Creates a zero-filled `size x size` upper triangular matrix.
    ///
    /// Fails with `InvalidArgument` if `size > MAX_MATRIX_SIZE`.
    pub fn new(size: usize) -> Result<Self, AlgebraError> {
        check_shape(size, 0, MAX_MATRIX_SIZE)?;
        Ok(Self {
            n: size,
            data: vec![T::zero(); triangular_number(size)],
        })
    }

    /// Builds a matrix from a vector of rows, checking that row `i` has
    /// valid indices `i..n` for an `n`-row input starting at index 0.
    pub fn try_from_rows<S1, S2>(
        rows: &OffsetStorageVector<S1, OffsetStorageVector<S2, T>>,
    ) -> Result<Self, AlgebraError>
    where
        S1: AsRef<[OffsetStorageVector<S2, T>]>,
        S2: AsRef<[T]>,
    {
        let n = rows.size();
        check_shape(n, rows.start_index(), MAX_MATRIX_SIZE)?;
        if rows.start_index() != 0 {
            return Err(AlgebraError::ShapeMismatch {
                lhs: (n, 0),
                rhs: rows.shape(),
            });
        }
        let mut data = Vec::with_capacity(triangular_number(n));
        for (i, row) in rows.iter().enumerate() {
            if row.shape() != (n, i) {
                return Err(AlgebraError::ShapeMismatch {
                    lhs: (n, i),
                    rhs: row.shape(),
                });
            }
            data.extend_from_slice(row.data());
        }
        Ok(Self { n, data })
    }

    /// Copies the rows out into a vector of vectors, row `i` having
    /// valid indices `i..size`.
    pub fn to_rows(&self) -> Vector<Vector<T>> {
        let rows: Vec<_> = self.rows().map(|row| row.to_owned_vector()).collect();
        let size = rows.len();
        Vector::from_parts(size, 0, rows)
    }
}

impl<T> Default for Matrix<T>
where
    T: ElementT,
{
    /// Zero-filled matrix of size 10
    fn default() -> Self {
        Self {
            n: 10,
            data: vec![T::zero(); triangular_number(10)],
        }
    }
}

/// Trusting conversion from a vector of rows.
///
/// The matrix takes the `size` of `rows` as its dimension and packs the
/// stored rows in order without checking their shapes.  Input that is not
/// already upper triangular (row `i` with valid indices `i..size`) gives a
/// matrix whose rows do not line up with the input.  Use
/// [`Matrix::try_from_rows`] to validate instead.
///
/// Every stored value of the input is kept, so the packed length may
/// differ from `size * (size + 1) / 2`.  [`nnz`](Matrix::nnz),
/// [`data`](Matrix::data), [`read_tokens`](Matrix::read_tokens) and
/// equality work on the whole packed buffer.  Row access, `Display`,
/// `write_to` and arithmetic only see the rows the buffer backs at their
/// triangular offsets: surplus values are ignored, and iteration stops at
/// the first row the buffer is too short to hold.  Sums and differences
/// of such a matrix are therefore packed to the rows they cover.
impl<T> From<Vector<Vector<T>>> for Matrix<T>
where
    T: ElementT,
{
    fn from(rows: Vector<Vector<T>>) -> Self {
        let n = rows.size();
        let data = rows
            .data
            .into_iter()
            .flat_map(|row| row.data.into_iter())
            .collect();
        Self { n, data }
    }
}
