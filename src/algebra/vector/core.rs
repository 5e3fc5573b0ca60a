use crate::algebra::*;

// construction parameters must satisfy start_index <= size <= max_size
pub(crate) fn check_shape(
    size: usize,
    start_index: usize,
    max_size: usize,
) -> Result<(), AlgebraError> {
    if size > max_size || start_index > size {
        log::debug!(
            "rejected shape: size {} with start index {} (maximum size {})",
            size,
            start_index,
            max_size
        );
        return Err(AlgebraError::InvalidArgument {
            size,
            start_index,
            max_size,
        });
    }
    Ok(())
}

impl<S, T> OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
{
    // no shape validation beyond a length check in debug builds
    pub(crate) fn from_parts(size: usize, start_index: usize, data: S) -> Self {
        debug_assert_eq!(data.as_ref().len() + start_index, size);
        Self {
            size,
            start_index,
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }
}

impl<T> Vector<T> {
    /// Creates a vector with valid indices `start_index..size` taking
    /// ownership of `data`, which must have length `size - start_index`.
    ///
    /// Places no requirements on the element type, so it can also build
    /// vectors of vectors, e.g. the rows passed to
    /// [`Matrix::from`](crate::algebra::Matrix).
    pub fn from_vec(size: usize, start_index: usize, data: Vec<T>) -> Result<Self, AlgebraError> {
        check_shape(size, start_index, MAX_VECTOR_SIZE)?;
        if data.len() != size - start_index {
            return Err(AlgebraError::ShapeMismatch {
                lhs: (size, start_index),
                rhs: (data.len(), 0),
            });
        }
        Ok(Self::from_parts(size, start_index, data))
    }
}

impl<T> Vector<T>
where
    T: ElementT,
{
    /// Creates a zero-filled vector with valid indices `start_index..size`.
    ///
    /// Fails with `InvalidArgument` if `size > MAX_VECTOR_SIZE` or
    /// `start_index > size`.
    pub fn new(size: usize, start_index: usize) -> Result<Self, AlgebraError> {
        check_shape(size, start_index, MAX_VECTOR_SIZE)?;
        let data = vec![T::zero(); size - start_index];
        Ok(Self::from_parts(size, start_index, data))
    }

    /// Creates a zero-filled vector with valid indices `0..size`.
    pub fn with_size(size: usize) -> Result<Self, AlgebraError> {
        Self::new(size, 0)
    }

    /// Creates a vector with valid indices `start_index..size` holding a
    /// copy of `src`, which must have length `size - start_index`.
    pub fn from_slice(size: usize, start_index: usize, src: &[T]) -> Result<Self, AlgebraError> {
        Self::from_vec(size, start_index, src.to_vec())
    }
}

impl<T> Default for Vector<T>
where
    T: ElementT,
{
    /// Zero-filled vector of size 10 starting at index 0
    fn default() -> Self {
        Self::from_parts(10, 0, vec![T::zero(); 10])
    }
}

impl<S, T> OffsetStorageVector<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: ElementT,
{
    /// Set all elements to the same value
    pub fn fill(&mut self, c: T) -> &mut Self {
        self.data_mut().set(c);
        self
    }

    /// Elementwise translation in place
    pub fn translate(&mut self, c: T) -> &mut Self {
        self.data_mut().translate(c);
        self
    }

    /// Elementwise scaling in place
    pub fn scale(&mut self, c: T) -> &mut Self {
        self.data_mut().scale(c);
        self
    }
}
