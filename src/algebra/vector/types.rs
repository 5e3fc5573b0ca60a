use crate::algebra::AlgebraError;
use std::ops::{Index, IndexMut, Range};

/// Offset-indexed vector over owned or borrowed storage.
///
/// Valid indices are `start_index..size`, and the backing storage holds
/// exactly `size - start_index` elements, with index `i` stored at
/// position `i - start_index`.
///
/// The concrete owned type is [`Vector`].  Borrowed variants are handed
/// out as views, e.g. for the rows of a [`Matrix`](crate::algebra::Matrix).
#[derive(Debug)]
pub struct OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
{
    pub(crate) size: usize,
    pub(crate) start_index: usize,
    pub(crate) data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Owned offset-indexed vector
pub type Vector<T> = OffsetStorageVector<Vec<T>, T>;
/// Read only view of an offset-indexed vector
pub type BorrowedVector<'a, T> = OffsetStorageVector<&'a [T], T>;
/// Mutable view of an offset-indexed vector
pub type BorrowedVectorMut<'a, T> = OffsetStorageVector<&'a mut [T], T>;

impl<S, T> OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
{
    /// Number of addressable slots, i.e. one past the last valid index
    pub fn size(&self) -> usize {
        self.size
    }

    /// First valid index
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// `(size, start_index)` pair
    pub fn shape(&self) -> (usize, usize) {
        (self.size, self.start_index)
    }

    /// Number of stored elements, `size - start_index`
    pub fn len(&self) -> usize {
        self.data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Range of valid indices
    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.size
    }

    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data().iter()
    }

    pub(crate) fn index_linear(&self, index: usize) -> Result<usize, AlgebraError> {
        if index < self.start_index || index >= self.size {
            return Err(AlgebraError::IndexOutOfRange {
                index,
                start_index: self.start_index,
                size: self.size,
            });
        }
        Ok(index - self.start_index)
    }

    /// Element at `index`, or `IndexOutOfRange` unless
    /// `start_index <= index < size`.
    pub fn get(&self, index: usize) -> Result<&T, AlgebraError> {
        let lidx = self.index_linear(index)?;
        Ok(&self.data()[lidx])
    }

    /// Read only view of this vector
    pub fn as_borrowed(&self) -> BorrowedVector<'_, T> {
        BorrowedVector::from_parts(self.size, self.start_index, self.data())
    }

    /// Deep copy into a new owned vector of the same shape
    pub fn to_owned_vector(&self) -> Vector<T>
    where
        T: Clone,
    {
        Vector::from_parts(self.size, self.start_index, self.data().to_vec())
    }
}

impl<S, T> OffsetStorageVector<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    /// Mutable element at `index`, or `IndexOutOfRange` unless
    /// `start_index <= index < size`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, AlgebraError> {
        let lidx = self.index_linear(index)?;
        Ok(&mut self.data_mut()[lidx])
    }

    /// Mutable view of this vector
    pub fn as_borrowed_mut(&mut self) -> BorrowedVectorMut<'_, T> {
        let (size, start_index) = self.shape();
        BorrowedVectorMut::from_parts(size, start_index, self.data_mut())
    }
}

// ------------------------------------------------
// equality compares shape, then contents.  Storage kinds
// may be mixed, so a row view compares equal to an owned
// copy of itself.

impl<S1, S2, T> PartialEq<OffsetStorageVector<S2, T>> for OffsetStorageVector<S1, T>
where
    S1: AsRef<[T]>,
    S2: AsRef<[T]>,
    T: PartialEq,
{
    fn eq(&self, other: &OffsetStorageVector<S2, T>) -> bool {
        self.shape() == other.shape() && self.data() == other.data()
    }
}

impl<S, T> Eq for OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
    T: Eq,
{
}

impl<T> Clone for Vector<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self::from_parts(self.size, self.start_index, self.data.clone())
    }

    // reuses the existing allocation where possible
    fn clone_from(&mut self, source: &Self) {
        if self.shape() != source.shape() {
            log::debug!(
                "reshaping vector from {:?} to {:?}",
                self.shape(),
                source.shape()
            );
        }
        self.size = source.size;
        self.start_index = source.start_index;
        self.data.clone_from(&source.data);
    }
}

impl<S, T> Index<usize> for OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<S, T> IndexMut<usize> for OffsetStorageVector<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, S, T> IntoIterator for &'a OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
