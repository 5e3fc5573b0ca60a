use crate::algebra::*;
use itertools::izip;
use std::iter::zip;
use std::ops::{Add, Mul, Sub};

// All elementwise arithmetic on vector and matrix storage goes
// through this trait, implemented on slices of ElementT.

pub(crate) trait VectorMath {
    type T;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Apply an elementwise operation to `v` and assign the
    /// results to `self`.
    fn scalarop_from(&mut self, op: impl Fn(Self::T) -> Self::T, v: &Self) -> &mut Self;

    /// Apply an elementwise binary operation to `x` and `y` and
    /// assign the results to `self`.
    fn binop_from(
        &mut self,
        op: impl Fn(Self::T, Self::T) -> Self::T,
        x: &Self,
        y: &Self,
    ) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise translation.
    fn translate(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Dot product, accumulated from zero
    fn dot(&self, y: &Self) -> Self::T;
}

impl<T: ElementT> VectorMath for [T] {
    type T = T;

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scalarop_from(&mut self, op: impl Fn(T) -> T, v: &[T]) -> &mut Self {
        assert_eq!(self.len(), v.len());
        for (x, v) in zip(&mut *self, v) {
            *x = op(*v);
        }
        self
    }

    fn binop_from(&mut self, op: impl Fn(T, T) -> T, x: &[T], y: &[T]) -> &mut Self {
        assert_eq!(self.len(), x.len());
        assert_eq!(self.len(), y.len());
        for (w, &x, &y) in izip!(&mut *self, x, y) {
            *w = op(x, y);
        }
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn translate(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x + c)
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn dot(&self, y: &[T]) -> T {
        let mut out = T::zero();
        for (&x, &y) in zip(self, y) {
            out += x * y;
        }
        out
    }
}

// ------------------------------------------------
// vector / vector operations

impl<S, T> OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
    T: ElementT,
{
    fn map_scalar(&self, op: impl Fn(T) -> T) -> Vector<T> {
        let mut data = vec![T::zero(); self.len()];
        data.scalarop_from(op, self.data());
        Vector::from_parts(self.size, self.start_index, data)
    }

    // Pairs every element of `self` with the element of `other` at the
    // same index.  Indices that `other` does not address pair with zero.
    fn aligned_with<'a, S2>(
        &'a self,
        other: &'a OffsetStorageVector<S2, T>,
    ) -> impl Iterator<Item = (T, T)> + 'a
    where
        S2: AsRef<[T]>,
    {
        zip(self.indices(), self.iter()).map(move |(i, &x)| {
            let y = other.get(i).map_or(T::zero(), |&y| y);
            (x, y)
        })
    }

    /// Elementwise sum.
    ///
    /// Fails with `ShapeMismatch` unless both `size` and `start_index`
    /// agree.
    pub fn try_add<S2>(&self, other: &OffsetStorageVector<S2, T>) -> Result<Vector<T>, AlgebraError>
    where
        S2: AsRef<[T]>,
    {
        if self.shape() != other.shape() {
            return Err(AlgebraError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut data = vec![T::zero(); self.len()];
        data.binop_from(|x, y| x + y, self.data(), other.data());
        Ok(Vector::from_parts(self.size, self.start_index, data))
    }

    /// Elementwise difference over the index range of `self`.
    ///
    /// Only `size` is required to agree.  The result takes the
    /// `start_index` of `self`, and any index of `self` that `other` does
    /// not address is treated as zero in `other`.
    pub fn try_sub<S2>(&self, other: &OffsetStorageVector<S2, T>) -> Result<Vector<T>, AlgebraError>
    where
        S2: AsRef<[T]>,
    {
        if self.size != other.size {
            return Err(AlgebraError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let data = self.aligned_with(other).map(|(x, y)| x - y).collect();
        Ok(Vector::from_parts(self.size, self.start_index, data))
    }

    /// Sum of elementwise products over the index range of `self`.
    ///
    /// Only `size` is required to agree, with the same alignment rule as
    /// [`try_sub`](OffsetStorageVector::try_sub).
    pub fn dot<S2>(&self, other: &OffsetStorageVector<S2, T>) -> Result<T, AlgebraError>
    where
        S2: AsRef<[T]>,
    {
        if self.size != other.size {
            return Err(AlgebraError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        if self.start_index == other.start_index {
            return Ok(self.data().dot(other.data()));
        }
        let mut out = T::zero();
        for (x, y) in self.aligned_with(other) {
            out += x * y;
        }
        Ok(out)
    }
}

// ------------------------------------------------
// scalar operators.  By reference these produce a new vector,
// by value they update the storage in place.

macro_rules! impl_scalar_op {
    ($Op:ident, $op:ident, $sym:tt) => {
        impl<S, T> $Op<T> for &OffsetStorageVector<S, T>
        where
            S: AsRef<[T]>,
            T: ElementT,
        {
            type Output = Vector<T>;
            fn $op(self, c: T) -> Vector<T> {
                self.map_scalar(|x| x $sym c)
            }
        }

        impl<T> $Op<T> for Vector<T>
        where
            T: ElementT,
        {
            type Output = Vector<T>;
            fn $op(mut self, c: T) -> Vector<T> {
                self.data.scalarop(|x| x $sym c);
                self
            }
        }
    };
}

impl_scalar_op!(Add, add, +);
impl_scalar_op!(Sub, sub, -);
impl_scalar_op!(Mul, mul, *);

// ------------------------------------------------
// fallible vector operators, for use as `(&a + &b)?`

impl<S1, S2, T> Add<&OffsetStorageVector<S2, T>> for &OffsetStorageVector<S1, T>
where
    S1: AsRef<[T]>,
    S2: AsRef<[T]>,
    T: ElementT,
{
    type Output = Result<Vector<T>, AlgebraError>;
    fn add(self, other: &OffsetStorageVector<S2, T>) -> Self::Output {
        self.try_add(other)
    }
}

impl<S1, S2, T> Sub<&OffsetStorageVector<S2, T>> for &OffsetStorageVector<S1, T>
where
    S1: AsRef<[T]>,
    S2: AsRef<[T]>,
    T: ElementT,
{
    type Output = Result<Vector<T>, AlgebraError>;
    fn sub(self, other: &OffsetStorageVector<S2, T>) -> Self::Output {
        self.try_sub(other)
    }
}

impl<S1, S2, T> Mul<&OffsetStorageVector<S2, T>> for &OffsetStorageVector<S1, T>
where
    S1: AsRef<[T]>,
    S2: AsRef<[T]>,
    T: ElementT,
{
    type Output = Result<T, AlgebraError>;
    fn mul(self, other: &OffsetStorageVector<S2, T>) -> Self::Output {
        self.dot(other)
    }
}
