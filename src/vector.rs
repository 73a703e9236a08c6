//! A fixed-length vector on the heap.

use std::{fmt, mem, ops, slice, str::FromStr};

use rand::Rng;
use rand_distr::Distribution;

use crate::{
    error::ContainerError,
    text::Scanner,
    typ::Num,
    MAX_VECTOR_SIZE,
};

/// A vector owning a contiguous block of elements whose length is fixed at construction.
///
/// Cloning deep-copies the block; the clone and the original never observe each other's
/// mutations. The only ways to change the length are whole-object assignment, [`swap`] and
/// [`take`].
///
/// Arithmetic operators taking the vector by value work in place: `v + 2` adds 2 to every
/// element of `v`'s own buffer and hands that same buffer back, so `v = v + 2` is the usual
/// way to write it. Operators on `&DynamicVector` clone the left operand first.
///
/// [`swap`]: DynamicVector::swap
/// [`take`]: DynamicVector::take
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicVector<T> {
    buffer: Box<[T]>,
}

/// Check that `size` lies in `1..max`.
pub(crate) fn check_size(size: usize, max: usize) -> Result<(), ContainerError> {
    if size == 0 || size >= max {
        log::debug!("rejected size {} (max {})", size, max);
        return Err(ContainerError::InvalidSize { size, max });
    }
    Ok(())
}

impl<T> DynamicVector<T> {
    /// Create a vector of `size` elements where the element at index `i` is `f(i)`.
    pub fn from_fn<F>(size: usize, f: F) -> Result<Self, ContainerError>
    where
        F: FnMut(usize) -> T,
    {
        check_size(size, MAX_VECTOR_SIZE)?;
        log::trace!("allocating vector of {} elements", size);
        Ok(Self {
            buffer: (0..size).map(f).collect(),
        })
    }

    /// Create a vector holding a copy of `data`.
    ///
    /// An empty `data` has nothing to copy from and is rejected with
    /// [`ContainerError::NullSource`].
    pub fn from_slice(data: &[T]) -> Result<Self, ContainerError>
    where
        T: Clone,
    {
        if data.is_empty() {
            return Err(ContainerError::NullSource);
        }
        check_size(data.len(), MAX_VECTOR_SIZE)?;
        Ok(Self {
            buffer: Box::from(data),
        })
    }

    /// Create a vector of `size` elements sampled from `distribution`.
    pub fn random<R, D>(size: usize, rng: &mut R, distribution: D) -> Result<Self, ContainerError>
    where
        R: Rng + ?Sized,
        D: Distribution<T>,
    {
        Self::from_fn(size, |_| distribution.sample(rng))
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Return true if the vector has been emptied by [`DynamicVector::take`].
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Return a reference to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.len();
        self.buffer
            .get(index)
            .ok_or(ContainerError::IndexOutOfRange { index, len })
    }

    /// Return a mutable reference to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.len();
        self.buffer
            .get_mut(index)
            .ok_or(ContainerError::IndexOutOfRange { index, len })
    }

    /// Exchange the contents of two vectors without copying any element.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buffer, &mut other.buffer);
    }

    /// Move the elements out into a new vector, leaving `self` empty.
    ///
    /// The emptied vector has length 0, so every index into it fails. It can still be dropped,
    /// assigned to, or swapped with.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            buffer: mem::take(&mut self.buffer),
        }
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// View the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.iter()
    }

    /// Iterate mutably over the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buffer.iter_mut()
    }

    /// Unwrap the elements into a [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.buffer.into_vec()
    }

    fn check_same_len(&self, other: &Self) -> Result<(), ContainerError> {
        if self.len() != other.len() {
            return Err(ContainerError::DimensionMismatch(self.len(), other.len()));
        }
        Ok(())
    }
}

impl<T> DynamicVector<T>
where
    T: Num,
{
    /// Create a vector of `size` zeros.
    pub fn new(size: usize) -> Result<Self, ContainerError> {
        Self::from_fn(size, |_| T::zero())
    }

    /// Add `value` to every element in place.
    pub fn add_scalar(&mut self, value: T) -> &mut Self {
        for x in self.iter_mut() {
            *x += value.clone();
        }
        self
    }

    /// Subtract `value` from every element in place.
    pub fn sub_scalar(&mut self, value: T) -> &mut Self {
        for x in self.iter_mut() {
            *x -= value.clone();
        }
        self
    }

    /// Multiply every element by `value` in place.
    pub fn mul_scalar(&mut self, value: T) -> &mut Self {
        for x in self.iter_mut() {
            *x *= value.clone();
        }
        self
    }

    /// Add `other` to `self`, element-wise and in place.
    ///
    /// Lengths are compared before anything is written, so on error `self` is untouched.
    pub fn add_vector(&mut self, other: &Self) -> Result<&mut Self, ContainerError> {
        self.check_same_len(other)?;
        for (x, y) in self.buffer.iter_mut().zip(other.iter()) {
            *x += y.clone();
        }
        Ok(self)
    }

    /// Subtract `other` from `self`, element-wise and in place.
    ///
    /// Lengths are compared before anything is written, so on error `self` is untouched.
    pub fn sub_vector(&mut self, other: &Self) -> Result<&mut Self, ContainerError> {
        self.check_same_len(other)?;
        for (x, y) in self.buffer.iter_mut().zip(other.iter()) {
            *x -= y.clone();
        }
        Ok(self)
    }

    /// Return the dot product of `self` and `other`.
    pub fn dot(&self, other: &Self) -> Result<T, ContainerError> {
        self.check_same_len(other)?;
        let mut sum = T::zero();
        for (x, y) in self.iter().zip(other.iter()) {
            sum += x.clone() * y.clone();
        }
        Ok(sum)
    }
}

impl<T> DynamicVector<T>
where
    T: Num + FromStr,
    T::Err: fmt::Display,
{
    /// Create a vector of `size` elements read from whitespace-separated text.
    pub fn parse(size: usize, input: &str) -> Result<Self, ContainerError> {
        let mut v = Self::new(size)?;
        v.read_from(&mut Scanner::new(input))?;
        Ok(v)
    }
}

impl<T> DynamicVector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Overwrite every element with the next `len()` tokens of `scanner`.
    pub fn read_from(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ContainerError> {
        scanner.fill(&mut self.buffer)
    }
}

/// A vector with a single default (zero) element.
impl<T> Default for DynamicVector<T>
where
    T: Default,
{
    fn default() -> Self {
        Self {
            buffer: Box::from([T::default()]),
        }
    }
}

impl<T> TryFrom<Vec<T>> for DynamicVector<T> {
    type Error = ContainerError;

    fn try_from(data: Vec<T>) -> Result<Self, Self::Error> {
        if data.is_empty() {
            return Err(ContainerError::NullSource);
        }
        check_size(data.len(), MAX_VECTOR_SIZE)?;
        Ok(Self {
            buffer: data.into_boxed_slice(),
        })
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> ops::Index<usize> for DynamicVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<T> ops::IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<T> fmt::Display for DynamicVector<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, x) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

macro_rules! scalar_op {
    ($op:ident, $fn:ident, $assign:ident, $assign_fn:ident, $method:ident) => {
        impl<T: Num> ops::$op<T> for DynamicVector<T> {
            type Output = Self;

            fn $fn(mut self, value: T) -> Self::Output {
                self.$method(value);
                self
            }
        }

        impl<T: Num> ops::$op<T> for &DynamicVector<T> {
            type Output = DynamicVector<T>;

            fn $fn(self, value: T) -> Self::Output {
                ops::$op::$fn(self.clone(), value)
            }
        }

        impl<T: Num> ops::$assign<T> for DynamicVector<T> {
            fn $assign_fn(&mut self, value: T) {
                self.$method(value);
            }
        }
    };
}

scalar_op!(Add, add, AddAssign, add_assign, add_scalar);
scalar_op!(Sub, sub, SubAssign, sub_assign, sub_scalar);
scalar_op!(Mul, mul, MulAssign, mul_assign, mul_scalar);

macro_rules! vector_op {
    ($op:ident, $fn:ident, $assign:ident, $assign_fn:ident, $method:ident) => {
        impl<T: Num> ops::$op<&DynamicVector<T>> for DynamicVector<T> {
            type Output = Self;

            fn $fn(mut self, other: &DynamicVector<T>) -> Self::Output {
                if let Err(err) = self.$method(other) {
                    panic!("{}", err);
                }
                self
            }
        }

        impl<T: Num> ops::$op<&DynamicVector<T>> for &DynamicVector<T> {
            type Output = DynamicVector<T>;

            fn $fn(self, other: &DynamicVector<T>) -> Self::Output {
                ops::$op::$fn(self.clone(), other)
            }
        }

        impl<T: Num> ops::$assign<&DynamicVector<T>> for DynamicVector<T> {
            fn $assign_fn(&mut self, other: &DynamicVector<T>) {
                if let Err(err) = self.$method(other) {
                    panic!("{}", err);
                }
            }
        }
    };
}

vector_op!(Add, add, AddAssign, add_assign, add_vector);
vector_op!(Sub, sub, SubAssign, sub_assign, sub_vector);

/// Dot product.
impl<T: Num> ops::Mul<&DynamicVector<T>> for &DynamicVector<T> {
    type Output = T;

    fn mul(self, other: &DynamicVector<T>) -> Self::Output {
        self.dot(other).unwrap_or_else(|err| panic!("{}", err))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use rand_distr::Uniform;

    use super::*;

    fn v(data: &[i32]) -> DynamicVector<i32> {
        DynamicVector::from_slice(data).unwrap()
    }

    #[test]
    fn new_is_zeroed() {
        let x = DynamicVector::<f64>::new(3).unwrap();
        assert_eq!(x.as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(DynamicVector::<i32>::default().as_slice(), &[0]);
    }

    #[test]
    fn size_bounds() {
        assert_eq!(
            DynamicVector::<i32>::new(0),
            Err(ContainerError::InvalidSize {
                size: 0,
                max: MAX_VECTOR_SIZE
            })
        );
        assert!(DynamicVector::<u8>::from_fn(MAX_VECTOR_SIZE, |_| 0).is_err());
        assert_eq!(
            DynamicVector::<i32>::from_slice(&[]),
            Err(ContainerError::NullSource)
        );
        assert_eq!(
            DynamicVector::<i32>::try_from(Vec::new()),
            Err(ContainerError::NullSource)
        );
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = v(&[1, 2, 3]);
        let b = a.take();
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert!(a.is_empty());
        assert_eq!(
            a.at(0),
            Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
        );
        a = b.clone();
        assert_eq!(a, b);
        assert_eq!(b.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn swap_exchanges_lengths() {
        let mut a = v(&[1, 2]);
        let mut b = v(&[3, 4, 5]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[3, 4, 5]);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn clone_from_resizes() {
        let mut a = v(&[1, 2, 3, 4]);
        let b = v(&[9, 8, 7, 6, 5]);
        a.clone_from(&b);
        assert_eq!(a.len(), 5);
        a[0] = 0;
        assert_eq!(b[0], 9);
    }

    #[test]
    fn borrowed_operators_leave_operand() {
        let a = v(&[1, 2, 3, 4]);
        let b = &a + 2;
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(b.as_slice(), &[3, 4, 5, 6]);
        let c = &a - &a;
        assert_eq!(c.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(&a * &a, 30);
    }

    #[test]
    fn assign_operators() {
        let mut a = v(&[1, 2, 3]);
        a += 1;
        a *= 3;
        a -= 2;
        assert_eq!(a.as_slice(), &[4, 7, 10]);
        a -= &v(&[4, 7, 10]);
        assert_eq!(a.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn mismatch_is_detected_before_mutation() {
        let mut a = v(&[1, 2, 3]);
        let b = v(&[1, 2]);
        assert_eq!(
            a.add_vector(&b).unwrap_err(),
            ContainerError::DimensionMismatch(3, 2)
        );
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "Index 4 is out of range for length 4.")]
    fn index_panics() {
        let a = v(&[1, 2, 3, 4]);
        let _ = a[4];
    }

    #[test]
    #[should_panic(expected = "Mismatched dimensions 2 and 3.")]
    fn operator_mismatch_panics() {
        let _ = v(&[1, 2]) + &v(&[1, 2, 3]);
    }

    #[test]
    fn display_and_parse() {
        let a = DynamicVector::<i64>::parse(3, "4 -5\n6").unwrap();
        assert_eq!(a.to_string(), "4 -5 6");
        assert!(DynamicVector::<i64>::parse(3, "4 5").is_err());
    }

    #[test]
    fn random_respects_distribution() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = DynamicVector::<i32>::random(64, &mut rng, Uniform::new(-3, 3)).unwrap();
        assert_eq!(a.len(), 64);
        assert!(a.iter().all(|x| (-3..3).contains(x)));
    }
}
