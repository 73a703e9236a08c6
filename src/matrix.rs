//! A square matrix stored as an owned vector of owned rows.

use std::{fmt, mem, ops, slice, str::FromStr};

use rand::Rng;
use rand_distr::Distribution;

use crate::{
    error::ContainerError,
    text::Scanner,
    typ::Num,
    vector::{check_size, DynamicVector},
    MAX_MATRIX_SIZE,
};

/// A `dimension`×`dimension` matrix.
///
/// Every row is a [`DynamicVector`] of length `dimension`, and the rows themselves live in a
/// `DynamicVector`. Cloning deep-copies every row; moving (or [`take`]) hands over the row
/// container without touching the rows.
///
/// Row access hands out a read-only [`DynamicVector`] ([`row`]) or a mutable slice
/// ([`row_mut`], `m[i]`), so the length of a row can never drift from the dimension.
///
/// As with [`DynamicVector`], operators taking the matrix by value work in place: `m * 2`
/// scales `m`'s own rows and returns them. Products against matrices and vectors always
/// allocate their result.
///
/// [`take`]: DynamicMatrix::take
/// [`row`]: DynamicMatrix::row
/// [`row_mut`]: DynamicMatrix::row_mut
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicMatrix<T> {
    rows: DynamicVector<DynamicVector<T>>,
}

impl<T> DynamicMatrix<T> {
    /// Create a matrix where the element at row `i` and column `j` is `f(i, j)`.
    pub fn from_fn<F>(dimension: usize, mut f: F) -> Result<Self, ContainerError>
    where
        F: FnMut(usize, usize) -> T,
    {
        check_size(dimension, MAX_MATRIX_SIZE)?;
        log::trace!("allocating {0}x{0} matrix", dimension);
        let mut rows = Vec::with_capacity(dimension);
        for i in 0..dimension {
            rows.push(DynamicVector::from_fn(dimension, |j| f(i, j))?);
        }
        Ok(Self {
            rows: DynamicVector::try_from(rows)?,
        })
    }

    /// Create a matrix from its rows.
    ///
    /// Every row must have as many elements as there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ContainerError> {
        let dimension = rows.len();
        check_size(dimension, MAX_MATRIX_SIZE)?;
        if let Some(row) = rows.iter().find(|row| row.len() != dimension) {
            return Err(ContainerError::DimensionMismatch(dimension, row.len()));
        }
        let rows = rows
            .into_iter()
            .map(DynamicVector::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: DynamicVector::try_from(rows)?,
        })
    }

    /// Create a matrix with every element sampled from `distribution`.
    pub fn random<R, D>(
        dimension: usize,
        rng: &mut R,
        distribution: D,
    ) -> Result<Self, ContainerError>
    where
        R: Rng + ?Sized,
        D: Distribution<T>,
    {
        Self::from_fn(dimension, |_, _| distribution.sample(rng))
    }

    /// Return the number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Return the row at `index`.
    pub fn row(&self, index: usize) -> Result<&DynamicVector<T>, ContainerError> {
        self.rows.at(index)
    }

    /// Return the elements of the row at `index` for in-place writes.
    pub fn row_mut(&mut self, index: usize) -> Result<&mut [T], ContainerError> {
        Ok(self.rows.at_mut(index)?.as_mut_slice())
    }

    /// Return a reference to the element at row `i` and column `j`.
    pub fn at(&self, i: usize, j: usize) -> Result<&T, ContainerError> {
        self.rows.at(i)?.at(j)
    }

    /// Return a mutable reference to the element at row `i` and column `j`.
    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut T, ContainerError> {
        self.rows.at_mut(i)?.at_mut(j)
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> slice::Iter<'_, DynamicVector<T>> {
        self.rows.iter()
    }

    /// Exchange the contents of two matrices without copying any row.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.rows, &mut other.rows);
    }

    /// Move the rows out into a new matrix, leaving `self` with no rows.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            rows: self.rows.take(),
        }
    }

    fn check_same_size(&self, other: usize) -> Result<(), ContainerError> {
        if self.size() != other {
            return Err(ContainerError::DimensionMismatch(self.size(), other));
        }
        Ok(())
    }
}

impl<T> DynamicMatrix<T>
where
    T: Num,
{
    /// Create a matrix of zeros.
    pub fn new(dimension: usize) -> Result<Self, ContainerError> {
        Self::from_fn(dimension, |_, _| T::zero())
    }

    /// Create an identity matrix.
    pub fn identity(dimension: usize) -> Result<Self, ContainerError> {
        Self::from_fn(dimension, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Multiply every element by `value` in place.
    pub fn scale(&mut self, value: T) -> &mut Self {
        for row in self.rows.iter_mut() {
            row.mul_scalar(value.clone());
        }
        self
    }

    /// Add `other` to `self`, row by row and in place.
    pub fn add_matrix(&mut self, other: &Self) -> Result<&mut Self, ContainerError> {
        self.check_same_size(other.size())?;
        for (row, other_row) in self.rows.iter_mut().zip(other.rows()) {
            row.add_vector(other_row)?;
        }
        Ok(self)
    }

    /// Subtract `other` from `self`, row by row and in place.
    pub fn sub_matrix(&mut self, other: &Self) -> Result<&mut Self, ContainerError> {
        self.check_same_size(other.size())?;
        for (row, other_row) in self.rows.iter_mut().zip(other.rows()) {
            row.sub_vector(other_row)?;
        }
        Ok(self)
    }

    /// Multiply `self` by the column vector `v`.
    pub fn mul_vector(&self, v: &DynamicVector<T>) -> Result<DynamicVector<T>, ContainerError> {
        self.check_same_size(v.len())?;
        let rows = self.rows.as_slice();
        DynamicVector::from_fn(self.size(), |i| {
            let mut sum = T::zero();
            for (x, y) in rows[i].iter().zip(v.iter()) {
                sum += x.clone() * y.clone();
            }
            sum
        })
    }

    /// Matrix product of `self` and `other`.
    ///
    /// This is the plain O(n³) triple loop.
    pub fn matmul(&self, other: &Self) -> Result<Self, ContainerError> {
        self.check_same_size(other.size())?;
        log::debug!("multiplying {0}x{0} matrices", self.size());
        let lhs = self.rows.as_slice();
        let rhs = other.rows.as_slice();
        Self::from_fn(self.size(), |i, j| {
            let mut sum = T::zero();
            for (k, x) in lhs[i].iter().enumerate() {
                sum += x.clone() * rhs[k].as_slice()[j].clone();
            }
            sum
        })
    }
}

impl<T> DynamicMatrix<T>
where
    T: Num + FromStr,
    T::Err: fmt::Display,
{
    /// Create a matrix of the given dimension read from whitespace-separated text in row-major
    /// order.
    pub fn parse(dimension: usize, input: &str) -> Result<Self, ContainerError> {
        let mut m = Self::new(dimension)?;
        m.read_from(&mut Scanner::new(input))?;
        Ok(m)
    }
}

impl<T> DynamicMatrix<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Overwrite every element, row by row, with the next `size()²` tokens of `scanner`.
    pub fn read_from(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ContainerError> {
        let dimension = self.size();
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.read_from(scanner).map_err(|err| match err {
                ContainerError::UnexpectedEnd { found, .. } => ContainerError::UnexpectedEnd {
                    expected: dimension * dimension,
                    found: i * dimension + found,
                },
                err => err,
            })?;
        }
        Ok(())
    }
}

/// A 1×1 matrix holding the default (zero) element.
impl<T> Default for DynamicMatrix<T>
where
    T: Default,
{
    fn default() -> Self {
        Self {
            rows: DynamicVector::default(),
        }
    }
}

impl<T> ops::Index<usize> for DynamicMatrix<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        self.rows[index].as_slice()
    }
}

impl<T> ops::IndexMut<usize> for DynamicMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.rows[index].as_mut_slice()
    }
}

impl<T> ops::Index<(usize, usize)> for DynamicMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        self.at(i, j).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<T> ops::IndexMut<(usize, usize)> for DynamicMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        self.at_mut(i, j).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<T> fmt::Display for DynamicMatrix<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl<T: Num> ops::Mul<T> for DynamicMatrix<T> {
    type Output = Self;

    fn mul(mut self, value: T) -> Self::Output {
        self.scale(value);
        self
    }
}

impl<T: Num> ops::Mul<T> for &DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn mul(self, value: T) -> Self::Output {
        self.clone() * value
    }
}

impl<T: Num> ops::MulAssign<T> for DynamicMatrix<T> {
    fn mul_assign(&mut self, value: T) {
        self.scale(value);
    }
}

impl<T: Num> ops::Mul<&DynamicVector<T>> for &DynamicMatrix<T> {
    type Output = DynamicVector<T>;

    fn mul(self, v: &DynamicVector<T>) -> Self::Output {
        self.mul_vector(v).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<T: Num> ops::Mul<&DynamicMatrix<T>> for &DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn mul(self, other: &DynamicMatrix<T>) -> Self::Output {
        self.matmul(other).unwrap_or_else(|err| panic!("{}", err))
    }
}

macro_rules! matrix_op {
    ($op:ident, $fn:ident, $assign:ident, $assign_fn:ident, $method:ident) => {
        impl<T: Num> ops::$op<&DynamicMatrix<T>> for DynamicMatrix<T> {
            type Output = Self;

            fn $fn(mut self, other: &DynamicMatrix<T>) -> Self::Output {
                if let Err(err) = self.$method(other) {
                    panic!("{}", err);
                }
                self
            }
        }

        impl<T: Num> ops::$op<&DynamicMatrix<T>> for &DynamicMatrix<T> {
            type Output = DynamicMatrix<T>;

            fn $fn(self, other: &DynamicMatrix<T>) -> Self::Output {
                ops::$op::$fn(self.clone(), other)
            }
        }

        impl<T: Num> ops::$assign<&DynamicMatrix<T>> for DynamicMatrix<T> {
            fn $assign_fn(&mut self, other: &DynamicMatrix<T>) {
                if let Err(err) = self.$method(other) {
                    panic!("{}", err);
                }
            }
        }
    };
}

matrix_op!(Add, add, AddAssign, add_assign, add_matrix);
matrix_op!(Sub, sub, SubAssign, sub_assign, sub_matrix);
