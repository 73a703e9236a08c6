//! Traits for types that can be used as elements in a vector or matrix.

use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

/// Container elements.
pub trait Elem: 'static + Clone + PartialEq + Debug {}

/// Numeric values.
///
/// [`num::Zero`] gives the value fresh elements start at and the start of every sum, while
/// [`num::One`] is only needed to build identity matrices.
pub trait Num:
    Elem
    + num::Zero
    + num::One
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
}

impl Elem for i32 {}
impl Elem for i64 {}
impl Elem for u32 {}
impl Elem for u64 {}
impl Elem for f32 {}
impl Elem for f64 {}

impl Num for i32 {}
impl Num for i64 {}
impl Num for u32 {}
impl Num for u64 {}
impl Num for f32 {}
impl Num for f64 {}
