//! Dense numeric containers: a fixed-length heap vector and a square matrix built from it.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod error;
pub mod matrix;
pub mod text;
pub mod typ;
pub mod vector;

pub use error::ContainerError;
pub use matrix::DynamicMatrix;
pub use text::Scanner;
pub use vector::DynamicVector;

/// Exclusive upper bound on the length of a [`DynamicVector`].
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Exclusive upper bound on the dimension of a [`DynamicMatrix`].
pub const MAX_MATRIX_SIZE: usize = 10_000;
