//! Aliases for mathematical types. This crate is 3-dimensional and `f64` only.

/// The scalar type used throughout this crate.
pub use f64 as Real;

/// The point type.
pub use na::Point3 as Point;

/// The vector type.
pub use na::Vector3 as Vector;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;
