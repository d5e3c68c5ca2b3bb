//! Geometric primitives manipulated by the clipping queries.

pub use self::half_plane::HalfPlane;
pub use self::tetrahedron::Tetrahedron;

mod half_plane;
mod tetrahedron;
