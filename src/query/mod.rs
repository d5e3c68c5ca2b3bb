//! Tetrahedron clipping queries.

pub use self::split_and_decompose::{HalfPlaneSplitter, SplitAndDecompose};
pub use self::tet_intersection::TetIntersection;

mod split_and_decompose;
mod tet_intersection;
