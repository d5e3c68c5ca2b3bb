//! Half-plane primitive used by the clipping queries.

use crate::math::{Point, Real, Vector};

/// A half-space delimited by a plane with normal `normal` and offset `offset`.
///
/// The plane is the set of points `p` such that `normal · p == offset`. A
/// point lies on the inner side of the half-plane when its signed distance
/// `normal · p - offset` is non-positive; with outward face normals this makes
/// the interior of a tetrahedron the intersection of the inner sides of its
/// four face planes.
///
/// The normal is stored as a plain vector rather than a `Unit` one: half-planes
/// built from a degenerate (zero-area) tetrahedron face keep their damped,
/// near-zero normal instead of failing normalization.
#[derive(PartialEq, Debug, Clone, Copy)]
#[repr(C)]
pub struct HalfPlane {
    /// The boundary plane's normal, pointing away from the inner side.
    pub normal: Vector<Real>,
    /// The plane offset, i.e. `normal · p` for any point `p` on the boundary plane.
    pub offset: Real,
}

impl HalfPlane {
    /// Builds a new half-plane from its outward normal and its offset.
    #[inline]
    pub fn new(normal: Vector<Real>, offset: Real) -> HalfPlane {
        HalfPlane { normal, offset }
    }

    /// The signed distance from `pt` to the boundary plane.
    ///
    /// Negative on the inner side, positive on the outer side. This is an
    /// actual distance only if `self.normal` is a unit vector.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// Tests whether `pt` lies on the inner side of this half-plane or on its
    /// boundary plane.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.signed_distance(pt) <= 0.0
    }
}

#[cfg(test)]
mod test {
    use super::HalfPlane;
    use na::{Point3, Vector3};

    #[test]
    fn signed_distance_and_containment() {
        let plane = HalfPlane::new(Vector3::x(), 1.0);

        assert!(relative_eq!(
            plane.signed_distance(&Point3::new(3.0, -2.0, 5.0)),
            2.0
        ));
        assert!(plane.contains_point(&Point3::new(0.5, 10.0, -4.0)));
        assert!(plane.contains_point(&Point3::new(1.0, 0.0, 0.0)));
        assert!(!plane.contains_point(&Point3::new(1.5, 0.0, 0.0)));
    }
}
