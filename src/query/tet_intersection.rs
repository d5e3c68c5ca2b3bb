//! Intersection of a subject tetrahedron with a fixed clipping tetrahedron.

use std::mem;

use crate::math::{Real, Vector};
use crate::query::{HalfPlaneSplitter, SplitAndDecompose};
use crate::shape::{HalfPlane, Tetrahedron};

// Keeps the face-normal normalization finite for zero-area faces.
const TINY: Real = 1.0e-300;

/// Computes intersections of subject tetrahedra against a fixed clipping
/// tetrahedron.
///
/// The four half-planes bounding the clipping tetrahedron are computed once at
/// construction, and amortized over any number of [`Self::evaluate`] calls.
/// Each call clips one subject tetrahedron against the four half-planes in
/// turn and keeps the resulting tetrahedral decomposition of the intersection,
/// which remains accessible through [`Self::intersection`] until the next
/// call.
///
/// This type borrows the clipping tetrahedron and owns mutable scratch state,
/// so it is deliberately neither `Clone` nor `Copy`; build one instance per
/// thread when processing subject tetrahedra in parallel.
pub struct TetIntersection<'a, S = HalfPlaneSplitter> {
    /// The clipping tetrahedron.
    clip_tet: &'a Tetrahedron,
    /// Outward half-planes of the clipping tetrahedron's faces.
    clip_planes: [HalfPlane; 4],
    /// Volume of the clipping tetrahedron. Always non-negative.
    clip_volume: Real,
    /// The single-tetrahedron/single-plane clipping primitive.
    splitter: S,
    /// Tetrahedra kept by the current clipping pass.
    inside: Vec<Tetrahedron>,
    /// Tetrahedra surviving all clipping passes applied so far.
    all_tets: Vec<Tetrahedron>,
}

impl<'a> TetIntersection<'a> {
    /// Creates an intersection context for the given clipping tetrahedron,
    /// with the default [`HalfPlaneSplitter`].
    pub fn new(clip_tet: &'a Tetrahedron) -> Self {
        Self::with_splitter(clip_tet, HalfPlaneSplitter::default())
    }
}

impl<'a, S: SplitAndDecompose> TetIntersection<'a, S> {
    /// Creates an intersection context clipping with the given splitter.
    pub fn with_splitter(clip_tet: &'a Tetrahedron, splitter: S) -> Self {
        let (clip_planes, clip_volume) = compute_clip_planes(clip_tet);

        if clip_volume < crate::math::DEFAULT_EPSILON {
            log::debug!(
                "Clipping tetrahedron is degenerate (volume = {}); intersection results will be unreliable.",
                clip_volume
            );
        }

        TetIntersection {
            clip_tet,
            clip_planes,
            clip_volume,
            splitter,
            inside: Vec::with_capacity(10),
            all_tets: Vec::with_capacity(10),
        }
    }

    /// The clipping tetrahedron this context was built from.
    #[inline]
    pub fn clip_tet(&self) -> &Tetrahedron {
        self.clip_tet
    }

    /// The outward half-planes of the clipping tetrahedron's faces.
    #[inline]
    pub fn clip_planes(&self) -> &[HalfPlane; 4] {
        &self.clip_planes
    }

    /// The volume of the clipping tetrahedron. Always non-negative, whatever
    /// the winding of the vertices it was built from.
    #[inline]
    pub fn clip_volume(&self) -> Real {
        self.clip_volume
    }

    /// Clips `subject` against the four half-planes of the clipping
    /// tetrahedron, and returns `true` iff the intersection is non-empty.
    ///
    /// The resulting decomposition is read through [`Self::intersection`]; any
    /// previous result is discarded.
    pub fn evaluate(&mut self, subject: &Tetrahedron) -> bool {
        self.inside.clear();
        self.all_tets.clear();

        self.all_tets.push(*subject);

        for plane in &self.clip_planes {
            for tet in &self.all_tets {
                self.splitter.split_and_decompose(plane, tet, &mut self.inside);
            }

            // The survivors of this pass feed the next one.
            mem::swap(&mut self.all_tets, &mut self.inside);
            self.inside.clear();

            if self.all_tets.is_empty() {
                break;
            }
        }

        !self.all_tets.is_empty()
    }

    /// The tetrahedral decomposition of the intersection computed by the last
    /// [`Self::evaluate`] call.
    ///
    /// The returned slice is overwritten by the next `evaluate` call.
    #[inline]
    pub fn intersection(&self) -> &[Tetrahedron] {
        &self.all_tets
    }
}

/// Computes the four outward half-planes of a tetrahedron's faces, and its
/// volume.
///
/// The raw face normals are damped by a tiny epsilon during normalization so
/// zero-area faces yield a near-zero normal instead of a division by zero. If
/// the vertex winding gives a negative signed volume, all four normals are
/// flipped together so the planes face outward regardless of winding, and the
/// returned volume is the (non-negative) magnitude.
fn compute_clip_planes(tet: &Tetrahedron) -> ([HalfPlane; 4], Real) {
    let edge10 = tet.b - tet.a;
    let edge20 = tet.c - tet.a;
    let edge30 = tet.d - tet.a;
    let edge21 = tet.c - tet.b;
    let edge31 = tet.d - tet.b;

    // One normal per face, each opposite the vertex its plane is not anchored
    // on. The cross-product argument order fixes the initial orientation.
    let mut normals: [Vector<Real>; 4] = [
        edge20.cross(&edge10),
        edge10.cross(&edge30),
        edge30.cross(&edge20),
        edge21.cross(&edge31),
    ];

    // The signed volume comes from the raw normal, before normalization
    // scales the area factor away.
    let mut volume = edge10.dot(&normals[3]) / 6.0;

    for normal in &mut normals {
        *normal /= normal.norm() + TINY;
    }

    if volume < 0.0 {
        // Reversed winding: flip the whole set of normals back outward.
        for normal in &mut normals {
            *normal = -*normal;
        }

        volume = -volume;
    }

    // Each plane is anchored on one vertex known to lie on it.
    let anchors = tet.vertices();
    let planes = [
        HalfPlane::new(normals[0], normals[0].dot(&anchors[0].coords)),
        HalfPlane::new(normals[1], normals[1].dot(&anchors[1].coords)),
        HalfPlane::new(normals[2], normals[2].dot(&anchors[2].coords)),
        HalfPlane::new(normals[3], normals[3].dot(&anchors[3].coords)),
    ];

    (planes, volume)
}
