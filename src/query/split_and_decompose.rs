//! Clipping of a single tetrahedron against a single half-plane.

use crate::math::{Point, Real};
use crate::shape::{HalfPlane, Tetrahedron};

/// Clips one tetrahedron against one half-plane, appending the kept part to an
/// accumulator as zero or more tetrahedra.
///
/// Implementations append nothing if the tetrahedron lies entirely on the
/// outer side of the half-plane, the tetrahedron unchanged if it lies entirely
/// on the inner side, and a re-decomposed clipped fragment otherwise.
///
/// This is the seam [`crate::query::TetIntersection`] is generic over, so the
/// multi-pass clipping loop can be exercised independently of the geometric
/// clipping math.
pub trait SplitAndDecompose {
    /// Appends the part of `tet` on the inner side of `plane` to `out`.
    fn split_and_decompose(
        &self,
        plane: &HalfPlane,
        tet: &Tetrahedron,
        out: &mut Vec<Tetrahedron>,
    );
}

impl<S: SplitAndDecompose + ?Sized> SplitAndDecompose for &S {
    fn split_and_decompose(
        &self,
        plane: &HalfPlane,
        tet: &Tetrahedron,
        out: &mut Vec<Tetrahedron>,
    ) {
        (**self).split_and_decompose(plane, tet, out)
    }
}

/// The default [`SplitAndDecompose`] implementation, clipping exactly against
/// the half-plane boundary.
///
/// Vertices within `epsilon` of the boundary plane are treated as lying on the
/// inner side, so a subject tetrahedron sharing a face with the clipping
/// tetrahedron survives the pass for that face.
#[derive(Copy, Clone, Debug)]
pub struct HalfPlaneSplitter {
    /// Tolerance used to classify a vertex as lying on the boundary plane.
    pub epsilon: Real,
}

impl HalfPlaneSplitter {
    /// Creates a splitter classifying vertices against the plane with the
    /// given tolerance.
    pub fn new(epsilon: Real) -> Self {
        HalfPlaneSplitter { epsilon }
    }
}

impl Default for HalfPlaneSplitter {
    fn default() -> Self {
        HalfPlaneSplitter::new(1.0e-10)
    }
}

impl HalfPlaneSplitter {
    /// The point where the segment from an inner vertex `a` to an outer vertex
    /// `b` crosses the boundary plane, given their signed distances.
    fn edge_intersection(
        a: &Point<Real>,
        da: Real,
        b: &Point<Real>,
        db: Real,
    ) -> Point<Real> {
        let denom = da - db;

        if relative_eq!(denom, 0.0) {
            // The edge is (numerically) parallel to and on the plane.
            return *a;
        }

        let t = (da / denom).clamp(0.0, 1.0);
        a + (b - a) * t
    }

    /// Decomposes a solid with prism topology into three tetrahedra.
    ///
    /// `top` and `bot` are the two triangular faces, with `top[i]` matched to
    /// `bot[i]` along the prism sides.
    fn push_prism(top: [Point<Real>; 3], bot: [Point<Real>; 3], out: &mut Vec<Tetrahedron>) {
        out.push(Tetrahedron::new(top[0], top[1], top[2], bot[0]));
        out.push(Tetrahedron::new(top[1], top[2], bot[0], bot[1]));
        out.push(Tetrahedron::new(top[2], bot[0], bot[1], bot[2]));
    }
}

impl SplitAndDecompose for HalfPlaneSplitter {
    fn split_and_decompose(
        &self,
        plane: &HalfPlane,
        tet: &Tetrahedron,
        out: &mut Vec<Tetrahedron>,
    ) {
        let vtx = tet.vertices();

        let mut dist = [0.0; 4];
        let mut kept = [0usize; 4];
        let mut cut = [0usize; 4];
        let mut nkept = 0;
        let mut ncut = 0;

        for (i, pt) in vtx.iter().enumerate() {
            dist[i] = plane.signed_distance(pt);

            if dist[i] <= self.epsilon {
                kept[nkept] = i;
                nkept += 1;
            } else {
                cut[ncut] = i;
                ncut += 1;
            }
        }

        let x = |ik: usize, ic: usize| {
            Self::edge_intersection(&vtx[ik], dist[ik], &vtx[ic], dist[ic])
        };

        match nkept {
            0 => {}
            4 => out.push(*tet),
            1 => {
                // One corner survives: the kept piece is itself a tetrahedron.
                let k = kept[0];
                out.push(Tetrahedron::new(
                    vtx[k],
                    x(k, cut[0]),
                    x(k, cut[1]),
                    x(k, cut[2]),
                ));
            }
            2 => {
                // The kept piece is a wedge between the surviving edge and the
                // cut plane.
                let (k0, k1) = (kept[0], kept[1]);
                let (c0, c1) = (cut[0], cut[1]);
                Self::push_prism(
                    [vtx[k0], x(k0, c0), x(k0, c1)],
                    [vtx[k1], x(k1, c0), x(k1, c1)],
                    out,
                );
            }
            3 => {
                // One corner is truncated: the kept piece is the tetrahedron
                // minus a smaller tetrahedron at the cut corner.
                let c = cut[0];
                Self::push_prism(
                    [vtx[kept[0]], vtx[kept[1]], vtx[kept[2]]],
                    [x(kept[0], c), x(kept[1], c), x(kept[2], c)],
                    out,
                );
            }
            _ => unreachable!(),
        }
    }
}
