use approx::{assert_relative_eq, relative_eq};
use tetclip::na::Point3;
use tetclip::query::TetIntersection;
use tetclip::shape::{HalfPlane, Tetrahedron};

fn skewed_tet() -> Tetrahedron {
    Tetrahedron::new(
        Point3::new(0.2, -0.1, 0.3),
        Point3::new(1.4, 0.2, -0.2),
        Point3::new(0.1, 1.1, 0.4),
        Point3::new(-0.3, 0.2, 1.3),
    )
}

/// Checks that `lhs` and `rhs` are the same set of half-planes, in any order.
fn same_plane_set(lhs: &[HalfPlane; 4], rhs: &[HalfPlane; 4]) -> bool {
    lhs.iter().all(|l| {
        rhs.iter().any(|r| {
            relative_eq!(l.normal, r.normal, epsilon = 1.0e-9)
                && relative_eq!(l.offset, r.offset, epsilon = 1.0e-9)
        })
    })
}

#[test]
fn half_planes_are_invariant_under_vertex_permutation() {
    let tet = skewed_tet();
    let [a, b, c, d] = tet.vertices();

    let base = TetIntersection::new(&tet);

    // Even and odd permutations alike: the negative-volume flip canonicalizes
    // the orientation.
    let permuted = [
        Tetrahedron::new(b, a, c, d),
        Tetrahedron::new(b, c, a, d),
        Tetrahedron::new(d, c, b, a),
        Tetrahedron::new(c, d, a, b),
        Tetrahedron::new(a, b, d, c),
    ];

    for tet in &permuted {
        let other = TetIntersection::new(tet);

        assert_relative_eq!(other.clip_volume(), base.clip_volume(), epsilon = 1.0e-12);
        assert!(same_plane_set(other.clip_planes(), base.clip_planes()));
        assert!(same_plane_set(base.clip_planes(), other.clip_planes()));
    }
}

#[test]
fn interior_points_are_on_the_inner_side_of_every_plane() {
    let tet = skewed_tet();
    let inter = TetIntersection::new(&tet);

    let center = tet.center();
    for plane in inter.clip_planes() {
        assert!(plane.contains_point(&center));
        // The normal is outward, so stepping along it leaves the half-plane.
        assert!(!plane.contains_point(&(center + plane.normal * 10.0)));
    }

    // Every vertex lies on three face planes and strictly inside the fourth.
    for vtx in &tet.vertices() {
        for plane in inter.clip_planes() {
            assert!(plane.signed_distance(vtx) <= 1.0e-12);
        }
    }
}

#[test]
fn clip_volume_matches_tetrahedron_volume() {
    let tet = skewed_tet();
    let inter = TetIntersection::new(&tet);

    assert_relative_eq!(inter.clip_volume(), tet.volume(), epsilon = 1.0e-12);
}

#[test]
fn degenerate_clipping_tetrahedron_stays_finite() {
    // Three nearly collinear vertices: one face has near-zero area.
    let tet = Tetrahedron::new(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 1.0e-15, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    );

    let mut inter = TetIntersection::new(&tet);

    assert!(inter.clip_volume().is_finite());
    for plane in inter.clip_planes() {
        assert!(plane.normal.iter().all(|x| x.is_finite()));
        assert!(plane.offset.is_finite());
    }

    // Best-effort: the evaluation must complete with finite output, but its
    // numerical value is unreliable on degenerate input.
    let subject = Tetrahedron::new(
        Point3::new(0.1, -0.1, 0.1),
        Point3::new(1.1, 0.2, 0.0),
        Point3::new(0.4, 0.5, 0.2),
        Point3::new(0.2, 0.1, 0.8),
    );
    let _ = inter.evaluate(&subject);
    for tet in inter.intersection() {
        assert!(tet.volume().is_finite());
    }
}
