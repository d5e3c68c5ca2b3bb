/*!
tetclip
=======

**tetclip** computes the intersection of two tetrahedra as a set of
tetrahedra, by successively clipping a subject tetrahedron against the four
half-planes bounding a fixed clipping tetrahedron.

The intersection of two tetrahedra is a convex polyhedron with up to eight
faces. Downstream consumers (volume integration, moment computation) want
tetrahedra, so the result is returned re-decomposed into a small list of
tetrahedra rather than as a polyhedron.

# Example
```rust
use tetclip::na::Point3;
use tetclip::query::TetIntersection;
use tetclip::shape::Tetrahedron;

let clip = Tetrahedron::new(
    Point3::origin(),
    Point3::new(1.0, 0.0, 0.0),
    Point3::new(0.0, 1.0, 0.0),
    Point3::new(0.0, 0.0, 1.0),
);
let subject = Tetrahedron::new(
    Point3::new(0.1, 0.1, 0.1),
    Point3::new(0.9, 0.1, 0.1),
    Point3::new(0.1, 0.9, 0.1),
    Point3::new(0.1, 0.1, 0.9),
);

let mut intersection = TetIntersection::new(&clip);
if intersection.evaluate(&subject) {
    let total: f64 = intersection.intersection().iter().map(|t| t.volume()).sum();
    assert!(total > 0.0);
}
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod shape;
