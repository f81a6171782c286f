use goldberg::float_types::{Real, tolerance};
use goldberg::{Geodesic, GoldbergPolyhedron};

mod support;

use crate::support::approx_eq;

#[test]
fn geodesic_construction_is_repeatable() {
    let a = Geodesic::icosahedral().subdivided(2, 0).unwrap();
    let b = Geodesic::icosahedral().subdivided(2, 0).unwrap();
    assert_eq!(a.polyhedron().vertices(), b.polyhedron().vertices());
    assert_eq!(a.polyhedron().edges(), b.polyhedron().edges());
    assert_eq!(a.polyhedron().faces(), b.polyhedron().faces());
}

#[test]
fn goldberg_vertex_order_is_repeatable() {
    let first = GoldbergPolyhedron::icosahedral(1, 0).unwrap();
    let second = GoldbergPolyhedron::icosahedral(1, 0).unwrap();
    let (p, q) = (first.polyhedron(), second.polyhedron());
    for (&u, &v) in p.vertices().iter().zip(q.vertices()) {
        let d: Real = (p.vertex_position(u).unwrap() - q.vertex_position(v).unwrap()).norm();
        assert!(approx_eq(d, 0.0, tolerance()), "vertex {u} and {v} differ by {d}");
    }
}

#[test]
fn goldberg_edge_and_face_order_is_repeatable() {
    let first = GoldbergPolyhedron::icosahedral(2, 0).unwrap();
    let second = GoldbergPolyhedron::icosahedral(2, 0).unwrap();
    assert_eq!(first.polyhedron().edges(), second.polyhedron().edges());
    assert_eq!(first.polyhedron().faces(), second.polyhedron().faces());
}
