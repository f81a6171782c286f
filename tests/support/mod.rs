//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use goldberg::{Breakdown, Polyhedron, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Asserts the face, edge and vertex counts of an icosahedral geodesic with
/// the given breakdown.
pub fn assert_geodesic_counts(poly: &Polyhedron, breakdown: Breakdown) {
    assert_eq!(
        poly.faces().len(),
        breakdown.geodesic_face_count(),
        "Wrong number of faces for {breakdown}"
    );
    assert_eq!(
        poly.edges().len(),
        breakdown.geodesic_edge_count(),
        "Wrong number of edges for {breakdown}"
    );
    assert_eq!(
        poly.vertices().len(),
        breakdown.geodesic_vertex_count(),
        "Wrong number of vertices for {breakdown}"
    );
}

/// Asserts the face, edge and vertex counts of a Goldberg polyhedron with
/// the given breakdown.
pub fn assert_goldberg_counts(poly: &Polyhedron, breakdown: Breakdown) {
    assert_eq!(
        poly.faces().len(),
        breakdown.goldberg_face_count(),
        "Wrong number of faces for {breakdown}"
    );
    assert_eq!(
        poly.edges().len(),
        breakdown.goldberg_edge_count(),
        "Wrong number of edges for {breakdown}"
    );
    assert_eq!(
        poly.vertices().len(),
        breakdown.goldberg_vertex_count(),
        "Wrong number of vertices for {breakdown}"
    );
}

/// Every face, taken as a fan from its first vertex, has a normal pointing
/// away from the origin.
pub fn faces_point_outward(poly: &Polyhedron) -> bool {
    poly.faces().iter().all(|face| {
        let Ok(center) = poly.face_center(face) else {
            return false;
        };
        let Ok(p) = face
            .vertices()
            .iter()
            .map(|&v| poly.vertex_position(v))
            .collect::<Result<Vec<_>, _>>()
        else {
            return false;
        };
        let normal = (p[1] - p[0]).cross(&(p[2] - p[0]));
        normal.dot(&center.coords) > 0.0
    })
}

/// Snapshot of counts, used to check that failed operations do not mutate
pub fn counts(poly: &Polyhedron) -> (usize, usize, usize) {
    (poly.faces().len(), poly.edges().len(), poly.vertices().len())
}
