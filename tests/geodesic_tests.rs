use approx::assert_relative_eq;
use goldberg::float_types::tolerance;
use goldberg::{Breakdown, Geodesic, MeshError, subdivide};

mod support;

use crate::support::{assert_geodesic_counts, counts, faces_point_outward};

#[test]
fn repeated_subdivision() {
    let mut geo = Geodesic::icosahedral();
    for k in 1..=3u32 {
        geo.subdivide(2, 0).unwrap();
        let breakdown = Breakdown::new(2u32.pow(k), 0);
        assert_eq!(geo.breakdown(), breakdown);
        assert_eq!(breakdown.t_number(), 4u32.pow(k));
        assert_geodesic_counts(geo.polyhedron(), breakdown);
        assert_eq!(geo.check_integrity(), Vec::new(), "after {k} subdivisions");
    }
}

#[test]
fn twelve_corners_keep_degree_five() {
    let geo = subdivide(&Geodesic::icosahedral(), 2, 0)
        .and_then(|g| subdivide(&g, 2, 0))
        .unwrap();
    let poly = geo.polyhedron();
    let fives = poly
        .vertices()
        .iter()
        .filter(|&&v| poly.vertex_degree(v) == 5)
        .count();
    let sixes = poly
        .vertices()
        .iter()
        .filter(|&&v| poly.vertex_degree(v) == 6)
        .count();
    assert_eq!(fives, 12);
    assert_eq!(fives + sixes, poly.vertices().len());
}

#[test]
fn subdivision_keeps_winding() {
    let geo = Geodesic::icosahedral().subdivided(2, 0).unwrap();
    let analysis = geo.polyhedron().analyze_manifold();
    assert!(analysis.is_manifold);
    assert!(analysis.consistent_orientation);
    assert_eq!(analysis.connected_components, 1);
    assert!(faces_point_outward(geo.polyhedron()));
}

#[test]
fn identity_breakdown_is_a_no_op() {
    let mut geo = Geodesic::icosahedral();
    geo.subdivide(2, 0).unwrap();
    let vertices = geo.polyhedron().vertices().to_vec();
    let edges = geo.polyhedron().edges().to_vec();
    let faces = geo.polyhedron().faces().to_vec();

    geo.subdivide(1, 0).unwrap();
    assert_eq!(geo.polyhedron().vertices(), vertices.as_slice());
    assert_eq!(geo.polyhedron().edges(), edges.as_slice());
    assert_eq!(geo.polyhedron().faces(), faces.as_slice());
    assert_eq!(geo.breakdown(), Breakdown::new(2, 0));
}

#[test]
fn unsupported_breakdowns_leave_mesh_unchanged() {
    let mut geo = Geodesic::icosahedral();
    let before = counts(geo.polyhedron());
    for (m, n) in [(1, 1), (2, 2), (5, 5), (2, 1), (1, 3), (3, 0), (4, 0), (0, 0)] {
        let err = geo.subdivide(m, n).unwrap_err();
        assert!(
            matches!(err, MeshError::UnsupportedBreakdown { m: em, n: en, .. } if em == m && en == n),
            "({m}, {n}) gave {err}"
        );
        assert_eq!(counts(geo.polyhedron()), before);
        assert_eq!(geo.breakdown(), Breakdown::IDENTITY);
    }
}

#[test]
fn class_two_checked_before_class_three() {
    let err = Geodesic::icosahedral().subdivide(3, 3).unwrap_err();
    assert!(err.to_string().contains("Class II"));
    let err = Geodesic::icosahedral().subdivide(3, 1).unwrap_err();
    assert!(err.to_string().contains("Class III"));
}

#[test]
fn edge_lengths_stay_uniform() {
    let geo = Geodesic::icosahedral().subdivided(2, 0).unwrap();
    assert_relative_eq!(geo.polyhedron().edge_length_deviation(), 0.0, epsilon = tolerance());
}
