//! Invariant battery for icosahedral geodesic meshes.
//!
//! Every check runs independently; violations are collected rather than
//! returned on the first failure. The checker never repairs anything.

use super::Polyhedron;
use crate::errors::IntegrityViolation;
use crate::float_types::{HashMap, Real, tolerance};
use crate::geometry;
use nalgebra::Point3;
use tracing::warn;

/// Runs the icosahedral invariant checks over a borrowed mesh
#[derive(Debug, Clone, Copy)]
pub struct IntegrityChecker<'a> {
    polyhedron: &'a Polyhedron,
}

impl<'a> IntegrityChecker<'a> {
    pub fn new(polyhedron: &'a Polyhedron) -> Self {
        IntegrityChecker { polyhedron }
    }

    /// Run the whole battery. An empty result means a healthy mesh.
    pub fn check(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();
        self.check_faces(&mut violations);
        self.check_vertex_degrees(&mut violations);
        self.check_edges(&mut violations);
        self.check_vertex_count(&mut violations);
        self.check_distinct_neighbors(&mut violations);
        self.check_center(&mut violations);
        violations
    }

    /// Face count is a multiple of 20
    fn check_faces(&self, out: &mut Vec<IntegrityViolation>) {
        let count = self.polyhedron.faces().len();
        if count % 20 != 0 {
            out.push(IntegrityViolation::FaceCount(count));
        }
    }

    /// Edge count is a multiple of 30, no self-loops, no edge centered at
    /// the origin
    fn check_edges(&self, out: &mut Vec<IntegrityViolation>) {
        let edges = self.polyhedron.edges();
        if edges.len() % 30 != 0 {
            out.push(IntegrityViolation::EdgeCount(edges.len()));
        }
        let eps = tolerance();
        for &edge in edges {
            if edge.is_self_loop() {
                out.push(IntegrityViolation::SelfLoop(edge));
                continue;
            }
            if let Ok(center) = self.polyhedron.edge_center(&edge) {
                if center.coords.norm() <= eps {
                    out.push(IntegrityViolation::EdgeAtOrigin(edge));
                }
            }
        }
    }

    /// V = 10T + 2
    fn check_vertex_count(&self, out: &mut Vec<IntegrityViolation>) {
        let count = self.polyhedron.vertices().len();
        if count < 2 || (count - 2) % 10 != 0 {
            out.push(IntegrityViolation::VertexCount(count));
        }
    }

    /// Every vertex has degree 5 or 6 and none is the reserved zero identity
    fn check_vertex_degrees(&self, out: &mut Vec<IntegrityViolation>) {
        let mut zero_seen = false;
        for &vertex in self.polyhedron.vertices() {
            if !vertex.is_valid() {
                if !zero_seen {
                    out.push(IntegrityViolation::ZeroVertex);
                    zero_seen = true;
                }
                continue;
            }
            let degree = self.polyhedron.vertex_degree(vertex);
            if degree != 5 && degree != 6 {
                warn!("vertex {vertex} has degree {degree}");
                out.push(IntegrityViolation::VertexDegree { vertex, degree });
            }
        }
    }

    /// No vertex is its own neighbor and no neighbor is listed twice
    fn check_distinct_neighbors(&self, out: &mut Vec<IntegrityViolation>) {
        for &vertex in self.polyhedron.vertices() {
            let mut counts: HashMap<_, usize> = HashMap::new();
            let mut order = Vec::new();
            for &neighbor in self.polyhedron.adjacent_vertices(vertex) {
                if neighbor == vertex {
                    out.push(IntegrityViolation::SelfNeighbor(vertex));
                    continue;
                }
                let count = counts.entry(neighbor).or_insert(0);
                if *count == 0 {
                    order.push(neighbor);
                }
                *count += 1;
            }
            for neighbor in order {
                let count = counts[&neighbor];
                if count > 1 {
                    out.push(IntegrityViolation::RepeatedNeighbor {
                        vertex,
                        neighbor,
                        count,
                    });
                }
            }
        }
    }

    /// The centroid of all vertex positions stays at the origin
    fn check_center(&self, out: &mut Vec<IntegrityViolation>) {
        let arena = self.polyhedron.arena();
        let positions: Vec<Point3<Real>> = self
            .polyhedron
            .vertices()
            .iter()
            .filter_map(|&v| arena.position(v).copied())
            .collect();
        let center = geometry::centroid(&positions);
        if center.coords.norm() > tolerance() {
            out.push(IntegrityViolation::OffCenter(center));
        }
    }

    /// **Edge length uniformity**
    ///
    /// Compares every edge against the length of the first one. Not part of
    /// [`check`](Self::check): once faces are projected or duals are taken,
    /// edge lengths legitimately vary, so callers pick their own `tolerance`.
    pub fn check_edge_lengths(&self, tolerance: Real) -> Vec<IntegrityViolation> {
        let poly = self.polyhedron;
        let Some(baseline) = poly.edges().first().and_then(|e| poly.edge_length(e).ok())
        else {
            return Vec::new();
        };
        poly.edges()
            .iter()
            .filter_map(|&edge| {
                let delta = (poly.edge_length(&edge).ok()? - baseline).abs();
                (delta > tolerance).then_some(IntegrityViolation::EdgeLength {
                    edge,
                    delta,
                    baseline,
                })
            })
            .collect()
    }
}

impl Polyhedron {
    /// Run the integrity battery; see [`IntegrityChecker::check`]
    pub fn check_integrity(&self) -> Vec<IntegrityViolation> {
        IntegrityChecker::new(self).check()
    }

    /// Largest deviation of any edge length from the first edge's length
    pub fn edge_length_deviation(&self) -> Real {
        let Some(baseline) = self.edges().first().and_then(|e| self.edge_length(e).ok())
        else {
            return 0.0;
        };
        self.edges()
            .iter()
            .filter_map(|e| self.edge_length(e).ok())
            .map(|len| (len - baseline).abs())
            .fold(0.0, Real::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedron::edge::Edge;
    use crate::polyhedron::vertex::VertexId;

    #[test]
    fn icosahedron_is_healthy() {
        let ico = Polyhedron::icosahedron();
        assert_eq!(ico.check_integrity(), Vec::new());
        assert!(IntegrityChecker::new(&ico).check_edge_lengths(tolerance()).is_empty());
        assert!(ico.edge_length_deviation() < tolerance());
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut ico = Polyhedron::icosahedron();
        // An extra vertex far from the origin with a single neighbor breaks
        // the vertex count, one degree, the edge count and the center.
        let first = ico.vertices()[0];
        let stray = ico.allocate_vertex(Point3::new(10.0, 0.0, 0.0));
        ico.add_edge(stray, first).unwrap();

        let violations = ico.check_integrity();
        assert!(violations.contains(&IntegrityViolation::VertexCount(13)));
        assert!(violations.contains(&IntegrityViolation::EdgeCount(31)));
        assert!(violations.contains(&IntegrityViolation::VertexDegree {
            vertex: stray,
            degree: 1
        }));
        // The pole now has six neighbors, which is still legal
        assert!(!violations.contains(&IntegrityViolation::VertexDegree {
            vertex: first,
            degree: 6
        }));
        assert!(
            violations
                .iter()
                .any(|v| matches!(v, IntegrityViolation::OffCenter(_)))
        );
        assert!(!violations.iter().any(|v| matches!(v, IntegrityViolation::FaceCount(_))));
    }

    #[test]
    fn zero_vertex_and_repeated_neighbors() {
        let mut ico = Polyhedron::icosahedron();
        ico.add_vertex(VertexId::INVALID);
        let [a, b, ..] = ico.vertices() else {
            unreachable!()
        };
        let (a, b) = (*a, *b);
        // a and b are the two poles, not yet connected
        ico.add_edge(a, b).unwrap();
        ico.add_edge(b, a).unwrap();

        let violations = ico.check_integrity();
        assert!(violations.contains(&IntegrityViolation::ZeroVertex));
        assert!(violations.contains(&IntegrityViolation::RepeatedNeighbor {
            vertex: a,
            neighbor: b,
            count: 2
        }));
    }

    #[test]
    fn edge_at_origin_is_flagged() {
        let mut ico = Polyhedron::icosahedron();
        let [top, bottom, ..] = ico.vertices() else {
            unreachable!()
        };
        let e = Edge::canonical(*top, *bottom);
        let mut edges = ico.edges().to_vec();
        edges.push(e);
        ico.set_edges(edges).unwrap();
        assert!(ico.check_integrity().contains(&IntegrityViolation::EdgeAtOrigin(e)));
    }

    #[test]
    fn edge_lengths_against_baseline() {
        let mut poly = Polyhedron::empty();
        let a = poly.allocate_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = poly.allocate_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = poly.allocate_vertex(Point3::new(3.0, 0.0, 0.0));
        poly.add_edge(a, b).unwrap();
        poly.add_edge(b, c).unwrap();
        let found = IntegrityChecker::new(&poly).check_edge_lengths(0.5);
        assert_eq!(found.len(), 1);
        assert!(matches!(
            found[0],
            IntegrityViolation::EdgeLength { delta, baseline, .. }
                if (delta - 1.0).abs() < tolerance() && (baseline - 1.0).abs() < tolerance()
        ));
        assert!((poly.edge_length_deviation() - 1.0).abs() < tolerance());
    }
}
