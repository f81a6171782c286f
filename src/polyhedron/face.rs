//! Faces as canonical cyclic vertex loops

use super::edge::Edge;
use super::vertex::{VertexArena, VertexId};
use crate::errors::{MeshError, MeshResult};
use crate::float_types::{HashSet, Real};
use crate::geometry;
use nalgebra::Point3;

/// An ordered, cyclic loop of at least three distinct vertices.
///
/// The loop is rotated to start at its lowest identity, so every rotation of
/// the same cycle compares and hashes equal. The winding is kept: a reversed
/// loop is a different face.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    vertices: Vec<VertexId>,
}

impl Face {
    /// Build a face from a loop in traversal order.
    ///
    /// Fails with [`MeshError::DegenerateFace`] for loops with fewer than three
    /// vertices or a repeated vertex, and with [`MeshError::DegenerateVertex`]
    /// when the loop contains the reserved zero identity.
    pub fn new(vertices: Vec<VertexId>) -> MeshResult<Self> {
        let len = vertices.len();
        if len < 3 {
            return Err(MeshError::DegenerateFace { len });
        }
        if let Some(&zero) = vertices.iter().find(|v| !v.is_valid()) {
            return Err(MeshError::DegenerateVertex(zero));
        }
        let distinct: HashSet<VertexId> = vertices.iter().copied().collect();
        if distinct.len() != len {
            return Err(MeshError::DegenerateFace { len });
        }
        Ok(Face::from_valid_loop(vertices))
    }

    /// Canonical face for any rotation of `vertices`; same checks as [`Face::new`]
    pub fn canonical(vertices: Vec<VertexId>) -> MeshResult<Self> {
        Face::new(vertices)
    }

    /// Canonicalize a loop the caller already knows to be valid
    pub(crate) fn from_valid_loop(mut vertices: Vec<VertexId>) -> Self {
        // Canonical rotation: start at the lowest identity
        if let Some(start) = vertices
            .iter()
            .enumerate()
            .min_by_key(|&(_, v)| *v)
            .map(|(i, _)| i)
        {
            vertices.rotate_left(start);
        }
        Face { vertices }
    }

    /// Convenience for triangles
    pub fn triangle(a: VertexId, b: VertexId, c: VertexId) -> MeshResult<Self> {
        Face::new(vec![a, b, c])
    }

    /// The canonical loop
    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Edges between consecutive vertices in winding order (including the
    /// wraparound), each pointing in the traversal direction
    pub fn directed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| Edge::new(a, b))
    }

    /// Canonical edges of the loop, in winding order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.directed_edges().map(Edge::canonicalized)
    }

    /// The same cycle with opposite winding
    pub fn reversed(&self) -> Face {
        let mut vertices = self.vertices.clone();
        // Keep the lowest identity in front
        vertices[1..].reverse();
        Face { vertices }
    }

    /// Centroid of the loop's vertex positions
    pub fn center(&self, arena: &VertexArena) -> MeshResult<Point3<Real>> {
        let positions = self
            .vertices
            .iter()
            .map(|&v| arena.try_position(v))
            .collect::<MeshResult<Vec<_>>>()?;
        Ok(geometry::centroid(&positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<VertexId> {
        raw.iter().map(|&r| VertexId::new(r)).collect()
    }

    #[test]
    fn rotations_compare_equal() {
        let a = Face::new(ids(&[4, 2, 9])).unwrap();
        let b = Face::new(ids(&[2, 9, 4])).unwrap();
        let c = Face::canonical(ids(&[9, 4, 2])).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.vertices(), ids(&[2, 9, 4]).as_slice());
    }

    #[test]
    fn winding_is_significant() {
        let a = Face::new(ids(&[1, 2, 3, 4])).unwrap();
        let b = Face::new(ids(&[4, 3, 2, 1])).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.reversed(), b);
        assert_eq!(a.reversed().reversed(), a);
    }

    #[test]
    fn degenerate_loops_are_rejected() {
        assert_eq!(
            Face::new(ids(&[1, 2])),
            Err(MeshError::DegenerateFace { len: 2 })
        );
        assert_eq!(
            Face::new(ids(&[1, 2, 1])),
            Err(MeshError::DegenerateFace { len: 3 })
        );
        assert_eq!(
            Face::new(ids(&[1, 0, 3])),
            Err(MeshError::DegenerateVertex(VertexId::INVALID))
        );
    }

    #[test]
    fn edges_wrap_around() {
        let f = Face::new(ids(&[5, 1, 3])).unwrap();
        let directed: Vec<_> = f.directed_edges().collect();
        assert_eq!(
            directed,
            vec![
                Edge::new(VertexId::new(1), VertexId::new(3)),
                Edge::new(VertexId::new(3), VertexId::new(5)),
                Edge::new(VertexId::new(5), VertexId::new(1)),
            ]
        );
        assert!(f.edges().all(|e| e.is_canonical()));
        assert_eq!(f.edges().count(), 3);
    }
}
