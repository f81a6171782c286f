//! Undirected edges in canonical form

use super::vertex::{VertexArena, VertexId};
use crate::errors::MeshResult;
use crate::float_types::Real;
use crate::geometry;
use nalgebra::Point3;
use std::fmt;

/// A pair of vertex identities.
///
/// Edges stored by a mesh are always canonical (smaller identity first), so
/// two faces traversing the same edge in opposite directions agree on it.
/// [`Edge::new`] and [`Edge::reversed`] keep the traversal direction, which is
/// what the subdivision needs when it matches a face's winding against a
/// canonical stored edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    v1: VertexId,
    v2: VertexId,
}

impl Edge {
    /// Directed edge from `v1` to `v2`, as traversed
    #[inline]
    pub const fn new(v1: VertexId, v2: VertexId) -> Self {
        Edge { v1, v2 }
    }

    /// Canonical undirected edge, identical for `(a, b)` and `(b, a)`
    #[inline]
    pub fn canonical(a: VertexId, b: VertexId) -> Self {
        if a <= b { Edge::new(a, b) } else { Edge::new(b, a) }
    }

    #[inline]
    pub fn canonicalized(self) -> Self {
        Edge::canonical(self.v1, self.v2)
    }

    #[inline]
    pub fn is_canonical(&self) -> bool {
        self.v1 <= self.v2
    }

    /// Swap the endpoints without canonicalizing
    #[inline]
    pub const fn reversed(self) -> Self {
        Edge::new(self.v2, self.v1)
    }

    #[inline]
    pub const fn v1(&self) -> VertexId {
        self.v1
    }

    #[inline]
    pub const fn v2(&self) -> VertexId {
        self.v2
    }

    #[inline]
    pub const fn vertices(&self) -> [VertexId; 2] {
        [self.v1, self.v2]
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.v1 == v || self.v2 == v
    }

    /// The endpoint opposite to `v`
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if self.v1 == v {
            Some(self.v2)
        } else if self.v2 == v {
            Some(self.v1)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.v1 == self.v2
    }

    pub fn length(&self, arena: &VertexArena) -> MeshResult<Real> {
        let a = arena.try_position(self.v1)?;
        let b = arena.try_position(self.v2)?;
        Ok(geometry::distance(&a, &b))
    }

    pub fn center(&self, arena: &VertexArena) -> MeshResult<Point3<Real>> {
        let a = arena.try_position(self.v1)?;
        let b = arena.try_position(self.v2)?;
        Ok(nalgebra::center(&a, &b))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v1.raw(), self.v2.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::tolerance;

    #[test]
    fn canonical_is_order_independent() {
        let a = VertexId::new(3);
        let b = VertexId::new(8);
        assert_eq!(Edge::canonical(a, b), Edge::canonical(b, a));
        assert!(Edge::canonical(b, a).is_canonical());
        assert_eq!(Edge::canonical(b, a).v1(), a);
    }

    #[test]
    fn reversal() {
        let e = Edge::new(VertexId::new(1), VertexId::new(2));
        assert_eq!(e.reversed(), Edge::new(VertexId::new(2), VertexId::new(1)));
        assert_ne!(e.reversed(), e);
        assert_eq!(e.reversed().reversed(), e);
        assert_eq!(e.reversed().canonicalized(), e);
    }

    #[test]
    fn other_endpoint() {
        let e = Edge::canonical(VertexId::new(5), VertexId::new(2));
        assert_eq!(e.other(VertexId::new(2)), Some(VertexId::new(5)));
        assert_eq!(e.other(VertexId::new(9)), None);
        assert!(e.contains(VertexId::new(5)));
    }

    #[test]
    fn length_and_center_use_arena_positions() {
        let mut arena = VertexArena::new();
        let a = arena.allocate(Point3::new(0.0, 0.0, 0.0));
        let b = arena.allocate(Point3::new(2.0, 0.0, 0.0));
        let e = Edge::canonical(a, b);
        assert!((e.length(&arena).unwrap() - 2.0).abs() < tolerance());
        assert_eq!(e.center(&arena).unwrap(), Point3::new(1.0, 0.0, 0.0));

        let dangling = Edge::canonical(a, VertexId::new(40));
        assert!(dangling.length(&arena).is_err());
    }
}
