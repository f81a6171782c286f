//! Mesh construction errors and integrity violations

use crate::float_types::Real;
use crate::polyhedron::{edge::Edge, vertex::VertexId};
use nalgebra::Point3;

/// All the ways building or transforming a mesh can fail
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// (UnsupportedBreakdown) The requested `(m, n)` breakdown cannot be applied
    #[error("(UnsupportedBreakdown) breakdown (m={m}, n={n}) is not supported: {reason}")]
    UnsupportedBreakdown { m: u32, n: u32, reason: &'static str },
    /// (NonManifoldEdge) An edge does not border exactly two faces
    #[error("(NonManifoldEdge) edge {edge} borders {faces} face(s) instead of 2")]
    NonManifoldEdge { edge: Edge, faces: usize },
    /// (DegenerateVertex) Identity zero, or a vertex used as its own neighbor
    #[error("(DegenerateVertex) degenerate vertex {0}")]
    DegenerateVertex(VertexId),
    /// (DegenerateFace) A face loop with fewer than three distinct vertices
    #[error("(DegenerateFace) face loop of {len} vertices has fewer than 3 distinct vertices")]
    DegenerateFace { len: usize },
    /// (NonTriangularFace) Subdivision met a face that is not a triangle
    #[error("(NonTriangularFace) face {face} has {len} vertices, subdivision requires triangles")]
    NonTriangularFace { face: usize, len: usize },
    /// (MissingEdge) A face traverses an edge missing from the edge list
    #[error("(MissingEdge) face edge {0} is not in the edge list")]
    MissingEdge(Edge),
    /// (UnknownVertex) The vertex has no position in the mesh's arena
    #[error("(UnknownVertex) vertex {0} has no position")]
    UnknownVertex(VertexId),
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// One violated invariant reported by the integrity checker
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrityViolation {
    /// (FaceCount) The number of faces is not a multiple of 20
    #[error("(FaceCount) number of faces {0} is not a multiple of 20")]
    FaceCount(usize),
    /// (EdgeCount) The number of edges is not a multiple of 30
    #[error("(EdgeCount) number of edges {0} is not a multiple of 30")]
    EdgeCount(usize),
    /// (VertexCount) The number of vertices does not fulfill V = 10T + 2
    #[error("(VertexCount) number of vertices {0} does not fulfill V = 10T + 2")]
    VertexCount(usize),
    /// (SelfLoop) An edge connects a vertex to itself
    #[error("(SelfLoop) edge {0} connects a vertex to itself")]
    SelfLoop(Edge),
    /// (EdgeAtOrigin) An edge is centered at the coordinate origin
    #[error("(EdgeAtOrigin) edge {0} is centered at the origin")]
    EdgeAtOrigin(Edge),
    /// (VertexDegree) A vertex has a degree other than 5 or 6
    #[error("(VertexDegree) vertex {vertex} has degree {degree}, should be 5 or 6")]
    VertexDegree { vertex: VertexId, degree: usize },
    /// (ZeroVertex) The reserved identity zero is used as a vertex
    #[error("(ZeroVertex) mesh contains the reserved zero vertex")]
    ZeroVertex,
    /// (SelfNeighbor) A vertex lists itself as a neighbor
    #[error("(SelfNeighbor) vertex {0} is its own neighbor")]
    SelfNeighbor(VertexId),
    /// (RepeatedNeighbor) A vertex lists the same neighbor more than once
    #[error("(RepeatedNeighbor) vertex {vertex} lists {neighbor} as neighbor {count} times")]
    RepeatedNeighbor {
        vertex: VertexId,
        neighbor: VertexId,
        count: usize,
    },
    /// (OffCenter) The centroid of all vertices moved away from the origin
    #[error("(OffCenter) center has moved from origin to {0}")]
    OffCenter(Point3<Real>),
    /// (EdgeLength) An edge deviates from the baseline edge length
    #[error("(EdgeLength) edge {edge} deviates in length by {delta} from a baseline of {baseline}")]
    EdgeLength {
        edge: Edge,
        delta: Real,
        baseline: Real,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MeshError::UnsupportedBreakdown {
            m: 3,
            n: 3,
            reason: "Class II breakdowns",
        };
        assert!(format!("{err}").contains("Class II"));

        let edge = Edge::canonical(VertexId::new(4), VertexId::new(2));
        let err = MeshError::NonManifoldEdge { edge, faces: 1 };
        assert!(format!("{err}").contains("(2, 4)"));
        assert!(format!("{err}").contains("1 face"));

        let err = IntegrityViolation::VertexDegree {
            vertex: VertexId::new(7),
            degree: 4,
        };
        assert!(format!("{err}").contains("degree 4"));
    }
}
