//! Manifold validation and topology analysis over the edge→face index

use super::Polyhedron;
use super::edge::Edge;
use crate::float_types::{HashMap, HashSet};

/// **Manifold Properties**
/// 1. **Edge Manifold**: each edge borders exactly 2 faces
/// 2. **Orientation Consistency**: adjacent faces traverse their shared edge
///    in opposite directions
/// 3. **Connectivity**: all faces reachable through shared edges
/// 4. **Euler Characteristic**: V − E + F, 2 for a sphere-like mesh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifoldAnalysis {
    /// Whether the mesh is a closed, consistently oriented 2-manifold
    pub is_manifold: bool,
    /// Edges bordering a single face
    pub boundary_edges: usize,
    /// Edges bordering more than two faces
    pub non_manifold_edges: usize,
    /// Listed edges that no face uses
    pub dangling_edges: usize,
    /// Vertices that belong to no face
    pub isolated_vertices: usize,
    /// Face-connected components
    pub connected_components: usize,
    /// Whether every shared edge is traversed once in each direction
    pub consistent_orientation: bool,
    /// V − E + F
    pub euler_characteristic: i64,
}

impl Polyhedron {
    /// Analyze the mesh topology.
    ///
    /// The result is diagnostic only; nothing is repaired.
    pub fn analyze_manifold(&self) -> ManifoldAnalysis {
        let mut boundary_edges = 0;
        let mut non_manifold_edges = 0;
        for faces in self.edge_faces.values() {
            match faces.len() {
                1 => boundary_edges += 1,
                2 => {},
                _ => non_manifold_edges += 1,
            }
        }

        let dangling_edges = self
            .edges()
            .iter()
            .filter(|e| !self.edge_faces.contains_key(*e))
            .count();

        let in_faces: HashSet<_> = self
            .faces
            .iter()
            .flat_map(|f| f.vertices().iter().copied())
            .collect();
        let isolated_vertices = self
            .vertices
            .iter()
            .filter(|v| !in_faces.contains(*v))
            .count();

        let consistent_orientation = self.check_orientation_consistency();
        let connected_components = self.count_connected_components();
        let euler_characteristic = self.euler_characteristic();

        let is_manifold = boundary_edges == 0
            && non_manifold_edges == 0
            && dangling_edges == 0
            && isolated_vertices == 0
            && consistent_orientation;

        ManifoldAnalysis {
            is_manifold,
            boundary_edges,
            non_manifold_edges,
            dangling_edges,
            isolated_vertices,
            connected_components,
            consistent_orientation,
            euler_characteristic,
        }
    }

    /// Each directed edge may appear in at most one face
    fn check_orientation_consistency(&self) -> bool {
        let mut directed: HashMap<Edge, usize> = HashMap::new();
        for face in &self.faces {
            for e in face.directed_edges() {
                let count = directed.entry(e).or_insert(0);
                *count += 1;
                if *count > 1 {
                    return false;
                }
            }
        }
        true
    }

    /// Count connected components with an explicit-stack DFS over shared edges
    fn count_connected_components(&self) -> usize {
        let mut face_adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
        for faces in self.edge_faces.values() {
            for &a in faces {
                for &b in faces {
                    if a != b {
                        face_adjacency.entry(a).or_default().push(b);
                    }
                }
            }
        }

        let mut visited = vec![false; self.faces.len()];
        let mut components = 0;
        let mut stack = Vec::new();
        for start in 0..self.faces.len() {
            if visited[start] {
                continue;
            }
            components += 1;
            visited[start] = true;
            stack.push(start);
            while let Some(face) = stack.pop() {
                for &neighbor in face_adjacency.get(&face).map(Vec::as_slice).unwrap_or(&[]) {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        stack.push(neighbor);
                    }
                }
            }
        }
        components
    }
}
