//! `Polyhedron` mesh container with vertex adjacency and edge→face indices

use crate::errors::{MeshError, MeshResult};
use crate::float_types::{HashMap, HashSet, Real};
use nalgebra::Point3;
use std::sync::OnceLock;

pub mod edge;
pub mod face;
pub mod vertex;

/// Seed shapes
pub mod shapes;

/// Manifold topology analysis
pub mod manifold;

/// Icosahedral integrity battery
pub mod integrity;

use edge::Edge;
use face::Face;
use vertex::{VertexArena, VertexId};

/// A closed polygonal mesh over arena-allocated vertices.
///
/// Faces and edges are value types re-derived from vertex identities, so bulk
/// replacement of either set never leaves stale references behind.
#[derive(Debug, Clone, Default)]
pub struct Polyhedron {
    /// Positions of every vertex this mesh may reference
    arena: VertexArena,

    vertices: Vec<VertexId>,
    faces: Vec<Face>,

    /// vertex → neighbors, in insertion order, both directions recorded
    adjacency: HashMap<VertexId, Vec<VertexId>>,

    /// canonical edge → indices of the faces it borders
    edge_faces: HashMap<Edge, Vec<usize>>,

    /// Lazily derived (or explicitly set) canonical edge list
    edge_cache: OnceLock<Vec<Edge>>,
}

impl Polyhedron {
    /// Empty mesh with an empty arena
    pub fn empty() -> Self {
        Self::default()
    }

    /// Empty mesh drawing positions from `arena`
    pub fn with_arena(arena: VertexArena) -> Self {
        Polyhedron {
            arena,
            ..Self::default()
        }
    }

    /// Build a mesh from explicit lists.
    ///
    /// Every vertex, and every vertex referenced by an edge or face, must have
    /// a position in `arena`. Self-loop edges are rejected.
    pub fn new(
        arena: VertexArena,
        vertices: Vec<VertexId>,
        edges: Vec<Edge>,
        faces: Vec<Face>,
    ) -> MeshResult<Self> {
        let mut poly = Polyhedron::with_arena(arena);
        poly.replace_topology(vertices, edges, faces)?;
        Ok(poly)
    }

    #[inline]
    pub fn arena(&self) -> &VertexArena {
        &self.arena
    }

    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    /// Canonical edges of the mesh.
    ///
    /// Unless an explicit list was installed with [`set_edges`](Self::set_edges),
    /// edges are derived from the adjacency index on first access (vertex
    /// order, then neighbor order) and cached until adjacency changes.
    pub fn edges(&self) -> &[Edge] {
        self.edge_cache.get_or_init(|| {
            let mut seen = HashSet::new();
            let mut edges = Vec::new();
            for &v in &self.vertices {
                for &n in self.adjacent_vertices(v) {
                    let e = Edge::canonical(v, n);
                    if seen.insert(e) {
                        edges.push(e);
                    }
                }
            }
            edges
        })
    }

    /// Append an identity already allocated in this mesh's arena.
    /// Unchecked; the integrity battery reports identities that do not belong.
    pub fn add_vertex(&mut self, v: VertexId) {
        self.vertices.push(v);
    }

    /// Allocate a new vertex at `pos` and append it
    pub fn allocate_vertex(&mut self, pos: Point3<Real>) -> VertexId {
        let v = self.arena.allocate(pos);
        self.vertices.push(v);
        v
    }

    /// Connect `v1` and `v2`, recording both directions.
    ///
    /// The caller must not add the same undirected edge twice.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> MeshResult<()> {
        if v1 == v2 {
            return Err(MeshError::DegenerateVertex(v1));
        }
        self.connect(v1, v2);
        Ok(())
    }

    /// Record an edge between two vertices known to be distinct
    pub(crate) fn connect(&mut self, v1: VertexId, v2: VertexId) {
        self.adjacency.entry(v1).or_default().push(v2);
        self.adjacency.entry(v2).or_default().push(v1);
        self.invalidate_edges();
    }

    /// Append `face` and register it under each of its edges
    pub fn add_face(&mut self, face: Face) {
        let index = self.faces.len();
        register_face(&mut self.edge_faces, &face, index);
        self.faces.push(face);
    }

    /// Append the face described by `vertices` in winding order
    pub fn add_face_from_loop(&mut self, vertices: Vec<VertexId>) -> MeshResult<()> {
        let face = Face::new(vertices)?;
        self.add_face(face);
        Ok(())
    }

    /// Replace every edge. Either the whole set is installed or the mesh is
    /// left untouched.
    pub fn set_edges(&mut self, edges: Vec<Edge>) -> MeshResult<()> {
        self.ensure_positioned(edges.iter().flat_map(|e| e.vertices()))?;
        let (adjacency, edges) = build_adjacency(edges)?;
        self.adjacency = adjacency;
        self.edge_cache = OnceLock::from(edges);
        Ok(())
    }

    /// Replace every face. Either the whole set is installed or the mesh is
    /// left untouched.
    pub fn set_faces(&mut self, faces: Vec<Face>) -> MeshResult<()> {
        self.ensure_positioned(faces.iter().flat_map(|f| f.vertices().iter().copied()))?;
        self.edge_faces = build_edge_faces(&faces);
        self.faces = faces;
        Ok(())
    }

    /// Install a complete new topology over the current arena: vertex list,
    /// edges and faces are validated together and swapped in at once.
    pub(crate) fn replace_topology(
        &mut self,
        vertices: Vec<VertexId>,
        edges: Vec<Edge>,
        faces: Vec<Face>,
    ) -> MeshResult<()> {
        for &v in &vertices {
            if !v.is_valid() {
                return Err(MeshError::DegenerateVertex(v));
            }
        }
        self.ensure_positioned(vertices.iter().copied())?;
        self.ensure_positioned(edges.iter().flat_map(|e| e.vertices()))?;
        self.ensure_positioned(faces.iter().flat_map(|f| f.vertices().iter().copied()))?;

        let (adjacency, edges) = build_adjacency(edges)?;
        let edge_faces = build_edge_faces(&faces);

        self.vertices = vertices;
        self.adjacency = adjacency;
        self.edge_cache = OnceLock::from(edges);
        self.faces = faces;
        self.edge_faces = edge_faces;
        Ok(())
    }

    /// Swap in a new arena together with its topology (all or nothing)
    pub(crate) fn replace_all(
        &mut self,
        arena: VertexArena,
        vertices: Vec<VertexId>,
        edges: Vec<Edge>,
        faces: Vec<Face>,
    ) -> MeshResult<()> {
        let mut staged = Polyhedron::with_arena(arena);
        staged.replace_topology(vertices, edges, faces)?;
        *self = staged;
        Ok(())
    }

    /// Number of neighbors of `v`
    pub fn vertex_degree(&self, v: VertexId) -> usize {
        self.adjacent_vertices(v).len()
    }

    /// Neighbors of `v` in the order their edges were added
    pub fn adjacent_vertices(&self, v: VertexId) -> &[VertexId] {
        self.adjacency.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of the faces whose loop contains `v`, in face order
    pub fn vertex_adjacent_faces(&self, v: VertexId) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.contains(v))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of faces bordering `e` (in either direction)
    pub fn edge_face_count(&self, e: Edge) -> usize {
        self.edge_faces.get(&e.canonicalized()).map_or(0, Vec::len)
    }

    /// The two faces bordering `e` (in either direction).
    ///
    /// Fails with [`MeshError::NonManifoldEdge`] when `e` does not border
    /// exactly two faces.
    pub fn edge_adjacent_faces(&self, e: Edge) -> MeshResult<[usize; 2]> {
        let edge = e.canonicalized();
        match self.edge_faces.get(&edge).map(Vec::as_slice) {
            Some(&[a, b]) => Ok([a, b]),
            other => Err(MeshError::NonManifoldEdge {
                edge,
                faces: other.map_or(0, <[usize]>::len),
            }),
        }
    }

    /// Faces sharing an edge with face `f`, excluding `f` itself
    pub fn face_edge_adjacent_faces(&self, f: usize) -> MeshResult<Vec<usize>> {
        let Some(face) = self.faces.get(f) else {
            return Ok(Vec::new());
        };
        let mut result = Vec::with_capacity(face.len());
        for e in face.edges() {
            for neighbor in self.edge_adjacent_faces(e)? {
                if neighbor != f && !result.contains(&neighbor) {
                    result.push(neighbor);
                }
            }
        }
        Ok(result)
    }

    /// Faces sharing at least one vertex with face `f`, excluding `f` itself
    pub fn face_vertex_adjacent_faces(&self, f: usize) -> Vec<usize> {
        let Some(face) = self.faces.get(f) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for &v in face.vertices() {
            for neighbor in self.vertex_adjacent_faces(v) {
                if neighbor != f && seen.insert(neighbor) {
                    result.push(neighbor);
                }
            }
        }
        result
    }

    pub fn vertex_position(&self, v: VertexId) -> MeshResult<Point3<Real>> {
        self.arena.try_position(v)
    }

    pub fn edge_length(&self, e: &Edge) -> MeshResult<Real> {
        e.length(&self.arena)
    }

    pub fn edge_center(&self, e: &Edge) -> MeshResult<Point3<Real>> {
        e.center(&self.arena)
    }

    pub fn face_center(&self, face: &Face) -> MeshResult<Point3<Real>> {
        face.center(&self.arena)
    }

    /// χ = V − E + F
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices.len() as i64 - self.edges().len() as i64 + self.faces.len() as i64
    }

    fn invalidate_edges(&mut self) {
        self.edge_cache = OnceLock::new();
    }

    fn ensure_positioned(&self, ids: impl IntoIterator<Item = VertexId>) -> MeshResult<()> {
        for v in ids {
            if !v.is_valid() {
                return Err(MeshError::DegenerateVertex(v));
            }
            if !self.arena.contains(v) {
                return Err(MeshError::UnknownVertex(v));
            }
        }
        Ok(())
    }
}

/// Adjacency index and deduplicated canonical edge list for `edges`
fn build_adjacency(
    edges: Vec<Edge>,
) -> MeshResult<(HashMap<VertexId, Vec<VertexId>>, Vec<Edge>)> {
    let mut adjacency: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
    let mut seen = HashSet::with_capacity(edges.len());
    let mut unique = Vec::with_capacity(edges.len());
    for e in edges {
        if e.is_self_loop() {
            return Err(MeshError::DegenerateVertex(e.v1()));
        }
        let e = e.canonicalized();
        if !seen.insert(e) {
            continue;
        }
        adjacency.entry(e.v1()).or_default().push(e.v2());
        adjacency.entry(e.v2()).or_default().push(e.v1());
        unique.push(e);
    }
    Ok((adjacency, unique))
}

fn build_edge_faces(faces: &[Face]) -> HashMap<Edge, Vec<usize>> {
    let mut edge_faces = HashMap::with_capacity(faces.len() * 3 / 2 + 1);
    for (i, face) in faces.iter().enumerate() {
        register_face(&mut edge_faces, face, i);
    }
    edge_faces
}

fn register_face(edge_faces: &mut HashMap<Edge, Vec<usize>>, face: &Face, index: usize) {
    for e in face.edges() {
        edge_faces.entry(e).or_default().push(index);
    }
}
