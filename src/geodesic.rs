//! Geodesic polyhedra: an icosahedral seed refined by Class I subdivision.
//!
//! ## **Breakdown structure**
//! A geodesic is described by its breakdown `(m, n)`. The triangulation
//! number `T = m² + mn + n²` fixes the counts of an icosahedral geodesic:
//! `20T` faces, `30T` edges and `10T + 2` vertices.

use crate::errors::{IntegrityViolation, MeshError, MeshResult};
use crate::float_types::{HashMap, HashSet, Real};
use crate::geometry;
use crate::polyhedron::Polyhedron;
use crate::polyhedron::edge::Edge;
use crate::polyhedron::face::Face;
use crate::polyhedron::vertex::VertexId;
use std::fmt;
use tracing::debug;

/// Class of a breakdown structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakdownClass {
    /// `n = 0` (or `m = 0`): grid lines parallel to the parent edges
    I,
    /// `m = n`: grid lines perpendicular to the parent edges
    II,
    /// Any other `(m, n)`: skewed, chiral grids
    III,
}

/// Breakdown structure `(m, n)` of a geodesic or Goldberg polyhedron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Breakdown {
    pub m: u32,
    pub n: u32,
}

impl Breakdown {
    /// The unsubdivided icosahedron
    pub const IDENTITY: Breakdown = Breakdown { m: 1, n: 0 };

    pub const fn new(m: u32, n: u32) -> Self {
        Breakdown { m, n }
    }

    /// Triangulation number `T = m² + mn + n²`
    pub const fn t_number(&self) -> u32 {
        self.m * self.m + self.m * self.n + self.n * self.n
    }

    pub const fn class(&self) -> BreakdownClass {
        if self.m == 0 || self.n == 0 {
            BreakdownClass::I
        } else if self.m == self.n {
            BreakdownClass::II
        } else {
            BreakdownClass::III
        }
    }

    /// Apply `step` after `self`, multiplying component-wise
    pub const fn compose(self, step: Breakdown) -> Breakdown {
        Breakdown::new(self.m * step.m, self.n * step.n)
    }

    pub const fn geodesic_face_count(&self) -> usize {
        20 * self.t_number() as usize
    }

    pub const fn geodesic_edge_count(&self) -> usize {
        30 * self.t_number() as usize
    }

    pub const fn geodesic_vertex_count(&self) -> usize {
        10 * self.t_number() as usize + 2
    }

    /// Goldberg faces: one per geodesic vertex
    pub const fn goldberg_face_count(&self) -> usize {
        self.geodesic_vertex_count()
    }

    pub const fn goldberg_edge_count(&self) -> usize {
        self.geodesic_edge_count()
    }

    /// Goldberg vertices: one per geodesic face
    pub const fn goldberg_vertex_count(&self) -> usize {
        self.geodesic_face_count()
    }
}

impl Default for Breakdown {
    fn default() -> Self {
        Breakdown::IDENTITY
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.m, self.n)
    }
}

/// A triangulated polyhedron together with its running breakdown
#[derive(Debug, Clone)]
pub struct Geodesic {
    polyhedron: Polyhedron,
    breakdown: Breakdown,
}

impl Geodesic {
    /// The icosahedron at breakdown `(1, 0)`
    pub fn icosahedral() -> Self {
        Geodesic {
            polyhedron: Polyhedron::icosahedron(),
            breakdown: Breakdown::IDENTITY,
        }
    }

    /// Wrap an existing triangulated mesh that already has `breakdown`
    pub const fn from_polyhedron(polyhedron: Polyhedron, breakdown: Breakdown) -> Self {
        Geodesic {
            polyhedron,
            breakdown,
        }
    }

    #[inline]
    pub const fn polyhedron(&self) -> &Polyhedron {
        &self.polyhedron
    }

    pub fn into_polyhedron(self) -> Polyhedron {
        self.polyhedron
    }

    #[inline]
    pub const fn breakdown(&self) -> Breakdown {
        self.breakdown
    }

    /// Run the integrity battery against the current mesh
    pub fn check_integrity(&self) -> Vec<IntegrityViolation> {
        self.polyhedron.check_integrity()
    }

    /// **Class I subdivision in place**
    ///
    /// Splits every edge into `m` segments and every triangle into `m²`
    /// triangles with the parent's winding, then multiplies the running
    /// breakdown by `(m, n)`.
    ///
    /// Only `(2, 0)` refines; `(1, 0)` is a no-op. Class II (`m = n`),
    /// Class III (`n ≠ 0`) and every other frequency fail with
    /// [`MeshError::UnsupportedBreakdown`] before anything is touched. An
    /// edge no face borders fails with [`MeshError::NonManifoldEdge`], also
    /// before any mutation. Errors met while building the new topology leave
    /// the geodesic unchanged too.
    pub fn subdivide(&mut self, m: u32, n: u32) -> MeshResult<()> {
        if !breakdown_needs_work(m, n)? {
            return Ok(());
        }

        let source = &self.polyhedron;
        if let Some(&edge) = source.edges().iter().find(|&&e| source.edge_face_count(e) == 0) {
            return Err(MeshError::NonManifoldEdge { edge, faces: 0 });
        }
        debug!(
            "Subdividing geodesic {} by ({m}, {n}): {} faces, {} edges, {} vertices",
            self.breakdown,
            source.faces().len(),
            source.edges().len(),
            source.vertices().len()
        );

        let m = m as usize;
        let mut arena = source.arena().clone();
        let mut vertices = source.vertices().to_vec();

        // Vertices inserted along every edge, ordered from v1 to v2
        let mut insertions: HashMap<Edge, Vec<VertexId>> =
            HashMap::with_capacity(source.edges().len());
        for &edge in source.edges() {
            let ends = [arena.try_position(edge.v1())?, arena.try_position(edge.v2())?];
            let mut inserted = Vec::with_capacity(m - 1);
            for j in 1..m {
                let weights = [(m - j) as Real, j as Real];
                let v = arena.allocate(geometry::weighted_centroid(&ends, &weights));
                vertices.push(v);
                inserted.push(v);
            }
            insertions.insert(edge, inserted);
        }

        let t = m * m;
        let mut faces = Vec::with_capacity(source.faces().len() * t);
        let mut edges = EdgeSet::with_capacity(source.edges().len() * t);

        for (index, face) in source.faces().iter().enumerate() {
            let &[v0, v1, v2] = face.vertices() else {
                return Err(MeshError::NonTriangularFace {
                    face: index,
                    len: face.len(),
                });
            };

            // Row r holds r + 1 slots; corners at [0][0], [m][0] and [m][m]
            let mut rows: Vec<Vec<VertexId>> =
                (0..=m).map(|r| vec![VertexId::INVALID; r + 1]).collect();
            rows[0][0] = v0;
            rows[m][0] = v1;
            rows[m][m] = v2;

            let left = inserted_along(&insertions, v0, v1)?;
            let bottom = inserted_along(&insertions, v1, v2)?;
            let right = inserted_along(&insertions, v2, v0)?;
            for i in 1..m {
                rows[i][0] = left[i - 1];
                rows[m][i] = bottom[i - 1];
                rows[i][i] = right[m - 1 - i];
            }

            // Strictly interior slots get fresh vertices
            let corners = [
                arena.try_position(v0)?,
                arena.try_position(v1)?,
                arena.try_position(v2)?,
            ];
            for r in 2..m {
                for c in 1..r {
                    let weights = [(m - r) as Real, (r - c) as Real, c as Real];
                    let v = arena.allocate(geometry::weighted_centroid(&corners, &weights));
                    vertices.push(v);
                    rows[r][c] = v;
                }
            }

            let mut emit = |a: VertexId, b: VertexId, c: VertexId| {
                let sub = Face::from_valid_loop(vec![a, b, c]);
                edges.extend(sub.edges());
                faces.push(sub);
            };
            // Upward triangles
            for r in 0..m {
                for i in 0..=r {
                    emit(rows[r][i], rows[r + 1][i], rows[r + 1][i + 1]);
                }
            }
            // Downward triangles
            for r in 1..m {
                for i in 0..r {
                    emit(rows[r][i], rows[r + 1][i + 1], rows[r][i + 1]);
                }
            }
        }

        self.polyhedron
            .replace_all(arena, vertices, edges.into_vec(), faces)?;
        self.breakdown = self.breakdown.compose(Breakdown::new(m as u32, n));

        debug!(
            "Subdivided geodesic to {}: {} faces, {} edges, {} vertices",
            self.breakdown,
            self.polyhedron.faces().len(),
            self.polyhedron.edges().len(),
            self.polyhedron.vertices().len()
        );
        Ok(())
    }

    /// Non-mutating [`subdivide`](Self::subdivide)
    pub fn subdivided(&self, m: u32, n: u32) -> MeshResult<Geodesic> {
        let mut next = self.clone();
        next.subdivide(m, n)?;
        Ok(next)
    }
}

/// Validate `(m, n)`; `Ok(false)` means the breakdown is the identity
fn breakdown_needs_work(m: u32, n: u32) -> MeshResult<bool> {
    let reject = |reason: &'static str| Err(MeshError::UnsupportedBreakdown { m, n, reason });
    if m == n {
        return reject("Class II breakdowns are not supported");
    }
    if n != 0 {
        return reject("Class III breakdowns are not supported");
    }
    match m {
        1 => Ok(false),
        2 => Ok(true),
        _ => reject("only the (2, 0) Class I breakdown is supported"),
    }
}

/// Vertices inserted on the edge traversed from `from` to `to`, in that order
fn inserted_along(
    insertions: &HashMap<Edge, Vec<VertexId>>,
    from: VertexId,
    to: VertexId,
) -> MeshResult<Vec<VertexId>> {
    let edge = Edge::new(from, to);
    if let Some(inserted) = insertions.get(&edge) {
        return Ok(inserted.clone());
    }
    match insertions.get(&edge.reversed()) {
        Some(inserted) => Ok(inserted.iter().rev().copied().collect()),
        None => Err(MeshError::MissingEdge(edge.canonicalized())),
    }
}

/// Canonical edges deduplicated in first-seen order
struct EdgeSet {
    seen: HashSet<Edge>,
    order: Vec<Edge>,
}

impl EdgeSet {
    fn with_capacity(capacity: usize) -> Self {
        EdgeSet {
            seen: HashSet::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    fn extend(&mut self, edges: impl IntoIterator<Item = Edge>) {
        for e in edges {
            if self.seen.insert(e) {
                self.order.push(e);
            }
        }
    }

    fn into_vec(self) -> Vec<Edge> {
        self.order
    }
}
