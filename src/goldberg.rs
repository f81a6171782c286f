//! Goldberg polyhedra as duals of icosahedral geodesics

use crate::errors::{MeshError, MeshResult};
use crate::float_types::{HashMap, Real, tolerance};
use crate::geodesic::{Breakdown, Geodesic};
use crate::geometry;
use crate::polyhedron::Polyhedron;
use crate::polyhedron::edge::Edge;
use crate::polyhedron::face::Face;
use crate::polyhedron::vertex::{VertexArena, VertexId};
use nalgebra::Point3;
use tracing::debug;

/// The dual of a geodesic: 12 pentagons, `10(T − 1)` hexagons and every
/// vertex of degree 3
#[derive(Debug, Clone)]
pub struct GoldbergPolyhedron {
    polyhedron: Polyhedron,
    breakdown: Breakdown,
}

impl GoldbergPolyhedron {
    /// **Dual construction**
    ///
    /// - every primal face becomes a vertex at the face centroid
    /// - every primal vertex becomes a face over the vertices of its
    ///   surrounding faces, wound counter-clockwise about the outward normal
    /// - every primal edge becomes the edge between the vertices of its two
    ///   bordering faces
    ///
    /// The dual lives in a fresh arena; the geodesic is not modified. Fails
    /// with [`MeshError::NonManifoldEdge`] if a primal edge does not border
    /// exactly two faces.
    pub fn from_geodesic(geodesic: &Geodesic) -> MeshResult<Self> {
        let primal = geodesic.polyhedron();
        debug!(
            "Building Goldberg dual of geodesic {}: {} faces, {} edges, {} vertices",
            geodesic.breakdown(),
            primal.faces().len(),
            primal.edges().len(),
            primal.vertices().len()
        );

        let mut arena = VertexArena::with_capacity(primal.faces().len());
        let mut face_vertices = Vec::with_capacity(primal.faces().len());
        for face in primal.faces() {
            face_vertices.push(arena.allocate(primal.face_center(face)?));
        }

        // primal vertex → incident faces, in face order
        let mut incident: HashMap<VertexId, Vec<usize>> =
            HashMap::with_capacity(primal.vertices().len());
        for (index, face) in primal.faces().iter().enumerate() {
            for &v in face.vertices() {
                incident.entry(v).or_default().push(index);
            }
        }

        let mut faces = Vec::with_capacity(primal.vertices().len());
        for &v in primal.vertices() {
            let around = incident.get(&v).map(Vec::as_slice).unwrap_or(&[]);
            if around.len() < 3 {
                return Err(MeshError::DegenerateFace { len: around.len() });
            }
            let normal = primal.vertex_position(v)?.coords;
            if normal.norm() <= tolerance() {
                return Err(MeshError::DegenerateVertex(v));
            }
            let points = around
                .iter()
                .map(|&f| arena.try_position(face_vertices[f]))
                .collect::<MeshResult<Vec<Point3<Real>>>>()?;
            let order = geometry::sort_counter_clockwise(&points, &normal);
            let ring = order.iter().map(|&k| face_vertices[around[k]]).collect();
            faces.push(Face::from_valid_loop(ring));
        }

        let mut edges = Vec::with_capacity(primal.edges().len());
        for &e in primal.edges() {
            let [a, b] = primal.edge_adjacent_faces(e)?;
            edges.push(Edge::canonical(face_vertices[a], face_vertices[b]));
        }

        let polyhedron = Polyhedron::new(arena, face_vertices, edges, faces)?;
        debug!(
            "Built Goldberg polyhedron: {} faces, {} edges, {} vertices",
            polyhedron.faces().len(),
            polyhedron.edges().len(),
            polyhedron.vertices().len()
        );
        Ok(GoldbergPolyhedron {
            polyhedron,
            breakdown: geodesic.breakdown(),
        })
    }

    /// Subdivide an icosahedral geodesic by `(m, n)` and take its dual
    pub fn icosahedral(m: u32, n: u32) -> MeshResult<Self> {
        let mut geodesic = Geodesic::icosahedral();
        geodesic.subdivide(m, n)?;
        GoldbergPolyhedron::from_geodesic(&geodesic)
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

    pub fn pentagon_count(&self) -> usize {
        self.count_faces_of_len(5)
    }

    pub fn hexagon_count(&self) -> usize {
        self.count_faces_of_len(6)
    }

    fn count_faces_of_len(&self, len: usize) -> usize {
        self.polyhedron
            .faces()
            .iter()
            .filter(|f| f.len() == len)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dual_of_icosahedron_is_dodecahedron() {
        let gp = GoldbergPolyhedron::icosahedral(1, 0).unwrap();
        let poly = gp.polyhedron();
        assert_eq!(poly.faces().len(), 12);
        assert_eq!(poly.edges().len(), 30);
        assert_eq!(poly.vertices().len(), 20);
        assert_eq!(gp.pentagon_count(), 12);
        assert_eq!(gp.hexagon_count(), 0);
        for &v in poly.vertices() {
            assert_eq!(poly.vertex_degree(v), 3);
        }
    }

    #[test]
    fn dual_vertices_sit_at_face_centroids() {
        let geo = Geodesic::icosahedral();
        let gp = GoldbergPolyhedron::from_geodesic(&geo).unwrap();
        for (face, &v) in geo.polyhedron().faces().iter().zip(gp.polyhedron().vertices()) {
            let expected = geo.polyhedron().face_center(face).unwrap();
            let actual = gp.polyhedron().vertex_position(v).unwrap();
            assert_relative_eq!(actual, expected, epsilon = tolerance());
        }
    }

    #[test]
    fn open_primal_mesh_is_rejected() {
        let mut poly = Polyhedron::empty();
        let a = poly.allocate_vertex(Point3::new(1.0, 0.0, 0.0));
        let b = poly.allocate_vertex(Point3::new(0.0, 1.0, 0.0));
        let c = poly.allocate_vertex(Point3::new(0.0, 0.0, 1.0));
        poly.add_edge(a, b).unwrap();
        poly.add_face_from_loop(vec![a, b, c]).unwrap();
        let geo = Geodesic::from_polyhedron(poly, Breakdown::IDENTITY);
        assert_eq!(
            GoldbergPolyhedron::from_geodesic(&geo).err(),
            Some(MeshError::DegenerateFace { len: 1 })
        );
    }

    #[test]
    fn missing_face_aborts_the_dual() {
        let mut poly = Polyhedron::icosahedron();
        let mut faces = poly.faces().to_vec();
        faces.remove(0);
        poly.set_faces(faces).unwrap();
        let geo = Geodesic::from_polyhedron(poly, Breakdown::IDENTITY);
        assert!(matches!(
            GoldbergPolyhedron::from_geodesic(&geo),
            Err(MeshError::NonManifoldEdge { faces: 1, .. })
        ));
    }
}
