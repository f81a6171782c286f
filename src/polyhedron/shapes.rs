//! Seed shapes as `Polyhedron`s

use super::Polyhedron;
use super::face::Face;
use super::vertex::VertexId;
use crate::float_types::{Real, TAU};
use nalgebra::Point3;

/// Vertices in each ring of the icosahedron
const RING: usize = 5;

impl Polyhedron {
    /// **Icosahedron seed mesh**
    ///
    /// Unit circumradius, poles on the Z axis. Vertex order is the top pole,
    /// the bottom pole, the five top-ring vertices and the five bottom-ring
    /// vertices; the bottom ring is rotated half a step against the top ring.
    ///
    /// ## **Wiring**
    /// ```text
    ///          top pole
    ///        /   |   \          pole caps:  (ring vertex, ccw neighbor, pole)
    ///     t0 --- t1 --- t2 ...
    ///       \   /  \   /        belt:       (t_i, b_i, t_i+1) and (b_i-1, b_i, t_i)
    ///        b0 --- b1 ...
    ///        \   |   /
    ///         bottom pole
    /// ```
    /// Every face is counter-clockwise when viewed from outside, every vertex
    /// has degree 5. 12 vertices, 30 edges, 20 faces.
    pub fn icosahedron() -> Polyhedron {
        let mut ico = Polyhedron::empty();
        let ids: Vec<VertexId> = icosahedron_positions()
            .into_iter()
            .map(|p| ico.allocate_vertex(p))
            .collect();

        let top_pole = ids[0];
        let bottom_pole = ids[1];
        let top = &ids[2..2 + RING];
        let bottom = &ids[2 + RING..2 + 2 * RING];

        // Pole caps. Seen from outside, the counter-clockwise neighbor of a
        // top-ring vertex is the next one, of a bottom-ring vertex the previous.
        for i in 0..RING {
            let next = top[(i + 1) % RING];
            ico.connect(top[i], next);
            ico.connect(top[i], top_pole);
            ico.add_face(Face::from_valid_loop(vec![top[i], next, top_pole]));
        }
        for i in 0..RING {
            let prev = bottom[(RING + i - 1) % RING];
            ico.connect(bottom[i], prev);
            ico.connect(bottom[i], bottom_pole);
            ico.add_face(Face::from_valid_loop(vec![bottom[i], prev, bottom_pole]));
        }

        // Belt: bottom vertex i sits between top vertices i and i+1
        for i in 0..RING {
            let below = bottom[i];
            let left = top[i];
            let right = top[(i + 1) % RING];
            ico.connect(below, left);
            ico.connect(below, right);
            ico.add_face(Face::from_valid_loop(vec![left, below, right]));
        }
        for i in 0..RING {
            let above = top[i];
            let left = bottom[(RING + i - 1) % RING];
            let right = bottom[i];
            ico.add_face(Face::from_valid_loop(vec![left, right, above]));
        }
        ico
    }
}

/// Regular icosahedron on the unit sphere: poles at ±Z, rings at z = ±1/√5
/// with radius 2/√5.
fn icosahedron_positions() -> [Point3<Real>; 12] {
    let sqrt5 = (5.0 as Real).sqrt();
    let h = 1.0 / sqrt5;
    let r = 2.0 / sqrt5;
    let step = TAU / RING as Real;
    let top_start = -TAU / 4.0;
    let bottom_start = top_start + step / 2.0;

    let ring = |start: Real, z: Real, i: usize| {
        let a = start + step * i as Real;
        Point3::new(r * a.cos(), r * a.sin(), z)
    };

    [
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
        ring(top_start, h, 0),
        ring(top_start, h, 1),
        ring(top_start, h, 2),
        ring(top_start, h, 3),
        ring(top_start, h, 4),
        ring(bottom_start, -h, 0),
        ring(bottom_start, -h, 1),
        ring(bottom_start, -h, 2),
        ring(bottom_start, -h, 3),
        ring(bottom_start, -h, 4),
    ]
}
