//! **Geodesic and Goldberg polyhedra** built from an icosahedral seed.
//!
//! The crate grows closed sphere-like meshes in three steps:
//! an [icosahedron](polyhedron::Polyhedron::icosahedron) seed, repeated
//! Class I [geodesic subdivision](geodesic::Geodesic::subdivide), and the
//! [Goldberg dual](goldberg::GoldbergPolyhedron::from_geodesic) of the
//! result. An [integrity battery](polyhedron::integrity) verifies the
//! icosahedral invariants after each transform.
//!
//! Vertices are identities allocated from an arena owned by each mesh, so
//! unrelated meshes can be built independently.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **hashmap**: use hashbrown for canonical sets and adjacency indices
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod geodesic;
pub mod geometry;
pub mod goldberg;
pub mod polyhedron;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{IntegrityViolation, MeshError, MeshResult};
pub use geodesic::{Breakdown, BreakdownClass, Geodesic};
pub use goldberg::GoldbergPolyhedron;
pub use polyhedron::Polyhedron;
pub use polyhedron::edge::Edge;
pub use polyhedron::face::Face;
pub use polyhedron::integrity::IntegrityChecker;
pub use polyhedron::manifold::ManifoldAnalysis;
pub use polyhedron::vertex::{VertexArena, VertexId};

/// The icosahedron seed mesh
pub fn build_icosahedron() -> Polyhedron {
    Polyhedron::icosahedron()
}

/// A copy of `geodesic` subdivided by `(m, n)`; see [`Geodesic::subdivide`]
pub fn subdivide(geodesic: &Geodesic, m: u32, n: u32) -> MeshResult<Geodesic> {
    geodesic.subdivided(m, n)
}

/// The Goldberg dual of `geodesic`
pub fn to_goldberg_dual(geodesic: &Geodesic) -> MeshResult<GoldbergPolyhedron> {
    GoldbergPolyhedron::from_geodesic(geodesic)
}

/// Every icosahedral invariant `polyhedron` violates
pub fn check_integrity(polyhedron: &Polyhedron) -> Vec<IntegrityViolation> {
    polyhedron.check_integrity()
}
