//! **Vertex identities and the position arena**
//!
//! A [`VertexId`] is an opaque, arena-relative identity. It carries no
//! geometry; positions live in the [`VertexArena`] owned by the mesh that
//! allocated the identity. Identities start at 1 and increase monotonically,
//! identity 0 is reserved as invalid.

use crate::errors::{MeshError, MeshResult};
use crate::float_types::Real;
use crate::geometry::SphericalCoordinate;
use nalgebra::Point3;
use std::fmt;

/// Opaque vertex identity, ordered by allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    /// The reserved invalid identity
    pub const INVALID: VertexId = VertexId(0);

    /// Wrap a raw identity. Arena allocation never hands out `0`, but raw
    /// identities can be used to describe meshes from explicit lists.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        VertexId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Slot of this identity in its arena
    #[inline]
    const fn slot(self) -> Option<usize> {
        match self.0 {
            0 => None,
            raw => Some(raw as usize - 1),
        }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Write-once position table and identity counter for one mesh-building
/// session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexArena {
    positions: Vec<Point3<Real>>,
}

impl VertexArena {
    pub const fn new() -> Self {
        VertexArena {
            positions: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VertexArena {
            positions: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a fresh identity positioned at `pos`.
    /// Non-finite coordinates are sanitised to `0.0`.
    pub fn allocate(&mut self, mut pos: Point3<Real>) -> VertexId {
        for c in pos.coords.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }
        self.positions.push(pos);
        VertexId(self.positions.len() as u32)
    }

    /// Position of `v`, or `None` when `v` was not allocated here
    #[inline]
    pub fn position(&self, v: VertexId) -> Option<&Point3<Real>> {
        v.slot().and_then(|slot| self.positions.get(slot))
    }

    /// Position of `v`, failing with [`MeshError::UnknownVertex`]
    #[inline]
    pub fn try_position(&self, v: VertexId) -> MeshResult<Point3<Real>> {
        self.position(v).copied().ok_or(MeshError::UnknownVertex(v))
    }

    pub fn spherical(&self, v: VertexId) -> MeshResult<SphericalCoordinate> {
        self.try_position(v)
            .map(|p| SphericalCoordinate::from_point(&p))
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.position(v).is_some()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Every allocated identity, in allocation order
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (1..=self.positions.len() as u32).map(VertexId)
    }
}
