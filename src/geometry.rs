//! Point and vector primitives the mesh algorithms are built on.
//!
//! Everything here is a thin layer over `nalgebra`'s `Point3`/`Vector3`:
//! centroids, distances, the clockwise test of two points around a center and
//! the angular ordering used to wind dual faces.

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};
use std::cmp::Ordering;

/// Centroid of the given points. The empty slice yields the origin.
pub fn centroid(points: &[Point3<Real>]) -> Point3<Real> {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<Real>, p| acc + p.coords);
    Point3::from(sum / points.len() as Real)
}

/// Centroid where each point contributes proportionally to its weight.
///
/// The weights are relative and get normalised by their sum; `points` and
/// `weights` are zipped, so surplus entries in either slice are ignored.
pub fn weighted_centroid(points: &[Point3<Real>], weights: &[Real]) -> Point3<Real> {
    let mut sum = Vector3::zeros();
    let mut total = 0.0;
    for (p, &w) in points.iter().zip(weights) {
        sum += p.coords * w;
        total += w;
    }
    if total == 0.0 {
        return Point3::origin();
    }
    Point3::from(sum / total)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: &Point3<Real>, b: &Point3<Real>) -> Real {
    (b - a).norm()
}

/// Returns `true` when turning from `a` to `b` around `center` is a
/// counter-clockwise rotation about `normal` (right-hand rule).
pub fn is_ccw(
    a: &Point3<Real>,
    b: &Point3<Real>,
    center: &Point3<Real>,
    normal: &Vector3<Real>,
) -> bool {
    let va = a - center;
    let vb = b - center;
    normal.dot(&va.cross(&vb)) > 0.0
}

/// **Angular ordering around a reference normal**
///
/// Returns the permutation of `points` that visits them counter-clockwise
/// about `normal`, measured around their own centroid.
///
/// Points are first split into two half-planes by a reference direction
/// perpendicular to `normal` (chosen from the coordinate axis least aligned
/// with it), then compared within a half-plane by the sign of
/// `normal · ((p_i - c) × (p_j - c))`. Colinear points are ordered by their
/// distance from the centroid. This makes the comparison a total order, so
/// the result does not depend on the order of the input.
///
/// A zero-length or non-finite `normal` defines no rotation; the input order
/// is returned unchanged.
pub fn sort_counter_clockwise(points: &[Point3<Real>], normal: &Vector3<Real>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    let length = normal.norm();
    if !length.is_finite() || length <= tolerance() {
        return order;
    }
    let center = centroid(points);
    let n = normal / length;
    let reference = reference_axis(&n);
    let side = n.cross(&reference);

    let offsets: Vec<Vector3<Real>> = points.iter().map(|p| p - center).collect();
    let half = |d: &Vector3<Real>| -> u8 {
        let s = d.dot(&side);
        if s > 0.0 || (s == 0.0 && d.dot(&reference) >= 0.0) {
            0
        } else {
            1
        }
    };

    order.sort_by(|&i, &j| {
        let (di, dj) = (&offsets[i], &offsets[j]);
        half(di).cmp(&half(dj)).then_with(|| {
            let turn = n.dot(&di.cross(dj));
            if turn > 0.0 {
                Ordering::Less
            } else if turn < 0.0 {
                Ordering::Greater
            } else {
                di.norm_squared()
                    .partial_cmp(&dj.norm_squared())
                    .unwrap_or(Ordering::Equal)
            }
        })
    });
    order
}

/// Unit vector perpendicular to `n`, derived from the coordinate axis least
/// aligned with it.
fn reference_axis(n: &Vector3<Real>) -> Vector3<Real> {
    let axis = if n.x.abs() <= n.y.abs() && n.x.abs() <= n.z.abs() {
        Vector3::x()
    } else if n.y.abs() <= n.z.abs() {
        Vector3::y()
    } else {
        Vector3::z()
    };
    (axis - n * n.dot(&axis)).normalize()
}

/// A point in spherical coordinates: radius, polar angle from +Z and azimuth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoordinate {
    pub r: Real,
    pub theta: Real,
    pub phi: Real,
}

impl SphericalCoordinate {
    /// Converts a cartesian point. The origin maps to `r = 0, theta = 0`.
    pub fn from_point(p: &Point3<Real>) -> Self {
        let r = p.coords.norm();
        let theta = if r == 0.0 { 0.0 } else { (p.z / r).acos() };
        let phi = p.y.atan2(p.x);
        SphericalCoordinate { r, theta, phi }
    }

    /// Back to cartesian coordinates
    pub fn to_point(&self) -> Point3<Real> {
        let (st, ct) = self.theta.sin_cos();
        let (sp, cp) = self.phi.sin_cos();
        Point3::new(self.r * st * cp, self.r * st * sp, self.r * ct)
    }
}
