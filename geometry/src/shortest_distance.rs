//! Shortest Euclidean distances between points, lines and planes.

use crate::{GeometryError, Line3, P3, Parallel, Plane, Result, Vec3};

pub fn point_point(p1: P3, p2: P3) -> f64 {
    (p1 - p2).magnitude()
}

/// A line with a zero direction is treated as its origin point.
pub fn point_line(point: P3, line: &Line3) -> f64 {
    if line.direction.is_zero() {
        return point_point(point, line.origin_point());
    }
    (point - line.origin_point()).cross(line.direction).magnitude() / line.direction.magnitude()
}

pub fn line_line(l1: &Line3, l2: &Line3) -> f64 {
    let normal = l1.direction.cross(l2.direction);
    if normal.is_zero() {
        // Parallel, or at least one of them degenerates to a point.
        return if l2.direction.is_zero() {
            point_line(l2.origin_point(), l1)
        } else {
            point_line(l1.origin_point(), l2)
        };
    }
    (l2.origin - l1.origin).dot(normal).abs() / normal.magnitude()
}

pub fn point_plane(point: P3, plane: &Plane) -> Result<f64> {
    let normal = non_zero_normal(plane)?;
    Ok((normal.dot(point.to_vector()) + plane.d()).abs() / normal.magnitude())
}

/// Zero unless the line runs parallel to the plane.
pub fn line_plane(line: &Line3, plane: &Plane) -> Result<f64> {
    non_zero_normal(plane)?;
    if plane.is_parallel(line) {
        point_plane(line.origin_point(), plane)
    } else {
        Ok(0.0)
    }
}

/// Zero unless the planes are parallel.
pub fn plane_plane(a: &Plane, b: &Plane) -> Result<f64> {
    non_zero_normal(a)?;
    non_zero_normal(b)?;
    if a.is_parallel(b) {
        point_plane(b.point(), a)
    } else {
        Ok(0.0)
    }
}

fn non_zero_normal(plane: &Plane) -> Result<Vec3> {
    let normal = plane.normal();
    if normal.is_zero() {
        return Err(GeometryError::invalid_argument(
            "Distance to a plane with a zero normal is undefined",
        ));
    }
    Ok(normal)
}
