use log::debug;

use crate::{Line3, P3, Parallel, Plane, XY_PLANE, YZ_PLANE, ZX_PLANE};

/// Where a line meets a plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Intersection {
    /// The line runs parallel to the plane without touching it.
    None,
    Point(P3),
    /// The line lies in the plane.
    Line(Line3),
}

impl Intersection {
    pub fn is_none(&self) -> bool {
        matches!(self, Intersection::None)
    }

    pub fn point(&self) -> Option<P3> {
        match self {
            Intersection::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn line(&self) -> Option<Line3> {
        match self {
            Intersection::Line(l) => Some(*l),
            _ => None,
        }
    }
}

/// Intersects `line` with `plane`.
///
/// The parameter `t` is solved from the plane equation. A line parallel to the plane leaves
/// `t` undefined; `t = 0` is used then, which lands on the plane only if the line's origin
/// does, and in that case the whole line lies in the plane.
pub fn line_plane(line: &Line3, plane: &Plane) -> Intersection {
    let normal = plane.normal();
    let denominator = normal.dot(line.direction);
    let t = if denominator == 0.0 {
        debug!("Line {line} is parallel to plane {plane}");
        0.0
    } else {
        (-plane.d() - normal.dot(line.origin)) / denominator
    };

    let point = line.point_at_t(t);
    // Containment first: with the sentinel `t`, this separates disjoint from coincident.
    if !plane.contains_point(point) {
        return Intersection::None;
    }
    if plane.is_parallel(line) {
        return Intersection::Line(*line);
    }
    Intersection::Point(point)
}

/// Intersects a line with the xy, yz and zx planes, in that order.
///
/// Each result may be a point, the line itself, or nothing, so callers projecting lines for
/// display must handle all three.
pub fn project_onto_canonical_planes(line: &Line3) -> [Intersection; 3] {
    [XY_PLANE, YZ_PLANE, ZX_PLANE].map(|plane| line_plane(line, &plane))
}

impl Line3 {
    pub fn intersect_plane(&self, plane: &Plane) -> Intersection {
        line_plane(self, plane)
    }
}
