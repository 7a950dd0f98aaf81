use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{Contains, GeometryError, P3, Parallel, Result, Vec3, Vector};

/// An infinite line in 3D space: `origin + t * direction`.
///
/// Equality is geometric. Two lines compare equal when they describe the same set of points,
/// regardless of the origin and the length or orientation of the direction they were built
/// from.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Line3 {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Line3 {
    pub fn new(origin: impl Into<Vec3>, direction: impl Into<Vec3>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// Builds a line from vectors whose dimension is only known at runtime.
    pub fn try_new(origin: impl Into<Vector>, direction: impl Into<Vector>) -> Result<Self> {
        match (origin.into(), direction.into()) {
            (Vector::Three(origin), Vector::Three(direction)) => Ok(Self::new(origin, direction)),
            (origin, direction) => Err(GeometryError::invalid_argument(format!(
                "A line needs a 3D origin and direction, got {origin} and {direction}"
            ))),
        }
    }

    /// The line through `p1` and `p2`, starting at `p1`.
    ///
    /// Identical points produce a degenerate line with a zero direction.
    pub fn from_points(p1: P3, p2: P3) -> Self {
        let direction = p2 - p1;
        if direction.is_zero() {
            warn!("Line through identical points {p1}, direction is zero");
        }
        Self::new(p1, direction)
    }

    pub fn origin_point(&self) -> P3 {
        self.origin.into()
    }

    pub fn point_at_t(&self, t: f64) -> P3 {
        (self.origin + self.direction * t).into()
    }

    /// `true` if some `t` maps onto `point`.
    ///
    /// Where the direction has a zero component, the point must match the origin in that
    /// coordinate.
    pub fn contains_point(&self, point: P3) -> bool {
        (point - self.origin_point()).is_scalar_multiple_of(self.direction)
    }
}

impl Parallel<&Line3> for Line3 {
    fn is_parallel(&self, other: &Line3) -> bool {
        self.direction.is_parallel_to(other.direction)
    }
}

impl Contains<P3> for Line3 {
    fn contains(&self, point: P3) -> bool {
        self.contains_point(point)
    }
}

impl Contains<&P3> for Line3 {
    fn contains(&self, point: &P3) -> bool {
        self.contains_point(*point)
    }
}

impl PartialEq for Line3 {
    fn eq(&self, other: &Self) -> bool {
        self.is_parallel(other) && self.contains_point(other.origin_point())
    }
}

impl fmt::Display for Line3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + t{}", self.origin, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;

    fn line() -> Line3 {
        Line3::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0))
    }

    #[test]
    fn contains_point_on_the_line() {
        let line = line();
        assert!(line.contains_point(P3::new(9.0, 12.0, 15.0)));
        assert!(!line.contains_point(P3::new(4.0, 5.0, 6.0)));
        assert!(line.contains(P3::new(1.0, 2.0, 3.0)));
        assert!(line.contains(&P3::new(-3.0, -3.0, -3.0)));
    }

    #[test]
    fn contains_point_with_zero_direction_components() {
        let line = Line3::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(line.contains_point(P3::new(1.0, -7.5, 1.0)));
        assert!(!line.contains_point(P3::new(2.0, 1.0, 1.0)));
        assert!(!line.contains_point(P3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn zero_direction_contains_only_its_origin() {
        let line = Line3::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        assert!(line.contains_point(P3::new(1.0, 2.0, 3.0)));
        assert!(!line.contains_point(P3::new(1.0, 2.0, 4.0)));
    }

    #[test]
    fn point_at_t() {
        let line = line();
        assert_eq!(line.point_at_t(0.0), P3::new(1.0, 2.0, 3.0));
        assert_eq!(line.point_at_t(2.0), P3::new(9.0, 12.0, 15.0));
        assert_eq!(line.point_at_t(-1.0), P3::new(-3.0, -3.0, -3.0));
    }

    #[test]
    fn from_points_contains_both_points() {
        let p1 = P3::new(1.0, 1.0, 1.0);
        let p2 = P3::new(3.0, -1.0, 4.0);
        let line = Line3::from_points(p1, p2);
        assert_eq!(line.direction, Vec3::new(2.0, -2.0, 3.0));
        assert!(line.contains_point(p1));
        assert!(line.contains_point(p2));
        assert_eq!(line.point_at_t(1.0), p2);
    }

    #[test]
    fn parallel_lines() {
        let line = line();
        let shifted = Line3::new(Vec3::ZERO, Vec3::new(8.0, 10.0, 12.0));
        assert!(line.is_parallel(&shifted));
        assert!(!line.is_parallel(&Line3::new(Vec3::ZERO, Vec3::new(4.0, 5.0, 7.0))));

        let axis = Line3::new(Vec3::ZERO, Vec3::Z);
        assert!(axis.is_parallel(&Line3::new(Vec3::X, Vec3::new(0.0, 0.0, -2.0))));
        assert!(!axis.is_parallel(&Line3::new(Vec3::X, Vec3::Y)));
    }

    #[test]
    fn equality_is_geometric() {
        let line = line();
        assert_eq!(line, line);

        // Another point on the line with a scaled, reversed direction.
        let same = Line3::new(line.point_at_t(2.0), line.direction * -2.0);
        assert_eq!(line, same);
        assert_eq!(same, line);

        let parallel = Line3::new(Vec3::ZERO, line.direction);
        assert_ne!(line, parallel);

        let crossing = Line3::new(line.origin, Vec3::new(1.0, 0.0, 0.0));
        assert_ne!(line, crossing);
    }

    #[test]
    fn equality_along_an_axis() {
        let axis = Line3::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(axis, Line3::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 2.0)));
        assert_ne!(axis, Line3::new(Vec3::new(0.0, 1.0, 5.0), Vec3::Z));
    }

    #[test]
    fn equality_with_a_degenerate_line_is_symmetric() {
        let point = Line3::from_points(P3::ORIGIN, P3::ORIGIN);
        let x_axis = Line3::new(Vec3::ZERO, Vec3::X);
        let y_axis = Line3::new(Vec3::ZERO, Vec3::Y);

        for axis in [x_axis, y_axis] {
            assert_eq!(point == axis, axis == point);
            assert_ne!(point, axis);
            assert!(!point.is_parallel(&axis));
            assert!(!axis.is_parallel(&point));
        }
        assert_eq!(point, Line3::new(Vec3::ZERO, Vec3::ZERO));
        assert_ne!(point, Line3::new(Vec3::X, Vec3::ZERO));
    }

    #[test]
    fn serde_keeps_origin_and_direction() {
        let json = serde_json::to_string(&line()).unwrap();
        assert_eq!(json, r#"{"origin":[1.0,2.0,3.0],"direction":[4.0,5.0,6.0]}"#);
        let line: Line3 = serde_json::from_str(&json).unwrap();
        assert_eq!(line.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(line.direction, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn try_new_requires_3d_vectors() {
        let line = Line3::try_new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)).unwrap();
        assert_eq!(line, self::line());

        let result = Line3::try_new(Vec2::new(1.0, 2.0), Vec3::new(4.0, 5.0, 6.0));
        assert!(matches!(result, Err(GeometryError::InvalidArgument { .. })));
    }

    #[test]
    fn display() {
        assert_eq!(line().to_string(), "(1, 2, 3) + t(4, 5, 6)");
    }
}
