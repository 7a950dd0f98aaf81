use crate::{Line3, P3, Plane, Vec2, Vec3, Vector};

/// Any of the geometric objects, for callers that only know the kind at runtime.
#[derive(Debug, Copy, Clone, PartialEq, derive_more::From)]
pub enum Shape {
    Vector(Vector),
    Point(P3),
    Line(Line3),
    Plane(Plane),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Vector(Vector::Two(_)) => "a 2D vector",
            Shape::Vector(Vector::Three(_)) => "a 3D vector",
            Shape::Point(_) => "a point",
            Shape::Line(_) => "a line",
            Shape::Plane(_) => "a plane",
        }
    }
}

impl From<Vec2> for Shape {
    fn from(v: Vec2) -> Self {
        Shape::Vector(v.into())
    }
}

impl From<Vec3> for Shape {
    fn from(v: Vec3) -> Self {
        Shape::Vector(v.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Shape::from(Vec2::new(1.0, 2.0)).kind(), "a 2D vector");
        assert_eq!(Shape::from(Vec3::X).kind(), "a 3D vector");
        assert_eq!(Shape::from(P3::ORIGIN).kind(), "a point");
        assert_eq!(Shape::from(Line3::new(Vec3::ZERO, Vec3::X)).kind(), "a line");
        assert_eq!(Shape::from(Plane::XY).kind(), "a plane");
    }
}
