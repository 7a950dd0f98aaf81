use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{Contains, GeometryError, Line3, P3, Parallel, Result, Shape, Vec3};

/// Plane defined by a point and a normal, `normal · p + d = 0`.
///
/// `d` is derived from the point and the normal when the plane is built, so the fields are
/// read-only. Equality is geometric: any point and any non-zero multiple of the normal describe
/// the same plane.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "PlaneDef", into = "PlaneDef")]
pub struct Plane {
    point: P3,
    normal: Vec3,
    d: f64,
}

pub const XY_PLANE: Plane = Plane::XY;
pub const YZ_PLANE: Plane = Plane::YZ;
pub const ZX_PLANE: Plane = Plane::ZX;

impl Plane {
    pub const XY: Self = Self::through_origin(Vec3::Z);
    pub const YZ: Self = Self::through_origin(Vec3::X);
    pub const ZX: Self = Self::through_origin(Vec3::Y);

    /// A zero normal is accepted but makes every point satisfy the plane equation.
    pub fn new(point: impl Into<P3>, normal: impl Into<Vec3>) -> Self {
        let (point, normal) = (point.into(), normal.into());
        if normal.is_zero() {
            warn!("Plane through {point} has a zero normal");
        }
        Self::from_parts(point, normal)
    }

    fn from_parts(point: P3, normal: Vec3) -> Self {
        let d = -normal.dot(point.to_vector());
        Self { point, normal, d }
    }

    const fn through_origin(normal: Vec3) -> Self {
        Self {
            point: P3::ORIGIN,
            normal,
            d: 0.0,
        }
    }

    /// The plane `normal · p + d = 0`.
    ///
    /// The representative point is where the plane crosses the z axis. Normals parallel to the
    /// xy plane fall back to the y axis, then the x axis. A zero normal does not describe a
    /// plane and is rejected.
    pub fn from_normal_and_d(normal: impl Into<Vec3>, d: f64) -> Result<Self> {
        let normal = normal.into();
        let point = if normal.z != 0.0 {
            P3::new(0.0, 0.0, -d / normal.z)
        } else if normal.y != 0.0 {
            P3::new(0.0, -d / normal.y, 0.0)
        } else if normal.x != 0.0 {
            P3::new(-d / normal.x, 0.0, 0.0)
        } else {
            return Err(GeometryError::invalid_argument(
                "A plane needs a non-zero normal",
            ));
        };
        Ok(Self::new(point, normal))
    }

    /// The plane through three points, oriented by `(p2 - p1) × (p3 - p1)`.
    pub fn from_points(p1: P3, p2: P3, p3: P3) -> Self {
        Self::new(p1, (p2 - p1).cross(p3 - p1))
    }

    pub fn point(&self) -> P3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn contains_point(&self, point: P3) -> bool {
        self.normal.dot(point.to_vector()) + self.d == 0.0
    }

    /// Parallelism against a shape whose kind is only known at runtime. Only planes and lines
    /// can be parallel to a plane.
    pub fn is_parallel_to(&self, other: &Shape) -> Result<bool> {
        match other {
            Shape::Plane(plane) => Ok(self.is_parallel(plane)),
            Shape::Line(line) => Ok(self.is_parallel(line)),
            other => Err(GeometryError::invalid_argument(format!(
                "Parallelism with a plane is not defined for {}",
                other.kind()
            ))),
        }
    }
}

impl Parallel<&Plane> for Plane {
    fn is_parallel(&self, other: &Plane) -> bool {
        self.normal.is_parallel_to(other.normal)
    }
}

impl Parallel<&Line3> for Plane {
    /// The line's direction is orthogonal to the normal.
    fn is_parallel(&self, line: &Line3) -> bool {
        self.normal.dot(line.direction) == 0.0
    }
}

impl Parallel<&Plane> for Line3 {
    fn is_parallel(&self, plane: &Plane) -> bool {
        plane.is_parallel(self)
    }
}

impl Contains<P3> for Plane {
    fn contains(&self, point: P3) -> bool {
        self.contains_point(point)
    }
}

impl Contains<&P3> for Plane {
    fn contains(&self, point: &P3) -> bool {
        self.contains_point(*point)
    }
}

/// The whole line lies in the plane.
impl Contains<&Line3> for Plane {
    fn contains(&self, line: &Line3) -> bool {
        self.is_parallel(line) && self.contains_point(line.origin_point())
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.is_parallel(other) && self.contains_point(other.point)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normal;
        write!(f, "{}x + {}y + {}z + {} = 0", n.x, n.y, n.z, self.d)
    }
}

#[derive(Serialize, Deserialize)]
struct PlaneDef {
    point: P3,
    normal: Vec3,
}

impl From<PlaneDef> for Plane {
    fn from(def: PlaneDef) -> Self {
        Self::new(def.point, def.normal)
    }
}

impl From<Plane> for PlaneDef {
    fn from(plane: Plane) -> Self {
        Self {
            point: plane.point,
            normal: plane.normal,
        }
    }
}
