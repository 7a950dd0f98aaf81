use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use glam::DVec3;
use serde::{Deserialize, Serialize};
use serde_tuple::{Deserialize_tuple, Serialize_tuple};

use crate::{GeometryError, Result};

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize_tuple, Deserialize_tuple)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// A 3D displacement, backed by glam's `DVec3`. Components are readable through `Deref`.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct Vec3(DVec3);

impl Vec3 {
    pub const ZERO: Self = Self(DVec3::ZERO);
    pub const X: Self = Self(DVec3::X);
    pub const Y: Self = Self(DVec3::Y);
    pub const Z: Self = Self(DVec3::Z);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    pub fn cross(&self, other: Self) -> Self {
        Self(self.0.cross(other.0))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == DVec3::ZERO
    }

    pub fn to_array(self) -> [f64; 3] {
        self.0.to_array()
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from(v: (f64, f64, f64)) -> Self {
        Self(v.into())
    }
}

impl From<Vec3> for (f64, f64, f64) {
    fn from(v: Vec3) -> Self {
        v.0.into()
    }
}

/// A vector whose dimension is only known at runtime.
///
/// Operations that combine two of these check that both sides have the same dimension and
/// report [`GeometryError::DimensionMismatch`] otherwise.
#[derive(Debug, Copy, Clone, PartialEq, derive_more::From)]
pub enum Vector {
    Two(Vec2),
    Three(Vec3),
}

impl Vector {
    pub fn dimension(&self) -> usize {
        match self {
            Vector::Two(_) => 2,
            Vector::Three(_) => 3,
        }
    }

    pub fn magnitude(&self) -> f64 {
        match self {
            Vector::Two(v) => v.magnitude(),
            Vector::Three(v) => v.magnitude(),
        }
    }

    pub fn scale(self, factor: f64) -> Self {
        match self {
            Vector::Two(v) => (v * factor).into(),
            Vector::Three(v) => (v * factor).into(),
        }
    }

    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Vector::Three(v) => Some(*v),
            Vector::Two(_) => None,
        }
    }

    pub fn try_add(self, other: impl Into<Vector>) -> Result<Self> {
        match (self, other.into()) {
            (Vector::Two(a), Vector::Two(b)) => Ok((a + b).into()),
            (Vector::Three(a), Vector::Three(b)) => Ok((a + b).into()),
            (a, b) => Err(GeometryError::dimension_mismatch(a, b)),
        }
    }

    pub fn try_sub(self, other: impl Into<Vector>) -> Result<Self> {
        match (self, other.into()) {
            (Vector::Two(a), Vector::Two(b)) => Ok((a - b).into()),
            (Vector::Three(a), Vector::Three(b)) => Ok((a - b).into()),
            (a, b) => Err(GeometryError::dimension_mismatch(a, b)),
        }
    }

    /// Componentwise equality. Comparing vectors of different dimensions is an error, not
    /// `false`.
    pub fn try_eq(&self, other: impl Into<Vector>) -> Result<bool> {
        match (*self, other.into()) {
            (Vector::Two(a), Vector::Two(b)) => Ok(a == b),
            (Vector::Three(a), Vector::Three(b)) => Ok(a == b),
            (a, b) => Err(GeometryError::dimension_mismatch(a, b)),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vector::Two(v) => fmt::Display::fmt(v, f),
            Vector::Three(v) => fmt::Display::fmt(v, f),
        }
    }
}

pub fn dot(v1: impl Into<Vector>, v2: impl Into<Vector>) -> Result<f64> {
    match (v1.into(), v2.into()) {
        (Vector::Two(a), Vector::Two(b)) => Ok(a.dot(b)),
        (Vector::Three(a), Vector::Three(b)) => Ok(a.dot(b)),
        (a, b) => Err(GeometryError::dimension_mismatch(a, b)),
    }
}

/// The cross product is only defined for 3D vectors.
pub fn cross(v1: impl Into<Vector>, v2: impl Into<Vector>) -> Result<Vec3> {
    let (a, b) = both_3d(v1.into(), v2.into(), "Cross product")?;
    Ok(a.cross(b))
}

/// Scalar projection of `v1` onto `v2`.
pub fn scalar_projection(v1: impl Into<Vector>, v2: impl Into<Vector>) -> Result<f64> {
    let v2 = v2.into();
    Ok(dot(v1, v2)? / v2.magnitude())
}

pub fn angle_between_deg(v1: impl Into<Vector>, v2: impl Into<Vector>) -> Result<f64> {
    let (v1, v2) = (v1.into(), v2.into());
    let cos = dot(v1, v2)? / (v1.magnitude() * v2.magnitude());
    Ok(cos.acos().to_degrees())
}

/// Area of the parallelogram spanned by two 3D vectors.
pub fn parallelogram_area(v1: impl Into<Vector>, v2: impl Into<Vector>) -> Result<f64> {
    let (a, b) = both_3d(v1.into(), v2.into(), "Parallelogram area")?;
    Ok(a.cross(b).magnitude())
}

pub(crate) fn both_3d(v1: Vector, v2: Vector, operation: &str) -> Result<(Vec3, Vec3)> {
    match (v1, v2) {
        (Vector::Three(a), Vector::Three(b)) => Ok((a, b)),
        _ => Err(GeometryError::invalid_argument(format!(
            "{operation} is only defined for 3D vectors"
        ))),
    }
}
