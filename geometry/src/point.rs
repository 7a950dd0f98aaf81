use std::{
    fmt,
    ops::{Add, Sub},
};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Vec3;

/// An absolute position in 3D space.
///
/// Points and vectors share a representation but not a meaning: the difference of two points
/// is a [`Vec3`], and a point converts to the vector from the origin to it.
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
pub struct P3(DVec3);

impl P3 {
    pub const ORIGIN: Self = Self(DVec3::ZERO);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    pub fn to_vector(self) -> Vec3 {
        self.0.into()
    }
}

impl Sub for P3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        (self.0 - rhs.0).into()
    }
}

impl Add for P3 {
    type Output = P3;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<Vec3> for P3 {
    type Output = P3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self(self.0 + *rhs)
    }
}

impl Sub<Vec3> for P3 {
    type Output = P3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self(self.0 - *rhs)
    }
}

impl From<Vec3> for P3 {
    fn from(v: Vec3) -> Self {
        Self(*v)
    }
}

impl From<P3> for Vec3 {
    fn from(p: P3) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64, f64)> for P3 {
    fn from(p: (f64, f64, f64)) -> Self {
        Self(p.into())
    }
}

impl From<P3> for (f64, f64, f64) {
    fn from(p: P3) -> Self {
        p.0.into()
    }
}

impl fmt::Display for P3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
