//! Exact analytic geometry in 2D and 3D: vectors, points, lines and planes.
//!
//! Comparisons are exact. Lines and planes compare by the point sets they describe, not by the
//! point and direction (or normal) they were built from.

mod error;
mod glam;
pub mod intersection;
mod line3;
mod plane;
mod point;
mod scalar_multiple;
mod shape;
pub mod shortest_distance;
mod vector;

pub use error::*;
pub use intersection::Intersection;
pub use line3::*;
pub use plane::*;
pub use point::*;
pub use scalar_multiple::*;
pub use shape::*;
pub use vector::*;

pub trait Contains<Other> {
    fn contains(&self, other: Other) -> bool;
}

/// Parallelism between lines and planes.
pub trait Parallel<Other> {
    fn is_parallel(&self, other: Other) -> bool;
}
