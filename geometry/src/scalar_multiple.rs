use log::trace;

use crate::{Result, Vec3, Vector, vector::both_3d};

impl Vec3 {
    /// `true` if there is a single `k` with `self == other * k`.
    ///
    /// Components where `other` is zero carry no ratio; `self` must be zero there as well.
    /// If `other` is the zero vector this reduces to `self == other`.
    pub fn is_scalar_multiple_of(&self, other: Vec3) -> bool {
        let mut ratio = None;
        for (a, b) in self.to_array().into_iter().zip(other.to_array()) {
            if b == 0.0 {
                if a != 0.0 {
                    trace!("{} is not a multiple of {other}: zero component mismatch", self);
                    return false;
                }
                continue;
            }
            let r = a / b;
            match ratio {
                None => ratio = Some(r),
                Some(k) if k == r => {}
                Some(_) => return false,
            }
        }
        true
    }

    /// `true` if both vectors point along the same axis, in either orientation.
    ///
    /// Unlike [`Vec3::is_scalar_multiple_of`] this is symmetric: a zero vector is parallel
    /// only to the zero vector.
    pub fn is_parallel_to(&self, other: Vec3) -> bool {
        if self.is_zero() || other.is_zero() {
            return *self == other;
        }
        self.is_scalar_multiple_of(other)
    }
}

/// Whether `v1` is a scalar multiple of `v2`. Only defined for 3D vectors.
pub fn is_scalar_multiple(v1: impl Into<Vector>, v2: impl Into<Vector>) -> Result<bool> {
    let (a, b) = both_3d(v1.into(), v2.into(), "Scalar multiple check")?;
    Ok(a.is_scalar_multiple_of(b))
}
