use glam::DVec2;

use crate::Vec2;

impl From<DVec2> for Vec2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for DVec2 {
    fn from(v: Vec2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::{P3, Vec3};

    #[test]
    fn vectors_and_points_keep_their_coordinates() {
        let v = DVec3::new(1.5, -2.0, 0.25);
        assert_eq!(DVec3::from(Vec3::from(v)), v);
        assert_eq!(DVec3::from(P3::from(v)), v);
        assert_eq!(Vec2::from(DVec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
        assert_eq!(DVec2::from(Vec2::new(3.0, 4.0)).length(), 5.0);
    }
}
