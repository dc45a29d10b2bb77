//! Conversions between RAPID frames and nalgebra geometric types when the
//! `nalgebra-support` feature is enabled.
//!
//! ```toml
//! [dependencies]
//! abb_rapid = { version = "0.1", features = ["nalgebra-support"] }
//! ```
//!
//! RAPID stores orientations as `[q1, q2, q3, q4]` with `q1` the scalar
//! part, which maps onto nalgebra's `Quaternion::new(w, i, j, k)` directly.
//! Converting into nalgebra renormalizes the quaternion; positions are kept
//! in millimetres.
//!
//! ```rust,ignore
//! use abb_rapid::RobotTarget;
//! use nalgebra::Isometry3;
//!
//! let target = RobotTarget::default();
//! let iso: Isometry3<f64> = target.isometry();
//! ```

#[cfg(feature = "nalgebra-support")]
use crate::{Pose, RobotTarget};

#[cfg(feature = "nalgebra-support")]
use nalgebra::{Isometry3, Quaternion, Translation3, UnitQuaternion};

#[cfg(feature = "nalgebra-support")]
fn rotation(q: &[f64; 4]) -> UnitQuaternion<f64> {
    UnitQuaternion::from_quaternion(Quaternion::new(q[0], q[1], q[2], q[3]))
}

#[cfg(feature = "nalgebra-support")]
impl From<Pose> for Isometry3<f64> {
    fn from(pose: Pose) -> Self {
        let translation = Translation3::new(pose.trans[0], pose.trans[1], pose.trans[2]);
        Isometry3::from_parts(translation, rotation(&pose.rot))
    }
}

#[cfg(feature = "nalgebra-support")]
impl From<Isometry3<f64>> for Pose {
    fn from(iso: Isometry3<f64>) -> Self {
        let q = iso.rotation.quaternion();
        Pose {
            trans: [iso.translation.x, iso.translation.y, iso.translation.z],
            rot: [q.w, q.i, q.j, q.k],
        }
    }
}

#[cfg(feature = "nalgebra-support")]
impl RobotTarget {
    /// TCP pose of a cartesian target. For `MoveAbsJ` targets this is the
    /// identity, since joint angles carry no cartesian pose.
    pub fn isometry(&self) -> Isometry3<f64> {
        Pose {
            trans: self.position,
            rot: self.orientation,
        }
        .into()
    }
}

#[cfg(all(test, feature = "nalgebra-support"))]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_about_z() {
        let half = std::f64::consts::FRAC_1_SQRT_2;
        let pose = Pose {
            trans: [100.0, 0.0, 50.0],
            rot: [half, 0.0, 0.0, half],
        };
        let iso: Isometry3<f64> = pose.into();
        let p = iso.transform_point(&nalgebra::Point3::new(10.0, 0.0, 0.0));
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
        assert!((p.z - 50.0).abs() < 1e-9);

        let back: Pose = iso.into();
        for (a, b) in back.rot.iter().zip(pose.rot.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
        assert_eq!(back.trans, pose.trans);
    }

    #[test]
    fn test_target_isometry_uses_position() {
        let target = RobotTarget {
            position: [1.0, 2.0, 3.0],
            ..RobotTarget::default()
        };
        let iso = target.isometry();
        assert_eq!(iso.translation.vector, nalgebra::Vector3::new(1.0, 2.0, 3.0));
        assert!(iso.rotation.angle().abs() < 1e-12);
    }
}
