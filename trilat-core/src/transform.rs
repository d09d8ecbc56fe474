/// Rigid change of basis into and out of the canonical trilateration frame
///
/// The canonical frame puts sphere A at the origin, sphere B on the positive
/// x-axis and sphere C in the xy-plane. Getting there takes a translation
/// followed by three plane rotations, each chosen to zero one coordinate.
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::error::{DegenerateStage, Result, TrilaterationError};
use crate::geometry::Sphere;

/// Rotate the (y, z) plane so that `atan2(z, y)` grows by `angle`
pub fn x_rotation(angle: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle)
}

/// Rotate the (x, z) plane so that `atan2(z, x)` grows by `angle`.
///
/// This is a right-handed rotation about -y.
pub fn y_rotation(angle: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), -angle)
}

/// Rotate the (x, y) plane so that `atan2(y, x)` grows by `angle`
pub fn z_rotation(angle: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle)
}

/// Angles (in radians) measured while aligning the sphere centers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAngles {
    pub y: f64,
    pub z: f64,
    pub x: f64,
}

impl RotationAngles {
    pub fn new(y: f64, z: f64, x: f64) -> Self {
        Self { y, z, x }
    }

    pub fn zero() -> Self {
        Self {
            y: 0.0,
            z: 0.0,
            x: 0.0,
        }
    }

    /// `(y, z, x)` in degrees, for display
    pub fn to_degrees(&self) -> (f64, f64, f64) {
        (self.y.to_degrees(), self.z.to_degrees(), self.x.to_degrees())
    }
}

impl Default for RotationAngles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Translation plus the three alignment angles.
///
/// `forward` translates by `-translation` then rotates by `-y`, `-z`, `-x`.
/// `inverse` undoes that: rotations by `+x`, `+z`, `+y`, then `+translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    translation: Vector3<f64>,
    angles: RotationAngles,
}

impl RigidTransform {
    pub fn new(translation: Vector3<f64>, angles: RotationAngles) -> Self {
        Self {
            translation,
            angles,
        }
    }

    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), RotationAngles::zero())
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.translation
    }

    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    /// Map a point from the caller's frame into the canonical frame
    pub fn forward(&self, point: &Point3<f64>) -> Point3<f64> {
        let p = point - self.translation;
        let p = y_rotation(-self.angles.y) * p;
        let p = z_rotation(-self.angles.z) * p;
        x_rotation(-self.angles.x) * p
    }

    /// Map a canonical-frame point back into the caller's frame
    pub fn inverse(&self, point: &Point3<f64>) -> Point3<f64> {
        let p = x_rotation(self.angles.x) * point;
        let p = z_rotation(self.angles.z) * p;
        let p = y_rotation(self.angles.y) * p;
        p + self.translation
    }

    /// Homogeneous matrix equivalent of [`RigidTransform::forward`]
    pub fn forward_matrix(&self) -> Matrix4<f64> {
        x_rotation(-self.angles.x).to_homogeneous()
            * z_rotation(-self.angles.z).to_homogeneous()
            * y_rotation(-self.angles.y).to_homogeneous()
            * Matrix4::new_translation(&-self.translation)
    }

    /// Homogeneous matrix equivalent of [`RigidTransform::inverse`]
    pub fn inverse_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.translation)
            * y_rotation(self.angles.y).to_homogeneous()
            * z_rotation(self.angles.z).to_homogeneous()
            * x_rotation(self.angles.x).to_homogeneous()
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Three spheres moved into the canonical frame, plus the transform that did it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedFrame {
    pub a: Sphere,
    pub b: Sphere,
    pub c: Sphere,
    pub transform: RigidTransform,
}

/// Move A to the origin, B onto the positive x-axis and C into the xy-plane.
///
/// Fails with `NumericDegeneracy` when the pivot of any step is within
/// `config.epsilon()` of zero, which happens for coincident or collinear centers.
///
/// The y step only needs `|B - A| > epsilon`, not `|B.x - A.x| > epsilon`:
/// `atan2(z, 0)` is well defined, so B directly above or below A is aligned
/// rather than rejected. This deliberately accepts inputs a stricter
/// `B.x` pivot check would refuse.
pub fn align(a: &Sphere, b: &Sphere, c: &Sphere, config: &SolverConfig) -> Result<AlignedFrame> {
    let eps = config.epsilon();
    let translation = a.center.coords;

    let b1 = b.center - translation;
    let c1 = c.center - translation;
    if b1.coords.norm() <= eps {
        debug!(stage = %DegenerateStage::YRotation, "B coincides with A");
        return Err(TrilaterationError::NumericDegeneracy {
            stage: DegenerateStage::YRotation,
        });
    }

    let y_angle = b1.z.atan2(b1.x);
    let rotate = y_rotation(-y_angle);
    let (b2, c2) = (rotate * b1, rotate * c1);

    let z_angle = b2.y.atan2(b2.x);
    let rotate = z_rotation(-z_angle);
    let (b3, c3) = (rotate * b2, rotate * c2);
    // Both rotations preserve length, so B now sits at (|B - A|, 0, 0)
    debug_assert!(b3.x > eps, "B must land on the positive x-axis");

    if c3.y.hypot(c3.z) <= eps {
        debug!(stage = %DegenerateStage::XRotation, "C is collinear with A and B");
        return Err(TrilaterationError::NumericDegeneracy {
            stage: DegenerateStage::XRotation,
        });
    }

    let x_angle = c3.z.atan2(c3.y);
    let rotate = x_rotation(-x_angle);
    let (b4, c4) = (rotate * b3, rotate * c3);

    let angles = RotationAngles::new(y_angle, z_angle, x_angle);
    trace!(?angles, ?b4, ?c4, "aligned sphere centers");

    Ok(AlignedFrame {
        a: a.moved_to(Point3::origin()),
        b: b.moved_to(b4),
        c: c.moved_to(c4),
        transform: RigidTransform::new(translation, angles),
    })
}

/// Map a canonical-frame point back to the frame the spheres were given in
pub fn unalign(
    point: &Point3<f64>,
    angles: RotationAngles,
    translation: Vector3<f64>,
) -> Point3<f64> {
    RigidTransform::new(translation, angles).inverse(point)
}
