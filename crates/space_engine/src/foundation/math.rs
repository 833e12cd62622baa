//! Math utilities and types
//!
//! Provides double-precision math types for space-scale coordinates.
//! Vector and quaternion arithmetic comes from nalgebra; the extension traits
//! add the degenerate-input behavior the simulation relies on.

pub use nalgebra::{Quaternion, Vector3};

/// Double-precision 3D vector
pub type Vec3d = Vector3<f64>;

/// Double-precision quaternion (w, i, j, k)
///
/// Not wrapped in `Unit` so that components can hold unnormalized values
/// between integration steps.
pub type Quatd = Quaternion<f64>;

/// Lengths below this are treated as zero when normalizing.
pub const NORMALIZE_EPSILON: f64 = 1e-15;

/// Extension trait for [`Vec3d`]
pub trait Vec3dExt {
    /// Unit vector in the same direction, or the zero vector if the length is
    /// below [`NORMALIZE_EPSILON`]
    #[must_use]
    fn normalized_or_zero(&self) -> Vec3d;

    /// Euclidean distance between two points
    fn distance(a: &Vec3d, b: &Vec3d) -> f64;
}

impl Vec3dExt for Vec3d {
    fn normalized_or_zero(&self) -> Vec3d {
        let len = self.norm();
        if len < NORMALIZE_EPSILON {
            return Vec3d::zeros();
        }
        self * (1.0 / len)
    }

    fn distance(a: &Vec3d, b: &Vec3d) -> f64 {
        (a - b).norm()
    }
}

/// Extension trait for [`Quatd`]
pub trait QuatdExt {
    /// Unit quaternion, or identity if the length is below [`NORMALIZE_EPSILON`]
    #[must_use]
    fn normalized_or_identity(&self) -> Quatd;

    /// Rotate a vector by this quaternion (`q * (0, v) * q̄`)
    ///
    /// The quaternion is used as given; callers rotating by an unnormalized
    /// quaternion get the vector scaled by its squared length.
    fn rotate(&self, v: &Vec3d) -> Vec3d;
}

impl QuatdExt for Quatd {
    fn normalized_or_identity(&self) -> Quatd {
        let len = self.norm();
        if len < NORMALIZE_EPSILON {
            return Quatd::identity();
        }
        let inv = 1.0 / len;
        Quatd::new(self.w * inv, self.i * inv, self.j * inv, self.k * inv)
    }

    fn rotate(&self, v: &Vec3d) -> Vec3d {
        let qv = Quatd::from_imag(*v);
        let rotated = self * qv * self.conjugate();
        rotated.imag()
    }
}
