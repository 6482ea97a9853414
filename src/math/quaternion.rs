use glam::Vec3;
use std::ops::Mul;

/// Rotation quaternion `(a, x, y, z)` with scalar part `a`.
///
/// Only the algebra the camera needs is provided: Hamilton product,
/// conjugate, angle-axis construction and the sandwich rotation of a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub a: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(1.0, Vec3::ZERO);

    /// Build from scalar part and vector part
    pub const fn new(a: f32, xyz: Vec3) -> Self {
        Self {
            a,
            x: xyz.x,
            y: xyz.y,
            z: xyz.z,
        }
    }

    /// Rotation of `angle` radians about a unit `axis`
    pub fn from_angle_axis(angle: f32, axis: Vec3) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(cos, axis * sin)
    }

    /// Vector part `(x, y, z)`
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.vector())
    }

    pub fn norm(&self) -> f32 {
        (self.a * self.a + self.vector().length_squared()).sqrt()
    }

    /// Sandwich product `q * (0, v) * q*`, returning the vector part
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        (*self * Self::new(0.0, v) * self.conjugate()).vector()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product: `(a,v)(b,w) = (ab - v.w, aw + bv + v x w)`
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let v = self.vector();
        let w = rhs.vector();
        Self::new(
            self.a * rhs.a - v.dot(w),
            self.a * w + rhs.a * v + v.cross(w),
        )
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}
