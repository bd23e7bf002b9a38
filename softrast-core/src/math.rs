/// Small vector types and the per-axis rotation matrices
use nalgebra::{Matrix3, Vector3};
use std::ops::{Add, Div, Mul, Sub};

/// A 2D point or direction (screen space)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector divides by zero and yields non-finite components.
    pub fn normal(self) -> Vec2 {
        self / self.magnitude()
    }

    /// Rotate 90 degrees: `(x, y) -> (y, -x)`
    pub fn perpendicular_ccw(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// Rotate 90 degrees the other way: `(x, y) -> (-y, x)`
    pub fn perpendicular_cw(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(self, s: f32) -> Vec2 {
        Vec2::new(self.x / s, self.y / s)
    }
}

/// A 3D point (model and world space)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Orthographic drop onto the XY plane
    pub fn drop_z(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Add<Vec2> for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec2) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Sub<Vec2> for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec2) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Rotation in the Y-Z plane
pub fn rotation_roll(angle: f32) -> Matrix3<f32> {
    let (sin, cos) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, cos, -sin,
        0.0, sin, cos,
    )
}

/// Rotation in the X-Z plane
pub fn rotation_pitch(angle: f32) -> Matrix3<f32> {
    let (sin, cos) = angle.sin_cos();
    Matrix3::new(
        cos, 0.0, sin,
        0.0, 1.0, 0.0,
        -sin, 0.0, cos,
    )
}

/// Rotation in the X-Y plane
pub fn rotation_yaw(angle: f32) -> Matrix3<f32> {
    let (sin, cos) = angle.sin_cos();
    Matrix3::new(
        cos, -sin, 0.0,
        sin, cos, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Apply a matrix as a combination of its rows: `row0*v.x + row1*v.y + row2*v.z`.
///
/// This is `mᵀ·v`, not the usual row-times-column product.
pub fn rotate(m: &Matrix3<f32>, v: Vec3) -> Vec3 {
    m.tr_mul(&Vector3::from(v)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).x.abs() < 1e-5, "{:?} != {:?}", a, b);
        assert!((a - b).y.abs() < 1e-5, "{:?} != {:?}", a, b);
        assert!((a - b).z.abs() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_perpendiculars() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.perpendicular_ccw(), Vec2::new(4.0, -3.0));
        assert_eq!(v.perpendicular_cw(), Vec2::new(-4.0, 3.0));
        assert_eq!(v.dot(v.perpendicular_ccw()), 0.0);
    }

    #[test]
    fn test_magnitude_and_normal() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
        let n = v.normal();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_normal_of_zero_is_not_finite() {
        let n = Vec2::ZERO.normal();
        assert!(!n.x.is_finite());
        assert!(!n.y.is_finite());
    }

    #[test]
    fn test_vec3_with_vec2_keeps_z() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v + Vec2::new(1.0, 1.0), Vec3::new(2.0, 3.0, 3.0));
        assert_eq!(v - Vec2::new(1.0, 1.0), Vec3::new(0.0, 1.0, 3.0));
        assert_eq!(v.drop_z(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_rotate_combines_rows() {
        // Rows (1,2,3), (4,5,6), (7,8,9) weighted by (1,0,0) give the first row back
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_vec3_eq(rotate(&m, Vec3::new(1.0, 0.0, 0.0)), Vec3::new(1.0, 2.0, 3.0));
        assert_vec3_eq(rotate(&m, Vec3::new(0.0, 0.0, 1.0)), Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn test_quarter_turns() {
        // Row combination of the yaw matrix: x maps onto row0 = (cos, -sin, 0)
        let v = rotate(&rotation_yaw(FRAC_PI_2), Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_eq(v, Vec3::new(0.0, -1.0, 0.0));

        let v = rotate(&rotation_roll(FRAC_PI_2), Vec3::new(0.0, 1.0, 0.0));
        assert_vec3_eq(v, Vec3::new(0.0, 0.0, -1.0));

        let v = rotate(&rotation_pitch(FRAC_PI_2), Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_eq(v, Vec3::new(0.0, 0.0, 1.0));
    }
}
