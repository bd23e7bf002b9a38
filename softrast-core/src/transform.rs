/// Euler rotation transform and the spin animation that drives it
use crate::math::{rotate, rotation_pitch, rotation_roll, rotation_yaw, Vec3};

/// Rotation around three axes (in radians)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationTransform {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl RotationTransform {
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    /// Model space to world space.
    ///
    /// Roll, then pitch, then yaw, each applied to the previous result. The
    /// matrices are never multiplied together, so the order is significant.
    pub fn to_world(&self, point: Vec3) -> Vec3 {
        let rolled = rotate(&rotation_roll(self.roll), point);
        let pitched = rotate(&rotation_pitch(self.pitch), rolled);
        rotate(&rotation_yaw(self.yaw), pitched)
    }
}

/// Continuous rotation of a single angle, fanned out over the three axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub angle: f32,
    /// Radians per second
    pub speed: f32,
}

impl Spin {
    pub const DEFAULT_ANGLE: f32 = 1.0;
    pub const DEFAULT_SPEED: f32 = 0.8;

    pub fn new(angle: f32, speed: f32) -> Self {
        Self { angle, speed }
    }

    /// Step the animation by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.angle += self.speed * dt;
    }

    pub fn transform(&self) -> RotationTransform {
        RotationTransform::new(self.angle, self.angle * 0.1, self.angle * 0.3)
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ANGLE, Self::DEFAULT_SPEED)
    }
}
