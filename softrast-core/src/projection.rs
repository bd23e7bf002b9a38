/// Orthographic projection from world space to screen space
use crate::math::{Vec2, Vec3};
use crate::transform::RotationTransform;

/// How many world units fit in the screen's height
pub const WORLD_UNITS_IN_SCREEN_HEIGHT: f32 = 5.0;

/// Project a model-space vertex to screen space.
///
/// The world origin lands on the centre of the screen. Scale is fixed by the
/// screen height, and the Y axis is not flipped: world +Y is screen +Y (down).
pub fn world_to_screen(vertex: Vec3, transform: &RotationTransform, screen_size: Vec2) -> Vec2 {
    let world = transform.to_world(vertex);
    let pixels_per_unit = screen_size.y / WORLD_UNITS_IN_SCREEN_HEIGHT;
    screen_size / 2.0 + world.drop_z() * pixels_per_unit
}

/// Project the three corners of a triangle
pub fn project_triangle(
    vertices: [Vec3; 3],
    transform: &RotationTransform,
    screen_size: Vec2,
) -> [Vec2; 3] {
    vertices.map(|v| world_to_screen(v, transform, screen_size))
}
