/// Bounding-box triangle rasterizer with a half-plane coverage test
use crate::color::Color;
use crate::framebuffer::Framebuffer;
use crate::math::Vec2;

/// Inclusive pixel bounds of a triangle, clamped to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Integer bounds of a screen-space triangle.
///
/// Minimums are truncated and maximums rounded up, then both are clamped into
/// `[0, dimension - 1]` on each axis. A triangle entirely off one edge collapses
/// onto that edge. Returns `None` when the screen has no pixels.
pub fn bounding_box(screen_size: Vec2, triangle: &[Vec2; 3]) -> Option<BoundingBox> {
    let width = screen_size.x as i32;
    let height = screen_size.y as i32;
    if width <= 0 || height <= 0 {
        return None;
    }

    let [a, b, c] = *triangle;
    let min_x = a.x.min(b.x).min(c.x);
    let min_y = a.y.min(b.y).min(c.y);
    let max_x = a.x.max(b.x).max(c.x);
    let max_y = a.y.max(b.y).max(c.y);

    Some(BoundingBox {
        min_x: (min_x as i32).clamp(0, width - 1),
        min_y: (min_y as i32).clamp(0, height - 1),
        max_x: (max_x.ceil() as i32).clamp(0, width - 1),
        max_y: (max_y.ceil() as i32).clamp(0, height - 1),
    })
}

/// Half-plane test against the directed edges a→b, b→c, c→a.
///
/// A point is rejected as soon as it lies strictly on the positive side of an
/// edge's counter-clockwise normal; points on an edge count as inside. Only
/// triangles with positive signed area (counter-clockwise with Y up, clockwise
/// on a Y-down screen) contain any points.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    for (start, end) in [(a, b), (b, c), (c, a)] {
        let side = (end - start).perpendicular_ccw();
        if side.dot(p - start) > 0.0 {
            return false;
        }
    }
    true
}

/// Fill a projected triangle with a flat color.
///
/// Every pixel in the bounding box is sampled at its integer coordinate.
/// Covered pixels are overwritten unconditionally; there is no depth test.
/// Returns the number of pixels written.
pub fn rasterize_triangle(framebuffer: &mut Framebuffer, triangle: &[Vec2; 3], color: Color) -> usize {
    let Some(bb) = bounding_box(framebuffer.size(), triangle) else {
        return 0;
    };
    let [a, b, c] = *triangle;

    let mut written = 0;
    for y in bb.min_y..=bb.max_y {
        for x in bb.min_x..=bb.max_x {
            let p = Vec2::new(x as f32, y as f32);
            if point_in_triangle(p, a, b, c) {
                framebuffer.set_pixel(x as u32, y as u32, color);
                written += 1;
            }
        }
    }
    written
}
