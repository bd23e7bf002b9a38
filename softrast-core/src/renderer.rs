/// Per-frame rendering context
use crate::color::Color;
use crate::error::FramebufferError;
use crate::framebuffer::Framebuffer;
use crate::geometry::Mesh;
use crate::palette::TriangleColors;
use crate::projection::project_triangle;
use crate::raster::rasterize_triangle;
use crate::transform::RotationTransform;

/// Owns the framebuffer between resizes and draws meshes into it
#[derive(Debug)]
pub struct Renderer {
    framebuffer: Framebuffer,
    clear_color: Color,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self, FramebufferError> {
        Ok(Self {
            framebuffer: Framebuffer::new(width, height)?,
            clear_color: Color::BACKGROUND,
        })
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Reallocate the framebuffer for a new drawable size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FramebufferError> {
        log::debug!(
            "Resizing framebuffer {}x{} -> {}x{}",
            self.framebuffer.width(),
            self.framebuffer.height(),
            width,
            height
        );
        self.framebuffer.resize(width, height)
    }

    pub fn clear(&mut self) {
        self.framebuffer.clear(self.clear_color);
    }

    /// Rasterize every triangle of `mesh` in order. Later triangles overwrite
    /// earlier ones where they overlap.
    pub fn render_mesh(&mut self, mesh: &Mesh, colors: &TriangleColors, transform: &RotationTransform) {
        let screen_size = self.framebuffer.size();
        for (index, vertices) in mesh.triangles().enumerate() {
            let triangle = project_triangle(vertices, transform, screen_size);
            rasterize_triangle(&mut self.framebuffer, &triangle, colors.for_triangle(index));
        }
    }

    /// Clear, then draw: one full frame short of presenting it
    pub fn render_frame(&mut self, mesh: &Mesh, colors: &TriangleColors, transform: &RotationTransform) {
        self.clear();
        self.render_mesh(mesh, colors, transform);
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Vec3};
    use crate::raster::point_in_triangle;
    use crate::transform::Spin;

    /// A mesh whose single triangle projects to (10,10), (50,10), (30,40) on a
    /// 100x100 screen (20 px per world unit, origin at the centre).
    fn screen_triangle_mesh() -> Mesh {
        let to_world = |x: f32, y: f32| Vec3::new((x - 50.0) / 20.0, (y - 50.0) / 20.0, 0.0);
        Mesh::new(
            vec![to_world(10.0, 10.0), to_world(50.0, 10.0), to_world(30.0, 40.0)],
            vec![0, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn test_renders_triangle_end_to_end() {
        let mesh = screen_triangle_mesh();
        let colors = TriangleColors::uniform(3, Color::opaque(200, 10, 90));
        let mut renderer = Renderer::new(100, 100).unwrap().with_clear_color(Color::BLACK);
        renderer.render_frame(&mesh, &colors, &RotationTransform::identity());

        let (a, b, c) = (Vec2::new(10.0, 10.0), Vec2::new(50.0, 10.0), Vec2::new(30.0, 40.0));
        let fb = renderer.framebuffer();
        for y in 0..100 {
            for x in 0..100 {
                let inside = point_in_triangle(Vec2::new(x as f32, y as f32), a, b, c);
                let expected = if inside { colors.for_triangle(0) } else { Color::BLACK };
                assert_eq!(fb.get_pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
        assert_eq!(fb.get_pixel(30, 20), Some(colors.for_triangle(0)));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mesh = Mesh::cube(2.0);
        let colors = TriangleColors::seeded(&mesh, 3);
        let transform = Spin::default().transform();

        let mut first = Renderer::new(64, 48).unwrap();
        let mut second = Renderer::new(64, 48).unwrap();
        first.render_frame(&mesh, &colors, &transform);
        second.render_frame(&mesh, &colors, &transform);

        assert_eq!(first.framebuffer().as_bytes(), second.framebuffer().as_bytes());
        assert!(first
            .framebuffer()
            .pixels()
            .iter()
            .any(|&p| p != Color::BACKGROUND));
    }

    #[test]
    fn test_each_triangle_uses_its_own_color() {
        let mesh = screen_triangle_mesh();
        let vertices = mesh.vertices().to_vec();
        // The same triangle twice; the second entry wins
        let mesh = Mesh::new(vertices, vec![0, 1, 2, 0, 1, 2]).unwrap();
        let mut rng = rand::rngs::mock::StepRng::new(0, 0x0101_0101);
        let colors = TriangleColors::random(6, &mut rng);
        assert_ne!(colors.for_triangle(0), colors.for_triangle(1));

        let mut renderer = Renderer::new(100, 100).unwrap();
        renderer.render_frame(&mesh, &colors, &RotationTransform::identity());
        assert_eq!(renderer.framebuffer().get_pixel(30, 20), Some(colors.for_triangle(1)));
    }

    #[test]
    fn test_clear_then_resize() {
        let mut renderer = Renderer::new(8, 8).unwrap();
        renderer.clear();
        assert!(renderer
            .framebuffer()
            .pixels()
            .iter()
            .all(|&p| p == Color::BACKGROUND));

        renderer.resize(16, 4).unwrap();
        assert_eq!(renderer.framebuffer().as_bytes().len(), 16 * 4 * 4);
    }

    #[test]
    fn test_zero_sized_frame() {
        let mesh = Mesh::cube(2.0);
        let colors = TriangleColors::seeded(&mesh, 0);
        let mut renderer = Renderer::new(0, 0).unwrap();
        renderer.render_frame(&mesh, &colors, &Spin::default().transform());
        assert!(renderer.framebuffer().is_empty());
    }
}
