/// CPU-side pixel buffer the rasterizer draws into
use crate::color::Color;
use crate::error::FramebufferError;
use crate::math::Vec2;

/// Row-major grid of pixels, addressed as `width * y + x`
#[derive(Debug, Clone, Default)]
pub struct Framebuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    pub const BYTES_PER_PIXEL: usize = std::mem::size_of::<Color>();

    pub fn new(width: u32, height: u32) -> Result<Self, FramebufferError> {
        let mut framebuffer = Self::default();
        framebuffer.resize(width, height)?;
        Ok(framebuffer)
    }

    /// Reallocate for a new size. Previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FramebufferError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|len| len.checked_mul(Self::BYTES_PER_PIXEL).is_some())
            .ok_or(FramebufferError::TooLarge { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| FramebufferError::Allocation { width, height })?;
        pixels.resize(len, Color::BLACK);

        self.pixels = pixels;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels as a float vector, for projection
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row length in bytes
    pub fn stride(&self) -> usize {
        self.width as usize * Self::BYTES_PER_PIXEL
    }

    pub fn offset(&self, x: u32, y: u32) -> usize {
        self.width as usize * y as usize + x as usize
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.offset(x, y)])
    }

    /// Write one pixel; coordinates outside the buffer are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let index = self.offset(x, y);
            self.pixels[index] = color;
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Packed BGRA bytes, `stride()` bytes per row
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_allocates_exact_bytes() {
        let mut fb = Framebuffer::new(10, 4).unwrap();
        assert_eq!(fb.as_bytes().len(), 10 * 4 * 4);
        assert_eq!(fb.stride(), 40);

        fb.resize(37, 21).unwrap();
        assert_eq!(fb.width(), 37);
        assert_eq!(fb.height(), 21);
        assert_eq!(fb.as_bytes().len(), 37 * 21 * 4);

        fb.resize(0, 5).unwrap();
        assert!(fb.is_empty());
        assert!(fb.as_bytes().is_empty());
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Color::WHITE);
        fb.resize(4, 4).unwrap();
        assert!(fb.pixels().iter().all(|&p| p == Color::BLACK));
    }

    #[test]
    fn test_row_major_addressing() {
        let mut fb = Framebuffer::new(5, 3).unwrap();
        assert_eq!(fb.offset(0, 1), 5);
        assert_eq!(fb.offset(4, 2), 14);

        fb.set_pixel(4, 2, Color::RED);
        assert_eq!(fb.pixels()[14], Color::RED);
        assert_eq!(fb.get_pixel(4, 2), Some(Color::RED));

        let bytes = fb.as_bytes();
        assert_eq!(&bytes[14 * 4..15 * 4], &[0, 0, 255, 0]);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.set_pixel(2, 0, Color::WHITE);
        fb.set_pixel(0, 7, Color::WHITE);
        assert!(fb.pixels().iter().all(|&p| p == Color::BLACK));
        assert_eq!(fb.get_pixel(2, 0), None);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(3, 3).unwrap();
        fb.clear(Color::BACKGROUND);
        assert!(fb.as_bytes().iter().all(|&b| b == 69));
    }
}
