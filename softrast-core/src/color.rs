/// 32-bit pixel color
use bytemuck::{Pod, Zeroable};
use std::ops::Add;

/// One pixel, stored in B, G, R, A byte order so a slice of colors is a
/// packed BGRA image.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(u8::MAX, u8::MAX, u8::MAX, u8::MAX);
    pub const RED: Color = Color::new(u8::MAX, 0, 0, 0);
    pub const GREEN: Color = Color::new(0, u8::MAX, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, u8::MAX, 0);
    pub const BLACK: Color = Color::new(0, 0, 0, 0);
    pub const YELLOW: Color = Color::GREEN.wrapping_add(Color::RED);
    /// Mid grey, every byte 0x45
    pub const BACKGROUND: Color = Color::splat(69);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// All four bytes set to `value`
    pub const fn splat(value: u8) -> Self {
        Self::new(value, value, value, value)
    }

    /// Channel-wise addition; overflowing channels wrap around
    pub const fn wrapping_add(self, other: Color) -> Color {
        Color::new(
            self.r.wrapping_add(other.r),
            self.g.wrapping_add(other.g),
            self.b.wrapping_add(other.b),
            self.a.wrapping_add(other.a),
        )
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        self.wrapping_add(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_bgra() {
        assert_eq!(std::mem::size_of::<Color>(), std::mem::size_of::<u32>());
        let color = Color::new(1, 2, 3, 4);
        assert_eq!(bytemuck::bytes_of(&color), &[3, 2, 1, 4]);
    }

    #[test]
    fn test_yellow() {
        assert_eq!(Color::YELLOW, Color::new(255, 255, 0, 0));
    }

    #[test]
    fn test_add_wraps() {
        let sum = Color::new(200, 0, 0, 255) + Color::new(100, 1, 0, 1);
        assert_eq!(sum, Color::new(44, 1, 0, 0));
    }
}
