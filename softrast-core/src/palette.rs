/// Flat per-triangle colors
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::color::Color;
use crate::geometry::Mesh;

/// One color slot per mesh index.
///
/// All three slots of a triangle hold the same color; drawing reads the slot
/// of the triangle's first index.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleColors {
    slots: Vec<Color>,
}

impl TriangleColors {
    /// Draw one opaque random color per triangle for `index_count` slots
    pub fn random<R: Rng>(index_count: usize, rng: &mut R) -> Self {
        let mut slots = vec![Color::BLACK; index_count];
        for triangle in slots.chunks_mut(3) {
            let color = Color::opaque(rng.gen(), rng.gen(), rng.gen());
            triangle.fill(color);
        }
        Self { slots }
    }

    /// Reproducible colors for every triangle of `mesh`
    pub fn seeded(mesh: &Mesh, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(mesh.indices().len(), &mut rng)
    }

    /// Same color for every triangle
    pub fn uniform(index_count: usize, color: Color) -> Self {
        Self {
            slots: vec![color; index_count],
        }
    }

    pub fn slots(&self) -> &[Color] {
        &self.slots
    }

    /// Color of triangle `triangle`, or black past the end of the table
    pub fn for_triangle(&self, triangle: usize) -> Color {
        self.slots
            .get(triangle * 3)
            .copied()
            .unwrap_or(Color::BLACK)
    }
}
