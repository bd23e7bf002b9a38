/// Indexed triangle meshes
use crate::error::MeshError;
use crate::math::Vec3;

/// A flat triangle list: every three consecutive indices form one triangle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Build a mesh, checking that every index refers to a vertex and that the
    /// index list splits into whole triangles.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                index_count: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corner positions of each triangle, in index order
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Axis-aligned cube centred on the origin.
    ///
    /// Faces are wound counter-clockwise when seen from outside.
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Vec3::new(-half, -half, -half),
            Vec3::new(half, -half, -half),
            Vec3::new(half, half, -half),
            Vec3::new(-half, half, -half),
            Vec3::new(-half, -half, half),
            Vec3::new(half, -half, half),
            Vec3::new(half, half, half),
            Vec3::new(-half, half, half),
        ];

        let indices = vec![
            4, 5, 6, 4, 6, 7, // front (+z)
            1, 0, 3, 1, 3, 2, // back (-z)
            5, 1, 2, 5, 2, 6, // right (+x)
            0, 4, 7, 0, 7, 3, // left (-x)
            7, 6, 2, 7, 2, 3, // top (+y)
            0, 1, 5, 0, 5, 4, // bottom (-y)
        ];

        Self { vertices, indices }
    }
}
