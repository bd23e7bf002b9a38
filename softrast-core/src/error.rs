/// Error types for mesh loading and framebuffer allocation
use thiserror::Error;

/// Mesh construction and loading errors
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A triangle refers to a vertex that does not exist
    #[error("Vertex index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// The index list does not split into whole triangles
    #[error("Index count {index_count} is not a multiple of 3")]
    IncompleteTriangle { index_count: usize },
}

/// Framebuffer allocation errors
#[derive(Error, Debug)]
pub enum FramebufferError {
    #[error("Framebuffer size {width}x{height} overflows")]
    TooLarge { width: u32, height: u32 },

    #[error("Failed to allocate a {width}x{height} framebuffer")]
    Allocation { width: u32, height: u32 },
}
