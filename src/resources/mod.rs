//! GPU resources
//!
//! Uploads generated meshes and checker textures through a [`crate::backend::GraphicsBackend`].

mod mesh;
mod texture;

pub use mesh::*;
pub use texture::*;
