//! Non-indexed attribute streams ready for upload

use crate::backend::types::{VertexAttribute, VertexBufferLayout, VertexFormat};

/// One of the four per-vertex attribute streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeStream {
    Position,
    Normal,
    Uv,
    Tangent,
}

impl AttributeStream {
    /// Upload order used by [`crate::resources::GpuMesh::upload`]
    pub const ALL: [AttributeStream; 4] = [
        AttributeStream::Position,
        AttributeStream::Normal,
        AttributeStream::Uv,
        AttributeStream::Tangent,
    ];

    /// Floats per vertex
    pub fn components(&self) -> usize {
        match self {
            AttributeStream::Uv => 2,
            AttributeStream::Position | AttributeStream::Normal | AttributeStream::Tangent => 3,
        }
    }

    /// Shader location the stream is bound to
    pub fn location(&self) -> u32 {
        match self {
            AttributeStream::Position => 0,
            AttributeStream::Normal => 1,
            AttributeStream::Uv => 2,
            AttributeStream::Tangent => 3,
        }
    }

    pub fn format(&self) -> VertexFormat {
        match self.components() {
            2 => VertexFormat::Float32x2,
            _ => VertexFormat::Float32x3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributeStream::Position => "positions",
            AttributeStream::Normal => "normals",
            AttributeStream::Uv => "uvs",
            AttributeStream::Tangent => "tangents",
        }
    }

    /// Layout for a tightly packed, single-attribute vertex buffer
    pub fn layout(&self) -> VertexBufferLayout {
        VertexBufferLayout {
            array_stride: self.format().size(),
            attributes: vec![VertexAttribute {
                location: self.location(),
                format: self.format(),
                offset: 0,
            }],
        }
    }
}

/// Flat, duplicated-per-triangle vertex data.
///
/// Every stream holds `vertex_count` entries; vertex `i` of each stream belongs to
/// the same corner of triangle `i / 3`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub name: String,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub tangents: Vec<f32>,
    pub vertex_count: u32,
}

impl MeshBuffers {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count as usize / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Flat float data for a stream
    pub fn stream(&self, stream: AttributeStream) -> &[f32] {
        match stream {
            AttributeStream::Position => &self.positions,
            AttributeStream::Normal => &self.normals,
            AttributeStream::Uv => &self.uvs,
            AttributeStream::Tangent => &self.tangents,
        }
    }

    /// Stream data as bytes
    pub fn stream_bytes(&self, stream: AttributeStream) -> &[u8] {
        bytemuck::cast_slice(self.stream(stream))
    }
}
