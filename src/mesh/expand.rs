//! Expansion of shared vertices into a non-indexed stream

use super::buffers::MeshBuffers;
use super::surface::SurfaceVertex;

/// Copy the attributes of `vertices[index]` for every entry of `indices`.
///
/// Indices come from the triangulator and always address `vertices`.
pub fn expand(vertices: &[SurfaceVertex], indices: &[u32]) -> MeshBuffers {
    let n = indices.len();
    let mut buffers = MeshBuffers {
        positions: Vec::with_capacity(n * 3),
        normals: Vec::with_capacity(n * 3),
        uvs: Vec::with_capacity(n * 2),
        tangents: Vec::with_capacity(n * 3),
        vertex_count: n as u32,
        ..Default::default()
    };

    for &index in indices {
        debug_assert!((index as usize) < vertices.len(), "index {index} out of range");
        let vertex = &vertices[index as usize];
        buffers.positions.extend_from_slice(&vertex.position.to_array());
        buffers.normals.extend_from_slice(&vertex.normal.to_array());
        buffers.uvs.extend_from_slice(&vertex.uv.to_array());
        buffers.tangents.extend_from_slice(&vertex.tangent.to_array());
    }

    buffers
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn vertex(i: f32) -> SurfaceVertex {
        SurfaceVertex {
            position: Vec3::splat(i),
            normal: Vec3::new(0.0, i, 0.0),
            uv: Vec2::new(i, -i),
            tangent: Vec3::new(i, 0.0, 0.0),
        }
    }

    #[test]
    fn test_expand_duplicates_per_index() {
        let vertices = [vertex(0.0), vertex(1.0), vertex(2.0)];
        let buffers = expand(&vertices, &[2, 0, 1, 1, 0, 2]);

        assert_eq!(buffers.vertex_count, 6);
        assert_eq!(buffers.triangle_count(), 2);
        assert_eq!(buffers.positions.len(), 18);
        assert_eq!(buffers.normals.len(), 18);
        assert_eq!(buffers.uvs.len(), 12);
        assert_eq!(buffers.tangents.len(), 18);

        assert_eq!(&buffers.positions[0..3], &[2.0, 2.0, 2.0]);
        assert_eq!(&buffers.uvs[2..4], &[0.0, -0.0]);
        assert_eq!(&buffers.normals[15..18], &[0.0, 2.0, 0.0]);
        assert_eq!(&buffers.tangents[9..12], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_expand_empty() {
        let buffers = expand(&[vertex(1.0)], &[]);
        assert!(buffers.is_empty());
        assert!(buffers.positions.is_empty());
    }
}
