//! Procedural mesh generation
//!
//! Every primitive is a [`ParametricSurface`] and goes through the same pipeline:
//!
//! - [`sample`] evaluates the surface on its grid (seam vertices duplicated)
//! - [`triangulate`] stitches the grid into an outward-wound triangle list
//! - [`expand`] flattens the indexed grid into non-indexed [`MeshBuffers`]

mod buffers;
mod expand;
mod primitives;
mod sampler;
mod surface;
mod triangulate;

pub use buffers::{AttributeStream, MeshBuffers};
pub use expand::expand;
pub use primitives::{Cone, Cylinder, Primitive, Sphere, Torus};
pub use sampler::sample;
pub use surface::{ParametricSurface, SurfaceVertex, Topology};
pub use triangulate::triangulate;

/// Run the full sample -> triangulate -> expand pipeline for a surface.
///
/// The surface's parameters are assumed valid; the primitive types check them in
/// their `generate` methods before calling this.
pub fn build_mesh<S: ParametricSurface + ?Sized>(surface: &S) -> MeshBuffers {
    let topology = surface.topology();
    let vertices = sample(surface);
    let indices = triangulate(topology);
    let buffers = expand(&vertices, &indices);

    log::debug!(
        "Built {:?} mesh: {} grid vertices, {} triangles, {} expanded vertices",
        topology,
        vertices.len(),
        indices.len() / 3,
        buffers.vertex_count
    );

    buffers
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    /// Unit square in the XZ plane, facing +Y
    struct Patch;

    impl ParametricSurface for Patch {
        fn topology(&self) -> Topology {
            Topology::QuadGrid { rows: 2, cols: 3 }
        }

        fn evaluate(&self, u: f32, v: f32) -> SurfaceVertex {
            SurfaceVertex {
                position: Vec3::new(u, 0.0, v),
                normal: Vec3::Y,
                uv: Vec2::new(v, u),
                tangent: Vec3::X,
            }
        }
    }

    #[test]
    fn test_build_custom_surface() {
        let mesh = build_mesh(&Patch);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertex_count, 36);
        // Every triangle faces +Y
        for tri in mesh.positions.chunks(9) {
            let p0 = Vec3::from_slice(&tri[0..3]);
            let p1 = Vec3::from_slice(&tri[3..6]);
            let p2 = Vec3::from_slice(&tri[6..9]);
            assert!((p1 - p0).cross(p2 - p0).y > 0.0);
        }
    }

    #[test]
    fn test_expanded_vertices_match_grid() {
        let sphere = Sphere::new(1.0, 3, 5);
        let vertices = sample(&sphere);
        let indices = triangulate(sphere.topology());
        let mesh = build_mesh(&sphere);

        assert_eq!(mesh.vertex_count as usize, indices.len());
        for (i, &index) in indices.iter().enumerate() {
            let vertex = &vertices[index as usize];
            assert_eq!(&mesh.positions[i * 3..i * 3 + 3], &vertex.position.to_array());
            assert_eq!(&mesh.normals[i * 3..i * 3 + 3], &vertex.normal.to_array());
            assert_eq!(&mesh.uvs[i * 2..i * 2 + 2], &vertex.uv.to_array());
            assert_eq!(&mesh.tangents[i * 3..i * 3 + 3], &vertex.tangent.to_array());
        }
    }
}
