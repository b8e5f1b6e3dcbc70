//! Grid sampling of parametric surfaces

use super::surface::{ParametricSurface, SurfaceVertex, Topology};

/// Evaluate `surface` over its full parametric domain.
///
/// Vertices are emitted in traversal order (outer loop over rows, inner loop over
/// columns); the triangulator's index arithmetic depends on this order.
pub fn sample<S: ParametricSurface + ?Sized>(surface: &S) -> Vec<SurfaceVertex> {
    let topology = surface.topology();
    let mut vertices = Vec::with_capacity(topology.vertex_count());

    match topology {
        Topology::QuadGrid { rows, cols } => {
            for row in 0..=rows {
                let u = row as f32 / rows as f32;
                for col in 0..=cols {
                    let v = col as f32 / cols as f32;
                    vertices.push(surface.evaluate(u, v));
                }
            }
        }
        Topology::Fan { segments } => {
            vertices.push(surface.evaluate(0.0, 1.0));
            for i in 0..=segments {
                let u = i as f32 / segments as f32;
                vertices.push(surface.evaluate(u, 0.0));
            }
        }
    }

    vertices
}
