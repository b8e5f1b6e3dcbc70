//! Index generation for sampled grids
//!
//! Winding is counter-clockwise when viewed from outside the surface, so the
//! face normal `(p1 - p0) x (p2 - p0)` agrees with the analytic normal.

use super::surface::Topology;

/// Produce the triangle list for a topology.
pub fn triangulate(topology: Topology) -> Vec<u32> {
    let mut indices = Vec::with_capacity(topology.triangle_count() * 3);

    match topology {
        Topology::QuadGrid { rows, cols } => {
            for row in 0..rows {
                for col in 0..cols {
                    let first = row * (cols + 1) + col;
                    let second = first + cols + 1;

                    // Split along the second -> first+1 diagonal
                    indices.extend_from_slice(&[
                        first,
                        first + 1,
                        second,
                        second,
                        first + 1,
                        second + 1,
                    ]);
                }
            }
        }
        Topology::Fan { segments } => {
            // Rim index segments+1 is the duplicated seam vertex
            for i in 1..=segments {
                indices.extend_from_slice(&[0, i + 1, i]);
            }
        }
    }

    indices
}
