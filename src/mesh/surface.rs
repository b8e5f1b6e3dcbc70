//! Parametric surface abstraction shared by every primitive

use glam::{Vec2, Vec3};

/// One sampled grid vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
    /// Direction of increasing `uv.x` on the surface
    pub tangent: Vec3,
}

/// How a surface's samples are laid out and stitched into triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// `(rows + 1) * (cols + 1)` vertices in row-major order, two triangles per cell.
    ///
    /// Both the first and last row/column are sampled, so wrapped axes carry a
    /// duplicated seam.
    QuadGrid { rows: u32, cols: u32 },
    /// A hub vertex followed by `segments + 1` rim vertices, one triangle per segment.
    Fan { segments: u32 },
}

impl Topology {
    /// Number of vertices the sampler produces for this topology
    pub fn vertex_count(&self) -> usize {
        match *self {
            Topology::QuadGrid { rows, cols } => (rows as usize + 1) * (cols as usize + 1),
            Topology::Fan { segments } => segments as usize + 2,
        }
    }

    /// Number of triangles the triangulator emits for this topology
    pub fn triangle_count(&self) -> usize {
        match *self {
            Topology::QuadGrid { rows, cols } => 2 * rows as usize * cols as usize,
            Topology::Fan { segments } => segments as usize,
        }
    }

    /// Vertices after expansion, three per triangle, without overflowing on 32-bit targets
    pub fn expanded_vertex_count(&self) -> u64 {
        match *self {
            Topology::QuadGrid { rows, cols } => 6 * rows as u64 * cols as u64,
            Topology::Fan { segments } => 3 * segments as u64,
        }
    }
}

/// A surface described by closed-form equations over `(u, v)` in `[0, 1]²`.
///
/// For a [`Topology::QuadGrid`], `u` advances with the row (outer loop) and `v`
/// with the column (inner loop). For a [`Topology::Fan`], the hub is evaluated at
/// `v = 1` and the rim at `v = 0`, with `u` sweeping the rim.
pub trait ParametricSurface {
    /// Grid layout used to sample and triangulate this surface
    fn topology(&self) -> Topology;

    /// Evaluate position, normal, uv and tangent at the given parameters
    fn evaluate(&self, u: f32, v: f32) -> SurfaceVertex;
}
