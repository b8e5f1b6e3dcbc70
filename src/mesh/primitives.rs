//! Sphere, cylinder, cone and torus surfaces
//!
//! Each primitive is a plain parameter struct implementing [`ParametricSurface`].
//! All angles sweep the full circle with the seam sample duplicated, so uv
//! coordinates run linearly from 0 to 1.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::buffers::MeshBuffers;
use super::surface::{ParametricSurface, SurfaceVertex, Topology};
use crate::error::{ensure_index_range, ensure_positive, ensure_segments, GeometryResult};

/// Direction of increasing angle around the Y axis
fn circle_tangent(angle: f32) -> Vec3 {
    Vec3::new(-angle.sin(), 0.0, angle.cos())
}

/// UV sphere centered at the origin with its poles on the Y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    /// Subdivisions from pole to pole
    pub lat_bands: u32,
    /// Subdivisions around the equator
    pub long_bands: u32,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius: 0.5,
            lat_bands: 24,
            long_bands: 24,
        }
    }
}

impl Sphere {
    pub fn new(radius: f32, lat_bands: u32, long_bands: u32) -> Self {
        Self {
            radius,
            lat_bands,
            long_bands,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_bands(mut self, lat_bands: u32, long_bands: u32) -> Self {
        self.lat_bands = lat_bands;
        self.long_bands = long_bands;
        self
    }

    pub fn validate(&self) -> GeometryResult<()> {
        ensure_positive("radius", self.radius)?;
        ensure_segments("lat_bands", self.lat_bands)?;
        ensure_segments("long_bands", self.long_bands)?;
        ensure_index_range("long_bands", self.topology().expanded_vertex_count())
    }

    pub fn generate(&self) -> GeometryResult<MeshBuffers> {
        self.validate()?;
        Ok(super::build_mesh(self).with_name("sphere"))
    }
}

impl ParametricSurface for Sphere {
    fn topology(&self) -> Topology {
        Topology::QuadGrid {
            rows: self.lat_bands,
            cols: self.long_bands,
        }
    }

    fn evaluate(&self, u: f32, v: f32) -> SurfaceVertex {
        let theta = u * PI;
        let phi = v * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        let normal = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);

        SurfaceVertex {
            position: normal * self.radius,
            normal,
            uv: Vec2::new(v, u),
            tangent: circle_tangent(phi),
        }
    }
}

/// Open cylinder (side wall only) centered at the origin along the Y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            radius: 0.3,
            height: 0.8,
            segments: 32,
        }
    }
}

impl Cylinder {
    pub fn new(radius: f32, height: f32, segments: u32) -> Self {
        Self {
            radius,
            height,
            segments,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    pub fn validate(&self) -> GeometryResult<()> {
        ensure_positive("radius", self.radius)?;
        ensure_positive("height", self.height)?;
        ensure_segments("segments", self.segments)?;
        ensure_index_range("segments", self.topology().expanded_vertex_count())
    }

    pub fn generate(&self) -> GeometryResult<MeshBuffers> {
        self.validate()?;
        Ok(super::build_mesh(self).with_name("cylinder"))
    }
}

impl ParametricSurface for Cylinder {
    // Each angular sample is a ring of two vertices: bottom then top.
    fn topology(&self) -> Topology {
        Topology::QuadGrid {
            rows: self.segments,
            cols: 1,
        }
    }

    fn evaluate(&self, u: f32, v: f32) -> SurfaceVertex {
        let theta = u * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let normal = Vec3::new(cos_theta, 0.0, sin_theta);

        SurfaceVertex {
            position: Vec3::new(
                self.radius * cos_theta,
                (v - 0.5) * self.height,
                self.radius * sin_theta,
            ),
            normal,
            uv: Vec2::new(u, v),
            tangent: circle_tangent(theta),
        }
    }
}

/// Cone with its apex on +Y and an open base on -Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

impl Default for Cone {
    fn default() -> Self {
        Self {
            radius: 0.4,
            height: 0.7,
            segments: 32,
        }
    }
}

impl Cone {
    pub fn new(radius: f32, height: f32, segments: u32) -> Self {
        Self {
            radius,
            height,
            segments,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    pub fn validate(&self) -> GeometryResult<()> {
        ensure_positive("radius", self.radius)?;
        ensure_positive("height", self.height)?;
        ensure_segments("segments", self.segments)?;
        ensure_index_range("segments", self.topology().expanded_vertex_count())
    }

    pub fn generate(&self) -> GeometryResult<MeshBuffers> {
        self.validate()?;
        Ok(super::build_mesh(self).with_name("cone"))
    }

    pub fn apex(&self) -> Vec3 {
        Vec3::new(0.0, self.height / 2.0, 0.0)
    }
}

impl ParametricSurface for Cone {
    fn topology(&self) -> Topology {
        Topology::Fan {
            segments: self.segments,
        }
    }

    /// `v` runs from the base ring (0) to the apex (1).
    fn evaluate(&self, u: f32, v: f32) -> SurfaceVertex {
        // The apex is singular; it gets a fixed up normal and centered uv.
        if v >= 1.0 {
            return SurfaceVertex {
                position: self.apex(),
                normal: Vec3::Y,
                uv: Vec2::new(0.5, 1.0),
                tangent: Vec3::X,
            };
        }

        let theta = u * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let ring_radius = self.radius * (1.0 - v);
        let slant = (self.radius * self.radius + self.height * self.height).sqrt();

        SurfaceVertex {
            position: Vec3::new(
                ring_radius * cos_theta,
                (v - 0.5) * self.height,
                ring_radius * sin_theta,
            ),
            normal: Vec3::new(
                self.height * cos_theta / slant,
                self.radius / slant,
                self.height * sin_theta / slant,
            ),
            uv: Vec2::new(u, v),
            tangent: circle_tangent(theta),
        }
    }
}

/// Torus lying in the XZ plane with the hole along the Y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    /// Distance from the center to the middle of the tube
    pub major_radius: f32,
    /// Radius of the tube
    pub minor_radius: f32,
    /// Subdivisions around the major circle
    pub radial_segments: u32,
    /// Subdivisions around the tube
    pub tubular_segments: u32,
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            major_radius: 0.25,
            minor_radius: 0.1,
            radial_segments: 32,
            tubular_segments: 24,
        }
    }
}

impl Torus {
    pub fn new(
        major_radius: f32,
        minor_radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
    ) -> Self {
        Self {
            major_radius,
            minor_radius,
            radial_segments,
            tubular_segments,
        }
    }

    pub fn with_radii(mut self, major_radius: f32, minor_radius: f32) -> Self {
        self.major_radius = major_radius;
        self.minor_radius = minor_radius;
        self
    }

    pub fn with_segments(mut self, radial_segments: u32, tubular_segments: u32) -> Self {
        self.radial_segments = radial_segments;
        self.tubular_segments = tubular_segments;
        self
    }

    pub fn validate(&self) -> GeometryResult<()> {
        ensure_positive("major_radius", self.major_radius)?;
        ensure_positive("minor_radius", self.minor_radius)?;
        ensure_segments("radial_segments", self.radial_segments)?;
        ensure_segments("tubular_segments", self.tubular_segments)?;
        ensure_index_range("tubular_segments", self.topology().expanded_vertex_count())
    }

    pub fn generate(&self) -> GeometryResult<MeshBuffers> {
        self.validate()?;
        Ok(super::build_mesh(self).with_name("torus"))
    }
}

impl ParametricSurface for Torus {
    fn topology(&self) -> Topology {
        Topology::QuadGrid {
            rows: self.radial_segments,
            cols: self.tubular_segments,
        }
    }

    fn evaluate(&self, u: f32, v: f32) -> SurfaceVertex {
        let theta = u * TAU;
        let phi = v * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        let ring = self.major_radius + self.minor_radius * cos_phi;

        SurfaceVertex {
            position: Vec3::new(ring * cos_theta, self.minor_radius * sin_phi, ring * sin_theta),
            normal: Vec3::new(cos_phi * cos_theta, sin_phi, cos_phi * sin_theta),
            uv: Vec2::new(u, v),
            // Follows the major circle only; exact enough for basic normal mapping
            tangent: circle_tangent(theta),
        }
    }
}

/// Any of the supported primitives with its shape parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Cone(Cone),
    Torus(Torus),
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Cylinder(_) => "cylinder",
            Primitive::Cone(_) => "cone",
            Primitive::Torus(_) => "torus",
        }
    }

    pub fn validate(&self) -> GeometryResult<()> {
        match self {
            Primitive::Sphere(p) => p.validate(),
            Primitive::Cylinder(p) => p.validate(),
            Primitive::Cone(p) => p.validate(),
            Primitive::Torus(p) => p.validate(),
        }
    }

    pub fn generate(&self) -> GeometryResult<MeshBuffers> {
        match self {
            Primitive::Sphere(p) => p.generate(),
            Primitive::Cylinder(p) => p.generate(),
            Primitive::Cone(p) => p.generate(),
            Primitive::Torus(p) => p.generate(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Cylinder> for Primitive {
    fn from(cylinder: Cylinder) -> Self {
        Primitive::Cylinder(cylinder)
    }
}

impl From<Cone> for Primitive {
    fn from(cone: Cone) -> Self {
        Primitive::Cone(cone)
    }
}

impl From<Torus> for Primitive {
    fn from(torus: Torus) -> Self {
        Primitive::Torus(torus)
    }
}
