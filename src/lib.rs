//! Parametric Primitives - procedural meshes packed for non-indexed drawing
//!
//! Generates spheres, cylinders, cones and tori from their parametric equations and
//! expands them into four flat attribute streams (position, normal, uv, tangent).
//!
//! # Features
//! - One generic sample -> triangulate -> expand pipeline driven by [`mesh::ParametricSurface`]
//! - Outward, counter-clockwise winding on every primitive
//! - Upload through an explicit [`backend::GraphicsBackend`], with a headless wgpu implementation
//! - Checkerboard texture synthesis for previewing uv layouts
//!
//! ```
//! use parametric_primitives::{generate, mesh::Sphere};
//!
//! let mesh = generate(&Sphere::new(1.0, 8, 16).into()).unwrap();
//! assert_eq!(mesh.vertex_count, 8 * 16 * 6);
//! ```

pub mod backend;
pub mod error;
pub mod mesh;
pub mod resources;

pub use backend::wgpu_backend::WgpuBackend;
pub use error::{GeometryError, GeometryResult};
pub use mesh::{MeshBuffers, Primitive};

/// Generate the non-indexed mesh for a primitive.
///
/// Parameters are validated before any sampling; invalid input yields
/// [`GeometryError::InvalidParameter`] and no partial output.
pub fn generate(primitive: &Primitive) -> GeometryResult<MeshBuffers> {
    primitive.generate()
}

/// Adapter power preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerPreference {
    /// Prefer a discrete GPU
    #[default]
    HighPerformance,
    /// Prefer an integrated GPU
    LowPower,
}

/// Configuration for creating a headless [`WgpuBackend`]
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Device debug label
    pub label: String,
    /// Which kind of adapter to request
    pub power_preference: PowerPreference,
    /// Request a software adapter
    pub force_fallback_adapter: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            label: "Primitive Mesh Device".to_string(),
            power_preference: PowerPreference::HighPerformance,
            force_fallback_adapter: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Cone, Cylinder, Sphere, Torus};

    #[test]
    fn test_generate_dispatches_by_kind() {
        let cases: [(Primitive, usize); 4] = [
            (Sphere::new(1.0, 2, 2).into(), 8),
            (Cylinder::new(1.0, 2.0, 4).into(), 8),
            (Cone::new(1.0, 1.0, 7).into(), 7),
            (Torus::new(1.0, 0.3, 5, 3).into(), 30),
        ];
        for (primitive, triangles) in cases {
            let mesh = generate(&primitive).unwrap();
            assert_eq!(mesh.triangle_count(), triangles, "{}", primitive.name());
            assert_eq!(mesh.vertex_count as usize, triangles * 3);
        }
    }

    #[test]
    fn test_generate_rejects_before_sampling() {
        let err = generate(&Cylinder::new(1.0, 0.0, 4).into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter `height`: must be a finite value greater than zero, got 0"
        );
    }

    #[test]
    fn test_default_device_config() {
        let config = DeviceConfig::default();
        assert_eq!(config.power_preference, PowerPreference::HighPerformance);
        assert!(!config.force_fallback_adapter);
    }
}
