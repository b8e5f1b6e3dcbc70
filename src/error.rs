//! Geometry error types

use thiserror::Error;

/// Errors raised while validating primitive parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Require a finite, strictly positive dimension.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> GeometryResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter {
            name,
            reason: format!("must be a finite value greater than zero, got {value}"),
        })
    }
}

/// Require at least one subdivision along an axis.
pub(crate) fn ensure_segments(name: &'static str, value: u32) -> GeometryResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter {
            name,
            reason: "must be at least 1".to_string(),
        })
    }
}

/// Require the expanded mesh to be addressable with `u32` vertex indices.
pub(crate) fn ensure_index_range(name: &'static str, vertex_count: u64) -> GeometryResult<()> {
    if vertex_count <= u32::MAX as u64 {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter {
            name,
            reason: format!("would expand to {vertex_count} vertices, above the u32 index limit"),
        })
    }
}
