//! Backend abstraction layer
//!
//! Provides the upload trait and types that GPU backends implement.

pub mod traits;
pub mod types;
pub mod wgpu_backend;

pub use traits::*;
pub use types::*;
