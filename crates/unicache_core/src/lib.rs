extern crate self as unicache_core;

pub use binding::UniformBinding;
pub use cell::BindingCell;
pub use error::UniformError;
pub use group::{CacheSettings, UniformGroup, UploadStats};
pub use kind::{Float1, Float2, Float3, Float4, Int1, Matrix4, UniformKind, ValueKind};
pub use uniforms::{UniformAttribute, UniformField, Uniforms};
pub use value::{UniformLocations, UniformValue, UniformValues};

pub mod binding;
pub mod cell;
pub mod error;
pub mod group;
pub mod kind;
pub mod uniforms;
pub mod value;

#[cfg(test)]
pub(crate) mod recording;

/// The part of a rendering context that uploads uniform values to the
/// currently bound program.
///
/// Locations are opaque handles resolved when the program was linked.
/// Implementations are expected to trust them: passing a location that does
/// not belong to the bound program is the caller's mistake and is not checked here.
pub trait UniformContext {
    type Location;

    fn uniform_1_i32(&self, location: &Self::Location, value: i32);
    fn uniform_1_f32(&self, location: &Self::Location, value: f32);
    fn uniform_2_f32(&self, location: &Self::Location, value: &[f32; 2]);
    fn uniform_3_f32(&self, location: &Self::Location, value: &[f32; 3]);
    fn uniform_4_f32(&self, location: &Self::Location, value: &[f32; 4]);

    /// Matrices are column-major. This crate always passes `transpose = false`.
    fn uniform_matrix_4_f32(&self, location: &Self::Location, transpose: bool, value: &[f32; 16]);
}
