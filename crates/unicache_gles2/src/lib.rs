use derive_more::Deref;
use glow::HasContext;
use unicache_core::{UniformBinding, UniformContext};

pub use kind::value_kind;

mod kind;

/// Uploads uniforms through a borrowed GL context.
///
/// Uploads go to whichever program is currently bound; binding the program
/// the locations were resolved from is up to the caller.
#[derive(Deref, Clone, Copy)]
pub struct Gles<'gl>(pub &'gl glow::Context);

impl<'gl> Gles<'gl> {
    /// An empty binding for an active uniform of GL type `utype`, as reported by
    /// `glGetActiveUniform`. `None` if the type has no matching binding kind.
    pub fn binding_for(&self, utype: u32) -> Option<UniformBinding<'_, Self>> {
        value_kind(utype).map(|kind| UniformBinding::of_kind(kind, self))
    }
}

impl UniformContext for Gles<'_> {
    type Location = glow::UniformLocation;

    fn uniform_1_i32(&self, location: &glow::UniformLocation, value: i32) {
        unsafe { self.0.uniform_1_i32(Some(location), value) };
    }

    fn uniform_1_f32(&self, location: &glow::UniformLocation, value: f32) {
        unsafe { self.0.uniform_1_f32(Some(location), value) };
    }

    fn uniform_2_f32(&self, location: &glow::UniformLocation, value: &[f32; 2]) {
        unsafe { self.0.uniform_2_f32_slice(Some(location), value) };
    }

    fn uniform_3_f32(&self, location: &glow::UniformLocation, value: &[f32; 3]) {
        unsafe { self.0.uniform_3_f32_slice(Some(location), value) };
    }

    fn uniform_4_f32(&self, location: &glow::UniformLocation, value: &[f32; 4]) {
        unsafe { self.0.uniform_4_f32_slice(Some(location), value) };
    }

    fn uniform_matrix_4_f32(
        &self,
        location: &glow::UniformLocation,
        transpose: bool,
        value: &[f32; 16],
    ) {
        unsafe {
            self.0
                .uniform_matrix_4_f32_slice(Some(location), transpose, value)
        };
    }
}
