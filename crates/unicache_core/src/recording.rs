use std::cell::RefCell;

use crate::UniformContext;

#[derive(Debug, Clone, PartialEq)]
pub enum Upload {
    Int1(u32, i32),
    Float1(u32, f32),
    Float2(u32, [f32; 2]),
    Float3(u32, [f32; 3]),
    Float4(u32, [f32; 4]),
    Matrix4(u32, bool, [f32; 16]),
}

/// Records every upload instead of talking to a GPU. Locations are plain integers.
#[derive(Default)]
pub struct RecordingContext {
    pub uploads: RefCell<Vec<Upload>>,
}

impl RecordingContext {
    pub fn count(&self) -> usize {
        self.uploads.borrow().len()
    }

    pub fn last(&self) -> Option<Upload> {
        self.uploads.borrow().last().cloned()
    }

    fn push(&self, upload: Upload) {
        self.uploads.borrow_mut().push(upload);
    }
}

impl UniformContext for RecordingContext {
    type Location = u32;

    fn uniform_1_i32(&self, location: &u32, value: i32) {
        self.push(Upload::Int1(*location, value));
    }

    fn uniform_1_f32(&self, location: &u32, value: f32) {
        self.push(Upload::Float1(*location, value));
    }

    fn uniform_2_f32(&self, location: &u32, value: &[f32; 2]) {
        self.push(Upload::Float2(*location, *value));
    }

    fn uniform_3_f32(&self, location: &u32, value: &[f32; 3]) {
        self.push(Upload::Float3(*location, *value));
    }

    fn uniform_4_f32(&self, location: &u32, value: &[f32; 4]) {
        self.push(Upload::Float4(*location, *value));
    }

    fn uniform_matrix_4_f32(&self, location: &u32, transpose: bool, value: &[f32; 16]) {
        self.push(Upload::Matrix4(*location, transpose, *value));
    }
}
