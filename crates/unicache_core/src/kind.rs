use std::rc::Rc;

use strum::{Display, EnumIter};

use crate::UniformContext;

/// Runtime tag of a uniform value or binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ValueKind {
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat4,
}

/// Value type, change detection and upload call of one kind of uniform.
///
/// The set of kinds is closed: [Int1], [Float1], [Float2], [Float3], [Float4]
/// and [Matrix4].
pub trait UniformKind {
    type Value;

    const KIND: ValueKind;

    /// Whether `candidate` has to be uploaded when `current` is cached.
    fn differs(current: &Self::Value, candidate: &Self::Value) -> bool;

    fn upload<C: UniformContext + ?Sized>(context: &C, location: &C::Location, value: &Self::Value);
}

#[derive(Debug, Clone, Copy)]
pub struct Int1;

#[derive(Debug, Clone, Copy)]
pub struct Float1;

#[derive(Debug, Clone, Copy)]
pub struct Float2;

#[derive(Debug, Clone, Copy)]
pub struct Float3;

#[derive(Debug, Clone, Copy)]
pub struct Float4;

/// 4x4 float matrix.
///
/// Unlike vectors, matrices are never compared element by element. A cached
/// matrix only counts as unchanged when the candidate is the very same
/// allocation, so a freshly built matrix always uploads. Callers that want
/// to skip matrix uploads keep their `Rc` around between frames.
#[derive(Debug, Clone, Copy)]
pub struct Matrix4;

impl UniformKind for Int1 {
    type Value = i32;
    const KIND: ValueKind = ValueKind::Int;

    fn differs(current: &i32, candidate: &i32) -> bool {
        current != candidate
    }

    fn upload<C: UniformContext + ?Sized>(context: &C, location: &C::Location, value: &i32) {
        context.uniform_1_i32(location, *value);
    }
}

impl UniformKind for Float1 {
    type Value = f32;
    const KIND: ValueKind = ValueKind::Float;

    fn differs(current: &f32, candidate: &f32) -> bool {
        current != candidate
    }

    fn upload<C: UniformContext + ?Sized>(context: &C, location: &C::Location, value: &f32) {
        context.uniform_1_f32(location, *value);
    }
}

macro_rules! vector_kind {
    ($kind:ident, $len:literal, $tag:ident, $upload:ident) => {
        impl UniformKind for $kind {
            type Value = [f32; $len];
            const KIND: ValueKind = ValueKind::$tag;

            fn differs(current: &Self::Value, candidate: &Self::Value) -> bool {
                current.iter().zip(candidate).any(|(a, b)| a != b)
            }

            fn upload<C: UniformContext + ?Sized>(
                context: &C,
                location: &C::Location,
                value: &Self::Value,
            ) {
                context.$upload(location, value);
            }
        }
    };
}

vector_kind!(Float2, 2, Vec2, uniform_2_f32);
vector_kind!(Float3, 3, Vec3, uniform_3_f32);
vector_kind!(Float4, 4, Vec4, uniform_4_f32);

impl UniformKind for Matrix4 {
    type Value = Rc<[f32; 16]>;
    const KIND: ValueKind = ValueKind::Mat4;

    fn differs(current: &Self::Value, candidate: &Self::Value) -> bool {
        !Rc::ptr_eq(current, candidate)
    }

    fn upload<C: UniformContext + ?Sized>(
        context: &C,
        location: &C::Location,
        value: &Self::Value,
    ) {
        context.uniform_matrix_4_f32(location, false, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_compare_elements() {
        assert!(!Float3::differs(&[1., 2., 3.], &[1., 2., 3.]));
        assert!(Float3::differs(&[1., 2., 3.], &[1., 2., 4.]));
        assert!(Float2::differs(&[0., 1.], &[1., 1.]));
        assert!(!Float4::differs(&[0.; 4], &[0.; 4]));
    }

    #[test]
    fn test_nan_always_differs() {
        assert!(Float1::differs(&f32::NAN, &f32::NAN));
        assert!(Float2::differs(&[f32::NAN, 0.], &[f32::NAN, 0.]));
    }

    #[test]
    fn test_matrices_compare_identity() {
        let matrix = Rc::new([1.; 16]);
        assert!(!Matrix4::differs(&matrix, &matrix.clone()));
        assert!(Matrix4::differs(&matrix, &Rc::new([1.; 16])));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Mat4.to_string(), "mat4");
        assert_eq!(ValueKind::Int.to_string(), "int");
    }
}
