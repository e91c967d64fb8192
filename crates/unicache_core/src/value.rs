use std::{collections::HashMap, rc::Rc};

use derive_more::From;

use crate::kind::ValueKind;

/// Uniform values computed for one draw, keyed by uniform name.
pub type UniformValues = HashMap<String, UniformValue>;

/// Uniform locations of the currently bound program, keyed by uniform name.
pub type UniformLocations<L> = HashMap<String, L>;

#[derive(Debug, Clone, PartialEq, From)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    /// Column-major 4x4 matrix. Shared so that passing the same matrix again
    /// can be recognized without comparing its contents.
    Mat4(Rc<[f32; 16]>),
}

impl UniformValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            UniformValue::Int(_) => ValueKind::Int,
            UniformValue::Float(_) => ValueKind::Float,
            UniformValue::Vec2(_) => ValueKind::Vec2,
            UniformValue::Vec3(_) => ValueKind::Vec3,
            UniformValue::Vec4(_) => ValueKind::Vec4,
            UniformValue::Mat4(_) => ValueKind::Mat4,
        }
    }
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Int(value as i32)
    }
}

impl From<[f32; 16]> for UniformValue {
    fn from(value: [f32; 16]) -> Self {
        UniformValue::Mat4(Rc::new(value))
    }
}

impl From<[[f32; 4]; 4]> for UniformValue {
    fn from(columns: [[f32; 4]; 4]) -> Self {
        UniformValue::Mat4(Rc::new(bytemuck::cast(columns)))
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_values {
    use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

    use super::UniformValue;

    impl From<Vector2<f32>> for UniformValue {
        fn from(value: Vector2<f32>) -> Self {
            UniformValue::Vec2(value.into())
        }
    }

    impl From<Vector3<f32>> for UniformValue {
        fn from(value: Vector3<f32>) -> Self {
            UniformValue::Vec3(value.into())
        }
    }

    impl From<Vector4<f32>> for UniformValue {
        fn from(value: Vector4<f32>) -> Self {
            UniformValue::Vec4(value.into())
        }
    }

    impl From<Matrix4<f32>> for UniformValue {
        fn from(value: Matrix4<f32>) -> Self {
            let columns: [[f32; 4]; 4] = value.into();
            columns.into()
        }
    }
}

/// Builds [UniformValues] from `name => value` pairs.
///
/// ```
/// let values = unicache_core::uniform_values! {
///     u_opacity => 0.5f32,
///     u_color => [1f32, 0., 0., 1.],
/// };
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! uniform_values {
    ($($name:ident => $value:expr),* $(,)?) => {{
        let mut values = $crate::UniformValues::new();
        $(
            values.insert(
                stringify!($name).to_owned(),
                $crate::UniformValue::from($value),
            );
        )*
        values
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(UniformValue::from(3), UniformValue::Int(3));
        assert_eq!(UniformValue::from(true), UniformValue::Int(1));
        assert_eq!(UniformValue::from(0.25f32).kind(), ValueKind::Float);
        assert_eq!(UniformValue::from([0f32; 3]).kind(), ValueKind::Vec3);
    }

    #[test]
    fn test_matrix_columns_are_flattened_in_order() {
        let columns = [
            [0., 1., 2., 3.],
            [4., 5., 6., 7.],
            [8., 9., 10., 11.],
            [12., 13., 14., 15.],
        ];

        let UniformValue::Mat4(matrix) = UniformValue::from(columns) else {
            panic!("expected a matrix");
        };

        assert_eq!(matrix[5], 5.);
        assert_eq!(matrix[15], 15.);
    }

    #[test]
    fn test_uniform_values_macro() {
        let values = uniform_values! {
            u_index => 7,
            u_offset => [0f32, 1.],
        };

        assert_eq!(values["u_index"], UniformValue::Int(7));
        assert_eq!(values["u_offset"], UniformValue::Vec2([0., 1.]));
    }
}
