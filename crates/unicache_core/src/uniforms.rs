use std::rc::Rc;

use derive_more::Constructor;

use crate::{
    binding::UniformBinding,
    group::UniformGroup,
    kind::ValueKind,
    value::{UniformValue, UniformValues},
    UniformContext,
};

pub use unicache_macro::Uniforms;

#[derive(Constructor, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformAttribute {
    pub name: &'static str,
    pub kind: ValueKind,
}

/// A set of uniforms declared together, usually derived with `#[derive(Uniforms)]`.
pub trait Uniforms {
    const FORMAT: &'static [UniformAttribute];

    /// Current field values, keyed by uniform name.
    fn values(&self) -> UniformValues;

    /// An empty group with one binding per declared uniform.
    fn group<C: UniformContext + ?Sized>(context: &C) -> UniformGroup<'_, C> {
        Self::FORMAT
            .iter()
            .map(|attribute| {
                (
                    attribute.name.to_owned(),
                    UniformBinding::of_kind(attribute.kind, context),
                )
            })
            .collect()
    }
}

impl Uniforms for () {
    const FORMAT: &'static [UniformAttribute] = &[];

    fn values(&self) -> UniformValues {
        UniformValues::new()
    }
}

/// A field type that can be used in a `#[derive(Uniforms)]` struct.
pub trait UniformField: Clone + Into<UniformValue> {
    const KIND: ValueKind;

    fn value(&self) -> UniformValue {
        self.clone().into()
    }
}

macro_rules! uniform_field {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl UniformField for $ty {
                const KIND: ValueKind = ValueKind::$kind;
            }
        )*
    };
}

uniform_field! {
    i32 => Int,
    bool => Int,
    f32 => Float,
    [f32; 2] => Vec2,
    [f32; 3] => Vec3,
    [f32; 4] => Vec4,
    [f32; 16] => Mat4,
    [[f32; 4]; 4] => Mat4,
    Rc<[f32; 16]> => Mat4,
}

#[cfg(feature = "nalgebra")]
uniform_field! {
    nalgebra::Vector2<f32> => Vec2,
    nalgebra::Vector3<f32> => Vec3,
    nalgebra::Vector4<f32> => Vec4,
    nalgebra::Matrix4<f32> => Mat4,
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{
        recording::{RecordingContext, Upload},
        value::UniformLocations,
    };

    #[derive(Clone, Default, Uniforms)]
    struct SpriteUniforms {
        #[uniforms(name = "u_matrix")]
        matrix: Rc<[f32; 16]>,
        opacity: f32,
        tint: [f32; 4],
        flip: bool,
        __padding: f32,
        #[uniforms(ignore)]
        label: String,
    }

    #[test]
    fn test_derived_format() {
        assert_eq!(
            SpriteUniforms::FORMAT,
            &[
                UniformAttribute::new("u_matrix", ValueKind::Mat4),
                UniformAttribute::new("opacity", ValueKind::Float),
                UniformAttribute::new("tint", ValueKind::Vec4),
                UniformAttribute::new("flip", ValueKind::Int),
            ]
        );
    }

    #[test]
    fn test_derived_values() {
        let uniforms = SpriteUniforms {
            opacity: 0.5,
            flip: true,
            label: "sprite".to_owned(),
            ..Default::default()
        };

        let values = uniforms.values();

        assert_eq!(values.len(), 4);
        assert_eq!(values["opacity"], UniformValue::Float(0.5));
        assert_eq!(values["flip"], UniformValue::Int(1));
        assert_eq!(values["u_matrix"], UniformValue::Mat4(uniforms.matrix.clone()));
    }

    #[test]
    fn test_derived_group_skips_unchanged_fields() {
        let ctx = RecordingContext::default();
        let mut group = SpriteUniforms::group(&ctx);
        let locations: UniformLocations<u32> = SpriteUniforms::FORMAT
            .iter()
            .enumerate()
            .map(|(i, attribute)| (attribute.name.to_owned(), i as u32))
            .collect();

        let mut uniforms = SpriteUniforms::default();
        group.set(&locations, &uniforms.values());
        assert_eq!(ctx.count(), 4);

        // The matrix is shared between frames, so only the changed opacity uploads.
        uniforms.opacity = 1.;
        group.set(&locations, &uniforms.values());
        assert_eq!(ctx.count(), 5);
        assert_eq!(ctx.last(), Some(Upload::Float1(1, 1.)));
    }

    #[test]
    fn test_unit_uniforms() {
        let ctx = RecordingContext::default();
        assert!(<()>::group(&ctx).is_empty());
        assert!(().values().is_empty());
    }
}
