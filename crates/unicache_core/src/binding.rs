use crate::{
    cell::BindingCell,
    kind::{Float1, Float2, Float3, Float4, Int1, Matrix4, ValueKind},
    value::UniformValue,
    UniformContext,
};

/// A binding cell of any supported kind.
pub enum UniformBinding<'c, C: UniformContext + ?Sized> {
    Int1(BindingCell<'c, C, Int1>),
    Float1(BindingCell<'c, C, Float1>),
    Float2(BindingCell<'c, C, Float2>),
    Float3(BindingCell<'c, C, Float3>),
    Float4(BindingCell<'c, C, Float4>),
    Matrix4(BindingCell<'c, C, Matrix4>),
}

macro_rules! each_cell {
    ($binding:expr, $cell:ident => $body:expr) => {
        match $binding {
            UniformBinding::Int1($cell) => $body,
            UniformBinding::Float1($cell) => $body,
            UniformBinding::Float2($cell) => $body,
            UniformBinding::Float3($cell) => $body,
            UniformBinding::Float4($cell) => $body,
            UniformBinding::Matrix4($cell) => $body,
        }
    };
}

impl<'c, C: UniformContext + ?Sized> UniformBinding<'c, C> {
    pub fn int1(context: &'c C) -> Self {
        Self::Int1(BindingCell::new(context))
    }

    pub fn float1(context: &'c C) -> Self {
        Self::Float1(BindingCell::new(context))
    }

    pub fn float2(context: &'c C) -> Self {
        Self::Float2(BindingCell::new(context))
    }

    pub fn float3(context: &'c C) -> Self {
        Self::Float3(BindingCell::new(context))
    }

    pub fn float4(context: &'c C) -> Self {
        Self::Float4(BindingCell::new(context))
    }

    pub fn matrix4(context: &'c C) -> Self {
        Self::Matrix4(BindingCell::new(context))
    }

    /// An empty binding that accepts values of `kind`.
    pub fn of_kind(kind: ValueKind, context: &'c C) -> Self {
        match kind {
            ValueKind::Int => Self::int1(context),
            ValueKind::Float => Self::float1(context),
            ValueKind::Vec2 => Self::float2(context),
            ValueKind::Vec3 => Self::float3(context),
            ValueKind::Vec4 => Self::float4(context),
            ValueKind::Mat4 => Self::matrix4(context),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            UniformBinding::Int1(_) => ValueKind::Int,
            UniformBinding::Float1(_) => ValueKind::Float,
            UniformBinding::Float2(_) => ValueKind::Vec2,
            UniformBinding::Float3(_) => ValueKind::Vec3,
            UniformBinding::Float4(_) => ValueKind::Vec4,
            UniformBinding::Matrix4(_) => ValueKind::Mat4,
        }
    }

    /// The cached value, if anything was uploaded yet.
    pub fn current(&self) -> Option<UniformValue> {
        each_cell!(self, cell => cell.current().cloned().map(UniformValue::from))
    }

    pub fn invalidate(&mut self) {
        each_cell!(self, cell => cell.invalidate())
    }

    /// Hands `value` to the cell, uploading only when it changed unless `force` is set.
    ///
    /// Returns whether an upload was issued, or the kind of `value` when it
    /// does not fit this binding.
    pub fn apply(
        &mut self,
        location: &C::Location,
        value: UniformValue,
        force: bool,
    ) -> Result<bool, ValueKind> {
        macro_rules! apply {
            ($cell:expr, $value:expr) => {
                if force {
                    $cell.force(location, $value);
                    true
                } else {
                    $cell.set(location, $value)
                }
            };
        }

        let uploaded = match (self, value) {
            (UniformBinding::Int1(cell), UniformValue::Int(v)) => apply!(cell, v),
            (UniformBinding::Float1(cell), UniformValue::Float(v)) => apply!(cell, v),
            (UniformBinding::Float2(cell), UniformValue::Vec2(v)) => apply!(cell, v),
            (UniformBinding::Float3(cell), UniformValue::Vec3(v)) => apply!(cell, v),
            (UniformBinding::Float4(cell), UniformValue::Vec4(v)) => apply!(cell, v),
            (UniformBinding::Matrix4(cell), UniformValue::Mat4(v)) => apply!(cell, v),
            (_, value) => return Err(value.kind()),
        };

        Ok(uploaded)
    }
}
