use unicache_core::ValueKind;

/// Binding kind for a GL active uniform type.
///
/// Samplers take their texture unit as an integer. Types without an upload
/// primitive here (integer vectors, 2x2 and 3x3 matrices, unsigned ints) map to `None`.
pub fn value_kind(utype: u32) -> Option<ValueKind> {
    let kind = match utype {
        glow::INT | glow::BOOL | glow::SAMPLER_2D | glow::SAMPLER_CUBE => ValueKind::Int,
        glow::FLOAT => ValueKind::Float,
        glow::FLOAT_VEC2 => ValueKind::Vec2,
        glow::FLOAT_VEC3 => ValueKind::Vec3,
        glow::FLOAT_VEC4 => ValueKind::Vec4,
        glow::FLOAT_MAT4 => ValueKind::Mat4,
        _ => return None,
    };

    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types() {
        assert_eq!(value_kind(glow::BOOL), Some(ValueKind::Int));
        assert_eq!(value_kind(glow::SAMPLER_2D), Some(ValueKind::Int));
        assert_eq!(value_kind(glow::FLOAT), Some(ValueKind::Float));
        assert_eq!(value_kind(glow::FLOAT_VEC3), Some(ValueKind::Vec3));
        assert_eq!(value_kind(glow::FLOAT_MAT4), Some(ValueKind::Mat4));
    }

    #[test]
    fn test_unsupported_types() {
        assert_eq!(value_kind(glow::FLOAT_MAT3), None);
        assert_eq!(value_kind(glow::INT_VEC2), None);
        assert_eq!(value_kind(glow::UNSIGNED_INT), None);
    }
}
