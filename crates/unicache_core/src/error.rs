use thiserror::Error;

use crate::kind::ValueKind;

/// A mismatch between the uniforms a group declares and the values supplied to it.
///
/// These are programming errors: the shader's declared uniforms and the code
/// computing them disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniformError {
    #[error("No binding with name {name}")]
    MissingBinding { name: String },

    #[error("No uniform location for {name}")]
    MissingLocation { name: String },

    #[error("Uniform {name} is bound as {expected}, but a {found} value was supplied")]
    KindMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },
}
