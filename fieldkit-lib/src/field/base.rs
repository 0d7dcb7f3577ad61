//! Untyped field kind

use super::FieldKind;

/// A field kind with no type-specific rule: any value passes and is kept as-is.
///
/// Used for model properties whose type has no dedicated kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseField;

impl FieldKind for BaseField {
    fn kind_name(&self) -> &'static str {
        "base"
    }
}
