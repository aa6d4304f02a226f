use super::Error;
use crate::stmt::Type;

/// Error when a field has no mutator accepting the value produced for it.
#[derive(Debug)]
pub(super) struct MutatorNotFound {
    ty: &'static str,
    field: &'static str,
    value_ty: Type,
}

impl std::error::Error for MutatorNotFound {}

impl core::fmt::Display for MutatorNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no mutator for `{}.{}` accepting {:?}",
            self.ty, self.field, self.value_ty
        )
    }
}

impl Error {
    /// Creates a mutator-not-found error for `ty.field`, which was handed a
    /// value of type `value_ty`.
    pub fn mutator_not_found(ty: &'static str, field: &'static str, value_ty: Type) -> Error {
        Error::from(super::ErrorKind::MutatorNotFound(MutatorNotFound {
            ty,
            field,
            value_ty,
        }))
    }

    /// Returns `true` if this error is a mutator-not-found error.
    pub fn is_mutator_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MutatorNotFound(_)))
    }
}
