use super::Error;

/// Error when an instance of a mapped type cannot be created.
#[derive(Debug)]
pub(super) struct ConstructionError {
    ty: &'static str,
}

impl std::error::Error for ConstructionError {}

impl core::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot construct `{}`: no parameterless initializer",
            self.ty
        )
    }
}

impl Error {
    /// Creates a construction error for the type named `ty`.
    pub fn construction(ty: &'static str) -> Error {
        Error::from(super::ErrorKind::Construction(ConstructionError { ty }))
    }

    /// Returns `true` if this error is a construction error.
    pub fn is_construction(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Construction(_)))
    }
}
