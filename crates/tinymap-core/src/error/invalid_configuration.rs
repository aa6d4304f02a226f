use super::Error;

/// Error when the mapping metadata declared for a type is invalid.
///
/// This occurs when:
/// - A field is marked as both a column and an embed
/// - A column field has an empty column name
/// - A column field declares no value type
/// - Embedding is nested more than two levels below the root type
/// - A type embeds itself, directly or through another type
///
/// These errors are raised while the type is being described. The type's
/// descriptor is not cached.
#[derive(Debug)]
pub(super) struct InvalidConfiguration {
    ty: &'static str,
    message: Box<str>,
}

impl std::error::Error for InvalidConfiguration {}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid configuration for `{}`: {}",
            self.ty, self.message
        )
    }
}

impl Error {
    /// Creates an invalid configuration error for the type named `ty`.
    pub fn invalid_configuration(ty: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(InvalidConfiguration {
            ty,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidConfiguration(_)))
    }
}
