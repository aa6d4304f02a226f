use super::Error;
use crate::stmt::Type;

/// Error when a raw column value is not of the type declared by its field.
#[derive(Debug)]
pub(super) struct InvalidCast {
    column: Box<str>,
    expected: Type,
    actual: Type,
}

impl std::error::Error for InvalidCast {}

impl core::fmt::Display for InvalidCast {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot cast column `{}`: expected {:?}, found {:?}",
            self.column, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a cast error for `column`, declared as `expected` but holding
    /// a value of type `actual`.
    pub fn invalid_cast(column: impl Into<String>, expected: Type, actual: Type) -> Error {
        Error::from(super::ErrorKind::InvalidCast(InvalidCast {
            column: column.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a cast error.
    pub fn is_invalid_cast(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidCast(_)))
    }
}
