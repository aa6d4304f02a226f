use super::Error;

/// Error when a column required by a strict mapper is absent from the row.
#[derive(Debug)]
pub(super) struct MissingColumn {
    ty: &'static str,
    column: Box<str>,
}

impl std::error::Error for MissingColumn {}

impl core::fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` required by `{}` is not present in the row",
            self.column, self.ty
        )
    }
}

impl Error {
    /// Creates a missing column error.
    pub fn missing_column(ty: &'static str, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingColumn(MissingColumn {
            ty,
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing column error.
    pub fn is_missing_column(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingColumn(_)))
    }
}
