mod value_row;
pub use value_row::ValueRow;

use crate::stmt::Value;

/// One materialized result row, as produced by a query execution layer.
///
/// Column names are unique within a row and are matched exactly
/// (case-sensitive) against declared column names.
pub trait Row {
    /// Names of the columns present in this row, in result order.
    fn column_names(&self) -> Vec<&str>;

    /// Returns the raw value of `column`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `column` is not one of
    /// [`column_names`](Row::column_names). Callers only ask for present
    /// columns.
    fn value(&self, column: &str) -> &Value;
}

impl<R: Row + ?Sized> Row for &R {
    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }

    fn value(&self, column: &str) -> &Value {
        (**self).value(column)
    }
}
