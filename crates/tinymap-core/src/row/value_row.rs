use super::Row;
use crate::stmt::Value;
use indexmap::IndexMap;

/// An owned row of `(column, value)` pairs, kept in insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRow {
    columns: IndexMap<String, Value>,
}

impl ValueRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets `column` to `value`, replacing any earlier value for the same
    /// column while keeping its position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Row for ValueRow {
    fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    #[track_caller]
    fn value(&self, column: &str) -> &Value {
        match self.columns.get(column) {
            Some(value) => value,
            None => panic!("column `{column}` is not present in the row"),
        }
    }
}

impl<C, V> FromIterator<(C, V)> for ValueRow
where
    C: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (C, V)>>(iter: T) -> Self {
        let mut row = Self::new();

        for (column, value) in iter {
            row.insert(column, value);
        }

        row
    }
}
