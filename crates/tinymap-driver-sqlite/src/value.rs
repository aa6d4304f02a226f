use rusqlite::types::ValueRef;
use tinymap_core::{err, stmt::Value, Result};

/// Converts a SQLite value of `column` to a raw value.
pub(crate) fn from_sql(column: &str, value: ValueRef<'_>) -> Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(value) => Value::I64(value),
        ValueRef::Real(value) => Value::F64(value),
        ValueRef::Text(value) => match std::str::from_utf8(value) {
            Ok(value) => Value::String(value.to_string()),
            Err(e) => return Err(err!("column `{column}` holds invalid UTF-8 text: {e}")),
        },
        ValueRef::Blob(value) => Value::Bytes(value.to_vec()),
    })
}
