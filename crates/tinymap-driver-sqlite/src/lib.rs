//! Row adapter for [`rusqlite`].
//!
//! SQLite reports one of five storage classes per value. They convert as
//! follows: INTEGER to `Value::I64`, REAL to `Value::F64`, TEXT to
//! `Value::String`, BLOB to `Value::Bytes` and NULL to `Value::Null`. Fields
//! mapped from SQLite columns are therefore declared as `i64`, `f64`,
//! `String`, `Vec<u8>`, or an `Option` of one of those.

mod value;

use rusqlite::{Params, Statement};
use tinymap::{Mapped, Mapper};
use tinymap_core::{stmt::Value, Error, Result, Row, ValueRow};

/// A SQLite result row, materialized so it can outlive the statement cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteRow(ValueRow);

impl SqliteRow {
    /// Reads every column of `row`, named as the statement names them.
    pub fn from_row(row: &rusqlite::Row<'_>) -> Result<Self> {
        let stmt: &Statement<'_> = row.as_ref();
        let mut values = ValueRow::with_capacity(stmt.column_count());

        for (index, name) in stmt.column_names().into_iter().enumerate() {
            let value = row.get_ref(index).map_err(driver_error)?;
            values.insert(name, value::from_sql(name, value)?);
        }

        Ok(Self(values))
    }
}

impl Row for SqliteRow {
    fn column_names(&self) -> Vec<&str> {
        self.0.column_names()
    }

    fn value(&self, column: &str) -> &Value {
        self.0.value(column)
    }
}

/// Runs `stmt` with `params` and maps every resulting row with `mapper`.
pub fn query_map<T, P>(stmt: &mut Statement<'_>, params: P, mapper: &Mapper<T>) -> Result<Vec<T>>
where
    T: Mapped,
    P: Params,
{
    let mut rows = stmt.query(params).map_err(driver_error)?;
    let mut mapped = vec![];

    while let Some(row) = rows.next().map_err(driver_error)? {
        let row = SqliteRow::from_row(row)?;
        mapped.push(mapper.map(&row)?);
    }

    log::debug!("mapped {} rows into `{}`", mapped.len(), T::name());
    Ok(mapped)
}

fn driver_error(err: rusqlite::Error) -> Error {
    Error::from(anyhow::Error::from(err))
}
