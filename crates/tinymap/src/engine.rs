mod cast;
use cast::cast;

mod resolve;
use resolve::{resolve, Resolution};

use crate::{err, registry::TypeDescriptor, Mapped, Result};

use std::collections::HashSet;
use tinymap_core::Row;

/// State of one mapping call: the row being mapped and the names of the
/// columns it holds. Embedded types are built from the same context.
pub(crate) struct Cx<'a> {
    row: &'a dyn Row,
    present: HashSet<&'a str>,
}

impl<'a> Cx<'a> {
    pub(crate) fn new(row: &'a dyn Row) -> Self {
        Self {
            row,
            present: row.column_names().into_iter().collect(),
        }
    }

    pub(crate) fn is_present(&self, column: &str) -> bool {
        self.present.contains(column)
    }

    /// Builds an instance of `T` from the columns of the row that `T` (or
    /// its embedded types) declares.
    pub(crate) fn build<T: Mapped>(&self, descriptor: &TypeDescriptor<T>) -> Result<T> {
        let model = descriptor.model();
        let Resolution { columns, embeds } = resolve(model, &self.present);

        log::trace!(
            "building `{}`; columns={} embeds={}",
            model.name,
            columns.len(),
            embeds.len()
        );

        let mut instance = T::instantiate()?;

        for field in columns {
            let column = &field.expect_column().name;
            let value = cast(field, column, self.row.value(column))?;
            descriptor.apply_column(&mut instance, field, value)?;
        }

        for field in embeds {
            descriptor
                .apply_embed(&mut instance, field, self)
                .map_err(|err| err.context(err!("mapping `{}.{}`", model.name, field.name)))?;
        }

        Ok(instance)
    }
}
