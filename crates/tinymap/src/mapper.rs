use crate::{engine::Cx, registry, Error, Mapped, Result, TypeDescriptor};

use std::{marker::PhantomData, sync::Arc};
use tinymap_core::Row;

/// Maps rows into instances of `T`.
///
/// A mapper is cheap to clone and may be shared across threads.
pub struct Mapper<T> {
    descriptor: Arc<TypeDescriptor<T>>,

    /// Every column reachable from `T` when all columns are required; empty
    /// otherwise.
    required: Arc<[String]>,
}

/// Configures a [`Mapper`].
pub struct Builder<T> {
    require_all_columns: bool,
    _p: PhantomData<fn() -> T>,
}

impl<T: Mapped> Mapper<T> {
    /// Creates a mapper that assigns only the columns present in each row.
    ///
    /// Fails if `T`'s field declarations are invalid.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> Builder<T> {
        Builder {
            require_all_columns: false,
            _p: PhantomData,
        }
    }

    pub fn descriptor(&self) -> &TypeDescriptor<T> {
        &self.descriptor
    }

    /// Maps one row into a new instance of `T`.
    ///
    /// On failure, whatever was built so far is dropped.
    pub fn map<R: Row>(&self, row: &R) -> Result<T> {
        let cx = Cx::new(row);

        if let Some(column) = self.required.iter().find(|column| !cx.is_present(column)) {
            return Err(Error::missing_column(T::name(), column.as_str()));
        }

        log::trace!("mapping row into `{}`", T::name());
        cx.build(&self.descriptor)
    }

    /// Maps every row, stopping at the first failure.
    pub fn map_all<I>(&self, rows: I) -> Result<Vec<T>>
    where
        I: IntoIterator,
        I::Item: Row,
    {
        rows.into_iter().map(|row| self.map(&row)).collect()
    }
}

impl<T> Clone for Mapper<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            required: self.required.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Mapper<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mapper")
            .field("type", &self.descriptor.model().name)
            .field("required", &self.required)
            .finish()
    }
}

impl<T: Mapped> Builder<T> {
    /// Fail with a missing column error when a row lacks any column declared
    /// by `T` or its embedded types, instead of leaving the field at its
    /// default.
    pub fn require_all_columns(&mut self, require: bool) -> &mut Self {
        self.require_all_columns = require;
        self
    }

    pub fn build(&self) -> Result<Mapper<T>> {
        let descriptor = registry::describe::<T>()?;

        let required: Arc<[String]> = if self.require_all_columns {
            descriptor
                .model()
                .column_names()
                .into_iter()
                .map(String::from)
                .collect()
        } else {
            Arc::from([])
        };

        Ok(Mapper {
            descriptor,
            required,
        })
    }
}
