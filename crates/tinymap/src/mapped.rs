use crate::{engine::Cx, registry, Error, Primitive, Result};

use std::sync::Arc;
use tinymap_core::{
    schema::Model,
    stmt::{Type, Value},
};

/// A type that rows can be mapped into.
///
/// Usually derived with `#[derive(tinymap::Mapped)]`. Hand-written
/// implementations declare their fields through [`Fields`]:
///
/// ```ignore
/// impl Mapped for Person {
///     fn declare(fields: &mut Fields<Self>) {
///         fields.field("id").column("id").set(Person::set_id);
///         fields.field("full_name").embed(Person::set_full_name);
///     }
///
///     fn instantiate() -> Result<Self> {
///         Ok(Person::default())
///     }
/// }
/// ```
pub trait Mapped: Sized + 'static {
    /// Name of the type, used in errors and logs.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Declares the mappable fields of the type. Called once per process,
    /// when the type is first described.
    fn declare(fields: &mut Fields<Self>);

    /// Creates the zero value the mapper assigns fields into.
    ///
    /// The default implementation reports that the type has no parameterless
    /// initializer.
    fn instantiate() -> Result<Self> {
        Err(Error::construction(Self::name()))
    }
}

pub(crate) type ColumnMutator<T> = Arc<dyn Fn(&mut T, Value) -> Result<()> + Send + Sync>;

pub(crate) type EmbedMutator<T> = Arc<dyn Fn(&mut T, &Cx<'_>) -> Result<()> + Send + Sync>;

/// Field declarations collected by [`Mapped::declare`].
pub struct Fields<T> {
    pub(crate) decls: Vec<FieldDecl<T>>,
}

/// The markers and mutator declared for one field.
pub struct FieldDecl<T> {
    pub(crate) name: &'static str,
    pub(crate) column: Option<String>,
    pub(crate) embed: Option<EmbedDecl<T>>,
    pub(crate) ty: Option<Type>,
    pub(crate) nullable: Option<bool>,
    pub(crate) mutator: Option<ColumnMutator<T>>,

    /// Whether the mutator given to [`set`](Self::set) accepts null.
    pub(crate) mutator_nullable: Option<bool>,
}

/// Describes the embedded type and binds its descriptor into the mutator.
/// Runs once, when the parent type is described.
pub(crate) type EmbedDecl<T> = Box<dyn FnOnce() -> Result<BoundEmbed<T>>>;

pub(crate) struct BoundEmbed<T> {
    pub(crate) target: Arc<Model>,

    /// Builds the embedded instance and assigns it into the parent.
    pub(crate) mutator: EmbedMutator<T>,
}

impl<T: Mapped> Fields<T> {
    pub(crate) fn new() -> Self {
        Self { decls: vec![] }
    }

    /// Returns the declaration for the field `name`, creating it on first use.
    pub fn field(&mut self, name: &'static str) -> &mut FieldDecl<T> {
        let index = match self.decls.iter().position(|decl| decl.name == name) {
            Some(index) => index,
            None => {
                self.decls.push(FieldDecl::new(name));
                self.decls.len() - 1
            }
        };

        &mut self.decls[index]
    }
}

impl<T: Mapped> FieldDecl<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            column: None,
            embed: None,
            ty: None,
            nullable: None,
            mutator: None,
            mutator_nullable: None,
        }
    }

    /// Marks the field as bound to the row column `name`.
    pub fn column(&mut self, name: impl Into<String>) -> &mut Self {
        self.column = Some(name.into());
        self
    }

    /// Declares the value type the column must hold. Defaults to the type
    /// accepted by the mutator given to [`set`](Self::set).
    pub fn ty(&mut self, ty: Type) -> &mut Self {
        self.ty = Some(ty);
        self
    }

    /// Declares whether the column may hold null.
    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.nullable = Some(nullable);
        self
    }

    /// Sets the mutator invoked with the column's value.
    pub fn set<V, F>(&mut self, f: F) -> &mut Self
    where
        V: Primitive + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.ty.get_or_insert(V::TYPE);
        self.nullable.get_or_insert(V::NULLABLE);
        self.mutator_nullable = Some(V::NULLABLE);

        let field = self.name;
        self.mutator = Some(Arc::new(move |this: &mut T, value: Value| {
            let value_ty = value.infer_ty();
            let value =
                V::load(value).map_err(|_| Error::mutator_not_found(T::name(), field, value_ty))?;
            f(this, value);
            Ok(())
        }));

        self
    }

    /// Marks the field as an embedded `E`, built from the same row and
    /// assigned with `f`.
    pub fn embed<E, F>(&mut self, f: F) -> &mut Self
    where
        E: Mapped,
        F: Fn(&mut T, E) + Send + Sync + 'static,
    {
        self.embed = Some(Box::new(move || {
            let descriptor = registry::describe::<E>()?;
            let target = descriptor.model_arc();
            let mutator: EmbedMutator<T> = Arc::new(move |this: &mut T, cx: &Cx<'_>| {
                let value = cx.build(&descriptor)?;
                f(this, value);
                Ok(())
            });

            Ok(BoundEmbed { target, mutator })
        }));

        self
    }
}
