//! Process-wide cache of type descriptors.
//!
//! A descriptor is built the first time a type is described and is shared,
//! immutable, for the rest of the process. Descriptors are built outside the
//! cache lock; when two threads describe the same type concurrently both
//! build it and the first insert wins. Failed descriptions are not cached.

use crate::{
    engine::Cx,
    mapped::{BoundEmbed, ColumnMutator, EmbedMutator, Fields},
    Error, Mapped, Result,
};

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};
use tinymap_core::{
    schema::{Column, Embed, Field, FieldRole, Model},
    stmt::{Type, Value},
};

type Registry = RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>;

/// The cached description of a mapped type: its fields, and the mutator
/// that assigns each one.
pub struct TypeDescriptor<T> {
    model: Arc<Model>,

    /// Indexed by field position in `model`.
    mutators: Vec<Option<Mutator<T>>>,
}

enum Mutator<T> {
    Column(ColumnMutator<T>),
    Embed(EmbedMutator<T>),
}

/// Returns the descriptor for `T`, building and caching it on first use.
pub fn describe<T: Mapped>() -> Result<Arc<TypeDescriptor<T>>> {
    let id = TypeId::of::<T>();

    if let Some(descriptor) = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
    {
        return Ok(downcast(descriptor.clone()));
    }

    let descriptor = {
        let _guard = InProgress::enter::<T>()?;
        Arc::new(TypeDescriptor::<T>::build()?)
    };

    let cached = registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(id)
        .or_insert_with(|| descriptor.clone() as Arc<dyn Any + Send + Sync>)
        .clone();
    let cached = downcast::<T>(cached);

    if Arc::ptr_eq(&cached, &descriptor) {
        log::debug!(
            "cached descriptor for `{}`; fields={} depth={}",
            T::name(),
            descriptor.model.fields.len(),
            descriptor.model.depth
        );
    }

    Ok(cached)
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Default::default)
}

fn downcast<T: Mapped>(entry: Arc<dyn Any + Send + Sync>) -> Arc<TypeDescriptor<T>> {
    match entry.downcast() {
        Ok(descriptor) => descriptor,
        Err(_) => panic!("registry entry for `{}` has the wrong type", T::name()),
    }
}

impl<T: Mapped> TypeDescriptor<T> {
    fn build() -> Result<Self> {
        let mut fields = Fields::<T>::new();
        T::declare(&mut fields);

        let mut model_fields = vec![];
        let mut mutators = vec![];

        for decl in fields.decls {
            let index = model_fields.len();

            if decl.nullable == Some(true) && decl.mutator_nullable == Some(false) {
                return Err(Error::invalid_configuration(
                    T::name(),
                    format!(
                        "field `{}` is nullable but its mutator does not accept null",
                        decl.name
                    ),
                ));
            }

            match (decl.column, decl.embed) {
                (Some(_), Some(_)) => {
                    return Err(Error::invalid_configuration(
                        T::name(),
                        format!(
                            "field `{}` is marked both as a column and as an embed",
                            decl.name
                        ),
                    ));
                }
                (Some(name), None) => {
                    model_fields.push(Field {
                        index,
                        name: decl.name,
                        ty: decl.ty.unwrap_or(Type::Null),
                        nullable: decl.nullable.unwrap_or(false),
                        role: FieldRole::Column(Column { name }),
                    });
                    mutators.push(decl.mutator.map(Mutator::Column));
                }
                (None, Some(embed)) => {
                    let BoundEmbed { target, mutator } = embed()?;

                    model_fields.push(Field {
                        index,
                        name: decl.name,
                        ty: Type::Null,
                        nullable: false,
                        role: FieldRole::Embed(Embed { target }),
                    });
                    mutators.push(Some(Mutator::Embed(mutator)));
                }
                (None, None) => {
                    log::trace!("`{}.{}` is not mapped", T::name(), decl.name);
                }
            }
        }

        let model = Model::new(TypeId::of::<T>(), T::name(), model_fields)?;

        Ok(Self {
            model: Arc::new(model),
            mutators,
        })
    }
}

impl<T> TypeDescriptor<T> {
    /// The untyped description of the fields.
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub(crate) fn model_arc(&self) -> Arc<Model> {
        self.model.clone()
    }

    /// Assigns an already cast column value to `field` of `instance`.
    pub(crate) fn apply_column(&self, instance: &mut T, field: &Field, value: Value) -> Result<()> {
        match &self.mutators[field.index] {
            Some(Mutator::Column(mutator)) => mutator(instance, value),
            _ => Err(Error::mutator_not_found(
                self.model.name,
                field.name,
                value.infer_ty(),
            )),
        }
    }

    /// Builds the embedded instance for `field` and assigns it to `instance`.
    pub(crate) fn apply_embed(&self, instance: &mut T, field: &Field, cx: &Cx<'_>) -> Result<()> {
        match &self.mutators[field.index] {
            Some(Mutator::Embed(mutator)) => mutator(instance, cx),
            _ => panic!(
                "embed field without an embed mutator; field={}.{}",
                self.model.name, field.name
            ),
        }
    }
}

/// Tracks the types being described on the current thread, so a type that
/// embeds itself is reported instead of recursing forever.
struct InProgress {
    id: TypeId,
}

thread_local! {
    static IN_PROGRESS: RefCell<Vec<TypeId>> = const { RefCell::new(Vec::new()) };
}

impl InProgress {
    fn enter<T: Mapped>() -> Result<Self> {
        let id = TypeId::of::<T>();

        IN_PROGRESS.with_borrow_mut(|stack| {
            if stack.contains(&id) {
                return Err(Error::invalid_configuration(
                    T::name(),
                    format!("`{}` embeds itself", T::name()),
                ));
            }

            stack.push(id);
            Ok(Self { id })
        })
    }
}

impl Drop for InProgress {
    fn drop(&mut self) {
        IN_PROGRESS.with_borrow_mut(|stack| {
            let popped = stack.pop();
            debug_assert_eq!(popped, Some(self.id));
        });
    }
}
