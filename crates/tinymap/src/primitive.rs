use crate::Result;

use tinymap_core::stmt::{Type, Value};

/// A Rust type that a column-bound field may be declared as.
pub trait Primitive: Sized {
    /// The value type a column must hold to be assigned to this type.
    const TYPE: Type;

    /// True if the type accepts null values (e.g. `Option`).
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    uuid::Uuid => Uuid,
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
