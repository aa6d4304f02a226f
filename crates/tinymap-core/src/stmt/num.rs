use super::{Type, Value};
use crate::{Error, Result};

// Conversions are exact: a value converts only into the Rust type of its own
// variant. Widening between variants is left to the row source.
macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        _ => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
    F32(f32) {
        is_f32
    }
    F64(f64) {
        is_f64
    }
}
