use crate::{Error, Result};

use tinymap_core::{schema::Field, stmt::Value};

/// Casts the raw value of `column` to the type declared by `field`.
///
/// The value must already be of exactly the declared type; nothing is
/// widened, narrowed, or parsed. Null is accepted for nullable fields only.
pub(super) fn cast(field: &Field, column: &str, value: &Value) -> Result<Value> {
    if value.is_null() {
        return if field.nullable {
            Ok(Value::Null)
        } else {
            Err(Error::invalid_cast(column, field.ty, value.infer_ty()))
        };
    }

    if !value.is_a(&field.ty) {
        return Err(Error::invalid_cast(column, field.ty, value.infer_ty()));
    }

    Ok(value.clone())
}
