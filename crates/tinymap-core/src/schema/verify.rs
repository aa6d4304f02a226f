use super::{FieldRole, Model, MAX_EMBED_DEPTH};
use crate::{Error, Result};

struct Verify<'a> {
    model: &'a Model,
}

impl Model {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { model: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_indices_match_positions());

        self.verify_column_names_not_empty()?;
        self.verify_column_types_declared()?;
        self.verify_embed_depth()?;
        Ok(())
    }

    fn verify_indices_match_positions(&self) -> bool {
        for (index, field) in self.model.fields.iter().enumerate() {
            assert_eq!(index, field.index, "field={}", field.name);
        }

        true
    }

    fn verify_column_names_not_empty(&self) -> Result<()> {
        for field in self.model.columns() {
            if field.expect_column().name.is_empty() {
                return Err(Error::invalid_configuration(
                    self.model.name,
                    format!("field `{}` has an empty column name", field.name),
                ));
            }
        }

        Ok(())
    }

    fn verify_column_types_declared(&self) -> Result<()> {
        for field in &self.model.fields {
            if let FieldRole::Column(_) = &field.role {
                if field.ty.is_null() {
                    return Err(Error::invalid_configuration(
                        self.model.name,
                        format!("column field `{}` declares no value type", field.name),
                    ));
                }
            }
        }

        Ok(())
    }

    fn verify_embed_depth(&self) -> Result<()> {
        if self.model.depth > MAX_EMBED_DEPTH {
            let (field, embed) = self
                .model
                .embeds()
                .max_by_key(|(_, embed)| embed.target.depth)
                .expect("depth above zero implies an embed field");

            return Err(Error::invalid_configuration(
                self.model.name,
                format!(
                    "field `{}` embeds `{}`, nesting {} levels deep (maximum: {})",
                    field.name, embed.target.name, self.model.depth, MAX_EMBED_DEPTH
                ),
            ));
        }

        Ok(())
    }
}
