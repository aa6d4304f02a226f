use super::{Embed, Field};
use crate::Result;
use std::any::TypeId;

/// Embed fields may nest at most this many levels below the described type.
pub const MAX_EMBED_DEPTH: usize = 2;

/// Describes the mappable fields of one type.
#[derive(Debug, Clone)]
pub struct Model {
    /// Identity of the described Rust type
    pub id: TypeId,

    /// Name of the type, used in errors and logs
    pub name: &'static str,

    /// Mappable fields in declaration order. Fields carrying neither a column
    /// nor an embed marker are not listed.
    pub fields: Vec<Field>,

    /// Number of embed levels below this type: 0 when no field is embedded.
    pub depth: usize,
}

impl Model {
    /// Creates a model from its mappable fields, rejecting invalid
    /// configurations.
    pub fn new(id: TypeId, name: &'static str, fields: Vec<Field>) -> Result<Self> {
        let depth = fields
            .iter()
            .filter_map(Field::as_embed)
            .map(|embed| embed.target.depth + 1)
            .max()
            .unwrap_or(0);

        let model = Self {
            id,
            name,
            fields,
            depth,
        };

        model.verify()?;
        Ok(model)
    }

    /// Iterates the column-bound fields.
    pub fn columns(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_column())
    }

    /// Iterates the embed-bound fields with their embedded descriptors.
    pub fn embeds(&self) -> impl Iterator<Item = (&Field, &Embed)> + '_ {
        self.fields
            .iter()
            .filter_map(|field| field.as_embed().map(|embed| (field, embed)))
    }

    /// Returns every column name reachable from this type, including those of
    /// embedded types.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_column_names(&mut names);
        names
    }

    fn collect_column_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        for field in &self.fields {
            match field.as_embed() {
                Some(embed) => embed.target.collect_column_names(names),
                None => names.extend(field.column_name()),
            }
        }
    }
}
