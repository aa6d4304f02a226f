use super::Model;
use crate::stmt::Type;
use std::sync::Arc;

/// A mappable field of a described type.
#[derive(Debug, Clone)]
pub struct Field {
    /// Position of the field within the containing model's field list.
    pub index: usize,

    /// The field name, as written in the type definition.
    pub name: &'static str,

    /// The declared value type. For embed fields this is never consulted.
    pub ty: Type,

    /// True if the field accepts null (`Option` in Rust).
    pub nullable: bool,

    /// Where the field's value comes from.
    pub role: FieldRole,
}

#[derive(Debug, Clone)]
pub enum FieldRole {
    /// The value is read from a single row column.
    Column(Column),

    /// The value is an instance of another type built from the same row.
    Embed(Embed),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// External column name, matched exactly against row column names.
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Embed {
    /// Descriptor of the embedded type.
    pub target: Arc<Model>,
}

impl Field {
    pub fn is_column(&self) -> bool {
        matches!(self.role, FieldRole::Column(_))
    }

    /// Returns the column name if this is a column-bound field.
    pub fn column_name(&self) -> Option<&str> {
        match &self.role {
            FieldRole::Column(column) => Some(&column.name),
            FieldRole::Embed(_) => None,
        }
    }

    pub fn as_embed(&self) -> Option<&Embed> {
        match &self.role {
            FieldRole::Embed(embed) => Some(embed),
            FieldRole::Column(_) => None,
        }
    }

    #[track_caller]
    pub fn expect_column(&self) -> &Column {
        match &self.role {
            FieldRole::Column(column) => column,
            FieldRole::Embed(_) => panic!("expected column field; field={}", self.name),
        }
    }

    #[track_caller]
    pub fn expect_embed(&self) -> &Embed {
        match &self.role {
            FieldRole::Embed(embed) => embed,
            FieldRole::Column(_) => panic!("expected embed field; field={}", self.name),
        }
    }
}

impl Embed {
    pub fn target(&self) -> &Model {
        &self.target
    }
}
