use std::collections::HashSet;
use tinymap_core::schema::{Field, Model, MAX_EMBED_DEPTH};

/// The fields of one type that a row can satisfy.
#[derive(Debug)]
pub(super) struct Resolution<'a> {
    /// Column fields whose column is present.
    pub(super) columns: Vec<&'a Field>,

    /// Embed fields with at least one present column somewhere below them.
    /// Only direct embed fields of the type are listed; deeper ones are
    /// resolved when the embedded type itself is built.
    pub(super) embeds: Vec<&'a Field>,
}

pub(super) fn resolve<'a>(model: &'a Model, present: &HashSet<&str>) -> Resolution<'a> {
    let columns = model
        .columns()
        .filter(|field| is_present(field, present))
        .collect();

    let embeds = model
        .embeds()
        .filter(|(_, embed)| has_present_column(embed.target(), present, 1))
        .map(|(field, _)| field)
        .collect();

    Resolution { columns, embeds }
}

fn is_present(field: &Field, present: &HashSet<&str>) -> bool {
    field
        .column_name()
        .is_some_and(|column| present.contains(column))
}

/// Returns `true` if `model`, embedded `level` levels below the type being
/// resolved, has a present column directly or through its own embeds.
fn has_present_column(model: &Model, present: &HashSet<&str>, level: usize) -> bool {
    debug_assert!(level <= MAX_EMBED_DEPTH, "model={}", model.name);

    model.columns().any(|field| is_present(field, present))
        || model
            .embeds()
            .any(|(_, embed)| has_present_column(embed.target(), present, level + 1))
}
