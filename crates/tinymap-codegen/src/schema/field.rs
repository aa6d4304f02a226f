use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// The Rust type of the field
    pub(crate) ty: syn::Type,

    /// Where the field's value comes from
    pub(crate) kind: FieldTy,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// `#[column("name")]`
    Column(Column),

    /// `#[embed]`
    Embed,

    /// No marker; the field keeps its default value.
    Unmapped,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "mapped fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;
        let mut embed = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(parsed) => column = Some(parsed),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("embed") {
                if embed.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[embed] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    embed = Some(attr);
                }
            }
        }

        if let (Some(_), Some(attr)) = (&column, embed) {
            errs.push(syn::Error::new_spanned(
                attr,
                "field cannot have both #[column] and #[embed] attributes",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let kind = match (column, embed) {
            (Some(column), None) => FieldTy::Column(column),
            (None, Some(_)) => FieldTy::Embed,
            _ => FieldTy::Unmapped,
        };

        Ok(Self {
            ident: ident.clone(),
            ty: field.ty.clone(),
            kind,
        })
    }
}
