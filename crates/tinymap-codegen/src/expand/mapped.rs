use super::Expand;
use crate::schema::{Field, FieldTy};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_mapped_impl(&self) -> TokenStream {
        let tinymap = &self.tinymap;
        let model_ident = &self.model.ident;
        let model_name = model_ident.to_string();
        let declarations = self
            .model
            .fields
            .iter()
            .map(|field| self.expand_field_declaration(field));

        quote! {
            impl #tinymap::Mapped for #model_ident {
                fn name() -> &'static str {
                    #model_name
                }

                fn declare(fields: &mut #tinymap::Fields<Self>) {
                    #( #declarations )*
                }

                fn instantiate() -> #tinymap::Result<Self> {
                    ::core::result::Result::Ok(<Self as #tinymap::Default>::default())
                }
            }
        }
    }

    fn expand_field_declaration(&self, field: &Field) -> TokenStream {
        let field_ident = &field.ident;
        let field_name = field_ident.to_string();
        let ty = &field.ty;

        match &field.kind {
            FieldTy::Column(column) => {
                let column_name = &column.name;

                quote! {
                    fields
                        .field(#field_name)
                        .column(#column_name)
                        .set(|this: &mut Self, value: #ty| this.#field_ident = value);
                }
            }
            FieldTy::Embed => quote! {
                fields
                    .field(#field_name)
                    .embed(|this: &mut Self, value: #ty| this.#field_ident = value);
            },
            FieldTy::Unmapped => quote! {
                fields.field(#field_name);
            },
        }
    }
}
