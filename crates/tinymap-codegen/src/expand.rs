mod mapped;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for tinymap types
    tinymap: TokenStream,
}

pub(super) fn mapped(model: &Model) -> TokenStream {
    let tinymap = quote!(_tinymap::codegen_support);

    wrap_in_const(Expand { model, tinymap }.expand_mapped_impl())
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tinymap as _tinymap;
            #code
        };
    }
}
