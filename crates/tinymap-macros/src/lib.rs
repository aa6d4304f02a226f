extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `tinymap::Mapped` for a struct with named fields.
///
/// Field attributes:
///
/// - `#[column("name")]` binds the field to the row column `name`.
/// - `#[embed]` builds the field, itself a `Mapped` type, from the same row.
///
/// Fields without either attribute keep their `Default` value. The struct
/// must implement `Default`.
#[proc_macro_derive(Mapped, attributes(column, embed))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    match tinymap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
